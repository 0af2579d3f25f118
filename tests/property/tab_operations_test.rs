//! Property-based tests for tab session operations.
//!
//! For any sequence of opens, closes, switches and strip-side deletes, the
//! active index stays in bounds, keys stay unique, and programmatic closes
//! never remove a pinned tab.

use std::collections::HashSet;

use admin_console::host::PageHost;
use admin_console::managers::tab_manager::{CloseMode, TabSession, TabSessionTrait};
use admin_console::types::tab::TabEntry;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum TabOp {
    /// Open one of a small pool of urls, optionally pinned.
    Open(usize, bool),
    CloseCurrent,
    CloseOthers,
    CloseAll,
    Switch(usize),
    ExternalDelete(usize),
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0..8usize, prop::bool::weighted(0.2)).prop_map(|(u, p)| TabOp::Open(u, p)),
            2 => Just(TabOp::CloseCurrent),
            1 => Just(TabOp::CloseOthers),
            1 => Just(TabOp::CloseAll),
            2 => (0..10usize).prop_map(TabOp::Switch),
            1 => (0..10usize).prop_map(TabOp::ExternalDelete),
        ],
        1..80,
    )
}

fn pinned_keys(s: &TabSession) -> HashSet<String> {
    s.entries().iter().filter(|e| e.pinned).map(|e| e.key.clone()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tab_session_invariants_hold(ops in arb_tab_ops()) {
        let mut host = PageHost::default();
        let mut s = TabSession::new(TabEntry::new("/home", "Home", true), "New Tab");

        for op in &ops {
            let pinned_before = pinned_keys(&s);
            let programmatic = !matches!(op, TabOp::ExternalDelete(_));

            match op {
                TabOp::Open(u, pinned) => {
                    let url = format!("/page/{}", u);
                    let len_before = s.len();
                    let existed = s.position(&url).is_some();
                    let index = s.open_or_activate("", &url, "", *pinned, &mut host);
                    prop_assert_eq!(index, s.current_index());
                    prop_assert_eq!(&s.current().unwrap().key, &url);
                    prop_assert_eq!(s.len(), if existed { len_before } else { len_before + 1 });
                }
                TabOp::CloseCurrent => {
                    s.close_current(&mut host);
                }
                TabOp::CloseOthers => {
                    let current = s.current().map(|e| e.key.clone());
                    s.close_others(CloseMode::OthersOnly, &mut host);
                    if let Some(key) = current {
                        prop_assert_eq!(s.current().map(|e| e.key.clone()), Some(key));
                    }
                }
                TabOp::CloseAll => {
                    s.close_others(CloseMode::All, &mut host);
                    prop_assert!(s.entries().iter().all(|e| e.pinned));
                }
                TabOp::Switch(i) => {
                    let ok = s.on_external_index_change(*i, &mut host).is_ok();
                    prop_assert_eq!(ok, *i < s.len());
                }
                TabOp::ExternalDelete(i) => {
                    let ok = s.on_external_delete(*i).is_ok();
                    prop_assert_eq!(ok, *i < s.len() + usize::from(ok));
                }
            }

            // Active index is in bounds.
            if s.is_empty() {
                prop_assert_eq!(s.current_index(), 0);
            } else {
                prop_assert!(s.current_index() < s.len());
            }

            // Keys are unique.
            let keys: HashSet<&str> = s.entries().iter().map(|e| e.key.as_str()).collect();
            prop_assert_eq!(keys.len(), s.len());

            // Programmatic closes keep every pinned tab.
            if programmatic {
                prop_assert!(pinned_before.is_subset(&pinned_keys(&s)));
            }
        }
    }

    #[test]
    fn reopening_is_idempotent(urls in prop::collection::vec(0..6usize, 1..30)) {
        let mut host = PageHost::default();
        let mut s = TabSession::new(TabEntry::new("/home", "Home", true), "New Tab");
        for u in &urls {
            s.open_or_activate("", &format!("/page/{}", u), "", false, &mut host);
        }
        let snapshot = s.entries().to_vec();
        for u in &urls {
            let url = format!("/page/{}", u);
            let index = s.open_or_activate("", &url, "", false, &mut host);
            prop_assert_eq!(&s.entries()[index].key, &url);
        }
        prop_assert_eq!(s.entries(), snapshot.as_slice());
    }
}
