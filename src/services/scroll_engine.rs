//! Scroll-Into-View Engine.
//!
//! Pure geometry over a [`StripGeometry`]: given where the tab headers sit
//! and how far the strip is scrolled, work out the new scroll offset. New
//! offsets always land on a tab's left edge so no header is cut in half at
//! the left side of the window.

use crate::types::tab::StripGeometry;

/// Which way to scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// Bring the tab at this index fully into view.
    Auto(usize),
    /// Page one window to the left.
    Left,
    /// Page right to the first tab cut off by the window's right edge.
    #[default]
    Right,
}

/// Returns the new offset, or `None` when the strip should stay where it is.
pub fn compute(mode: ScrollMode, strip: &StripGeometry) -> Option<f64> {
    match mode {
        ScrollMode::Auto(index) => auto(index, strip),
        ScrollMode::Left => left(strip),
        ScrollMode::Right => right(strip),
    }
}

fn auto(index: usize, strip: &StripGeometry) -> Option<f64> {
    let target = strip.tabs.get(index)?;
    let offset = strip.offset;
    let window_right = offset + strip.visible_width;

    if target.left < offset {
        return Some(target.left);
    }

    if target.right() > window_right {
        // A tab wider than the window cannot fit; show its left edge.
        if target.width >= strip.visible_width {
            return Some(target.left);
        }
        let required_shift = target.right() - window_right;
        return strip
            .tabs
            .iter()
            .find(|tab| tab.left - offset > required_shift)
            .map(|tab| tab.left);
    }

    None
}

fn left(strip: &StripGeometry) -> Option<f64> {
    if strip.offset <= 0.0 {
        return None;
    }
    let previous_window = strip.offset - strip.visible_width;
    strip
        .tabs
        .iter()
        .find(|tab| tab.left >= previous_window)
        .map(|tab| tab.left)
        .filter(|&left| left != strip.offset)
}

fn right(strip: &StripGeometry) -> Option<f64> {
    let window_right = strip.offset + strip.visible_width;
    strip
        .tabs
        .iter()
        .find(|tab| tab.right() > window_right)
        .map(|tab| tab.left)
        .filter(|&left| left != strip.offset)
}
