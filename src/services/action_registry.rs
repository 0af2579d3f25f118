//! Named actions for script directives (`link-type="1"`).
//!
//! A script directive's `admin-href` is a key into this registry rather than
//! code to evaluate, so markup can only trigger what the shell registered.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::app::Shell;
use crate::host::ShellHost;

pub type ScriptAction = Arc<dyn Fn(&mut Shell, &mut dyn ShellHost) + Send + Sync>;

#[derive(Default, Clone)]
pub struct ActionRegistry {
    actions: HashMap<String, ScriptAction>,
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.actions.keys().collect();
        keys.sort();
        f.debug_struct("ActionRegistry").field("actions", &keys).finish()
    }
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` under `key`, replacing any previous one.
    pub fn register<F>(&mut self, key: &str, action: F)
    where
        F: Fn(&mut Shell, &mut dyn ShellHost) + Send + Sync + 'static,
    {
        self.actions.insert(key.trim().to_string(), Arc::new(action));
    }

    pub fn unregister(&mut self, key: &str) -> bool {
        self.actions.remove(key.trim()).is_some()
    }

    pub fn get(&self, key: &str) -> Option<ScriptAction> {
        self.actions.get(key.trim()).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.actions.contains_key(key.trim())
    }
}
