//! The registry - immutable entity lookup.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::validator::Validate;

/// Name-indexed store of compiled validators.
///
/// Populated exactly once per [`Compiler`](crate::Compiler) and read-only
/// afterwards. Deferred ([`Lazy`](crate::validator::Lazy)) fields resolve
/// against it by name at validation time, which is what makes forward,
/// self and mutually recursive references work without declaration-order
/// constraints.
#[derive(Default, Debug)]
pub struct Registry {
    entries: OnceLock<HashMap<String, Arc<dyn Validate>>>,
}

impl Registry {
    /// Install the compiled entity map. The map is written exactly once,
    /// at the end of compilation; later calls are ignored.
    pub(crate) fn seal(&self, entries: HashMap<String, Arc<dyn Validate>>) {
        let _ = self.entries.set(entries);
    }

    /// Look up a compiled entity by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Validate>> {
        self.entries.get().and_then(|map| map.get(name).cloned())
    }

    /// Names of all compiled entities, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .get()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Number of compiled entities.
    pub fn len(&self) -> usize {
        self.entries.get().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
