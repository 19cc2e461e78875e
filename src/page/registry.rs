//! Page registry - the single lookup point for page modules.
//!
//! Registration happens once during the bootstrap phase, before any
//! navigation can occur. Lookups at transition time fail fast with a typed
//! error instead of probing alternative names.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::PageModule;
use crate::core::{NavError, PageId};

/// Mapping of page id -> module. Exclusively owns the mapping; pages do not
/// know about each other.
#[derive(Default)]
pub struct PageRegistry {
    modules: RwLock<FxHashMap<PageId, Arc<dyn PageModule>>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a module to a page id. Fails if the id is already bound.
    pub fn register(
        &self,
        page_id: PageId,
        module: Arc<dyn PageModule>,
    ) -> Result<(), NavError> {
        let mut modules = self.modules.write();
        if modules.contains_key(&page_id) {
            return Err(NavError::DuplicateRegistration(page_id));
        }
        modules.insert(page_id, module);
        Ok(())
    }

    /// Look up the module for a page.
    pub fn get(&self, page_id: &PageId) -> Result<Arc<dyn PageModule>, NavError> {
        self.modules
            .read()
            .get(page_id)
            .cloned()
            .ok_or_else(|| NavError::ModuleNotFound(page_id.clone()))
    }

    /// Whether a page id is bound (used by config validation).
    pub fn contains(&self, page_id: &PageId) -> bool {
        self.modules.read().contains_key(page_id)
    }

    pub fn len(&self) -> usize {
        self.modules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.read().is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
