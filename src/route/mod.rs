//! Route table - URL path to page/container mapping.
//!
//! Built once from configuration at bootstrap, immutable thereafter.
//! Resolution is a pure lookup: exact match first, then longest registered
//! prefix on `/` boundaries, then the configured default route.

use rustc_hash::FxHashMap;

use crate::core::{ContainerId, NavError, NavPath, PageId};

// =============================================================================
// Route
// =============================================================================

/// One route entry: where a page lives and where its content mounts.
///
/// A page may be reachable through more than one path (alias entries share a
/// `page_id`); the first entry for a page is its canonical route.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: NavPath,
    pub page_id: PageId,
    pub container_id: ContainerId,
}

// =============================================================================
// RouteTable
// =============================================================================

/// Static path -> route mapping with a default fallback.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: FxHashMap<NavPath, usize>,
    default_index: usize,
}

impl RouteTable {
    /// Build a table from route entries plus the default route's path.
    ///
    /// Fails if a path is registered twice or the default path has no entry.
    pub fn new(routes: Vec<Route>, default_path: &NavPath) -> anyhow::Result<Self> {
        let mut by_path = FxHashMap::default();
        for (idx, route) in routes.iter().enumerate() {
            if by_path.insert(route.path.clone(), idx).is_some() {
                anyhow::bail!("duplicate route path `{}`", route.path);
            }
        }
        let default_index = *by_path
            .get(default_path)
            .ok_or_else(|| anyhow::anyhow!("default route `{default_path}` has no entry"))?;

        Ok(Self {
            routes,
            by_path,
            default_index,
        })
    }

    /// The configured fallback route.
    pub fn default_route(&self) -> &Route {
        &self.routes[self.default_index]
    }

    /// Resolve a path: exact match, then longest registered prefix.
    pub fn resolve(&self, path: &NavPath) -> Result<&Route, NavError> {
        if let Some(&idx) = self.by_path.get(path) {
            return Ok(&self.routes[idx]);
        }

        // Walk up the `/` boundaries; the deepest registered ancestor wins.
        let mut ancestor = path.parent();
        while let Some(candidate) = ancestor {
            if let Some(&idx) = self.by_path.get(&candidate) {
                return Ok(&self.routes[idx]);
            }
            ancestor = candidate.parent();
        }

        Err(NavError::RouteNotFound(path.clone()))
    }

    /// Resolve a path, falling back to the default route on a miss.
    pub fn resolve_or_default(&self, path: &NavPath) -> &Route {
        self.resolve(path).unwrap_or_else(|_| self.default_route())
    }

    /// Canonical route for a page (first entry carrying its id).
    pub fn find_page(&self, page_id: &PageId) -> Option<&Route> {
        self.routes.iter().find(|r| &r.page_id == page_id)
    }

    /// All routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
