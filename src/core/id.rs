//! Identifier newtypes for type-safe navigation handling.
//!
//! A page is identified by three independent names:
//! - `NavPath` - where it lives in the URL space
//! - `PageId` - its logical identity (stable across path aliases)
//! - `ContainerId` - the mount point its content is rendered into

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// NavPath
// =============================================================================

/// Normalized navigation path.
///
/// Invariants:
/// - Always starts with `/`
/// - No query string or fragment
/// - No trailing slash (except the root path `/`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NavPath(Arc<str>);

impl NavPath {
    /// Create from a raw path, normalizing slashes and stripping `?query`
    /// and `#fragment`.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);

        if path.is_empty() || path == "/" {
            return Self(Arc::from("/"));
        }

        let with_leading = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let normalized = with_leading.trim_end_matches('/');
        if normalized.is_empty() {
            Self(Arc::from("/"))
        } else {
            Self(Arc::from(normalized))
        }
    }

    /// Get the normalized path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parent path on a `/` boundary.
    ///
    /// `/a/b` -> `/a`, `/a` -> `/`, `/` -> None.
    pub fn parent(&self) -> Option<NavPath> {
        if self.0.as_ref() == "/" {
            return None;
        }
        match self.0.rfind('/') {
            Some(0) => Some(Self(Arc::from("/"))),
            Some(idx) => Some(Self(Arc::from(&self.0[..idx]))),
            None => None,
        }
    }

    /// Check if this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }
}

impl fmt::Display for NavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NavPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl Borrow<str> for NavPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// PageId / ContainerId
// =============================================================================

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(raw: &str) -> Self {
                Self(Arc::from(raw.trim()))
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

id_type! {
    /// Logical page identifier, independent of URL path and container.
    PageId
}

id_type! {
    /// Identifier of a mount-point container (a DOM element in a real shell).
    ContainerId
}

// =============================================================================
// Tests
// =============================================================================
