//! Page modules and their registry.
//!
//! A page module is the only thing the core knows about a page: it can load
//! (render into its container, possibly after async I/O) and clean up. What
//! it renders is its own business.

mod registry;

pub use registry::PageRegistry;

use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`PageModule::load`].
pub type LoadFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;

/// Contract every page conforms to. No fallback probing, no alternative
/// entry points: one interface, registered once at bootstrap.
pub trait PageModule: Send + Sync {
    /// Render the page's content. May perform async I/O; the controller
    /// awaits this under a timeout before completing the transition.
    fn load(&self) -> LoadFuture<'_>;

    /// Tear down before another page takes over. Must not block the
    /// transition; the controller treats panics here as logged no-ops.
    fn cleanup(&self) {}
}

/// Page module built from closures, for tests and the simulator.
pub struct FnPage<L> {
    load: L,
    cleanup: Option<Box<dyn Fn() + Send + Sync>>,
}

impl<L, F> FnPage<L>
where
    L: Fn() -> F + Send + Sync,
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    pub fn new(load: L) -> Self {
        Self {
            load,
            cleanup: None,
        }
    }

    pub fn with_cleanup(mut self, cleanup: impl Fn() + Send + Sync + 'static) -> Self {
        self.cleanup = Some(Box::new(cleanup));
        self
    }
}

impl<L, F> PageModule for FnPage<L>
where
    L: Fn() -> F + Send + Sync,
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    fn load(&self) -> LoadFuture<'_> {
        Box::pin((self.load)())
    }

    fn cleanup(&self) {
        if let Some(cleanup) = &self.cleanup {
            cleanup();
        }
    }
}
