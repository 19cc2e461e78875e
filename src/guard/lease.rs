//! Container leases.
//!
//! A lease is a temporary, revocable right to render into one container.
//! Claims are scoped per container: independent containers (main content vs
//! a modal overlay) render concurrently; contention on the same container is
//! serialized.
//!
//! Expiry is lazy. The guard never evicts a claim on its own: a lease whose
//! holder never released it (crashed renderer) stays in the table until the
//! lifecycle controller hits the contention, calls
//! [`expire_stale`](RenderOwnershipGuard::expire_stale) and retries - no
//! background timers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::sweep_container;
use crate::core::{ContainerId, NavError, PageId};
use crate::host::DomHost;
use crate::log;

/// Default window after which an unreleased claim is considered wedged.
pub const DEFAULT_LEASE_TIMEOUT: Duration = Duration::from_millis(5_000);

#[derive(Debug)]
struct HeldClaim {
    token: u64,
    acquired_at: Instant,
}

#[derive(Debug)]
struct GuardInner {
    claims: DashMap<ContainerId, HeldClaim>,
    lease_timeout: Duration,
    next_token: AtomicU64,
}

// =============================================================================
// RenderOwnershipGuard
// =============================================================================

/// Per-container mutual exclusion for render calls.
#[derive(Debug, Clone)]
pub struct RenderOwnershipGuard {
    inner: Arc<GuardInner>,
}

impl RenderOwnershipGuard {
    pub fn new(lease_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(GuardInner {
                claims: DashMap::new(),
                lease_timeout,
                next_token: AtomicU64::new(1),
            }),
        }
    }

    /// Claim a container for rendering.
    ///
    /// Fails with `ContainerBusy` while another claim on the same container
    /// is outstanding, wedged or not. Evicting a wedged claim is the
    /// caller's decision, via [`expire_stale`](Self::expire_stale).
    pub fn claim(&self, container: &ContainerId) -> Result<Lease, NavError> {
        match self.inner.claims.entry(container.clone()) {
            Entry::Occupied(_) => Err(NavError::ContainerBusy(container.clone())),
            Entry::Vacant(vacant) => {
                let token = self.inner.next_token.fetch_add(1, Ordering::Relaxed);
                vacant.insert(HeldClaim {
                    token,
                    acquired_at: Instant::now(),
                });
                Ok(Lease {
                    container: container.clone(),
                    token,
                    inner: self.inner.clone(),
                })
            }
        }
    }

    /// Release a lease. Releasing an already-released lease is a no-op
    /// (the lease also releases itself on drop).
    pub fn release(&self, lease: Lease) {
        drop(lease);
    }

    /// Force-release a claim that outlived the lease timeout.
    ///
    /// Returns true if a wedged claim was removed. Fresh claims are left
    /// alone, so a legitimately busy container stays busy.
    pub fn expire_stale(&self, container: &ContainerId) -> bool {
        let Some(held) = self.inner.claims.get(container) else {
            return false;
        };
        if held.acquired_at.elapsed() < self.inner.lease_timeout {
            return false;
        }
        let age = held.acquired_at.elapsed();
        drop(held);
        self.inner.claims.remove(container);
        log!("guard"; "force-released wedged lease on `{}` (held {:?})", container, age);
        true
    }

    /// Whether a claim on the container is currently outstanding.
    pub fn is_claimed(&self, container: &ContainerId) -> bool {
        self.inner.claims.contains_key(container)
    }

    /// Remove content inside the leased container that belongs to a page
    /// other than `active`. Confined to the claimed container by taking the
    /// lease rather than a bare container id.
    pub fn sweep(&self, dom: &dyn DomHost, lease: &Lease, active: &PageId) -> usize {
        sweep_container(dom, &lease.container, active)
    }
}

impl Default for RenderOwnershipGuard {
    fn default() -> Self {
        Self::new(DEFAULT_LEASE_TIMEOUT)
    }
}

// =============================================================================
// Lease
// =============================================================================

/// A held claim. Releases on drop, so the claim/release pair is balanced on
/// every path out of a transition, success or failure.
#[derive(Debug)]
pub struct Lease {
    container: ContainerId,
    token: u64,
    inner: Arc<GuardInner>,
}

impl Lease {
    pub fn container(&self) -> &ContainerId {
        &self.container
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        // Token check makes release idempotent: if this lease was already
        // force-expired and the container re-claimed, the newer claim stays.
        self.inner
            .claims
            .remove_if(&self.container, |_, held| held.token == self.token);
    }
}

// =============================================================================
// Tests
// =============================================================================
