//! Registration handles
//!
//! Every registration the host accepts hands back a [`Subscription`]. The
//! owner releases it explicitly when it is torn down; dropping a
//! subscription does not unregister anything.

use crate::HostError;
use std::fmt;

type ReleaseFn = Box<dyn FnOnce() -> Result<(), HostError> + Send>;

/// Handle to something registered with the host
pub struct Subscription {
    label: String,
    release: ReleaseFn,
}

impl Subscription {
    /// Create a subscription that runs `release` when released
    pub fn new<F>(label: impl Into<String>, release: F) -> Self
    where
        F: FnOnce() -> Result<(), HostError> + Send + 'static,
    {
        Self {
            label: label.into(),
            release: Box::new(release),
        }
    }

    /// What was registered, for logging
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Unregister from the host
    pub fn release(self) -> Result<(), HostError> {
        (self.release)()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
