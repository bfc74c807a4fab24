//! Connectivity signal
//!
//! Network reachability is observed externally (the host platform knows;
//! this crate does not probe) and injected into whatever needs to gate on
//! it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Boolean signal of network reachability
pub trait Connectivity: Send + Sync {
    fn is_connected(&self) -> bool;
}

/// Assumes the network is always reachable
pub struct AlwaysOnline;

impl Connectivity for AlwaysOnline {
    fn is_connected(&self) -> bool {
        true
    }
}

/// Reachability flag toggled by an external observer
///
/// Clones share the same flag, so one copy can live with the observer and
/// another with the consumer.
#[derive(Clone)]
pub struct SharedConnectivity {
    connected: Arc<AtomicBool>,
}

impl SharedConnectivity {
    pub fn new(connected: bool) -> Self {
        Self {
            connected: Arc::new(AtomicBool::new(connected)),
        }
    }

    /// Update the flag from the external observer
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Relaxed);
    }
}

impl Connectivity for SharedConnectivity {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_online() {
        assert!(AlwaysOnline.is_connected());
    }

    #[test]
    fn test_shared_flag_toggles() {
        let signal = SharedConnectivity::new(true);
        assert!(signal.is_connected());

        signal.set_connected(false);
        assert!(!signal.is_connected());
    }

    #[test]
    fn test_clones_share_state() {
        let observer = SharedConnectivity::new(true);
        let consumer = observer.clone();

        observer.set_connected(false);
        assert!(!consumer.is_connected());
    }
}
