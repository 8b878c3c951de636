//! Exit signal
//!
//! The host can ask the game to stop from outside the update loop (window
//! close, the system exit button). The request is a shared flag that the
//! loop checks at the top of every frame.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable handle to a one-way exit flag
#[derive(Debug, Clone, Default)]
pub struct ExitSignal {
    raised: Arc<AtomicBool>,
}

impl ExitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request exit; safe to call from any thread, any number of times
    pub fn trigger(&self) {
        if !self.raised.swap(true, Ordering::AcqRel) {
            log::info!("Exit requested");
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger() {
        let signal = ExitSignal::new();
        assert!(!signal.is_triggered());
        signal.trigger();
        assert!(signal.is_triggered());
        signal.trigger();
        assert!(signal.is_triggered());
    }

    #[test]
    fn test_trigger_from_other_thread() {
        let signal = ExitSignal::new();
        let remote = signal.clone();
        std::thread::spawn(move || remote.trigger())
            .join()
            .unwrap();
        assert!(signal.is_triggered());
    }
}
