//! Confirmation Capability
//!
//! Synchronous yes/no prompt injected into the store for destructive actions.

/// Answers a yes/no question before a destructive action
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Native `window.confirm` dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            log::warn!("[CONFIRM] no window available, treating as cancelled");
            return false;
        };
        match window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("[CONFIRM] dialog failed: {:?}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_closures_are_confirmations() {
        let yes: Arc<dyn Confirm> = Arc::new(|_: &str| true);
        let no: Arc<dyn Confirm> = Arc::new(|_: &str| false);
        assert!(yes.confirm("Clear?"));
        assert!(!no.confirm("Clear?"));
    }

    #[test]
    fn test_closure_sees_message() {
        let only_polite = |msg: &str| msg.ends_with('?');
        assert!(only_polite.confirm("Are you sure?"));
        assert!(!only_polite.confirm("Do it"));
    }
}
