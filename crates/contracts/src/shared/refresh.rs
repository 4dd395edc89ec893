//! Refresh of a single entity with out-of-order protection.
//!
//! Every `begin` issues a ticket with a higher generation. Only the ticket of
//! the latest generation may change the data; older responses are dropped.

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer refresh was started after this one.
    Stale,
    /// The request failed; previous data is kept.
    Failed(ApiError),
}

#[derive(Debug, Clone)]
pub struct RefreshTracker<T> {
    generation: u64,
    resolved: u64,
    data: Option<T>,
    last_error: Option<ApiError>,
}

impl<T> Default for RefreshTracker<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            resolved: 0,
            data: None,
            last_error: None,
        }
    }
}

impl<T> RefreshTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn begin(&mut self) -> RefreshTicket {
        self.generation += 1;
        RefreshTicket(self.generation)
    }

    pub fn complete(&mut self, ticket: RefreshTicket, result: Result<T, ApiError>) -> RefreshOutcome {
        if ticket.0 != self.generation {
            log::debug!("refresh #{} dropped, latest is #{}", ticket.0, self.generation);
            return RefreshOutcome::Stale;
        }
        self.resolved = ticket.0;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.last_error = None;
                RefreshOutcome::Applied
            }
            Err(err) => {
                log::warn!("refresh failed: {}", err);
                self.last_error = Some(err.clone());
                RefreshOutcome::Failed(err)
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.resolved != self.generation
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Vm {
        id: u64,
        name: &'static str,
    }

    #[test]
    fn test_out_of_order_responses() {
        let mut tracker = RefreshTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(tracker.is_pending());

        let newer = Vm { id: 9, name: "web-2" };
        assert_eq!(tracker.complete(second, Ok(newer.clone())), RefreshOutcome::Applied);
        assert!(!tracker.is_pending());

        let older = Vm { id: 9, name: "web-1" };
        assert_eq!(tracker.complete(first, Ok(older)), RefreshOutcome::Stale);
        assert_eq!(tracker.data(), Some(&newer));
    }

    #[test]
    fn test_failure_keeps_stale_data() {
        let mut tracker = RefreshTracker::with_data(Vm { id: 9, name: "web" });
        let ticket = tracker.begin();
        let err = ApiError::Network("offline".to_string());

        assert_eq!(tracker.complete(ticket, Err(err.clone())), RefreshOutcome::Failed(err.clone()));
        assert!(!tracker.is_pending());
        assert_eq!(tracker.data().map(|vm| vm.name), Some("web"));
        assert_eq!(tracker.last_error(), Some(&err));
    }

    #[test]
    fn test_stale_response_keeps_pending() {
        let mut tracker: RefreshTracker<u8> = RefreshTracker::new();
        let first = tracker.begin();
        let _second = tracker.begin();
        assert_eq!(tracker.complete(first, Ok(1)), RefreshOutcome::Stale);
        assert!(tracker.is_pending());
        assert_eq!(tracker.data(), None);
    }
}
