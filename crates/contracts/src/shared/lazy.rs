//! On-demand loading with a cached result.
//!
//! A slot starts `Idle`, becomes `Loaded` after the first successful load and
//! stays there. A failed load is remembered as `Failed` until `retry` puts the
//! slot back to `Idle`, so one broken screen never takes its siblings down.

use std::cell::{Cell, RefCell};

use super::error::LoadError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loaded(T),
    Failed(LoadError),
}

#[derive(Debug)]
pub struct LazySlot<T> {
    state: RefCell<LoadState<T>>,
    attempts: Cell<u32>,
}

impl<T: Clone> LazySlot<T> {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(LoadState::Idle),
            attempts: Cell::new(0),
        }
    }

    /// Returns the cached value or runs `loader` once.
    ///
    /// While the slot is `Failed` the loader is not called again; the cached
    /// error is returned until [`LazySlot::retry`].
    pub fn get_or_load<F>(&self, loader: F) -> Result<T, LoadError>
    where
        F: FnOnce() -> Result<T, LoadError>,
    {
        match &*self.state.borrow() {
            LoadState::Loaded(value) => return Ok(value.clone()),
            LoadState::Failed(err) => return Err(err.clone()),
            LoadState::Idle => {}
        }

        self.attempts.set(self.attempts.get() + 1);
        let result = loader();
        *self.state.borrow_mut() = match &result {
            Ok(value) => LoadState::Loaded(value.clone()),
            Err(err) => {
                log::warn!("lazy load failed: {}", err);
                LoadState::Failed(err.clone())
            }
        };
        result
    }

    /// Clears a failure so the next `get_or_load` tries again.
    /// A loaded slot is left untouched.
    pub fn retry(&self) {
        let mut state = self.state.borrow_mut();
        if matches!(*state, LoadState::Failed(_)) {
            *state = LoadState::Idle;
        }
    }

    pub fn state(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }

    /// Number of times the loader has actually run.
    pub fn attempts(&self) -> u32 {
        self.attempts.get()
    }
}

impl<T: Clone> Default for LazySlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_runs_once() {
        let slot = LazySlot::new();
        assert_eq!(slot.get_or_load(|| Ok(7)), Ok(7));
        assert_eq!(slot.get_or_load(|| panic!("must not run again")), Ok(7));
        assert_eq!(slot.attempts(), 1);
        assert_eq!(slot.state(), LoadState::Loaded(7));
    }

    #[test]
    fn test_failure_is_sticky_until_retry() {
        let slot: LazySlot<u8> = LazySlot::new();
        let err = LoadError::Failed("chunk missing".to_string());

        assert_eq!(slot.get_or_load(|| Err(err.clone())), Err(err.clone()));
        assert_eq!(slot.get_or_load(|| Ok(1)), Err(err.clone()));
        assert_eq!(slot.attempts(), 1);

        slot.retry();
        assert_eq!(slot.state(), LoadState::Idle);
        assert_eq!(slot.get_or_load(|| Ok(1)), Ok(1));
        assert_eq!(slot.attempts(), 2);
    }

    #[test]
    fn test_retry_keeps_loaded_value() {
        let slot = LazySlot::new();
        slot.get_or_load(|| Ok("view")).unwrap();
        slot.retry();
        assert_eq!(slot.state(), LoadState::Loaded("view"));
    }
}
