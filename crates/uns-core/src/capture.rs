//! Result capture between a loaded resource unit and the resolver that loaded it.
//!
//! The resolver creates one [`ResultSlot`] per resolution and hands it to the
//! loader. The loaded unit runs its worker through [`ResultSlot::with_capture`],
//! setting the [`Controller`] result; the resolver then takes the value out of
//! the slot. Each slot belongs to a single call, so overlapping resolutions
//! never see each other's values.

/// Passed to a worker; the worker records its contribution here.
#[derive(Debug)]
pub struct Controller<T> {
    result: Option<T>,
}

impl<T> Controller<T> {
    fn new() -> Self {
        Self { result: None }
    }

    /// Sets the result, returning whatever was set before.
    pub fn set(&mut self, value: T) -> Option<T> {
        self.result.replace(value)
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Unsets the result.
    pub fn clear(&mut self) -> Option<T> {
        self.result.take()
    }
}

/// Single pending value carried out of a loaded unit.
#[derive(Debug)]
pub struct ResultSlot<T> {
    pending: Option<T>,
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResultSlot<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Runs `worker` with a fresh controller, then stores the controller's
    /// result in the slot (replacing anything pending, including with nothing).
    pub fn with_capture<F>(&mut self, worker: F) -> Option<&T>
    where
        F: FnOnce(&mut Controller<T>),
    {
        let mut ctrl = Controller::new();
        worker(&mut ctrl);
        self.pending = ctrl.result;
        self.pending.as_ref()
    }

    /// Like [`with_capture`](Self::with_capture) for fallible workers. On error
    /// the slot is left untouched and the error is returned.
    pub fn try_with_capture<F, E>(&mut self, worker: F) -> Result<Option<&T>, E>
    where
        F: FnOnce(&mut Controller<T>) -> Result<(), E>,
    {
        let mut ctrl = Controller::new();
        worker(&mut ctrl)?;
        self.pending = ctrl.result;
        Ok(self.pending.as_ref())
    }

    /// Destructive read: returns the pending value and empties the slot.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_result_lands_in_slot() {
        let mut slot = ResultSlot::new();
        let seen = slot.with_capture(|ctrl| {
            assert!(ctrl.result().is_none());
            ctrl.set(42);
        });
        assert_eq!(seen, Some(&42));
        assert!(slot.is_pending());
        assert_eq!(slot.take(), Some(42));
        assert_eq!(slot.take(), None);
        assert!(!slot.is_pending());
    }

    #[test]
    fn worker_that_sets_nothing_clears_pending() {
        let mut slot = ResultSlot::new();
        slot.with_capture(|ctrl| {
            ctrl.set("first");
        });
        let seen = slot.with_capture(|_| {});
        assert_eq!(seen, None);
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn last_set_wins() {
        let mut slot = ResultSlot::new();
        slot.with_capture(|ctrl| {
            assert_eq!(ctrl.set(1), None);
            assert_eq!(ctrl.set(2), Some(1));
        });
        assert_eq!(slot.take(), Some(2));
    }

    #[test]
    fn controller_clear_unsets_result() {
        let mut slot = ResultSlot::new();
        slot.with_capture(|ctrl| {
            ctrl.set(String::from("draft"));
            assert_eq!(ctrl.clear().as_deref(), Some("draft"));
        });
        assert!(!slot.is_pending());
    }

    #[test]
    fn failing_worker_leaves_slot_untouched() {
        let mut slot = ResultSlot::new();
        slot.with_capture(|ctrl| {
            ctrl.set(7);
        });
        let err = slot
            .try_with_capture(|ctrl| {
                ctrl.set(8);
                Err("boom")
            })
            .unwrap_err();
        assert_eq!(err, "boom");
        assert_eq!(slot.take(), Some(7));
    }

    #[test]
    fn slots_are_independent() {
        let mut a = ResultSlot::new();
        let mut b = ResultSlot::new();
        a.with_capture(|ctrl| {
            ctrl.set('a');
        });
        b.with_capture(|ctrl| {
            ctrl.set('b');
        });
        assert_eq!(a.take(), Some('a'));
        assert_eq!(b.take(), Some('b'));
    }
}
