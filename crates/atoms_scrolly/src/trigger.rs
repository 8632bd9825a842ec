//! Trigger registry
//!
//! Narrative content registers callbacks against 1-based step numbers;
//! entering step index `i` fires every trigger registered for number
//! `i + 1`. The off-by-one between the internal 0-based index and the
//! external 1-based number is part of the public contract - existing
//! narrative configurations depend on it, so it is documented rather than
//! corrected.

use smallvec::SmallVec;

/// A registered (step number, callback) pair
pub struct Trigger {
    /// 1-based step number this trigger listens for
    pub step: usize,
    action: Box<dyn FnMut() + Send>,
}

impl Trigger {
    pub fn new(step: usize, action: impl FnMut() + Send + 'static) -> Self {
        Self {
            step,
            action: Box::new(action),
        }
    }
}

/// Append-only list of triggers, dispatched in registration order
///
/// Multiple triggers may share a step number; all of them fire together.
/// Numbers with no matching step simply never fire.
#[derive(Default)]
pub struct TriggerRegistry {
    entries: SmallVec<[Trigger; 4]>,
}

impl std::fmt::Debug for TriggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trigger; no uniqueness constraint, no removal
    pub fn add(&mut self, trigger: Trigger) {
        self.entries.push(trigger);
    }

    /// Fire every trigger whose number matches the newly entered 0-based
    /// step index, synchronously, in registration order
    pub fn dispatch(&mut self, active_index: usize) {
        let step = active_index + 1;
        for trigger in self.entries.iter_mut().filter(|t| t.step == step) {
            (trigger.action)();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn dispatch_uses_one_based_numbering() {
        let fired = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&fired);

        let mut registry = TriggerRegistry::new();
        registry.add(Trigger::new(2, move || {
            count.fetch_add(1, Ordering::Relaxed);
        }));

        registry.dispatch(0);
        assert_eq!(fired.load(Ordering::Relaxed), 0);
        registry.dispatch(1);
        assert_eq!(fired.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn same_number_triggers_all_fire_in_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        let mut registry = TriggerRegistry::new();
        for tag in ["first", "second", "third"] {
            let log = Arc::clone(&order);
            registry.add(Trigger::new(1, move || {
                log.lock().unwrap().push(tag);
            }));
        }

        registry.dispatch(0);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unmatched_numbers_are_skipped() {
        let mut registry = TriggerRegistry::new();
        registry.add(Trigger::new(99, || panic!("should never fire")));
        registry.dispatch(0);
        registry.dispatch(5);
    }

    #[test]
    fn refires_on_reentry() {
        let fired = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&fired);

        let mut registry = TriggerRegistry::new();
        registry.add(Trigger::new(1, move || {
            count.fetch_add(1, Ordering::Relaxed);
        }));

        registry.dispatch(0);
        registry.dispatch(0);
        assert_eq!(fired.load(Ordering::Relaxed), 2);
    }
}
