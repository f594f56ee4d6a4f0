use std::cell::Cell;
use std::rc::Rc;

/// Monotonic counter shared by every activities fetch. Only the response
/// holding the newest ticket may touch the list.
#[derive(Debug, Clone, Default)]
pub struct FetchGeneration {
    latest: Rc<Cell<u64>>,
}

impl FetchGeneration {
    pub fn begin(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

// Handles compare equal when they share a counter.
impl PartialEq for FetchGeneration {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latest, &other.latest)
    }
}
