use std::fmt::Display;

use tracing::{trace, warn};

/// Outcome of [`BoundedStack::store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreResult {
    Success,
    Full,
    /// The backing storage could not grow. Nothing was stored.
    Failure,
}

impl StoreResult {
    /// Legacy numeric status: 1 success, 2 full, 0 failure.
    pub fn code(&self) -> u8 {
        match self {
            StoreResult::Success => 1,
            StoreResult::Full => 2,
            StoreResult::Failure => 0,
        }
    }
}

impl Display for StoreResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreResult::Success => write!(f, "Successful"),
            StoreResult::Full => write!(f, "Repository Full"),
            StoreResult::Failure => write!(f, "Failure"),
        }
    }
}

/// Outcome of [`BoundedStack::retrieve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrieveResult {
    Retrieved(i32),
    Empty,
}

impl RetrieveResult {
    pub fn value(&self) -> Option<i32> {
        match self {
            RetrieveResult::Retrieved(v) => Some(*v),
            RetrieveResult::Empty => None,
        }
    }
}

impl Display for RetrieveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetrieveResult::Retrieved(v) => write!(f, "{}#Successful", v),
            RetrieveResult::Empty => write!(f, "#Repository Empty"),
        }
    }
}

/// LIFO container of `i32` that never holds more than `capacity` elements.
///
/// A capacity of zero gives a stack that rejects every `store` with
/// [`StoreResult::Full`].
#[derive(Debug, Clone)]
pub struct BoundedStack {
    elements: Vec<i32>,
    capacity: usize,
}

impl BoundedStack {
    pub fn new(capacity: usize) -> Self {
        Self { elements: Vec::new(), capacity }
    }

    pub fn store(&mut self, value: i32) -> StoreResult {
        if self.elements.len() >= self.capacity {
            trace!(value, capacity = self.capacity, "store rejected, stack full");
            return StoreResult::Full;
        }

        if let Err(e) = self.elements.try_reserve(1) {
            warn!(value, error = %e, "store failed to reserve storage");
            return StoreResult::Failure;
        }

        self.elements.push(value);
        trace!(value, len = self.elements.len(), "stored");
        StoreResult::Success
    }

    pub fn retrieve(&mut self) -> RetrieveResult {
        match self.elements.pop() {
            Some(value) => {
                trace!(value, len = self.elements.len(), "retrieved");
                RetrieveResult::Retrieved(value)
            },
            None => {
                trace!("retrieve on empty stack");
                RetrieveResult::Empty
            }
        }
    }

    /// Copy of the contents, bottom first.
    pub fn display(&self) -> Vec<i32> {
        self.elements.clone()
    }

    pub fn peek(&self) -> Option<i32> {
        self.elements.last().copied()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, values: &[i32]) -> BoundedStack {
        let mut stack = BoundedStack::new(capacity);
        for v in values {
            assert_eq!(stack.store(*v), StoreResult::Success);
        }
        stack
    }

    #[test]
    fn new_stack_is_empty() {
        for capacity in [1, 2, 3, 17, 1000] {
            let stack = BoundedStack::new(capacity);
            assert!(stack.display().is_empty());
            assert!(stack.is_empty());
            assert_eq!(stack.capacity(), capacity);
        }
    }

    #[test]
    fn store_beyond_capacity_is_full() {
        let mut stack = filled(3, &[10, 20, 30]);
        assert!(stack.is_full());

        assert_eq!(stack.store(40), StoreResult::Full);
        assert_eq!(stack.display(), vec![10, 20, 30]);
    }

    #[test]
    fn drain_returns_reverse_order() {
        let mut stack = filled(3, &[10, 20, 30]);

        assert_eq!(stack.retrieve(), RetrieveResult::Retrieved(30));
        assert_eq!(stack.retrieve(), RetrieveResult::Retrieved(20));
        assert_eq!(stack.retrieve(), RetrieveResult::Retrieved(10));
        assert_eq!(stack.retrieve(), RetrieveResult::Empty);
        assert!(stack.display().is_empty());
    }

    #[test]
    fn retrieve_on_empty_leaves_stack_empty() {
        let mut stack = BoundedStack::new(1);
        assert_eq!(stack.retrieve(), RetrieveResult::Empty);
        assert_eq!(stack.retrieve().value(), None);
        assert!(stack.display().is_empty());
    }

    #[test]
    fn store_then_retrieve_restores_state() {
        let mut stack = filled(5, &[-7, 0, 42]);
        let before = stack.display();

        for x in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(stack.store(x), StoreResult::Success);
            assert_eq!(stack.retrieve(), RetrieveResult::Retrieved(x));
            assert_eq!(stack.display(), before);
            assert_eq!(stack.len(), before.len());
        }
    }

    #[test]
    fn display_is_repeatable() {
        let stack = filled(4, &[1, 2]);
        let first = stack.display();
        let second = stack.display();
        assert_eq!(first, second);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn display_returns_independent_copy() {
        let mut stack = filled(3, &[1, 2]);
        let mut shown = stack.display();
        shown.push(99);
        shown[0] = -1;
        shown.clear();

        assert_eq!(stack.display(), vec![1, 2]);
        assert_eq!(stack.retrieve(), RetrieveResult::Retrieved(2));
    }

    #[test]
    fn zero_capacity_never_accepts() {
        let mut stack = BoundedStack::new(0);
        assert!(stack.is_full());
        assert_eq!(stack.store(1), StoreResult::Full);
        assert_eq!(stack.store(2), StoreResult::Full);
        assert_eq!(stack.retrieve(), RetrieveResult::Empty);
        assert!(stack.display().is_empty());
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut stack = BoundedStack::new(2);
        for i in 0..20 {
            if i % 3 == 2 {
                stack.retrieve();
            } else {
                stack.store(i);
            }
            assert!(stack.display().len() <= stack.capacity());
        }
    }

    #[test]
    fn interleaved_operations_keep_lifo_order() {
        let mut stack = BoundedStack::new(3);
        stack.store(1);
        stack.store(2);
        assert_eq!(stack.retrieve(), RetrieveResult::Retrieved(2));
        stack.store(3);
        stack.store(4);
        assert_eq!(stack.store(5), StoreResult::Full);
        assert_eq!(stack.peek(), Some(4));
        assert_eq!(stack.display(), vec![1, 3, 4]);

        assert_eq!(stack.retrieve(), RetrieveResult::Retrieved(4));
        assert_eq!(stack.retrieve(), RetrieveResult::Retrieved(3));
        assert_eq!(stack.retrieve(), RetrieveResult::Retrieved(1));
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn results_render_legacy_text() {
        assert_eq!(StoreResult::Success.code(), 1);
        assert_eq!(StoreResult::Full.code(), 2);
        assert_eq!(StoreResult::Failure.code(), 0);
        assert_eq!(RetrieveResult::Retrieved(30).to_string(), "30#Successful");
        assert_eq!(RetrieveResult::Empty.to_string(), "#Repository Empty");
        assert_eq!(StoreResult::Full.to_string(), "Repository Full");
    }
}
