//! In-flight identity tracking for cycle detection.

use crate::ObjectId;
use std::collections::HashSet;

/// The set of containers currently being rendered on the active call path.
///
/// A container is entered before its elements are rendered and left once
/// they are done, so only ancestors are ever present. Seeing a container that
/// is already present means it contains itself somewhere below. The same
/// container reached twice as siblings is not a cycle.
///
/// # Examples
///
/// ```rust
/// use logvalue::{render_array, ArrayRef, CycleGuard, FormatOptions, Value};
///
/// let looped = ArrayRef::from(vec![Value::from(1)]);
/// looped.push(Value::from(looped.clone()));
///
/// let mut guard = CycleGuard::new();
/// let text = render_array(&looped, &FormatOptions::default(), &mut guard);
/// assert_eq!(text, "[1, [<Circular>]]");
/// assert!(guard.is_empty());
/// # looped.clear();
/// ```
#[derive(Debug, Default)]
pub struct CycleGuard {
    in_flight: HashSet<ObjectId>,
}

impl CycleGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.in_flight.contains(&id)
    }

    /// Marks `id` as in flight. Returns `false` if it already was.
    pub fn enter(&mut self, id: ObjectId) -> bool {
        self.in_flight.insert(id)
    }

    pub fn leave(&mut self, id: ObjectId) {
        self.in_flight.remove(&id);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.in_flight.len()
    }
}
