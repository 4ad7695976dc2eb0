//! Explicit observable scalars.

/// A value written by the engine and read by the rendering layer each
/// frame.
///
/// This replaces a shared animated-value registry with an observable that
/// is exclusively owned by one indicator instance: every effective write
/// bumps a revision counter, so a renderer polling per frame can skip
/// redraws when nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Watched<T> {
    value: T,
    revision: u64,
}

impl<T: Copy + PartialEq> Watched<T> {
    /// Creates a new [`Watched`] holding `value`.
    pub fn new(value: T) -> Self {
        Self { value, revision: 0 }
    }

    /// Returns the current value.
    pub fn get(&self) -> T {
        self.value
    }

    /// Replaces the value, bumping the revision if it actually changed.
    pub fn set(&mut self, value: T) {
        if value != self.value {
            self.value = value;
            self.revision += 1;
        }
    }

    /// The revision counter; increases on every effective change.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
