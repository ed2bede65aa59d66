//! Single-assignment memo cells for derived facts on immutable values.

use std::fmt;
use std::sync::OnceLock;

/// A lazily-populated slot that is written at most once.
///
/// A `Memo` is either uncomputed or holds its single final value. Racing
/// readers may each run the computation, but only the first completed value
/// is stored and every reader observes that value. The computation runs
/// outside the cell, so concurrent callers never wait on each other's work.
///
/// The contents are invisible to equality, hashing, and serialization of the
/// owning value: cloning a `Memo` yields an empty slot, and two memos always
/// compare equal.
pub struct Memo<T> {
    slot: OnceLock<T>,
}

impl<T> Memo<T> {
    /// Creates an uncomputed slot.
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Returns the stored value, or `None` if the slot is still uncomputed.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Returns `true` once a value has been stored.
    pub fn is_computed(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Returns the stored value, computing and storing it on first access.
    ///
    /// `compute` must be pure: if two threads race, both results are
    /// produced and the loser's is dropped.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> T) -> &T {
        if let Some(value) = self.slot.get() {
            return value;
        }
        let value = compute();
        self.slot.get_or_init(move || value)
    }
}

impl<T: Copy> Memo<T> {
    /// Copying variant of [`get_or_compute`](Self::get_or_compute).
    pub fn get_copied_or_compute(&self, compute: impl FnOnce() -> T) -> T {
        *self.get_or_compute(compute)
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> PartialEq for Memo<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Memo<T> {}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => f.debug_tuple("Memo").field(value).finish(),
            None => f.write_str("Memo(<uncomputed>)"),
        }
    }
}
