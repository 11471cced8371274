/// A value observed at a given slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithSlot<T> {
    slot: u64,
    value: T,
}

impl<T> WithSlot<T> {
    /// Tag `value` with `slot`.
    pub fn new(slot: u64, value: T) -> Self {
        Self { slot, value }
    }

    /// The slot the value was observed at.
    pub fn slot(&self) -> u64 {
        self.slot
    }

    /// Get value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Drop the slot.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Apply a function on the value, keeping the slot.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WithSlot<U> {
        WithSlot {
            slot: self.slot,
            value: f(self.value),
        }
    }
}

impl<T, E> WithSlot<Result<T, E>> {
    /// Move the slot inside a `Result`.
    pub fn transpose(self) -> Result<WithSlot<T>, E> {
        let slot = self.slot;
        self.value.map(|value| WithSlot { slot, value })
    }
}
