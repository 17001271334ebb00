//! Change-set values for nullable fields.

/// Requested change to a nullable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the stored value as it is.
    Unchanged,
    /// Replace the stored value.
    Set(T),
    /// Reset the stored value to null.
    Cleared,
}

impl<T> Patch<T> {
    /// Returns whether the patch leaves the field untouched.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Writes the patch into `target`.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Unchanged => {}
            Self::Set(value) => *target = Some(value),
            Self::Cleared => *target = None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}
