//! Tri-state setting used by the environment-backed resolver.

/// A value that distinguishes "never configured" from "configured as nothing".
///
/// `Unset` means the caller never touched the setting, `Absent` means the
/// caller explicitly configured it to hold no value, and `Present` carries
/// the configured value. Resolution logic matches on all three so the
/// precedence rules stay exhaustive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Setting<T> {
    /// Never configured.
    #[default]
    Unset,
    /// Explicitly configured to hold no value.
    Absent,
    /// Explicitly configured value.
    Present(T),
}

impl<T> Setting<T> {
    /// Returns the present value, if any.
    #[must_use]
    pub const fn as_present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Unset | Self::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Setting<T> {
    /// `Some` becomes `Present`, `None` becomes `Absent`.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}
