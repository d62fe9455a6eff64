//! Light/dark theme preference.

/// Persisted site theme. Anything unrecognized in storage falls back to
/// light, which is also the default for first-time visitors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage and `data-theme` attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; unknown or missing values are light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle button: moon invites dark mode, sun
    /// invites light mode.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "bi bi-moon-fill",
            Self::Dark => "bi bi-sun-fill",
        }
    }
}
