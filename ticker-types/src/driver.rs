//! Driver metadata types usable across crates.

/// Typed key for identifying drivers in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverKey(pub &'static str);

impl DriverKey {
    /// Construct a new typed driver key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<DriverKey> for &'static str {
    fn from(k: DriverKey) -> Self {
        k.0
    }
}

impl From<DriverKey> for String {
    fn from(k: DriverKey) -> Self {
        k.0.to_string()
    }
}

impl std::fmt::Display for DriverKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
