//! Lookup status markers.
//!
//! A lookup either finds a value or reports *why* it did not:
//!
//! - **None**: the key never existed
//! - **Absent**: the key exists, but its value is intentionally empty
//! - **Deleted**: a value existed and has been removed
//! - **Expired**: a value existed and is no longer valid
//!
//! The core structures produce `None` and `Absent`. `Deleted` and `Expired`
//! belong to collaborators that remember history or time (caches, journals)
//! and report through the same [`Lookup`] type.

/// Why a lookup produced no value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The key never existed.
    None,

    /// The key exists and its value is intentionally empty.
    Absent,

    /// The value existed and has been removed.
    Deleted,

    /// The value existed and is no longer valid.
    Expired,
}

impl Status {
    /// Whether the key was known at some point.
    pub fn was_known(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Absent => write!(f, "absent"),
            Self::Deleted => write!(f, "deleted"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "absent" | "empty" => Ok(Self::Absent),
            "deleted" | "removed" => Ok(Self::Deleted),
            "expired" => Ok(Self::Expired),
            _ => Err(format!("unknown status: {s}")),
        }
    }
}

/// Outcome of a lookup: a value, or the status explaining its absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Missing(Status),
}

impl<T> Lookup<T> {
    /// A lookup for a key that never existed.
    pub fn none() -> Self {
        Self::Missing(Status::None)
    }

    pub fn deleted() -> Self {
        Self::Missing(Status::Deleted)
    }

    pub fn expired() -> Self {
        Self::Missing(Status::Expired)
    }

    /// Lift an `Option`, mapping `None` to [`Status::None`].
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Found(value),
            None => Self::none(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The status of a missing value, or `None` if a value was found.
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Found(_) => None,
            Self::Missing(status) => Some(*status),
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Missing(_) => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.found().unwrap_or(default)
    }

    pub fn map<U, F>(self, f: F) -> Lookup<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::Missing(status) => Lookup::Missing(status),
        }
    }
}

impl<'a, T> Lookup<&'a Option<T>> {
    /// Treat a stored `None` as an explicitly empty value.
    pub fn flatten(self) -> Lookup<&'a T> {
        match self {
            Self::Found(Some(value)) => Lookup::Found(value),
            Self::Found(None) => Lookup::Missing(Status::Absent),
            Self::Missing(status) => Lookup::Missing(status),
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}
