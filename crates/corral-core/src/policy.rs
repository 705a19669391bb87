//! Key collision policy for key-rewriting operations.

/// What to do when a key rewrite maps two entries onto the same key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyCollision {
    /// Last write wins: the later value takes over the earlier key's slot.
    Overwrite,

    /// Fail with `KeyAlreadyExists` and leave the structure untouched.
    Reject,
}

impl Default for KeyCollision {
    fn default() -> Self {
        Self::Overwrite
    }
}

impl std::fmt::Display for KeyCollision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for KeyCollision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overwrite" | "last_write_wins" => Ok(Self::Overwrite),
            "reject" | "error" => Ok(Self::Reject),
            _ => Err(format!("unknown key collision policy: {s}")),
        }
    }
}
