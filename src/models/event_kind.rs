use serde::{Deserialize, Serialize};

/// Marker found at the start of a transcript detail line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventKind {
    CheckIn,
    CheckOut,
}

impl EventKind {
    /// Parse a transcript token ("CI"/"CO", any case).
    pub fn from_token(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "CI" => Some(Self::CheckIn),
            "CO" => Some(Self::CheckOut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::CheckIn => "CI",
            EventKind::CheckOut => "CO",
        }
    }
}
