//! Household member model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a household member.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MemberId = Uuid;

/// One person in the household rotation.
///
/// List position carries display order only; rotation math never ranks
/// members, it only filters them by exemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable global ID, never reused.
    pub id: MemberId,
    pub name: String,
    /// Avatar accent color, round-tripped for the presentation layer.
    #[serde(default)]
    pub color: Option<String>,
}

impl Member {
    /// Creates a member with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: None,
        }
    }
}
