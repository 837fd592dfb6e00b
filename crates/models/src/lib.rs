//! Entity definitions for the classroom record-keeper.
//!
//! These are plain values: the stores own the authoritative copy and hand
//! out clones, so nothing here carries interior mutability.

pub mod errors;
pub mod user;
pub mod course;
pub mod assignment;
pub mod submission;

use serde::{Deserialize, Serialize};

/// Identity assigned by an entity store. Unique only within one store.
pub type EntityId = u64;

/// Identity space an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Course,
    Assignment,
    Submission,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Course => "course",
            EntityKind::Assignment => "assignment",
            EntityKind::Submission => "submission",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub use assignment::Assignment;
pub use course::Course;
pub use submission::Submission;
pub use user::{Role, User};
