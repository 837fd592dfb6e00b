use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::EntityId;

/// Closed set of user roles. Serialized as its numeric code (student = 0, teacher = 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub fn code(self) -> u8 {
        match self {
            Role::Student => 0,
            Role::Teacher => 1,
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> Self { role.code() }
}

impl TryFrom<u8> for Role {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Role::Student),
            1 => Ok(Role::Teacher),
            other => Err(ModelError::UnknownRole(other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_teacher(&self) -> bool { self.role == Role::Teacher }
}
