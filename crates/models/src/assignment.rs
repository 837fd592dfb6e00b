use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EntityId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: EntityId,
    pub course_id: EntityId,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
}
