//! Classroom orchestration: users, courses, assignments and submissions.
//!
//! Referential integrity lives here, not in the stores. Every mutation is
//! preceded by existence checks against the relevant repositories.

pub mod policy;
pub mod service;
mod users;
mod courses;
mod assignments;

pub use policy::ClassroomPolicy;
pub use service::ClassroomService;
