//! Service layer for the classroom record-keeper.
//! - `storage`: the generic repository seam and its in-memory implementation.
//! - `classroom`: business operations enforcing cross-entity integrity.
//! - `errors`: the error taxonomy surfaced to callers.

pub mod errors;
pub mod storage;
pub mod classroom;

pub use classroom::{ClassroomPolicy, ClassroomService};
pub use errors::ServiceError;
