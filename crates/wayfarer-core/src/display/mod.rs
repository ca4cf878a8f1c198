//! Display formatting functions and result types.
//!
//! Domain models carry their own Display implementations; this module adds
//! newtype wrappers for collections (with graceful empty-collection output)
//! and wrapper types for operation results, so every output context renders
//! the same markdown.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Trips, ScheduledTasks, ...)
//! - [`results`]: Operation result types (CreateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)

pub mod collections;
pub mod results;
pub mod status;

pub use collections::{Notifications, ScheduledTasks, Trips, Users};
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
