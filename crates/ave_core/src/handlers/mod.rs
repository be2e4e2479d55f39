//! Edit operation handlers.
//!
//! Each handler is a single-shot, stateless function: validate inputs,
//! invoke the media collaborator, return a uniform [`EditOutcome`].
//! No retry, no intermediate state, no cleanup of partial files on
//! failure.
//!
//! [`EditOutcome`]: crate::models::EditOutcome

mod cut;
mod errors;
mod merge;
mod resolution;

pub use cut::cut;
pub use errors::{EditError, EditResult};
pub use merge::merge;
pub use resolution::change_resolution;
