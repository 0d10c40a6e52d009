//! Request boundary types.
//!
//! Each DTO carries the fields of one HTTP request body and is built from the decoded JSON
//! object. Schema descriptors live next to them so documentation and construction agree on the
//! field names.

pub mod riddle;
pub mod schema;
