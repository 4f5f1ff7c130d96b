//! Row types for each table.
//!
//! Enumerated columns are stored as text and parsed back into the core
//! enums on the way out; a value the core does not know is reported as a
//! backend error rather than silently coerced.

pub mod product;
pub mod pvz;
pub mod reception;
pub mod user;
