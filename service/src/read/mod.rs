//! Read entities definitions.

pub mod user;
pub mod vehicle;
