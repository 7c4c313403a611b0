//! Domain definitions.

pub mod accessory;
pub mod user;
pub mod vehicle;

pub use self::{accessory::Accessory, user::User, vehicle::Vehicle};
