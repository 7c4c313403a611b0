//! [`Command`] definition.

pub mod create_accessory;
pub mod create_user;
pub mod delete_accessory;
pub mod delete_user;
pub mod update_accessory;
pub mod update_user;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_accessory::CreateAccessory, create_user::CreateUser,
    delete_accessory::DeleteAccessory, delete_user::DeleteUser,
    update_accessory::UpdateAccessory, update_user::UpdateUser,
};
