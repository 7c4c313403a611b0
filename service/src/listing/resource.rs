//! Kinds of entities a [`Listing`] may be displaying.
//!
//! [`Listing`]: super::Listing

use std::fmt;

use crate::{
    command::DeleteUser,
    domain::{user, vehicle, User, Vehicle},
    read,
    ui::Confirmation,
};

use super::ValidationError;

/// Kind of entities listed page by page.
pub trait Resource {
    /// Listed entity.
    type Item: Clone + fmt::Debug;

    /// ID of a listed entity.
    type Id: Copy + Eq + fmt::Debug + fmt::Display;

    /// [`Filter`]s the list may be narrowed down with.
    type Filter: Filter;

    /// Metadata reported along with each page.
    type Meta: Clone + fmt::Debug + Default;

    /// Singular lowercase name of the entity.
    const NOUN: &'static str;

    /// Singular capitalized name of the entity.
    const TITLE: &'static str;

    /// Plural lowercase name of the entity.
    const PLURAL: &'static str;

    /// Indicator whether the list supports free-text search.
    const SEARCHABLE: bool;

    /// Returns ID of the provided `item`.
    fn id(item: &Self::Item) -> Self::Id;
}

/// Set of named filters narrowing a list down.
pub trait Filter: Clone + fmt::Debug + Default + PartialEq {
    /// Names of the supported filters.
    const NAMES: &'static [&'static str];

    /// Sets the named filter to the provided `value`, clearing it on `None`.
    ///
    /// # Errors
    ///
    /// With [`ValidationError`] if the filter is unknown or the `value` is
    /// malformed. This [`Filter`] must be left untouched in such case.
    fn set(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), ValidationError>;
}

/// [`Resource`] whose entities may be deleted right from the list.
pub trait Deletable: Resource {
    /// Command deleting an entity.
    type Delete;

    /// Creates a command deleting an entity with the provided ID.
    fn delete(id: Self::Id) -> Self::Delete;

    /// Returns the [`Confirmation`] asked before deleting.
    #[must_use]
    fn confirmation() -> Confirmation {
        Confirmation::delete(Self::NOUN)
    }
}

/// [`User`]s managed by administrators.
#[derive(Clone, Copy, Debug)]
pub struct Users;

impl Resource for Users {
    type Item = User;
    type Id = user::Id;
    type Filter = read::user::list::Filter;
    type Meta = ();

    const NOUN: &'static str = "user";
    const TITLE: &'static str = "User";
    const PLURAL: &'static str = "users";
    const SEARCHABLE: bool = true;

    fn id(item: &User) -> user::Id {
        item.id
    }
}

impl Deletable for Users {
    type Delete = DeleteUser;

    fn delete(id: user::Id) -> DeleteUser {
        DeleteUser { id }
    }
}

/// [`Vehicle`]s offered in the public inventory.
#[derive(Clone, Copy, Debug)]
pub struct Inventory;

impl Resource for Inventory {
    type Item = Vehicle;
    type Id = vehicle::Id;
    type Filter = read::vehicle::list::Filter;
    type Meta = read::vehicle::list::Facets;

    const NOUN: &'static str = "vehicle";
    const TITLE: &'static str = "Vehicle";
    const PLURAL: &'static str = "vehicles";
    const SEARCHABLE: bool = false;

    fn id(item: &Vehicle) -> vehicle::Id {
        item.id
    }
}
