//! [`Query`] collection related to the [`Vehicle`] inventory.
//!
//! [`Query`]: super::Query
//! [`Vehicle`]: crate::domain::Vehicle

use crate::listing::Inventory;

/// [`Query`] selecting a [`Page`] of [`Vehicle`]s.
///
/// [`Page`]: crate::read::vehicle::list::Page
/// [`Query`]: super::Query
/// [`Vehicle`]: crate::domain::Vehicle
pub type List = super::List<Inventory>;
