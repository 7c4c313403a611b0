//! [`Query`] collection related to multiple [`User`]s.
//!
//! [`Query`]: super::Query
//! [`User`]: crate::domain::User

use crate::listing::Users;

/// [`Query`] selecting a [`Page`] of [`User`]s.
///
/// [`Page`]: crate::read::user::list::Page
/// [`Query`]: super::Query
/// [`User`]: crate::domain::User
pub type List = super::List<Users>;
