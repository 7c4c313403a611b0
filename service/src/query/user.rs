//! [`Query`] collection related to a single [`User`].
//!
//! [`Query`]: super::Query

use common::operations::By;

use crate::domain::{user, User};

use super::ApiQuery;

/// [`Query`] selecting a [`User`] by its [`user::Id`].
///
/// [`Query`]: super::Query
pub type ById = ApiQuery<By<Option<User>, user::Id>>;
