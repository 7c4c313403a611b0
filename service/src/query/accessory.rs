//! [`Query`] collection related to a single [`Accessory`].
//!
//! [`Query`]: super::Query

use common::operations::By;

use crate::domain::{accessory, Accessory};

use super::ApiQuery;

/// [`Query`] selecting an [`Accessory`] by its [`accessory::Id`].
///
/// [`Query`]: super::Query
pub type ById = ApiQuery<By<Option<Accessory>, accessory::Id>>;
