//! [`Accessory`]-related [`Api`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    domain::{accessory, Accessory},
    infra::{api, Api, Http},
};

/// Path of the [`Accessory`] collection.
const ACCESSORIES: &str = "accessory";

impl Api<Select<By<Option<Accessory>, accessory::Id>>> for Http {
    type Ok = Option<Accessory>;
    type Err = Traced<api::Error>;

    #[tracing::instrument(skip_all, fields(id = %by.as_inner()))]
    async fn execute(
        &self,
        Select(by): Select<By<Option<Accessory>, accessory::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::GET,
            &format!("{ACCESSORIES}/{}", by.into_inner()),
        )?;
        match self.fetch(req).await {
            Ok(accessory) => Ok(Some(accessory)),
            Err(e) if e.as_ref().is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
        .map_err(tracerr::wrap!())
    }
}

impl Api<Insert<accessory::Details>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    #[tracing::instrument(skip_all, fields(name = %details.name))]
    async fn execute(
        &self,
        Insert(details): Insert<accessory::Details>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(Method::POST, ACCESSORIES)?.json(&details);
        self.perform(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Update<Accessory>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    #[tracing::instrument(skip_all, fields(id = %accessory.id))]
    async fn execute(
        &self,
        Update(accessory): Update<Accessory>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::PUT, &format!("{ACCESSORIES}/{}", accessory.id))?
            .json(&accessory);
        self.perform(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Delete<By<Accessory, accessory::Id>>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    #[tracing::instrument(skip_all, fields(id = %by.as_inner()))]
    async fn execute(
        &self,
        Delete(by): Delete<By<Accessory, accessory::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::DELETE,
            &format!("{ACCESSORIES}/{}", by.into_inner()),
        )?;
        self.perform(req).await.map_err(tracerr::wrap!())
    }
}
