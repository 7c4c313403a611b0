//! [`Command`] for updating an existing [`Accessory`].

use common::operations::Update;
use tracerr::Traced;

use crate::{
    domain::{accessory, Accessory},
    infra::{api, Api},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Accessory`].
#[derive(Clone, Debug)]
pub struct UpdateAccessory {
    /// ID of the [`Accessory`] to update.
    pub id: accessory::Id,

    /// New [`accessory::Details`] of the [`Accessory`].
    pub details: accessory::Details,
}

impl<A> Command<UpdateAccessory> for Service<A>
where
    A: Api<Update<Accessory>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        cmd: UpdateAccessory,
    ) -> Result<Self::Ok, Self::Err> {
        let UpdateAccessory { id, details } = cmd;

        tracing::info!(%id, "updating accessory");
        self.api()
            .execute(Update(Accessory { id, details }))
            .await
            .map_err(tracerr::wrap!())
    }
}
