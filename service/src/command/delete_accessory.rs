//! [`Command`] for deleting an [`Accessory`].

use common::operations::{By, Delete};
use tracerr::Traced;

use crate::{
    domain::{accessory, Accessory},
    infra::{api, Api},
    Service,
};

use super::Command;

/// [`Command`] for deleting an [`Accessory`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteAccessory {
    /// ID of the [`Accessory`] to delete.
    pub id: accessory::Id,
}

impl<A> Command<DeleteAccessory> for Service<A>
where
    A: Api<
        Delete<By<Accessory, accessory::Id>>,
        Ok = (),
        Err = Traced<api::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        cmd: DeleteAccessory,
    ) -> Result<Self::Ok, Self::Err> {
        let DeleteAccessory { id } = cmd;

        tracing::info!(%id, "deleting accessory");
        self.api()
            .execute(Delete(By::new(id)))
            .await
            .map_err(tracerr::wrap!())
    }
}
