//! [`Command`] for creating a new [`Accessory`].

use common::operations::Insert;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Accessory;
use crate::{
    domain::accessory,
    infra::{api, Api},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Accessory`].
#[derive(Clone, Debug)]
pub struct CreateAccessory {
    /// [`accessory::Details`] of a new [`Accessory`].
    pub details: accessory::Details,
}

impl<A> Command<CreateAccessory> for Service<A>
where
    A: Api<Insert<accessory::Details>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        cmd: CreateAccessory,
    ) -> Result<Self::Ok, Self::Err> {
        let CreateAccessory { details } = cmd;

        tracing::info!(name = %details.name, "creating accessory");
        self.api()
            .execute(Insert(details))
            .await
            .map_err(tracerr::wrap!())
    }
}
