//! [`Command`] for deleting a [`User`].

use common::operations::{By, Delete};
use tracerr::Traced;

use crate::{
    domain::{user, User},
    infra::{api, Api},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`User`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteUser {
    /// ID of the [`User`] to delete.
    pub id: user::Id,
}

impl<A> Command<DeleteUser> for Service<A>
where
    A: Api<Delete<By<User, user::Id>>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(&self, cmd: DeleteUser) -> Result<Self::Ok, Self::Err> {
        let DeleteUser { id } = cmd;

        tracing::info!(%id, "deleting user");
        self.api()
            .execute(Delete(By::new(id)))
            .await
            .map_err(tracerr::wrap!())
    }
}
