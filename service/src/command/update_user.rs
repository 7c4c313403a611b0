//! [`Command`] for updating an existing [`User`].

use common::operations::Update;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::User;
use crate::{
    domain::user::{self, Changes, PasswordChange},
    infra::{api, Api},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`User`].
#[derive(Clone, Debug)]
pub struct UpdateUser {
    /// ID of the [`User`] to update.
    pub id: user::Id,

    /// New [`user::Profile`] of the [`User`].
    pub profile: user::Profile,

    /// [`PasswordChange`] of the [`User`].
    pub password: PasswordChange,
}

impl<A> Command<UpdateUser> for Service<A>
where
    A: Api<Update<Changes>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(&self, cmd: UpdateUser) -> Result<Self::Ok, Self::Err> {
        let UpdateUser {
            id,
            profile,
            password,
        } = cmd;

        tracing::info!(
            %id,
            password_changed = matches!(password, PasswordChange::Set(_)),
            "updating user",
        );
        self.api()
            .execute(Update(Changes {
                id,
                profile,
                password,
            }))
            .await
            .map_err(tracerr::wrap!())
    }
}
