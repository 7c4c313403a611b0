//! [`Command`] for creating a new [`User`].

use common::operations::Insert;
use secrecy::SecretBox;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::User;
use crate::{
    domain::user::{self, NewUser},
    infra::{api, Api},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`User`].
#[derive(Clone, Debug)]
pub struct CreateUser {
    /// [`user::Profile`] of a new [`User`].
    pub profile: user::Profile,

    /// [`user::Password`] of a new [`User`].
    pub password: SecretBox<user::Password>,
}

impl<A> Command<CreateUser> for Service<A>
where
    A: Api<Insert<NewUser>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(&self, cmd: CreateUser) -> Result<Self::Ok, Self::Err> {
        let CreateUser { profile, password } = cmd;

        tracing::info!(username = %profile.username, "creating user");
        self.api()
            .execute(Insert(NewUser { profile, password }))
            .await
            .map_err(tracerr::wrap!())
    }
}
