//! Single-entity screens: loading, creating, editing and deleting.
//!
//! Every failure path reports exactly one [`Notification`].

pub mod accessory;
pub mod user;

use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

use crate::{
    form,
    infra::api,
    ui::{self, Notification, Notifier},
};

/// Error of a flow.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Form input is invalid, so nothing was sent.
    #[display("Form is invalid: {_0}")]
    #[from]
    Invalid(form::Invalid),

    /// Requested entity doesn't exist.
    #[display("Entity doesn't exist")]
    NotFound,

    /// [`Api`] operation failed.
    ///
    /// [`Api`]: crate::infra::Api
    #[display("`Api` operation failed: {_0}")]
    #[from]
    Api(api::Error),

    /// User declined the confirmation, so nothing was sent.
    #[display("Declined by user")]
    Declined,
}

/// Reports the first invalid field of the provided [`form::Invalid`].
async fn reject<U>(ui: &U, invalid: form::Invalid) -> Traced<Error>
where
    U: Notifier + ?Sized,
{
    let message = invalid.0.first().unwrap_or("Invalid form");
    ui::notify(ui, Notification::error(message)).await;
    tracerr::new!(Error::from(invalid))
}

/// Reports the provided [`api::Error`] with the provided `message`.
async fn fail<U>(
    ui: &U,
    err: Traced<api::Error>,
    message: String,
) -> Traced<Error>
where
    U: Notifier + ?Sized,
{
    tracing::error!("{message}: {err}");
    ui::notify(ui, Notification::error(message)).await;
    tracerr::map_from(err)
}

/// Returns the message provided by the remote side along with the provided
/// [`api::Error`], or the `fallback` one.
fn server_message_or(err: &Traced<api::Error>, fallback: &str) -> String {
    err.as_ref()
        .message()
        .map_or_else(|| fallback.to_owned(), ToOwned::to_owned)
}
