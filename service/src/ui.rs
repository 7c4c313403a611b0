//! Contracts of the UI collaborators surrounding the [`Service`].
//!
//! The [`Service`] never renders anything itself: it emits [`Notification`]s,
//! asks for [`Confirmation`]s and requests [`Redirect`]s through a [`Ui`]
//! handler provided by the front-end.
//!
//! [`Service`]: crate::Service

use std::{convert::Infallible, time::Duration};

use derive_more::Display;

/// UI collaborator of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Ui;

/// Operation showing a [`Notification`].
#[derive(Clone, Debug)]
pub struct Notify(pub Notification);

/// Operation asking for a [`Confirmation`].
#[derive(Clone, Debug)]
pub struct Confirm(pub Confirmation);

/// Operation performing a [`Redirect`].
#[derive(Clone, Copy, Debug)]
pub struct Navigate(pub Redirect);

/// [`Ui`] capable of showing [`Notification`]s.
pub trait Notifier: Ui<Notify, Ok = (), Err = Infallible> {}

impl<T> Notifier for T where
    T: Ui<Notify, Ok = (), Err = Infallible> + ?Sized
{
}

/// [`Ui`] capable of asking for [`Confirmation`]s.
pub trait Confirmer: Ui<Confirm, Ok = bool, Err = Infallible> {}

impl<T> Confirmer for T where
    T: Ui<Confirm, Ok = bool, Err = Infallible> + ?Sized
{
}

/// [`Ui`] capable of performing [`Redirect`]s.
pub trait Navigator: Ui<Navigate, Ok = (), Err = Infallible> {}

impl<T> Navigator for T where
    T: Ui<Navigate, Ok = (), Err = Infallible> + ?Sized
{
}

/// Level of a [`Notification`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Level {
    /// Action succeeded.
    #[display("success")]
    Success,

    /// Action failed.
    #[display("error")]
    Error,
}

/// Message to be shown to the user.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("[{level}] {message}")]
pub struct Notification {
    /// [`Level`] of this [`Notification`].
    pub level: Level,

    /// Text of this [`Notification`].
    pub message: String,
}

impl Notification {
    /// Creates a new [`Level::Success`] [`Notification`].
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    /// Creates a new [`Level::Error`] [`Notification`].
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

/// Yes/no question asked before a destructive action.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Confirmation {
    /// Title of this [`Confirmation`].
    pub title: String,

    /// Question being asked.
    pub message: String,

    /// Label of the affirmative answer.
    pub confirm_text: String,

    /// Label of the negative answer.
    pub cancel_text: String,
}

impl Confirmation {
    /// Creates a new [`Confirmation`] of deleting an entity described by the
    /// provided `noun`.
    #[must_use]
    pub fn delete(noun: &str) -> Self {
        Self {
            title: "Confirm Delete".to_owned(),
            message: format!(
                "Are you sure you want to delete this {noun}? \
                 This action cannot be undone.",
            ),
            confirm_text: "Yes, Delete".to_owned(),
            cancel_text: "Cancel".to_owned(),
        }
    }
}

/// Screen the UI may be redirected to.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Screen {
    /// Users management list.
    #[display("users")]
    Users,

    /// Public vehicle inventory.
    #[display("inventory")]
    Inventory,

    /// Accessories management list.
    #[display("accessories")]
    Accessories,
}

/// Request to leave the current screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Redirect {
    /// [`Screen`] to go to.
    pub to: Screen,

    /// Delay before leaving the current screen.
    pub after: Duration,
}

/// Shows the provided [`Notification`] via the provided [`Notifier`].
pub(crate) async fn notify<U>(ui: &U, notification: Notification)
where
    U: Notifier + ?Sized,
{
    ui.execute(Notify(notification))
        .await
        .unwrap_or_else(|e| match e {});
}

/// Asks the provided [`Confirmer`] for the provided [`Confirmation`].
pub(crate) async fn confirm<U>(ui: &U, confirmation: Confirmation) -> bool
where
    U: Confirmer + ?Sized,
{
    ui.execute(Confirm(confirmation))
        .await
        .unwrap_or_else(|e| match e {})
}

/// Performs the provided [`Redirect`] via the provided [`Navigator`].
pub(crate) async fn navigate<U>(ui: &U, redirect: Redirect)
where
    U: Navigator + ?Sized,
{
    ui.execute(Navigate(redirect))
        .await
        .unwrap_or_else(|e| match e {});
}
