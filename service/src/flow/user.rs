//! [`User`] screens.

use tracerr::Traced;

use crate::{
    command::{CreateUser, DeleteUser, UpdateUser},
    domain::{user, User},
    form::{user::Mode, UserForm},
    infra::api,
    listing::{Deletable as _, Users},
    query,
    ui::{
        self, Confirmer, Navigator, Notification, Notifier, Redirect, Screen,
    },
    Command, Query, Service,
};

use super::{fail, reject, server_message_or, Error};

/// Loads the [`User`] to be edited or deleted.
///
/// # Errors
///
/// If the [`User`] doesn't exist or cannot be loaded. The UI is redirected
/// back to the [`User`]s list in such case.
pub async fn load<A, U>(
    service: &Service<A>,
    ui: &U,
    id: user::Id,
) -> Result<User, Traced<Error>>
where
    Service<A>: Query<
        query::user::ById,
        Ok = Option<User>,
        Err = Traced<api::Error>,
    >,
    U: Notifier + Navigator + ?Sized,
{
    let outcome: Result<User, _> =
        match service.execute(query::user::ById::by(id)).await {
            Ok(Some(user)) => return Ok(user),
            Ok(None) => {
                tracing::warn!(%id, "user not found");
                ui::notify(ui, Notification::error("User not found")).await;
                Err(tracerr::new!(Error::NotFound))
            }
            Err(e) => Err(fail(ui, e, "Failed to load user data".into()).await),
        };
    ui::navigate(
        ui,
        Redirect {
            to: Screen::Users,
            after: service.config().failure_redirect_delay,
        },
    )
    .await;
    outcome
}

/// Registers a new [`User`] out of the provided [`UserForm`].
///
/// # Errors
///
/// If the [`UserForm`] is invalid or the [`User`] cannot be created.
pub async fn create<A, U>(
    service: &Service<A>,
    ui: &U,
    form: &mut UserForm,
) -> Result<(), Traced<Error>>
where
    Service<A>: Command<CreateUser, Ok = (), Err = Traced<api::Error>>,
    U: Notifier + Navigator + ?Sized,
{
    let new = match form.validate_new() {
        Ok(new) => new,
        Err(invalid) => return Err(reject(ui, invalid).await),
    };

    let cmd = CreateUser {
        profile: new.profile,
        password: new.password,
    };
    if let Err(e) = service.execute(cmd).await {
        let message = server_message_or(&e, "Failed to create user");
        return Err(fail(ui, e, message).await);
    }

    ui::notify(ui, Notification::success("User created successfully!")).await;
    back_to_list(service, ui).await;
    Ok(())
}

/// Saves the provided [`UserForm`] as the [`User`] with the provided ID.
///
/// A blank password keeps the current one.
///
/// # Errors
///
/// If the [`UserForm`] is invalid or the [`User`] cannot be updated.
pub async fn save<A, U>(
    service: &Service<A>,
    ui: &U,
    id: user::Id,
    form: &mut UserForm,
) -> Result<(), Traced<Error>>
where
    Service<A>: Command<UpdateUser, Ok = (), Err = Traced<api::Error>>,
    U: Notifier + Navigator + ?Sized,
{
    let valid = match form.validate(Mode::Edit) {
        Ok(valid) => valid,
        Err(invalid) => return Err(reject(ui, invalid).await),
    };

    let cmd = UpdateUser {
        id,
        profile: valid.profile,
        password: valid.password.into(),
    };
    if let Err(e) = service.execute(cmd).await {
        let message = server_message_or(&e, "Failed to update user");
        return Err(fail(ui, e, message).await);
    }

    ui::notify(ui, Notification::success("User updated successfully!")).await;
    back_to_list(service, ui).await;
    Ok(())
}

/// Deletes the [`User`] with the provided ID, once confirmed.
///
/// # Errors
///
/// If the deletion is declined or fails.
pub async fn delete<A, U>(
    service: &Service<A>,
    ui: &U,
    id: user::Id,
) -> Result<(), Traced<Error>>
where
    Service<A>: Command<DeleteUser, Ok = (), Err = Traced<api::Error>>,
    U: Notifier + Confirmer + Navigator + ?Sized,
{
    if !ui::confirm(ui, Users::confirmation()).await {
        return Err(tracerr::new!(Error::Declined));
    }

    if let Err(e) = service.execute(DeleteUser { id }).await {
        let message = server_message_or(&e, "Failed to delete user");
        return Err(fail(ui, e, message).await);
    }

    ui::notify(ui, Notification::success("User deleted successfully")).await;
    back_to_list(service, ui).await;
    Ok(())
}

/// Redirects the UI back to the [`User`]s list after a success.
async fn back_to_list<A, U>(service: &Service<A>, ui: &U)
where
    U: Navigator + ?Sized,
{
    ui::navigate(
        ui,
        Redirect {
            to: Screen::Users,
            after: service.config().success_redirect_delay,
        },
    )
    .await;
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::{
        domain::user::{self, PasswordChange},
        form::{user::Field, UserForm},
        infra::api,
        testing::{self, FakeApi, FakeUi},
        ui::{Level, Screen},
    };

    use super::{create, delete, load, save, Error};

    #[tokio::test]
    async fn missing_user_redirects_back() {
        let service = testing::service(FakeApi::with_users(3));
        let ui = FakeUi::default();

        let err = load(&service, &ui, user::Id::from(42)).await.unwrap_err();

        assert!(matches!(err.as_ref(), Error::NotFound));
        assert_eq!(ui.notifications.borrow()[0].message, "User not found");
        let redirects = ui.redirects.borrow();
        assert_eq!(redirects.len(), 1);
        assert_eq!(redirects[0].to, Screen::Users);
        assert_eq!(redirects[0].after, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn loads_existing_user() {
        let service = testing::service(FakeApi::with_users(3));
        let ui = FakeUi::default();

        let user = load(&service, &ui, user::Id::from(2)).await.unwrap();

        assert_eq!(user, testing::user(2));
        assert!(ui.notifications.borrow().is_empty());
        assert!(ui.redirects.borrow().is_empty());
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let service = testing::service(FakeApi::with_users(3));
        let ui = FakeUi::default();
        let mut form = UserForm::from_user(&testing::user(1));
        form.edit(Field::Email, "not-an-email");
        form.edit(Field::Username, "ab");

        let err = save(&service, &ui, user::Id::from(1), &mut form)
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), Error::Invalid(_)));
        assert!(service.api().mutations.borrow().is_empty());
        assert!(ui.redirects.borrow().is_empty());
        let notifications = ui.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0].message,
            "Username must be at least 3 characters",
        );
        assert_eq!(
            form.errors().get("email"),
            Some("Invalid email format"),
        );
    }

    #[tokio::test]
    async fn blank_password_keeps_current_one() {
        let service = testing::service(FakeApi::with_users(3));
        let ui = FakeUi::default();
        let mut form = UserForm::from_user(&testing::user(1));
        form.edit(Field::FullName, "Jane Doe");

        save(&service, &ui, user::Id::from(1), &mut form).await.unwrap();

        let changes = service.api().last_changes.borrow_mut().take().unwrap();
        assert_eq!(changes.id, user::Id::from(1));
        assert_eq!(changes.profile.full_name.to_string(), "Jane Doe");
        assert!(matches!(changes.password, PasswordChange::Keep));

        let notifications = ui.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, Level::Success);
        assert_eq!(notifications[0].message, "User updated successfully!");
        let redirects = ui.redirects.borrow();
        assert_eq!(redirects[0].to, Screen::Users);
        assert_eq!(redirects[0].after, Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn create_requires_password() {
        let service = testing::service(FakeApi::default());
        let ui = FakeUi::default();
        let mut form = UserForm::default();
        form.edit(Field::Username, "jdoe");
        form.edit(Field::FullName, "Jane Doe");
        form.edit(Field::Email, "jane@zedcars.com");

        let err = create(&service, &ui, &mut form).await.unwrap_err();
        assert!(matches!(err.as_ref(), Error::Invalid(_)));
        assert_eq!(
            ui.notifications.borrow()[0].message,
            "Password is required",
        );

        form.edit(Field::Password, "s3cret!");
        create(&service, &ui, &mut form).await.unwrap();
        assert_eq!(
            *service.api().mutations.borrow(),
            ["create user jdoe"],
        );
        assert_eq!(
            ui.notifications.borrow()[1].message,
            "User created successfully!",
        );
    }

    #[tokio::test]
    async fn reports_server_message() {
        let service = testing::service(FakeApi::default());
        *service.api().reject_mutations.borrow_mut() = Some(api::Rejection {
            status: 409,
            message: Some("Username already exists".into()),
        });
        let ui = FakeUi::default();
        let mut form = UserForm::default();
        form.edit(Field::Username, "jdoe");
        form.edit(Field::FullName, "Jane Doe");
        form.edit(Field::Email, "jane@zedcars.com");
        form.edit(Field::Password, "s3cret!");

        let err = create(&service, &ui, &mut form).await.unwrap_err();

        assert!(matches!(err.as_ref(), Error::Api(_)));
        assert!(ui.redirects.borrow().is_empty());
        let notifications = ui.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].message, "Username already exists");
    }

    #[tokio::test]
    async fn delete_asks_first() {
        let service = testing::service(FakeApi::with_users(3));
        let ui = FakeUi::default();
        ui.decline.set(true);

        let err = delete(&service, &ui, user::Id::from(1)).await.unwrap_err();
        assert!(matches!(err.as_ref(), Error::Declined));
        assert!(service.api().mutations.borrow().is_empty());
        assert!(ui.notifications.borrow().is_empty());

        ui.decline.set(false);
        delete(&service, &ui, user::Id::from(1)).await.unwrap();
        assert_eq!(service.api().users.borrow().len(), 2);
        assert_eq!(
            ui.notifications.borrow()[0].message,
            "User deleted successfully",
        );
        assert_eq!(ui.confirmations.borrow()[1].title, "Confirm Delete");
    }
}
