//! [`Accessory`] screens.

use tracerr::Traced;

use crate::{
    command::{CreateAccessory, DeleteAccessory, UpdateAccessory},
    domain::{accessory, Accessory},
    form::AccessoryForm,
    infra::api,
    query,
    ui::{
        self, Confirmation, Confirmer, Navigator, Notification, Notifier,
        Redirect, Screen,
    },
    Command, Query, Service,
};

use super::{fail, reject, Error};

/// Loads the [`Accessory`] to be edited or deleted.
///
/// # Errors
///
/// If the [`Accessory`] doesn't exist or cannot be loaded. The UI is
/// redirected back to the [`Accessory`] list in such case.
pub async fn load<A, U>(
    service: &Service<A>,
    ui: &U,
    id: accessory::Id,
) -> Result<Accessory, Traced<Error>>
where
    Service<A>: Query<
        query::accessory::ById,
        Ok = Option<Accessory>,
        Err = Traced<api::Error>,
    >,
    U: Notifier + Navigator + ?Sized,
{
    let outcome: Result<Accessory, _> =
        match service.execute(query::accessory::ById::by(id)).await {
            Ok(Some(accessory)) => return Ok(accessory),
            Ok(None) => {
                tracing::warn!(%id, "accessory not found");
                ui::notify(ui, Notification::error("Accessory not found"))
                    .await;
                Err(tracerr::new!(Error::NotFound))
            }
            Err(e) => Err(fail(
                ui,
                e,
                "Failed to load accessory details".into(),
            )
            .await),
        };
    ui::navigate(
        ui,
        Redirect {
            to: Screen::Accessories,
            after: service.config().failure_redirect_delay,
        },
    )
    .await;
    outcome
}

/// Creates a new [`Accessory`] out of the provided [`AccessoryForm`].
///
/// # Errors
///
/// If the [`AccessoryForm`] is invalid or the [`Accessory`] cannot be
/// created.
pub async fn create<A, U>(
    service: &Service<A>,
    ui: &U,
    form: &mut AccessoryForm,
) -> Result<(), Traced<Error>>
where
    Service<A>: Command<CreateAccessory, Ok = (), Err = Traced<api::Error>>,
    U: Notifier + Navigator + ?Sized,
{
    let details = match form.validate() {
        Ok(details) => details,
        Err(invalid) => return Err(reject(ui, invalid).await),
    };

    if let Err(e) = service.execute(CreateAccessory { details }).await {
        return Err(fail(ui, e, "Failed to create accessory".into()).await);
    }

    ui::notify(ui, Notification::success("Accessory created successfully!"))
        .await;
    back_to_list(service, ui).await;
    Ok(())
}

/// Saves the provided [`AccessoryForm`] as the [`Accessory`] with the
/// provided ID.
///
/// # Errors
///
/// If the [`AccessoryForm`] is invalid or the [`Accessory`] cannot be
/// updated.
pub async fn save<A, U>(
    service: &Service<A>,
    ui: &U,
    id: accessory::Id,
    form: &mut AccessoryForm,
) -> Result<(), Traced<Error>>
where
    Service<A>: Command<UpdateAccessory, Ok = (), Err = Traced<api::Error>>,
    U: Notifier + Navigator + ?Sized,
{
    let details = match form.validate() {
        Ok(details) => details,
        Err(invalid) => return Err(reject(ui, invalid).await),
    };

    if let Err(e) = service.execute(UpdateAccessory { id, details }).await {
        return Err(fail(ui, e, "Failed to update accessory".into()).await);
    }

    ui::notify(ui, Notification::success("Accessory updated successfully!"))
        .await;
    back_to_list(service, ui).await;
    Ok(())
}

/// Deletes the [`Accessory`] with the provided ID, once confirmed.
///
/// # Errors
///
/// If the deletion is declined or fails.
pub async fn delete<A, U>(
    service: &Service<A>,
    ui: &U,
    id: accessory::Id,
) -> Result<(), Traced<Error>>
where
    Service<A>: Command<DeleteAccessory, Ok = (), Err = Traced<api::Error>>,
    U: Notifier + Confirmer + Navigator + ?Sized,
{
    if !ui::confirm(ui, Confirmation::delete("accessory")).await {
        return Err(tracerr::new!(Error::Declined));
    }

    if let Err(e) = service.execute(DeleteAccessory { id }).await {
        return Err(fail(ui, e, "Failed to delete accessory".into()).await);
    }

    ui::notify(ui, Notification::success("Accessory deleted successfully"))
        .await;
    back_to_list(service, ui).await;
    Ok(())
}

/// Redirects the UI back to the [`Accessory`] list after a success.
async fn back_to_list<A, U>(service: &Service<A>, ui: &U)
where
    U: Navigator + ?Sized,
{
    ui::navigate(
        ui,
        Redirect {
            to: Screen::Accessories,
            after: service.config().success_redirect_delay,
        },
    )
    .await;
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use crate::{
        domain::accessory,
        form::{accessory::Field, AccessoryForm},
        infra::api,
        testing::{self, FakeApi, FakeUi},
        ui::Screen,
    };

    use super::{create, delete, load, save, Error};

    #[tokio::test]
    async fn missing_accessory_redirects_back() {
        let service = testing::service(FakeApi::default());
        let ui = FakeUi::default();

        let err = load(&service, &ui, accessory::Id::from(1))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), Error::NotFound));
        assert_eq!(
            ui.notifications.borrow()[0].message,
            "Accessory not found",
        );
        let redirects = ui.redirects.borrow();
        assert_eq!(redirects[0].to, Screen::Accessories);
        assert_eq!(redirects[0].after, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn rejects_invalid_price() {
        let service = testing::service(FakeApi::default());
        let ui = FakeUi::default();
        let mut form = AccessoryForm::default();
        form.edit(Field::Name, "Floor Mats");
        form.edit(Field::Category, "Interior");
        form.edit(Field::Price, "0");
        form.edit(Field::StockQuantity, "5");

        let err = create(&service, &ui, &mut form).await.unwrap_err();

        assert!(matches!(err.as_ref(), Error::Invalid(_)));
        assert!(service.api().mutations.borrow().is_empty());
        let notifications = ui.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].message, "Price must be greater than 0");
    }

    #[tokio::test]
    async fn saves_loaded_accessory() {
        let service =
            testing::service(FakeApi::with_accessory(testing::accessory(3)));
        let ui = FakeUi::default();

        let loaded = load(&service, &ui, accessory::Id::from(3)).await.unwrap();
        let mut form = AccessoryForm::from_accessory(&loaded);
        form.edit(Field::StockQuantity, "20");
        save(&service, &ui, loaded.id, &mut form).await.unwrap();

        let stored = service.api().accessories.borrow()[0].clone();
        assert_eq!(stored.details.stock_quantity, 20);
        assert_eq!(stored.details.price, loaded.details.price);
        assert_eq!(
            ui.notifications.borrow()[0].message,
            "Accessory updated successfully!",
        );
        assert_eq!(
            ui.redirects.borrow()[0].after,
            Duration::from_millis(1500),
        );
    }

    #[tokio::test]
    async fn ignores_server_message() {
        let service =
            testing::service(FakeApi::with_accessory(testing::accessory(3)));
        *service.api().reject_mutations.borrow_mut() = Some(api::Rejection {
            status: 500,
            message: Some("constraint violation".into()),
        });
        let ui = FakeUi::default();

        let err = delete(&service, &ui, accessory::Id::from(3))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), Error::Api(_)));
        assert_eq!(
            ui.notifications.borrow()[0].message,
            "Failed to delete accessory",
        );
        assert_eq!(service.api().accessories.borrow().len(), 1);
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let service =
            testing::service(FakeApi::with_accessory(testing::accessory(3)));
        let ui = FakeUi::default();
        ui.decline.set(true);

        let err = delete(&service, &ui, accessory::Id::from(3))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), Error::Declined));
        assert!(service.api().mutations.borrow().is_empty());
        assert!(ui.notifications.borrow().is_empty());
        assert_eq!(
            ui.confirmations.borrow()[0].message,
            "Are you sure you want to delete this accessory? \
             This action cannot be undone.",
        );
    }
}
