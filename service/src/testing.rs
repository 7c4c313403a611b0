//! In-memory collaborators for tests.

use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
};

use common::{
    operations::{By, Delete, Insert, Select, Update},
    pagination::{Number, Page, Selector},
};
use tracerr::Traced;

use crate::{
    domain::{
        accessory,
        user::{self, Changes, NewUser, Role},
        Accessory, User, Vehicle,
    },
    infra::{api, Api},
    read,
    ui::{Confirm, Confirmation, Navigate, Notification, Notify, Redirect, Ui},
    Config, Service,
};

/// In-memory [`Api`].
#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    pub(crate) users: RefCell<Vec<User>>,
    pub(crate) vehicles: Vec<Vehicle>,
    pub(crate) accessories: RefCell<Vec<Accessory>>,

    /// Number of list requests served.
    pub(crate) list_calls: Cell<usize>,

    /// Makes list requests fail with `500` status.
    pub(crate) fail_lists: Cell<bool>,

    /// Makes mutations fail with the provided rejection.
    pub(crate) reject_mutations: RefCell<Option<api::Rejection>>,

    /// Mutations performed, in order.
    pub(crate) mutations: RefCell<Vec<String>>,

    /// Last [`Changes`] applied to a [`User`].
    pub(crate) last_changes: RefCell<Option<Changes>>,
}

impl FakeApi {
    /// Creates a new [`FakeApi`] holding `n` [`User`]s.
    pub(crate) fn with_users(n: i32) -> Self {
        Self {
            users: RefCell::new((1..=n).map(user).collect()),
            ..Self::default()
        }
    }

    /// Creates a new [`FakeApi`] holding the provided [`Vehicle`]s.
    pub(crate) fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles,
            ..Self::default()
        }
    }

    /// Creates a new [`FakeApi`] holding the provided [`Accessory`].
    pub(crate) fn with_accessory(accessory: Accessory) -> Self {
        Self {
            accessories: RefCell::new(vec![accessory]),
            ..Self::default()
        }
    }

    fn list<I: Clone, F, M>(
        &self,
        all: &[I],
        selector: &Selector<F>,
        matches: impl Fn(&I) -> bool,
        meta: M,
    ) -> Result<Page<I, M>, Traced<api::Error>> {
        self.list_calls.set(self.list_calls.get() + 1);
        if self.fail_lists.get() {
            return Err(tracerr::new!(api::Error::from(api::Rejection {
                status: 500,
                message: None,
            })));
        }

        let found = all.iter().filter(|i| matches(i)).collect::<Vec<_>>();
        let size = selector.arguments.size.get();
        let total_pages = found.len().div_ceil(size).max(1);
        let current = selector.arguments.page.get().min(total_pages);
        Ok(Page {
            items: found
                .iter()
                .skip((current - 1) * size)
                .take(size)
                .map(|i| (*i).clone())
                .collect(),
            current: Number::new(current).unwrap(),
            total_pages: Number::new(total_pages).unwrap(),
            total_count: found.len(),
            meta,
        })
    }

    fn mutate(&self, what: String) -> Result<(), Traced<api::Error>> {
        if let Some(rejection) = self.reject_mutations.borrow().clone() {
            return Err(tracerr::new!(api::Error::from(rejection)));
        }
        self.mutations.borrow_mut().push(what);
        Ok(())
    }
}

impl Api<Select<By<read::user::list::Page, read::user::list::Selector>>>
    for FakeApi
{
    type Ok = read::user::list::Page;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::user::list::Page, read::user::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();
        let users = self.users.borrow();
        self.list(
            &users[..],
            &selector,
            |u| {
                let term = selector.search.as_deref().unwrap_or_default();
                let username: &str = u.profile.username.as_ref();
                let email: &str = u.profile.email.as_ref();
                (username.contains(term) || email.contains(term))
                    && selector
                        .filter
                        .role
                        .map_or(true, |role| u.profile.role == role)
            },
            (),
        )
    }
}

impl Api<Select<By<read::vehicle::list::Page, read::vehicle::list::Selector>>>
    for FakeApi
{
    type Ok = read::vehicle::list::Page;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::vehicle::list::Page, read::vehicle::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();
        let mut brands =
            self.vehicles.iter().map(|v| v.make.clone()).collect::<Vec<_>>();
        brands.sort();
        brands.dedup();
        let facets = read::vehicle::list::Facets {
            brands,
            fuel_types: Vec::new(),
            applied: selector.filter.clone(),
        };
        let filter = &selector.filter;
        self.list(
            &self.vehicles,
            &selector,
            |v| {
                filter.brand.as_ref().map_or(true, |b| &v.make == b)
                    && filter
                        .fuel_type
                        .as_ref()
                        .map_or(true, |f| v.fuel_type.as_ref() == Some(f))
                    && filter.price_range.map_or(true, |r| {
                        v.price.is_some_and(|p| r.contains(p))
                    })
            },
            facets,
        )
    }
}

impl Api<Select<By<Option<User>, user::Id>>> for FakeApi {
    type Ok = Option<User>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<User>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.users.borrow().iter().find(|u| u.id == id).cloned())
    }
}

impl Api<Insert<NewUser>> for FakeApi {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(user): Insert<NewUser>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(format!("create user {}", user.profile.username))
    }
}

impl Api<Update<Changes>> for FakeApi {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(changes): Update<Changes>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(format!("update user {}", changes.id))?;
        *self.last_changes.borrow_mut() = Some(changes);
        Ok(())
    }
}

impl Api<Delete<By<User, user::Id>>> for FakeApi {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<User, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.mutate(format!("delete user {id}"))?;
        self.users.borrow_mut().retain(|u| u.id != id);
        Ok(())
    }
}

impl Api<Select<By<Option<Accessory>, accessory::Id>>> for FakeApi {
    type Ok = Option<Accessory>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Accessory>, accessory::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.accessories.borrow().iter().find(|a| a.id == id).cloned())
    }
}

impl Api<Insert<accessory::Details>> for FakeApi {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(details): Insert<accessory::Details>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(format!("create accessory {}", details.name))
    }
}

impl Api<Update<Accessory>> for FakeApi {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(accessory): Update<Accessory>,
    ) -> Result<Self::Ok, Self::Err> {
        self.mutate(format!("update accessory {}", accessory.id))?;
        for a in self.accessories.borrow_mut().iter_mut() {
            if a.id == accessory.id {
                a.clone_from(&accessory);
            }
        }
        Ok(())
    }
}

impl Api<Delete<By<Accessory, accessory::Id>>> for FakeApi {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Accessory, accessory::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.mutate(format!("delete accessory {id}"))?;
        self.accessories.borrow_mut().retain(|a| a.id != id);
        Ok(())
    }
}

/// Recording [`Ui`].
#[derive(Debug, Default)]
pub(crate) struct FakeUi {
    pub(crate) notifications: RefCell<Vec<Notification>>,
    pub(crate) confirmations: RefCell<Vec<Confirmation>>,
    pub(crate) redirects: RefCell<Vec<Redirect>>,

    /// Makes every [`Confirmation`] declined.
    pub(crate) decline: Cell<bool>,
}

impl Ui<Notify> for FakeUi {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, Notify(n): Notify) -> Result<(), Infallible> {
        self.notifications.borrow_mut().push(n);
        Ok(())
    }
}

impl Ui<Confirm> for FakeUi {
    type Ok = bool;
    type Err = Infallible;

    async fn execute(&self, Confirm(c): Confirm) -> Result<bool, Infallible> {
        self.confirmations.borrow_mut().push(c);
        Ok(!self.decline.get())
    }
}

impl Ui<Navigate> for FakeUi {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, Navigate(r): Navigate) -> Result<(), Infallible> {
        self.redirects.borrow_mut().push(r);
        Ok(())
    }
}

/// Creates a new [`Service`] over the provided [`FakeApi`].
pub(crate) fn service(api: FakeApi) -> Service<FakeApi> {
    Service::new(Config::default(), api)
}

/// Creates a new [`User`] numbered `n`.
pub(crate) fn user(n: i32) -> User {
    serde_json::from_value(serde_json::json!({
        "adminId": n,
        "username": format!("user{n:02}"),
        "fullName": "Test User",
        "email": format!("user{n:02}@zedcars.com"),
        "role": if n % 2 == 0 { Role::Customer } else { Role::Manager },
        "isActive": true,
    }))
    .unwrap()
}

/// Creates a new [`Vehicle`] out of its wire representation.
pub(crate) fn vehicle(id: i32, make: &str, price: u32) -> Vehicle {
    serde_json::from_value(serde_json::json!({
        "carId": id,
        "make": make,
        "model": "Model",
        "price": price,
        "stockQuantity": 1,
    }))
    .unwrap()
}

/// Creates a new [`Accessory`] out of its wire representation.
pub(crate) fn accessory(id: i32) -> Accessory {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": "Roof Rack",
        "category": "Exterior",
        "price": 249.5,
        "stockQuantity": 12,
        "isActive": true,
    }))
    .unwrap()
}
