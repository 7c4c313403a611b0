//! [`User`]-related [`Api`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use reqwest::Method;
use secrecy::ExposeSecret as _;
use serde::{Deserialize, Serialize};
use tracerr::Traced;

use crate::{
    domain::{
        user::{self, NewUser, PasswordChange, Profile},
        User,
    },
    infra::{
        api::{self, http::page},
        Api, Http,
    },
    read::user::list::{Page, Selector},
};

use super::KEEP_EXISTING_PASSWORD;

/// Path of the [`User`]s collection.
const USERS: &str = "admin/users";

impl Api<Select<By<Page, Selector>>> for Http {
    type Ok = Page;
    type Err = Traced<api::Error>;

    #[tracing::instrument(
        skip_all,
        fields(page = %by.as_inner().arguments.page),
    )]
    async fn execute(
        &self,
        Select(by): Select<By<Page, Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::GET, USERS)?
            .query(&list_params(by.as_inner()));
        let ListResponse {
            users,
            current_page,
            total_pages,
            total_count,
        } = self.fetch(req).await.map_err(tracerr::wrap!())?;
        Ok(page(users, current_page, total_pages, total_count, ()))
    }
}

impl Api<Select<By<Option<User>, user::Id>>> for Http {
    type Ok = Option<User>;
    type Err = Traced<api::Error>;

    #[tracing::instrument(skip_all, fields(id = %by.as_inner()))]
    async fn execute(
        &self,
        Select(by): Select<By<Option<User>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req =
            self.request(Method::GET, &format!("{USERS}/{}", by.into_inner()))?;
        match self.fetch(req).await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.as_ref().is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
        .map_err(tracerr::wrap!())
    }
}

impl Api<Insert<NewUser>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    #[tracing::instrument(
        skip_all,
        fields(username = %user.profile.username),
    )]
    async fn execute(
        &self,
        Insert(user): Insert<NewUser>,
    ) -> Result<Self::Ok, Self::Err> {
        let NewUser { profile, password } = user;
        let req = self.request(Method::POST, USERS)?.json(&UserBody {
            id: None,
            profile: &profile,
            password: password.expose_secret().as_ref(),
        });
        self.perform(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Update<user::Changes>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    #[tracing::instrument(skip_all, fields(id = %changes.id))]
    async fn execute(
        &self,
        Update(changes): Update<user::Changes>,
    ) -> Result<Self::Ok, Self::Err> {
        let user::Changes {
            id,
            profile,
            password,
        } = changes;
        let password = match &password {
            PasswordChange::Keep => KEEP_EXISTING_PASSWORD,
            PasswordChange::Set(p) => p.expose_secret().as_ref(),
        };
        let req = self
            .request(Method::PUT, &format!("{USERS}/{id}"))?
            .json(&UserBody {
                id: Some(id),
                profile: &profile,
                password,
            });
        self.perform(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Delete<By<User, user::Id>>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    #[tracing::instrument(skip_all, fields(id = %by.as_inner()))]
    async fn execute(
        &self,
        Delete(by): Delete<By<User, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::DELETE, &format!("{USERS}/{}", by.into_inner()))?;
        self.perform(req).await.map_err(tracerr::wrap!())
    }
}

/// Response of the [`User`]s collection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    /// [`User`]s on the requested page.
    users: Option<Vec<User>>,

    /// Number of the returned page.
    current_page: Option<usize>,

    /// Total number of pages.
    total_pages: Option<usize>,

    /// Total number of matching [`User`]s.
    total_count: Option<usize>,
}

/// Request body of a [`User`] mutation.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserBody<'a> {
    /// ID of the [`User`] being updated.
    #[serde(rename = "adminId", skip_serializing_if = "Option::is_none")]
    id: Option<user::Id>,

    /// [`Profile`] of the [`User`].
    #[serde(flatten)]
    profile: &'a Profile,

    /// Password of the [`User`], or [`KEEP_EXISTING_PASSWORD`].
    password: &'a str,
}

/// Builds query parameters of the [`User`]s collection request.
///
/// Only the criteria being set are sent.
fn list_params(selector: &Selector) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(4);
    if let Some(term) = &selector.search {
        params.push(("searchTerm", term.clone()));
    }
    if let Some(role) = selector.filter.role {
        params.push(("role", role.to_string()));
    }
    params.push(("page", selector.arguments.page.to_string()));
    params.push(("pageSize", selector.arguments.size.to_string()));
    params
}
