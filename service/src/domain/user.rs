//! [`User`] definitions.

use std::{str::FromStr, sync::LazyLock};

use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use secrecy::{zeroize::Zeroize, CloneableSecret, SecretBox};
use serde::{Deserialize, Serialize};

/// Administrative user of the dealership platform.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    /// ID of this [`User`].
    #[serde(rename = "adminId")]
    pub id: Id,

    /// [`Profile`] of this [`User`].
    #[serde(flatten)]
    pub profile: Profile,
}

/// Editable details of a [`User`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// [`Username`] of the [`User`].
    pub username: Username,

    /// [`FullName`] of the [`User`].
    pub full_name: FullName,

    /// [`Email`] of the [`User`].
    pub email: Email,

    /// [`Role`] of the [`User`].
    pub role: Role,

    /// Department the [`User`] works in.
    #[serde(default)]
    pub department: Option<String>,

    /// [`Phone`] number of the [`User`].
    #[serde(default)]
    pub phone_number: Option<Phone>,

    /// Postal address of the [`User`].
    #[serde(default)]
    pub address: Option<String>,

    /// Indicator whether the [`User`] is allowed to sign in.
    #[serde(default)]
    pub is_active: bool,
}

/// [`User`] to be registered.
#[derive(Clone, Debug)]
pub struct NewUser {
    /// [`Profile`] of the [`User`].
    pub profile: Profile,

    /// Initial [`Password`] of the [`User`].
    pub password: SecretBox<Password>,
}

/// Changes to be made to an existing [`User`].
#[derive(Clone, Debug)]
pub struct Changes {
    /// ID of the [`User`] to change.
    pub id: Id,

    /// New [`Profile`] of the [`User`].
    pub profile: Profile,

    /// [`PasswordChange`] of the [`User`].
    pub password: PasswordChange,
}

/// Change of a [`User`]'s [`Password`].
#[derive(Clone, Debug, Default)]
pub enum PasswordChange {
    /// Current [`Password`] is kept.
    #[default]
    Keep,

    /// [`Password`] is replaced with the provided one.
    Set(SecretBox<Password>),
}

impl From<Option<SecretBox<Password>>> for PasswordChange {
    fn from(password: Option<SecretBox<Password>>) -> Self {
        password.map_or(Self::Keep, Self::Set)
    }
}

/// ID of a [`User`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(i32);

/// Role of a [`User`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    /// Full access to every administrative screen.
    SuperAdmin,

    /// Manages inventory and accessories.
    Manager,

    /// Regular customer account.
    #[default]
    Customer,
}

/// Login name of a [`User`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a new [`Username`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Username`].
    fn check(name: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Username`] format:
        /// - Must consist of ASCII letters, digits or `_`;
        /// - Must be between 3 and 20 characters long.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[A-Za-z0-9_]{3,20}$").expect("valid regex")
        });

        REGEX.is_match(name.as_ref())
    }
}

impl FromStr for Username {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Username`")
    }
}

/// Full name of a [`User`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    /// Creates a new [`FullName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`FullName`].
    fn check(name: impl AsRef<str>) -> bool {
        /// Regular expression checking [`FullName`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[A-Za-z\s]+$").expect("valid regex")
        });

        let name = name.as_ref();
        !name.trim().is_empty() && REGEX.is_match(name)
    }
}

impl FromStr for FullName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `FullName`")
    }
}

/// Email address of a [`User`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Phone number of a [`User`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        let number = number.as_ref();
        number.len() == 10 && number.bytes().all(|b| b.is_ascii_digit())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

/// Password of a [`User`].
#[derive(Clone, Debug, Display, Eq, From, PartialEq)]
#[from(&str, String)]
pub struct Password(String);

impl Password {
    /// Creates a new [`Password`] if the given `password` is valid.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Option<Self> {
        let password = password.into();
        Self::check(&password).then_some(Self(password))
    }

    /// Checks whether the given `password` is a valid [`Password`].
    fn check(password: impl AsRef<str>) -> bool {
        let password = password.as_ref();
        !password.trim().is_empty() && password.len() <= 128
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl CloneableSecret for Password {}
impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
