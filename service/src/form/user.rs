//! [`UserForm`] definition.

use secrecy::{ExposeSecret as _, SecretBox, SecretString};

use crate::domain::{
    user::{Email, FullName, NewUser, Password, Phone, Profile, Role, Username},
    User,
};

use super::{flag, non_blank, sanitize, FieldErrors, Invalid};

/// Field of a [`UserForm`].
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    /// [`Username`] field.
    Username,

    /// [`Password`] field.
    Password,

    /// [`FullName`] field.
    FullName,

    /// [`Email`] field.
    Email,

    /// [`Role`] field.
    Role,

    /// Department field.
    Department,

    /// [`Phone`] number field.
    PhoneNumber,

    /// Address field.
    Address,

    /// Active status field.
    IsActive,
}

/// Purpose a [`UserForm`] is validated for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// New [`User`] is being registered, so a [`Password`] is required.
    Create,

    /// Existing [`User`] is being edited, so a blank [`Password`] keeps the
    /// current one.
    Edit,
}

/// Successfully validated [`UserForm`].
#[derive(Clone, Debug)]
pub struct Valid {
    /// [`Profile`] of the [`User`].
    pub profile: Profile,

    /// [`Password`] of the [`User`], if any was entered.
    pub password: Option<SecretBox<Password>>,
}

/// Raw input of a [`User`] being created or edited.
#[derive(Debug)]
pub struct UserForm {
    /// Raw [`Field::Username`] input.
    username: String,

    /// Raw [`Field::Password`] input.
    password: SecretString,

    /// Raw [`Field::FullName`] input.
    full_name: String,

    /// Raw [`Field::Email`] input.
    email: String,

    /// Raw [`Field::Role`] input.
    role: String,

    /// Raw [`Field::Department`] input.
    department: String,

    /// Raw [`Field::PhoneNumber`] input.
    phone_number: String,

    /// Raw [`Field::Address`] input.
    address: String,

    /// [`Field::IsActive`] input.
    is_active: bool,

    /// Messages of the invalid fields from the last validation.
    errors: FieldErrors,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: SecretString::from(String::new()),
            full_name: String::new(),
            email: String::new(),
            role: Role::default().to_string(),
            department: String::new(),
            phone_number: String::new(),
            address: String::new(),
            is_active: true,
            errors: FieldErrors::default(),
        }
    }
}

impl UserForm {
    /// Creates a new [`UserForm`] prefilled with the provided [`User`].
    ///
    /// [`Field::Password`] is never prefilled.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        let Profile {
            username,
            full_name,
            email,
            role,
            department,
            phone_number,
            address,
            is_active,
        } = &user.profile;

        Self {
            username: username.to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            department: department.clone().unwrap_or_default(),
            phone_number: phone_number
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            address: address.clone().unwrap_or_default(),
            is_active: *is_active,
            ..Self::default()
        }
    }

    /// Returns the current input of the provided [`Field`].
    ///
    /// [`Field::Password`] input is never revealed.
    #[must_use]
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Username => self.username.clone(),
            Field::Password => String::new(),
            Field::FullName => self.full_name.clone(),
            Field::Email => self.email.clone(),
            Field::Role => self.role.clone(),
            Field::Department => self.department.clone(),
            Field::PhoneNumber => self.phone_number.clone(),
            Field::Address => self.address.clone(),
            Field::IsActive => self.is_active.to_string(),
        }
    }

    /// Returns [`FieldErrors`] of the last validation.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Sets the sanitized `value` of the provided [`Field`], forgetting its
    /// previous validation error.
    pub fn edit(&mut self, field: Field, value: &str) {
        match field {
            Field::Username => self.username = sanitize::username(value),
            Field::Password => {
                self.password = SecretString::from(value.to_owned());
            }
            Field::FullName => self.full_name = sanitize::letters_only(value),
            Field::Email => value.clone_into(&mut self.email),
            Field::Role => value.trim().clone_into(&mut self.role),
            Field::Department => value.clone_into(&mut self.department),
            Field::PhoneNumber => {
                self.phone_number =
                    sanitize::digits_only(value, sanitize::PHONE_DIGITS);
            }
            Field::Address => value.clone_into(&mut self.address),
            Field::IsActive => self.is_active = flag(value),
        }
        self.errors.clear(field.into());
    }

    /// Validates this [`UserForm`] for the provided [`Mode`].
    ///
    /// # Errors
    ///
    /// With [`Invalid`] listing every invalid field. The same
    /// [`FieldErrors`] are remembered by this [`UserForm`].
    pub fn validate(&mut self, mode: Mode) -> Result<Valid, Invalid> {
        let mut errors = FieldErrors::default();

        let username = self.username.trim();
        let username = if username.is_empty() {
            errors.insert(Field::Username.into(), "Username is required");
            None
        } else if username.len() < 3 {
            errors.insert(
                Field::Username.into(),
                "Username must be at least 3 characters",
            );
            None
        } else {
            let parsed = Username::new(username);
            if parsed.is_none() {
                errors.insert(
                    Field::Username.into(),
                    "Username can only contain letters, numbers and \
                     underscores",
                );
            }
            parsed
        };

        let full_name = self.full_name.trim();
        let full_name = if full_name.is_empty() {
            errors.insert(Field::FullName.into(), "Full name is required");
            None
        } else {
            let parsed = FullName::new(full_name);
            if parsed.is_none() {
                errors.insert(
                    Field::FullName.into(),
                    "Full name can only contain letters",
                );
            }
            parsed
        };

        let email = self.email.trim();
        let email = if email.is_empty() {
            errors.insert(Field::Email.into(), "Email is required");
            None
        } else {
            let parsed = Email::new(email);
            if parsed.is_none() {
                errors.insert(Field::Email.into(), "Invalid email format");
            }
            parsed
        };

        let phone_number = match non_blank(&self.phone_number) {
            None => Some(None),
            Some(number) => {
                let parsed = Phone::new(number);
                if parsed.is_none() {
                    errors.insert(
                        Field::PhoneNumber.into(),
                        "Phone number must be 10 digits",
                    );
                }
                parsed.map(Some)
            }
        };

        let role = if self.role.trim().is_empty() {
            errors.insert(Field::Role.into(), "Role is required");
            None
        } else {
            let parsed = self.role.parse::<Role>().ok();
            if parsed.is_none() {
                errors.insert(Field::Role.into(), "Invalid role");
            }
            parsed
        };

        let password = self.password.expose_secret();
        let password = if password.trim().is_empty() {
            if mode == Mode::Create {
                errors.insert(Field::Password.into(), "Password is required");
            }
            Some(None)
        } else {
            let parsed = Password::new(password);
            if parsed.is_none() {
                errors.insert(
                    Field::Password.into(),
                    "Password must be at most 128 characters",
                );
            }
            parsed.map(|p| Some(SecretBox::new(Box::new(p))))
        };

        self.errors = errors;
        match (username, full_name, email, phone_number, role, password) {
            (
                Some(username),
                Some(full_name),
                Some(email),
                Some(phone_number),
                Some(role),
                Some(password),
            ) if self.errors.is_empty() => Ok(Valid {
                profile: Profile {
                    username,
                    full_name,
                    email,
                    role,
                    department: non_blank(&self.department),
                    phone_number,
                    address: non_blank(&self.address),
                    is_active: self.is_active,
                },
                password,
            }),
            _ => Err(Invalid(self.errors.clone())),
        }
    }

    /// Validates this [`UserForm`] as a [`NewUser`].
    ///
    /// # Errors
    ///
    /// See [`UserForm::validate()`].
    pub fn validate_new(&mut self) -> Result<NewUser, Invalid> {
        let Valid { profile, password } = self.validate(Mode::Create)?;
        password
            .map(|password| NewUser { profile, password })
            .ok_or_else(|| Invalid(self.errors.clone()))
    }
}

#[cfg(test)]
mod spec {
    use secrecy::ExposeSecret as _;

    use crate::domain::user::Role;

    use super::{Field, Mode, UserForm};

    fn filled() -> UserForm {
        let mut form = UserForm::default();
        form.edit(Field::Username, "jdoe");
        form.edit(Field::FullName, "Jane Doe");
        form.edit(Field::Email, "jane@zedcars.com");
        form.edit(Field::Role, "Manager");
        form
    }

    #[test]
    fn sanitizes_on_edit() {
        let mut form = UserForm::default();
        form.edit(Field::Username, "j.doe!");
        form.edit(Field::FullName, "Jane 2 Doe");
        form.edit(Field::PhoneNumber, "555-123-4567 ext 9");

        assert_eq!(form.value(Field::Username), "jdoe");
        assert_eq!(form.value(Field::FullName), "Jane  Doe");
        assert_eq!(form.value(Field::PhoneNumber), "5551234567");
    }

    #[test]
    fn reports_every_invalid_field() {
        let mut form = UserForm::default();
        form.edit(Field::Username, "jd");
        form.edit(Field::Email, "jane@zedcars");
        form.edit(Field::PhoneNumber, "12345");
        form.edit(Field::Role, "");

        let errors = form.validate(Mode::Create).unwrap_err().0;
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![
                ("username", "Username must be at least 3 characters"),
                ("fullName", "Full name is required"),
                ("email", "Invalid email format"),
                ("phoneNumber", "Phone number must be 10 digits"),
                ("role", "Role is required"),
                ("password", "Password is required"),
            ],
        );
        assert_eq!(form.errors(), &errors);
    }

    #[test]
    fn editing_clears_field_error() {
        let mut form = UserForm::default();
        assert!(form.validate(Mode::Edit).is_err());
        assert_eq!(form.errors().get("username"), Some("Username is required"));

        form.edit(Field::Username, "jdoe");
        assert_eq!(form.errors().get("username"), None);
        assert_eq!(form.errors().get("email"), Some("Email is required"));
    }

    #[test]
    fn blank_password_is_kept_on_edit() {
        let valid = filled().validate(Mode::Edit).unwrap();

        assert!(valid.password.is_none());
        assert_eq!(valid.profile.role, Role::Manager);
        assert_eq!(valid.profile.phone_number, None);
        assert_eq!(valid.profile.department, None);
        assert!(valid.profile.is_active);
    }

    #[test]
    fn password_is_required_on_create() {
        let mut form = filled();
        assert!(form.validate(Mode::Create).is_err());

        form.edit(Field::Password, "s3cret");
        let valid = form.validate(Mode::Create).unwrap();
        assert_eq!(
            valid.password.unwrap().expose_secret().as_ref(),
            "s3cret",
        );
    }

    #[test]
    fn prefills_without_password() {
        let mut form = filled();
        form.edit(Field::Password, "s3cret");
        let user = crate::domain::User {
            id: 3.into(),
            profile: form.validate(Mode::Edit).unwrap().profile,
        };

        let form = UserForm::from_user(&user);
        assert_eq!(form.value(Field::Username), "jdoe");
        assert_eq!(form.value(Field::Password), "");
        assert_eq!(form.value(Field::Role), "Manager");
        assert_eq!(form.value(Field::IsActive), "true");
    }
}
