//! Commands operating a single entity.

use service::{
    flow,
    form::{self, AccessoryForm, UserForm},
};
use strum::VariantArray as _;
use tokio::io::AsyncBufRead;
use tracerr::Traced;

use crate::{
    args::{AccessoryCommand, UserCommand},
    view, Service, Terminal,
};

/// Form filled in a [`Terminal`] field by field.
trait Form {
    /// Field of this [`Form`].
    type Field: Copy + Into<&'static str> + 'static;

    /// Every field of this [`Form`], in order.
    const FIELDS: &'static [Self::Field];

    /// Returns the current input of the provided field.
    fn value(&self, field: Self::Field) -> String;

    /// Returns the validation error of the provided field, if any.
    fn error(&self, field: Self::Field) -> Option<&'static str>;

    /// Sets the input of the provided field.
    fn edit(&mut self, field: Self::Field, value: &str);
}

impl Form for UserForm {
    type Field = form::user::Field;

    const FIELDS: &'static [Self::Field] = form::user::Field::VARIANTS;

    fn value(&self, field: Self::Field) -> String {
        UserForm::value(self, field)
    }

    fn error(&self, field: Self::Field) -> Option<&'static str> {
        self.errors().get(field.into())
    }

    fn edit(&mut self, field: Self::Field, value: &str) {
        UserForm::edit(self, field, value);
    }
}

impl Form for AccessoryForm {
    type Field = form::accessory::Field;

    const FIELDS: &'static [Self::Field] = form::accessory::Field::VARIANTS;

    fn value(&self, field: Self::Field) -> String {
        AccessoryForm::value(self, field)
    }

    fn error(&self, field: Self::Field) -> Option<&'static str> {
        self.errors().get(field.into())
    }

    fn edit(&mut self, field: Self::Field, value: &str) {
        AccessoryForm::edit(self, field, value);
    }
}

/// Prompts for the fields of the provided [`Form`].
///
/// Blank input keeps the current value and `-` clears it. Only the fields
/// which failed the last validation are prompted if `only_invalid` is set.
///
/// # Errors
///
/// With [`flow::Error::Declined`] if the input is exhausted.
async fn fill<F, R>(
    terminal: &Terminal<R>,
    form: &mut F,
    only_invalid: bool,
) -> Result<(), Traced<flow::Error>>
where
    F: Form,
    R: AsyncBufRead + Unpin,
{
    for &field in F::FIELDS {
        let error = form.error(field);
        if only_invalid && error.is_none() {
            continue;
        }
        if let Some(error) = error {
            println!("  {error}");
        }

        let input = terminal
            .prompt(field.into(), &form.value(field))
            .await
            .ok_or_else(|| tracerr::new!(flow::Error::Declined))?;
        match input.as_str() {
            "" => {}
            "-" => form.edit(field, ""),
            value => form.edit(field, value),
        }
    }
    Ok(())
}

/// Indicates whether the provided result failed on form validation.
fn is_invalid<T>(result: &Result<T, Traced<flow::Error>>) -> bool {
    matches!(result, Err(e) if matches!(e.as_ref(), flow::Error::Invalid(_)))
}

/// Runs the provided [`UserCommand`].
///
/// # Errors
///
/// If the command fails. The failure is already reported in the
/// [`Terminal`] in such case.
pub async fn user(
    service: &Service,
    terminal: &Terminal,
    cmd: UserCommand,
) -> Result<(), Traced<flow::Error>> {
    match cmd {
        UserCommand::Show { id } => {
            let user = flow::user::load(service, terminal, id).await?;
            println!("{}", view::user(&user));
            Ok(())
        }
        UserCommand::Create => {
            let mut form = UserForm::default();
            let mut only_invalid = false;
            loop {
                fill(terminal, &mut form, only_invalid).await?;
                let res =
                    flow::user::create(service, terminal, &mut form).await;
                if !is_invalid(&res) {
                    break res;
                }
                only_invalid = true;
            }
        }
        UserCommand::Edit { id } => {
            let user = flow::user::load(service, terminal, id).await?;
            println!("Leave the password blank to keep the current one.");
            let mut form = UserForm::from_user(&user);
            let mut only_invalid = false;
            loop {
                fill(terminal, &mut form, only_invalid).await?;
                let res =
                    flow::user::save(service, terminal, id, &mut form).await;
                if !is_invalid(&res) {
                    break res;
                }
                only_invalid = true;
            }
        }
        UserCommand::Delete { id } => {
            let user = flow::user::load(service, terminal, id).await?;
            println!("{}", view::user(&user));
            flow::user::delete(service, terminal, id).await
        }
    }
}

/// Runs the provided [`AccessoryCommand`].
///
/// # Errors
///
/// If the command fails. The failure is already reported in the
/// [`Terminal`] in such case.
pub async fn accessory(
    service: &Service,
    terminal: &Terminal,
    cmd: AccessoryCommand,
) -> Result<(), Traced<flow::Error>> {
    match cmd {
        AccessoryCommand::Show { id } => {
            let accessory =
                flow::accessory::load(service, terminal, id).await?;
            println!("{}", view::accessory(&accessory));
            Ok(())
        }
        AccessoryCommand::Create => {
            let mut form = AccessoryForm::default();
            let mut only_invalid = false;
            loop {
                fill(terminal, &mut form, only_invalid).await?;
                let res =
                    flow::accessory::create(service, terminal, &mut form).await;
                if !is_invalid(&res) {
                    break res;
                }
                only_invalid = true;
            }
        }
        AccessoryCommand::Edit { id } => {
            let accessory =
                flow::accessory::load(service, terminal, id).await?;
            let mut form = AccessoryForm::from_accessory(&accessory);
            let mut only_invalid = false;
            loop {
                fill(terminal, &mut form, only_invalid).await?;
                let res =
                    flow::accessory::save(service, terminal, id, &mut form)
                        .await;
                if !is_invalid(&res) {
                    break res;
                }
                only_invalid = true;
            }
        }
        AccessoryCommand::Delete { id } => {
            let accessory =
                flow::accessory::load(service, terminal, id).await?;
            println!("{}", view::accessory(&accessory));
            flow::accessory::delete(service, terminal, id).await
        }
    }
}
