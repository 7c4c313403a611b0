//! [`User`] read model definition.
//!
//! [`User`]: crate::domain::User

pub mod list {
    //! [`User`]s list definitions.

    use common::define_pagination;

    use crate::{
        domain::{user::Role, User},
        listing::{self, ValidationError},
    };

    define_pagination!(User, Filter);

    /// Filter for [`Selector`].
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Filter {
        /// [`Role`] the listed [`User`]s must have.
        pub role: Option<Role>,
    }

    impl listing::Filter for Filter {
        const NAMES: &'static [&'static str] = &["role"];

        fn set(
            &mut self,
            name: &str,
            value: Option<&str>,
        ) -> Result<(), ValidationError> {
            match name {
                "role" => {
                    self.role = value
                        .map(|v| {
                            v.parse().map_err(|_| {
                                ValidationError::invalid_value(name, v)
                            })
                        })
                        .transpose()?;
                    Ok(())
                }
                _ => Err(ValidationError::UnknownFilter(name.to_owned())),
            }
        }
    }

}
