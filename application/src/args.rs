//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use service::domain::{accessory, user};

/// Administration console of the dealership platform.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command of the console.
#[derive(Clone, Copy, Debug, Subcommand)]
pub enum Command {
    /// Browses administrative users page by page.
    Users,

    /// Browses the vehicle inventory page by page.
    Inventory,

    /// Manages a single administrative user.
    #[command(subcommand)]
    User(UserCommand),

    /// Manages a single accessory.
    #[command(subcommand)]
    Accessory(AccessoryCommand),
}

/// Operation on a single [`User`].
///
/// [`User`]: service::domain::User
#[derive(Clone, Copy, Debug, Subcommand)]
pub enum UserCommand {
    /// Prints the user.
    Show {
        /// ID of the user.
        id: user::Id,
    },

    /// Registers a new user, prompting for its fields.
    Create,

    /// Edits the user, prompting for its fields.
    Edit {
        /// ID of the user.
        id: user::Id,
    },

    /// Deletes the user, once confirmed.
    Delete {
        /// ID of the user.
        id: user::Id,
    },
}

/// Operation on a single [`Accessory`].
///
/// [`Accessory`]: service::domain::Accessory
#[derive(Clone, Copy, Debug, Subcommand)]
pub enum AccessoryCommand {
    /// Prints the accessory.
    Show {
        /// ID of the accessory.
        id: accessory::Id,
    },

    /// Creates a new accessory, prompting for its fields.
    Create,

    /// Edits the accessory, prompting for its fields.
    Edit {
        /// ID of the accessory.
        id: accessory::Id,
    },

    /// Deletes the accessory, once confirmed.
    Delete {
        /// ID of the accessory.
        id: accessory::Id,
    },
}
