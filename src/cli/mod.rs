//! Command-line front end.
//!
//! Every invocation hydrates one feature store from storage, dispatches the
//! actions the subcommand maps to, and prints the resulting state.

mod render;
mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{Config, ConfigError, StorageBackend};
use crate::features::cart::Discount;
use crate::features::todo::Filter;

pub use render::{render_cart, render_counter, render_todo, render_user};
pub use run::{run, CliError};

#[derive(Debug, Parser)]
#[command(
    name = "statelab",
    version,
    about = "Drive reducer stores (cart, todo, counter, user) from the command line"
)]
pub struct Cli {
    /// Path to config file (default: <config_dir>/statelab/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the storage backend from config
    #[arg(long, value_enum, global = true)]
    pub storage: Option<StorageBackend>,

    /// Override the data directory of the file backend
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print the resulting state as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(backend) = self.storage {
            config.storage.backend = backend;
        }
        if let Some(dir) = &self.data_dir {
            config.storage.dir = Some(dir.clone());
        }
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shopping cart
    #[command(subcommand)]
    Cart(CartCommand),
    /// Todo list
    #[command(subcommand)]
    Todo(TodoCommand),
    /// Counter
    #[command(subcommand)]
    Counter(CounterCommand),
    /// Signed-in user
    #[command(subcommand)]
    User(UserCommand),
    /// Send a raw action envelope; unknown kinds leave the state unchanged
    Dispatch {
        feature: Feature,
        /// Action kind, e.g. ADD_ITEM or increment
        kind: String,
        /// JSON payload
        payload: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Add one unit of a product (name and price default to the catalog)
    Add {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_price)]
        price: Option<f64>,
    },
    /// Increase quantity
    Inc { id: u64 },
    /// Decrease quantity (never below 1)
    Dec { id: u64 },
    /// Remove a line
    Remove { id: u64 },
    /// Apply a discount: 0, 10, 20 or 50
    Discount { discount: Discount },
    /// Set the order note
    Note { text: String },
    /// Empty the cart
    Clear,
    /// List the product catalog
    Catalog,
    /// Print the cart
    Show,
}

#[derive(Debug, Subcommand)]
pub enum TodoCommand {
    /// Set the input buffer
    Input { text: String },
    /// Add the input buffer as a todo, or `text` if given
    Add { text: Option<String> },
    /// Flip completion
    Toggle { id: u64 },
    /// Delete a todo
    Delete { id: u64 },
    /// Show all, active or completed todos
    Filter { filter: Filter },
    /// Delete every completed todo
    ClearCompleted,
    /// Print the list
    Show,
}

#[derive(Debug, Subcommand)]
pub enum CounterCommand {
    Inc,
    Dec,
    Reset,
    Show,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    Login { name: String },
    Logout,
    /// Rename the signed-in user
    Rename { name: String },
    Show,
}

/// Prices must be finite; NaN would break change detection and cannot be
/// stored as JSON.
fn parse_price(raw: &str) -> Result<f64, String> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    if !price.is_finite() {
        return Err(format!("'{}' is not a finite price", raw));
    }
    Ok(price)
}

/// Feature stores addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Feature {
    Cart,
    Todo,
    Counter,
    User,
}

impl Feature {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Todo => "todo",
            Self::Counter => "counter",
            Self::User => "user",
        }
    }
}
