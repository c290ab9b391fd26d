//! Assistant Bot - an interactive command-line contact manager.
//!
//! Contacts live in an in-memory address book for the lifetime of the
//! process. Each contact has a name and a list of ten-digit phone numbers.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone number, contact name)
//! - **models**: The contact record
//! - **repositories**: Address book storage behind the `ContactRepository` trait
//! - **services**: Contact operations with typed errors
//! - **cli**: Input parsing, command handlers and the interactive loop
//! - **error**: Error types shared across layers
//! - **config**: Configuration from environment variables

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use cli::{run_repl, CommandHandler, Outcome};
pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{AssistantError, AssistantResult, ConfigError, NotFoundError};
pub use models::Record;
pub use repositories::{AddressBook, ContactRepository};
pub use services::ContactService;
