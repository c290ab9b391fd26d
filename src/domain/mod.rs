//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names and phone numbers. These value
//! objects validate at construction time so an invalid phone number can
//! never be stored in a record.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
