//! Data models for the address book.
//!
//! A [`Record`] is one contact: a name and the phone numbers filed under it.

pub mod record;

pub use record::Record;
