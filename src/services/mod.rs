//! Application service layer.
//!
//! Services contain the contact-management rules and sit between the
//! command handlers and the repository. They speak in typed errors; turning
//! those into text for the user is the handlers' job.

mod contact_service;

pub use contact_service::ContactService;
