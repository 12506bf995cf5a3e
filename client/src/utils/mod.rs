//! # Utility Functions
//!
//! - **[`validation`]**: Form input validation (payment, contact, email, phone)
//! - **[`html`]**: Escaping for rendered gallery markup

pub mod html;
pub mod validation;
