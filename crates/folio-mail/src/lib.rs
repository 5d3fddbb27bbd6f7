//! folio-mail - Transactional-email delivery for the contact form
//!
//! Thin client for an EmailJS-style send endpoint. The service id, template
//! id, and public key are opaque configuration: they are client-visible by
//! construction and are not treated as secrets.
//!
//! The app crate talks to [`MailSender`], a trait, so tests never touch the
//! HTTP stack.

mod client;
mod config;

pub use client::{MailClient, MailSender};
pub use config::{MailConfig, DEFAULT_ENDPOINT};
