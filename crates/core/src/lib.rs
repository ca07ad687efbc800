//! # Meds Core
//!
//! Core logic for the Simple Meds prescription assistant.
//!
//! This crate contains the pieces of the pipeline that need no network
//! access:
//! - Intake validation of the prescription form (text or image, never both)
//! - The session relay that carries the staged input across the page boundary
//! - Rendering of a structured explanation into fixed display regions
//! - The calendar reminder builder
//!
//! **No transport concerns**: talking to the remote explanation service
//! belongs in `meds-client`.

pub mod config;
pub mod constants;
pub mod error;
pub mod intake;
pub mod render;
pub mod reminder;
pub mod session;

pub use config::ServiceConfig;
pub use error::{PrescriptionError, PrescriptionResult};
pub use intake::{Destination, IntakeForm};
pub use render::ExplanationCards;
pub use reminder::ReminderRequest;
pub use session::SessionStore;
