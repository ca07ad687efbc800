//! Constants used throughout the meds crates.
//!
//! This module names every relay key, endpoint path, and fixed string so
//! the intake, client, and reminder stages stay consistent with each other.

/// Session relay key holding the staged-input discriminant.
pub const SESSION_KEY_MODE: &str = "mode";

/// Session relay key holding a staged prescription text.
pub const SESSION_KEY_TEXT: &str = "prescription_text";

/// Session relay key holding a staged prescription image (as a data URL).
pub const SESSION_KEY_IMAGE: &str = "prescription_image";

/// Discriminant value for a typed prescription.
pub const MODE_TEXT: &str = "text";

/// Discriminant value for an uploaded prescription image.
pub const MODE_IMAGE: &str = "image";

/// Default base URL of the explanation service when none is configured.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Path of the explanation endpoint on the service.
pub const EXPLAIN_PATH: &str = "/api/explain";

/// Path of the image upload endpoint on the service.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Media types accepted for prescription images.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// Disclaimer used when the service response omits one.
pub const DEFAULT_DISCLAIMER: &str = "This is not medical advice. Consult a clinician.";

/// Base URL for the external calendar event template.
pub const CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Fixed description attached to every reminder event.
pub const REMINDER_DETAILS: &str = "Medicine reminder";

/// Length of the reminder event window, in minutes.
pub const REMINDER_DURATION_MINUTES: i64 = 10;
