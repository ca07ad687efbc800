//! Prescription intake.
//!
//! Validates the intake form (an optional typed prescription and an
//! optional image path, exactly one of which must be present), reads the
//! chosen image fully into memory, and stages the result in the session
//! relay for the next page. The image is staged as a self-describing
//! encoded blob so later stages never have to touch the original file.

use std::fs;
use std::path::{Path, PathBuf};

use meds_types::{EncodedImage, NonEmptyText, StagedInput};

use crate::constants::ALLOWED_IMAGE_TYPES;
use crate::session::SessionStore;
use crate::{PrescriptionError, PrescriptionResult};

/// The raw values of the intake form.
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    /// Typed prescription text, if the text field was filled in
    pub text: Option<String>,
    /// Path to a prescription image, if one was chosen
    pub image: Option<PathBuf>,
}

/// The page a successful intake navigates to.
///
/// A typed prescription goes straight to the medical-info page; an
/// image passes through the analysis page first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Analysis,
    MedicalInfo,
}

/// Validates the form and stages the chosen input.
///
/// Exactly one of the two fields must be non-empty; whitespace-only
/// text counts as empty. On success the relay's previous contents are
/// cleared and replaced with the new staged input. On failure nothing
/// is written and no navigation happens.
///
/// # Errors
///
/// Returns `PrescriptionError` if:
/// - Both fields are empty (`MissingPrescription`)
/// - Both fields are filled in (`AmbiguousInput`)
/// - The image cannot be read (`ImageRead`)
/// - The image is not a PNG or JPEG (`UnsupportedImage`)
pub fn submit(form: &IntakeForm, session: &mut SessionStore) -> PrescriptionResult<Destination> {
    let text = form.text.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let image = form.image.as_deref();

    match (text, image) {
        (None, None) => Err(PrescriptionError::MissingPrescription),
        (Some(_), Some(_)) => Err(PrescriptionError::AmbiguousInput),
        (Some(text), None) => {
            let staged = StagedInput::Text(NonEmptyText::new(text)?);
            session.stage_input(&staged);
            Ok(Destination::MedicalInfo)
        }
        (None, Some(path)) => {
            let staged = StagedInput::Image(read_image(path)?);
            session.stage_input(&staged);
            Ok(Destination::Analysis)
        }
    }
}

/// Reads a prescription image fully into memory and sniffs its media type.
///
/// The media type is detected from the bytes, not the file extension,
/// and anything other than PNG or JPEG is rejected before staging.
fn read_image(path: &Path) -> PrescriptionResult<EncodedImage> {
    let bytes = fs::read(path).map_err(|e| {
        PrescriptionError::ImageRead(std::io::Error::new(
            e.kind(),
            format!("failed to read {}: {}", path.display(), e),
        ))
    })?;

    let media_type = infer::get(&bytes)
        .map(|kind| kind.mime_type().to_owned())
        .ok_or_else(|| PrescriptionError::UnsupportedImage("unrecognised content".into()))?;

    if !ALLOWED_IMAGE_TYPES.contains(&media_type.as_str()) {
        return Err(PrescriptionError::UnsupportedImage(media_type));
    }

    Ok(EncodedImage::new(media_type, bytes))
}
