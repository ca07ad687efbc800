//! Page flows for the analysis and medical-info pages.
//!
//! Each flow models one page load: read the staged input from the
//! session relay, issue at most one request, and hand the result to the
//! caller for rendering. A load with nothing staged fails with
//! "no prescription found" before any request is sent.

use meds_core::SessionStore;
use meds_types::{Explanation, StagedInput};

use crate::{ClientError, ClientResult, ExplainClient, UploadAck};

/// The analysis page: upload the staged image and report the
/// acknowledgement.
///
/// Only the image variant ever navigates here, so anything else staged
/// is treated as an absent prescription.
pub async fn analysis_page(
    session: &SessionStore,
    client: &ExplainClient,
) -> ClientResult<UploadAck> {
    match session.staged_input() {
        Some(StagedInput::Image(image)) => client.upload_image(&image).await,
        Some(StagedInput::Text(_)) | None => Err(ClientError::NoPrescriptionFound),
    }
}

/// The medical-info page: explain whatever is staged.
///
/// Reads the discriminant once, sends the staged text as JSON or the
/// staged image as multipart form data, and returns the structured
/// explanation for the card renderer. Exactly one outbound request per
/// load; none at all when nothing is staged.
pub async fn medical_info_page(
    session: &SessionStore,
    client: &ExplainClient,
) -> ClientResult<Explanation> {
    let staged = session
        .staged_input()
        .ok_or(ClientError::NoPrescriptionFound)?;

    match staged {
        StagedInput::Text(text) => client.explain_text(text.as_str()).await,
        StagedInput::Image(image) => client.explain_image(&image).await,
    }
}
