//! The explanation service client.

use meds_core::constants::DEFAULT_DISCLAIMER;
use meds_core::ServiceConfig;
use meds_types::{EncodedImage, Explanation};
use serde::de::DeserializeOwned;

use crate::{ClientError, ClientResult};

/// Basic service identification returned by the service root.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ServiceInfo {
    #[serde(default)]
    pub app: String,
    #[serde(default)]
    pub description: String,
}

/// Acknowledgement returned by the image upload endpoint.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct UploadAck {
    #[serde(default)]
    pub message: String,
}

#[derive(serde::Serialize)]
struct ExplainTextRequest<'a> {
    text: &'a str,
}

/// Client for the remote explanation service.
///
/// One instance per run; the underlying connection pool is reused
/// across the analysis and medical-info pages. No retry policy and no
/// explicit timeout: a failed request surfaces once and the user may
/// simply try again.
#[derive(Debug)]
pub struct ExplainClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl ExplainClient {
    /// Creates a client for the configured service.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetches the service's identification from its root endpoint.
    pub async fn service_info(&self) -> ClientResult<ServiceInfo> {
        let response = self.http.get(self.config.info_url()).send().await?;
        Self::decode(response).await
    }

    /// Requests an explanation for a typed prescription.
    ///
    /// Sends the text as a JSON body to the explanation endpoint and
    /// returns the parsed structured explanation.
    pub async fn explain_text(&self, text: &str) -> ClientResult<Explanation> {
        tracing::debug!("requesting explanation for typed prescription");
        let response = self
            .http
            .post(self.config.explain_url())
            .json(&ExplainTextRequest { text })
            .send()
            .await?;

        Ok(Self::finalise(Self::decode(response).await?))
    }

    /// Requests an explanation for a prescription image.
    ///
    /// The staged bytes are re-attached as the multipart field `image`
    /// with their sniffed media type; the original file is never
    /// touched again.
    pub async fn explain_image(&self, image: &EncodedImage) -> ClientResult<Explanation> {
        tracing::debug!(media_type = image.media_type(), "requesting explanation for image");
        let form = reqwest::multipart::Form::new().part("image", image_part(image)?);
        let response = self
            .http
            .post(self.config.explain_url())
            .multipart(form)
            .send()
            .await?;

        Ok(Self::finalise(Self::decode(response).await?))
    }

    /// Uploads a prescription image for analysis.
    ///
    /// The upload endpoint takes the image as the multipart field
    /// `file` and answers with a one-line acknowledgement message.
    pub async fn upload_image(&self, image: &EncodedImage) -> ClientResult<UploadAck> {
        let form = reqwest::multipart::Form::new().part("file", image_part(image)?);
        let response = self
            .http
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Checks the status and decodes a JSON response body.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        Ok(response.json().await?)
    }

    /// Post-processes a decoded explanation.
    ///
    /// The service back-fills a disclaimer on its side; if it still
    /// arrived blank, the fixed one is substituted so the disclaimer
    /// region is never empty.
    fn finalise(mut explanation: Explanation) -> Explanation {
        if explanation.disclaimer.trim().is_empty() {
            explanation.disclaimer = DEFAULT_DISCLAIMER.to_owned();
        }
        if explanation.raw.is_some() {
            tracing::warn!("service returned unstructured fallback text alongside the cards");
        }
        explanation
    }
}

/// Builds the multipart part carrying the image bytes.
///
/// The relay does not preserve the original filename, so a synthetic
/// one is derived from the media type.
fn image_part(image: &EncodedImage) -> ClientResult<reqwest::multipart::Part> {
    let file_name = match image.media_type() {
        "image/jpeg" => "prescription.jpg",
        _ => "prescription.png",
    };

    Ok(reqwest::multipart::Part::bytes(image.bytes().to_vec())
        .file_name(file_name)
        .mime_str(image.media_type())?)
}
