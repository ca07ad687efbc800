//! Shared data model for the Simple Meds client.
//!
//! This crate defines the validated value types that flow between the
//! intake, session, client, and rendering stages: non-empty text, a
//! time-of-day, the staged prescription input, and the structured
//! explanation returned by the remote service.

use base64::{engine::general_purpose, Engine as _};

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
}

/// Errors that can occur when parsing a time of day.
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    /// The input was not in `HH:MM` form or was out of range
    #[error("invalid time of day: {0}")]
    Invalid(String),
}

/// Errors that can occur when decoding a staged image payload.
#[derive(Debug, thiserror::Error)]
pub enum ImageDataError {
    /// The payload was not a `data:<mime>;base64,<bytes>` string
    #[error("invalid image data URL")]
    Malformed,
    /// The base64 section of the payload could not be decoded
    #[error("invalid image data URL: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// A string type that guarantees non-empty content.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. The input is trimmed of leading and trailing whitespace
/// during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed before validation. Returns
    /// `Err(TextError::Empty)` if the trimmed result is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A wall-clock time of day with minute precision.
///
/// Parsed from `"HH:MM"` (24-hour clock). Seconds are implicitly zero,
/// which is what the reminder builder relies on when it stamps events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a `TimeOfDay` from an hour and minute.
    ///
    /// Returns `Err(TimeError::Invalid)` if the hour is not in `0..=23`
    /// or the minute is not in `0..=59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::Invalid(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (hour, minute) = trimmed
            .split_once(':')
            .ok_or_else(|| TimeError::Invalid(trimmed.to_owned()))?;
        let hour: u8 = hour
            .parse()
            .map_err(|_| TimeError::Invalid(trimmed.to_owned()))?;
        let minute: u8 = minute
            .parse()
            .map_err(|_| TimeError::Invalid(trimmed.to_owned()))?;
        Self::new(hour, minute).map_err(|_| TimeError::Invalid(trimmed.to_owned()))
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A prescription image read fully into memory.
///
/// The bytes are kept alongside their sniffed media type so the image
/// can round-trip through the session relay as a self-describing
/// `data:<mime>;base64,<payload>` string and later be re-attached to a
/// multipart request without touching the original file again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    media_type: String,
    bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }

    /// The detected media type, e.g. `image/png`.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// The raw image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encodes the image as a self-describing data URL.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }

    /// Decodes an image from a data URL produced by [`to_data_url`].
    ///
    /// # Errors
    ///
    /// Returns `ImageDataError` if the string is not a base64 data URL
    /// or the payload fails to decode.
    ///
    /// [`to_data_url`]: EncodedImage::to_data_url
    pub fn from_data_url(url: &str) -> Result<Self, ImageDataError> {
        let rest = url.strip_prefix("data:").ok_or(ImageDataError::Malformed)?;
        let (media_type, payload) = rest
            .split_once(";base64,")
            .ok_or(ImageDataError::Malformed)?;
        if media_type.is_empty() {
            return Err(ImageDataError::Malformed);
        }
        let bytes = general_purpose::STANDARD.decode(payload)?;
        Ok(Self {
            media_type: media_type.to_owned(),
            bytes,
        })
    }
}

/// The single staged prescription input carried across the page boundary.
///
/// Exactly one variant is ever staged: intake rejects ambiguous input
/// before anything reaches the session relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedInput {
    /// A typed prescription or medicine name
    Text(NonEmptyText),
    /// An uploaded prescription image, fully read into memory
    Image(EncodedImage),
}

/// The structured explanation returned by the remote service.
///
/// Every field is defaulted on deserialisation: the service back-fills
/// missing keys on its side, and the boundary here tolerates the same
/// gaps rather than failing the whole page. `raw` carries the service's
/// unstructured fallback text when it could not produce proper fields.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Explanation {
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub side_effects: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub disclaimer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_non_empty_text_trims_input() {
        let text = NonEmptyText::new("  paracetamol  ").unwrap();
        assert_eq!(text.as_str(), "paracetamol");
    }

    #[test]
    fn test_non_empty_text_rejects_whitespace() {
        assert!(matches!(NonEmptyText::new("   "), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
    }

    #[test]
    fn test_time_of_day_parses_valid_input() {
        let time = TimeOfDay::from_str("14:30").unwrap();
        assert_eq!(time.hour(), 14);
        assert_eq!(time.minute(), 30);
        assert_eq!(time.to_string(), "14:30");
    }

    #[test]
    fn test_time_of_day_rejects_out_of_range() {
        assert!(TimeOfDay::from_str("24:00").is_err());
        assert!(TimeOfDay::from_str("12:60").is_err());
        assert!(TimeOfDay::new(24, 0).is_err());
    }

    #[test]
    fn test_time_of_day_rejects_malformed_input() {
        assert!(TimeOfDay::from_str("noon").is_err());
        assert!(TimeOfDay::from_str("14.30").is_err());
        assert!(TimeOfDay::from_str("").is_err());
    }

    #[test]
    fn test_encoded_image_data_url_is_self_describing() {
        let image = EncodedImage::new("image/png", vec![0x89, 0x50, 0x4E, 0x47]);
        let url = image.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));

        let decoded = EncodedImage::from_data_url(&url).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_encoded_image_rejects_malformed_data_url() {
        assert!(matches!(
            EncodedImage::from_data_url("not a data url"),
            Err(ImageDataError::Malformed)
        ));
        assert!(matches!(
            EncodedImage::from_data_url("data:;base64,AAAA"),
            Err(ImageDataError::Malformed)
        ));
        assert!(EncodedImage::from_data_url("data:image/png;base64,@@").is_err());
    }

    #[test]
    fn test_explanation_defaults_missing_keys() {
        let explanation: Explanation = serde_json::from_str(r#"{"purpose": "P"}"#).unwrap();
        assert_eq!(explanation.purpose, "P");
        assert_eq!(explanation.usage, "");
        assert!(explanation.side_effects.is_empty());
        assert!(explanation.warnings.is_empty());
        assert_eq!(explanation.disclaimer, "");
        assert!(explanation.raw.is_none());
    }

    #[test]
    fn test_explanation_preserves_list_order() {
        let explanation: Explanation =
            serde_json::from_str(r#"{"side_effects": ["a", "b"], "warnings": ["w"]}"#).unwrap();
        assert_eq!(explanation.side_effects, vec!["a", "b"]);
        assert_eq!(explanation.warnings, vec!["w"]);
    }
}
