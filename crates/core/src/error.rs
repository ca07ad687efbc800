#[derive(Debug, thiserror::Error)]
pub enum PrescriptionError {
    #[error("missing prescription")]
    MissingPrescription,
    #[error("ambiguous input")]
    AmbiguousInput,
    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),
    #[error("failed to read prescription image: {0}")]
    ImageRead(std::io::Error),
    #[error("incomplete reminder fields")]
    IncompleteReminderFields,
    #[error("invalid reminder time: {0}")]
    InvalidTime(#[from] meds_types::TimeError),
    #[error("invalid prescription text: {0}")]
    InvalidText(#[from] meds_types::TextError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type PrescriptionResult<T> = std::result::Result<T, PrescriptionError>;
