use thiserror::Error;

use crate::util::format_size;

/// Rejections surfaced to the user when picking a photo. None of them
/// change the widget's state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("Please select a JPG or PNG image")]
    InvalidFileType { mime: String },
    #[error("Image must be less than {}", format_size(.limit))]
    FileTooLarge { size: u64, limit: u64 },
    #[error("Could not read the selected image: {0}")]
    ReadFailed(String),
}

/// Failures wiring the widget into the page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global `window` or `document`")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not an <input>")]
    NotAnInput(String),
    #[error("invalid data-photo-config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PositionerConfig;
    use crate::model::FileMeta;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn messages_match_form_copy() {
        let e = PhotoError::InvalidFileType {
            mime: "image/gif".into(),
        };
        assert_eq!(e.to_string(), "Please select a JPG or PNG image");
        let e = PhotoError::FileTooLarge {
            size: 6 * MIB,
            limit: 5 * MIB,
        };
        assert_eq!(e.to_string(), "Image must be less than 5MB");
    }

    #[test]
    fn size_message_reflects_configured_limit() {
        let cfg = PositionerConfig::from_json(r#"{"max_file_bytes": 1024}"#).unwrap();
        let err = cfg
            .validate(&FileMeta::new("a.png", "image/png", 4096))
            .unwrap_err();
        assert_eq!(err.to_string(), "Image must be less than 1KB");

        let cfg = PositionerConfig::from_json(r#"{"max_file_bytes": 2621440}"#).unwrap();
        let err = cfg
            .validate(&FileMeta::new("a.png", "image/png", 3 * MIB))
            .unwrap_err();
        assert_eq!(err.to_string(), "Image must be less than 2.5MB");
    }
}
