//! Widget configuration.
//!
//! Every field has a default, so the server only needs to emit the keys it
//! wants to change, e.g.
//! `data-photo-config='{"max_file_bytes": 2097152}'`.

use serde::Deserialize;
use web_sys::Element;

use crate::error::{MountError, PhotoError};
use crate::model::FileMeta;

/// Element the widget mounts into.
pub const CONTAINER_ID: &str = "profile-photo-container";
pub const CONFIG_ATTR: &str = "data-photo-config";
pub const SRC_ATTR: &str = "data-photo-src";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PositionerConfig {
    /// Largest accepted upload, inclusive.
    pub max_file_bytes: u64,
    /// MIME types the picker accepts, compared case-insensitively.
    pub accepted_types: Vec<String>,
    /// `name` of the file input, so the form submits the picked file.
    pub file_field: String,
    pub center_x_field: String,
    pub center_y_field: String,
    pub grab_cursor: String,
    pub grabbing_cursor: String,
}

impl Default for PositionerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 5 * 1024 * 1024,
            accepted_types: vec!["image/jpeg".into(), "image/jpg".into(), "image/png".into()],
            file_field: "profile_photo".into(),
            center_x_field: "photo_center_x".into(),
            center_y_field: "photo_center_y".into(),
            grab_cursor: "grab".into(),
            grabbing_cursor: "grabbing".into(),
        }
    }
}

impl PositionerConfig {
    pub fn from_json(raw: &str) -> Result<Self, MountError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads `data-photo-config` from the mount element; absent means defaults.
    pub fn from_element(el: &Element) -> Result<Self, MountError> {
        match el.get_attribute(CONFIG_ATTR) {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept_attr(&self) -> String {
        self.accepted_types.join(",")
    }

    /// Type first, then size.
    pub fn validate(&self, meta: &FileMeta) -> Result<(), PhotoError> {
        let mime = meta.mime.trim();
        if !self.accepted_types.iter().any(|t| t.eq_ignore_ascii_case(mime)) {
            return Err(PhotoError::InvalidFileType {
                mime: meta.mime.clone(),
            });
        }
        if meta.size > self.max_file_bytes {
            return Err(PhotoError::FileTooLarge {
                size: meta.size,
                limit: self.max_file_bytes,
            });
        }
        Ok(())
    }
}
