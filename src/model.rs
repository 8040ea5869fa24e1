//! Core data types for the photo positioner.
//! A focal point is a percentage anchor into the displayed image, the same
//! value CSS `object-position` takes.

use crate::util::{PERCENT_CENTER, clamp_percent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocalPoint {
    pub x: f64,
    pub y: f64,
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

impl FocalPoint {
    pub const CENTER: FocalPoint = FocalPoint {
        x: PERCENT_CENTER,
        y: PERCENT_CENTER,
    };

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    /// Adds a percentage delta, clamping each axis on its own.
    pub fn shifted(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Value for the image's `object-position` style.
    pub fn anchor(&self) -> String {
        format!("{}% {}%", self.x, self.y)
    }
}

/// Rendered size of the preview box in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Converts a pixel delta into a percentage delta. A collapsed axis
    /// (zero or negative size) contributes nothing.
    pub fn percent_delta(&self, dx_px: f64, dy_px: f64) -> (f64, f64) {
        let scale = |d: f64, size: f64| if size > 0.0 { d / size * 100.0 } else { 0.0 };
        (scale(dx_px, self.width), scale(dy_px, self.height))
    }
}

/// The two attributes of a picked file the widget validates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

/// Identifies one file selection; reads finishing with an older ticket are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(pub(crate) u64);

/// A validated selection whose bytes are still being read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingImage {
    pub meta: FileMeta,
    pub ticket: LoadTicket,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageOrigin {
    /// Saved earlier and supplied by the server at construction.
    Persisted,
    /// Picked in this page session, not yet submitted.
    Selected(FileMeta),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayedImage {
    pub src: String,
    pub origin: ImageOrigin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_each_axis() {
        let p = FocalPoint::new(-5.0, 140.0);
        assert_eq!(p, FocalPoint { x: 0.0, y: 100.0 });
    }

    #[test]
    fn shifted_clamps_instead_of_wrapping() {
        let p = FocalPoint::new(95.0, 50.0).shifted(10.0, 0.0);
        assert_eq!(p.x, 100.0);
        assert_eq!(p.y, 50.0);
        let q = FocalPoint::new(3.0, 2.0).shifted(-250.0, -1.0);
        assert_eq!(q, FocalPoint { x: 0.0, y: 1.0 });
    }

    #[test]
    fn anchor_matches_object_position_syntax() {
        assert_eq!(FocalPoint::CENTER.anchor(), "50% 50%");
        assert_eq!(FocalPoint::new(55.5, 0.0).anchor(), "55.5% 0%");
    }

    #[test]
    fn percent_delta_scales_by_container() {
        let c = ContainerSize::new(200.0, 400.0);
        assert_eq!(c.percent_delta(10.0, -20.0), (5.0, -5.0));
    }

    #[test]
    fn collapsed_container_axis_is_ignored() {
        let c = ContainerSize::new(0.0, 100.0);
        assert_eq!(c.percent_delta(30.0, 10.0), (0.0, 10.0));
    }
}
