// Unified pointer input, built once where DOM events enter the widget
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A pointer position in viewport (client) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub x: f64,
    pub y: f64,
    pub source: PointerSource,
}

impl PointerInput {
    pub fn new(x: f64, y: f64, source: PointerSource) -> Self {
        Self { x, y, source }
    }

    pub fn mouse(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerSource::Mouse)
    }

    pub fn touch(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerSource::Touch)
    }

    pub fn from_mouse(e: &MouseEvent) -> Self {
        Self::mouse(e.client_x() as f64, e.client_y() as f64)
    }

    /// First active touch; `None` once every finger has lifted.
    pub fn from_touch(e: &TouchEvent) -> Option<Self> {
        let t0 = e.touches().item(0)?;
        Some(Self::touch(t0.client_x() as f64, t0.client_y() as f64))
    }

    /// Reads an event registered for a known source (`mousedown` is mouse,
    /// `touchstart` is touch, ...), so nothing downstream inspects the event type.
    pub fn read(e: &Event, source: PointerSource) -> Option<Self> {
        match source {
            PointerSource::Mouse => e.dyn_ref::<MouseEvent>().map(Self::from_mouse),
            PointerSource::Touch => Self::from_touch(e.unchecked_ref::<TouchEvent>()),
        }
    }
}
