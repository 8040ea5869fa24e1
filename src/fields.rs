//! The two hidden inputs the surrounding form submits.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::error::MountError;
use crate::model::{Axis, FocalPoint};
use crate::util::{PERCENT_CENTER, format_percent, parse_percent};

/// Storage for the persisted focal point, injected into the positioner.
pub trait FocalFields {
    fn read(&self, axis: Axis) -> Option<String>;
    fn write(&self, axis: Axis, value: &str);

    /// Seed value: each axis parsed on its own, falling back to the centre.
    fn load(&self) -> FocalPoint {
        let axis = |a| {
            self.read(a)
                .as_deref()
                .and_then(parse_percent)
                .unwrap_or(PERCENT_CENTER)
        };
        FocalPoint::new(axis(Axis::X), axis(Axis::Y))
    }

    fn store(&self, p: FocalPoint) {
        self.write(Axis::X, &format_percent(p.x));
        self.write(Axis::Y, &format_percent(p.y));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputFields {
    x: HtmlInputElement,
    y: HtmlInputElement,
}

impl InputFields {
    pub fn new(x: HtmlInputElement, y: HtmlInputElement) -> Self {
        Self { x, y }
    }

    pub fn from_document(doc: &Document, x_id: &str, y_id: &str) -> Result<Self, MountError> {
        Ok(Self::new(find_input(doc, x_id)?, find_input(doc, y_id)?))
    }

    fn input(&self, axis: Axis) -> &HtmlInputElement {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

fn find_input(doc: &Document, id: &str) -> Result<HtmlInputElement, MountError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| MountError::NotAnInput(id.to_string()))
}

impl FocalFields for InputFields {
    fn read(&self, axis: Axis) -> Option<String> {
        Some(self.input(axis).value())
    }

    fn write(&self, axis: Axis, value: &str) {
        self.input(axis).set_value(value);
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryFields;
    use super::*;

    #[test]
    fn load_uses_saved_values() {
        let f = MemoryFields::with("12.50", "80.00");
        assert_eq!(f.load(), FocalPoint::new(12.5, 80.0));
    }

    #[test]
    fn load_falls_back_per_axis() {
        let f = MemoryFields::with("", "33.3");
        assert_eq!(f.load(), FocalPoint::new(50.0, 33.3));
        assert_eq!(MemoryFields::default().load(), FocalPoint::CENTER);
    }

    #[test]
    fn store_writes_two_decimals() {
        let f = MemoryFields::default();
        f.store(FocalPoint::new(55.0, 12.3456));
        assert_eq!(f.pair(), (Some("55.00".into()), Some("12.35".into())));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_input(doc: &Document, id: &str, value: &str) -> HtmlInputElement {
        let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
        input.set_id(id);
        input.set_type("hidden");
        input.set_value(value);
        doc.body().unwrap().append_child(&input).unwrap();
        input
    }

    #[wasm_bindgen_test]
    fn input_fields_round_trip_through_the_dom() {
        let doc = web_sys::window().unwrap().document().unwrap();
        let x = make_input(&doc, "t_center_x", "20.00");
        let y = make_input(&doc, "t_center_y", "70.25");
        let fields = InputFields::from_document(&doc, "t_center_x", "t_center_y").unwrap();
        assert_eq!(fields.load(), FocalPoint::new(20.0, 70.25));
        fields.store(FocalPoint::CENTER);
        assert_eq!(x.value(), "50.00");
        assert_eq!(y.value(), "50.00");
        x.remove();
        y.remove();
    }

    #[wasm_bindgen_test]
    fn lookup_reports_missing_and_wrong_elements() {
        let doc = web_sys::window().unwrap().document().unwrap();
        let err = InputFields::from_document(&doc, "nope_x", "nope_y").unwrap_err();
        assert!(matches!(err, MountError::MissingElement(id) if id == "nope_x"));

        let div = doc.create_element("div").unwrap();
        div.set_id("t_not_input");
        doc.body().unwrap().append_child(&div).unwrap();
        let x = make_input(&doc, "t_ok_x", "1");
        let err = InputFields::from_document(&doc, "t_ok_x", "t_not_input").unwrap_err();
        assert!(matches!(err, MountError::NotAnInput(_)));
        div.remove();
        x.remove();
    }
}
