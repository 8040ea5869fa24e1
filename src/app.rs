//! Composition root: looks up the page elements once and hands them to the
//! component as props.

use std::rc::Rc;

use crate::components::{PhotoPositionerProps, PhotoPositionerView};
use crate::config::{CONTAINER_ID, PositionerConfig, SRC_ATTR};
use crate::error::MountError;
use crate::fields::InputFields;

/// Mounts the positioner into `#profile-photo-container` if the page has one.
///
/// The hidden focal-point inputs must live outside the container, since the
/// container's children are replaced by the widget.
pub fn mount() -> Result<bool, MountError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)?;
    let Some(root) = document.get_element_by_id(CONTAINER_ID) else {
        tracing::debug!("no #{CONTAINER_ID} on this page");
        return Ok(false);
    };
    let config = PositionerConfig::from_element(&root)?;
    let fields = InputFields::from_document(&document, &config.center_x_field, &config.center_y_field)?;
    let persisted_src = root.get_attribute(SRC_ATTR);
    tracing::info!(has_photo = persisted_src.is_some(), "mounting photo positioner");
    let props = PhotoPositionerProps {
        fields,
        config: Rc::new(config),
        persisted_src,
        on_error: None,
    };
    yew::Renderer::<PhotoPositionerView>::with_root_and_props(root, props).render();
    Ok(true)
}
