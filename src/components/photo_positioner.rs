use std::rc::Rc;

use gloo::file::callbacks::FileReader;
use wasm_bindgen::JsValue;
use web_sys::{EventTarget, HtmlElement, HtmlImageElement, HtmlInputElement};
use yew::prelude::*;

use crate::config::PositionerConfig;
use crate::error::PhotoError;
use crate::fields::InputFields;
use crate::listeners::ScopedListener;
use crate::model::{ContainerSize, FileMeta};
use crate::state::{PhotoPositioner, PhotoView, PointerInput, PointerSource};

type Positioner = PhotoPositioner<InputFields>;
type PositionerRef = Rc<std::cell::RefCell<Positioner>>;

#[derive(Properties, PartialEq, Clone)]
pub struct PhotoPositionerProps {
    pub fields: InputFields,
    pub config: Rc<PositionerConfig>,
    /// URL of a photo saved earlier, shown until replaced or removed.
    #[prop_or_default]
    pub persisted_src: Option<String>,
    /// Receives rejected selections and failed reads. Unset means a
    /// browser alert.
    #[prop_or_default]
    pub on_error: Option<Callback<PhotoError>>,
}

/// Elements the positioner restyles directly. Drags update inline styles
/// without going through a yew re-render.
struct PreviewElements {
    preview: HtmlElement,
    image: HtmlImageElement,
    placeholder: Option<HtmlElement>,
    remove: Option<HtmlElement>,
}

fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

impl PreviewElements {
    fn apply(&self, v: &PhotoView) {
        match &v.src {
            // `src()` is resolved to an absolute URL; the attribute is what we set
            Some(src) if self.image.get_attribute("src").as_deref() != Some(src.as_str()) => {
                self.image.set_src(src)
            }
            Some(_) => {}
            None => {
                let _ = self.image.remove_attribute("src");
            }
        }
        set_style(&self.image, "display", if v.image_visible { "block" } else { "none" });
        set_style(&self.image, "cursor", &v.cursor);
        self.apply_anchor(&v.object_position);
        if let Some(el) = &self.placeholder {
            set_style(el, "display", if v.placeholder_visible { "flex" } else { "none" });
        }
        if let Some(el) = &self.remove {
            set_style(el, "display", if v.remove_enabled { "block" } else { "none" });
        }
    }

    fn apply_anchor(&self, object_position: &str) {
        set_style(&self.image, "object-position", object_position);
    }

    fn container(&self) -> ContainerSize {
        ContainerSize::new(
            self.preview.offset_width() as f64,
            self.preview.offset_height() as f64,
        )
    }
}

fn report(err: PhotoError, on_error: &Option<Callback<PhotoError>>) {
    match &err {
        PhotoError::InvalidFileType { mime } => tracing::warn!(%mime, "photo rejected: file type"),
        PhotoError::FileTooLarge { size, limit } => {
            tracing::warn!(size, limit, "photo rejected: too large")
        }
        PhotoError::ReadFailed(reason) => tracing::warn!(%reason, "photo read failed"),
    }
    match on_error {
        Some(cb) => cb.emit(err),
        None => {
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(&err.to_string());
            }
        }
    }
}

/// Wires press on the image and move/release on the document. The returned
/// guards detach everything when dropped.
fn attach(
    positioner: &PositionerRef,
    elements: &Rc<PreviewElements>,
    render: &Rc<dyn Fn()>,
) -> Result<Vec<ScopedListener>, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let image: &EventTarget = elements.image.as_ref();
    let doc: &EventTarget = document.as_ref();

    let press = |source: PointerSource| {
        let positioner = positioner.clone();
        let render = render.clone();
        move |e: Event| {
            let Some(p) = PointerInput::read(&e, source) else {
                return;
            };
            let started = positioner.borrow_mut().begin_drag(p);
            if started {
                e.prevent_default();
                render();
            }
        }
    };
    let drag = |source: PointerSource| {
        let positioner = positioner.clone();
        let elements = elements.clone();
        move |e: Event| {
            let Some(p) = PointerInput::read(&e, source) else {
                return;
            };
            let mut pos = positioner.borrow_mut();
            if pos.continue_drag(p, elements.container()) {
                e.prevent_default();
                elements.apply_anchor(&pos.focal().anchor());
            }
        }
    };
    let release = || {
        let positioner = positioner.clone();
        let render = render.clone();
        move |_: Event| {
            let ended = positioner.borrow_mut().end_drag().is_some();
            if ended {
                render();
            }
        }
    };

    Ok(vec![
        ScopedListener::new(image, "mousedown", press(PointerSource::Mouse))?,
        ScopedListener::new(image, "touchstart", press(PointerSource::Touch))?,
        ScopedListener::new(doc, "mousemove", drag(PointerSource::Mouse))?,
        ScopedListener::new(doc, "touchmove", drag(PointerSource::Touch))?,
        ScopedListener::new(doc, "mouseup", release())?,
        ScopedListener::new(doc, "touchend", release())?,
        ScopedListener::new(doc, "touchcancel", release())?,
    ])
}

#[function_component(PhotoPositionerView)]
pub fn photo_positioner_view(props: &PhotoPositionerProps) -> Html {
    let preview_ref = use_node_ref();
    let image_ref = use_node_ref();
    let placeholder_ref = use_node_ref();
    let remove_ref = use_node_ref();
    let file_input_ref = use_node_ref();
    let positioner = {
        let props = props.clone();
        use_mut_ref(move || {
            PhotoPositioner::new(props.fields, (*props.config).clone(), props.persisted_src)
        })
    };
    // dropping a pending reader aborts its read
    let file_reader = use_mut_ref(|| None::<FileReader>);
    let render_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    // Mount: first paint from state, then per-instance listeners
    {
        let positioner = positioner.clone();
        let render_ref = render_ref.clone();
        let preview_ref = preview_ref.clone();
        let image_ref = image_ref.clone();
        let placeholder_ref = placeholder_ref.clone();
        let remove_ref = remove_ref.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            if let (Some(preview), Some(image)) = (
                preview_ref.cast::<HtmlElement>(),
                image_ref.cast::<HtmlImageElement>(),
            ) {
                let elements = Rc::new(PreviewElements {
                    preview,
                    image,
                    placeholder: placeholder_ref.cast::<HtmlElement>(),
                    remove: remove_ref.cast::<HtmlElement>(),
                });
                let render: Rc<dyn Fn()> = {
                    let elements = elements.clone();
                    let positioner = positioner.clone();
                    Rc::new(move || {
                        let pos = positioner.borrow();
                        tracing::trace!(phase = ?pos.phase(), "render");
                        elements.apply(&pos.view());
                    })
                };
                render();
                *render_ref.borrow_mut() = Some(render.clone());
                match attach(&positioner, &elements, &render) {
                    Ok(l) => listeners = l,
                    Err(e) => tracing::error!(?e, "could not attach drag listeners"),
                }
            }
            move || {
                *render_ref.borrow_mut() = None;
                drop(listeners);
            }
        });
    }

    let on_file_change = {
        let positioner = positioner.clone();
        let file_reader = file_reader.clone();
        let render_ref = render_ref.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let meta = FileMeta::new(file.name(), file.type_(), file.size() as u64);
            let ticket = match positioner.borrow_mut().select_file(meta) {
                Ok(t) => t,
                Err(err) => {
                    report(err, &on_error);
                    input.set_value("");
                    return;
                }
            };
            let positioner = positioner.clone();
            let render_ref = render_ref.clone();
            let on_error = on_error.clone();
            let file = gloo::file::File::from(file);
            let reader = gloo::file::callbacks::read_as_data_url(&file, move |result| {
                let failure = match result {
                    Ok(url) => {
                        positioner.borrow_mut().finish_load(ticket, url);
                        None
                    }
                    Err(err) => positioner.borrow_mut().fail_load(ticket, &err.to_string()),
                };
                if let Some(err) = failure {
                    report(err, &on_error);
                    input.set_value("");
                }
                if let Some(render) = &*render_ref.borrow() {
                    render();
                }
            });
            *file_reader.borrow_mut() = Some(reader);
        })
    };

    let on_remove = {
        let positioner = positioner.clone();
        let file_reader = file_reader.clone();
        let render_ref = render_ref.clone();
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            positioner.borrow_mut().remove_image();
            file_reader.borrow_mut().take();
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            if let Some(render) = &*render_ref.borrow() {
                render();
            }
        })
    };

    html! {<div class="profile-photo">
        <div class="photo-preview" ref={preview_ref}>
            <img class="photo-preview__image" ref={image_ref} alt="Profile photo" draggable="false" />
            <div class="photo-preview__placeholder" ref={placeholder_ref}>{"No photo yet"}</div>
            <button type="button" class="photo-preview__remove" ref={remove_ref} onclick={on_remove}>{"Remove"}</button>
        </div>
        <input
            type="file"
            ref={file_input_ref}
            name={props.config.file_field.clone()}
            accept={props.config.accept_attr()}
            onchange={on_file_change}
        />
    </div>}
}
