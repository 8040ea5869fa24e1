//! Photo positioner state machine.
//!
//! `Empty` --select+load--> `Idle` --begin_drag--> `Dragging` --end_drag--> `Idle`,
//! and `remove_image` returns to `Empty` from anywhere. The focal point is
//! clamped to [0, 100] on every move. The injected fields are written on
//! `end_drag`, `remove_image` and when a newly selected image finishes loading.

use super::drag::DragSession;
use super::pointer::PointerInput;
use crate::config::PositionerConfig;
use crate::error::PhotoError;
use crate::fields::FocalFields;
use crate::model::{
    ContainerSize, DisplayedImage, FileMeta, FocalPoint, ImageOrigin, LoadTicket, PendingImage,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Idle,
    Dragging,
}

/// What the DOM should show for the current state.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoView {
    pub src: Option<String>,
    pub image_visible: bool,
    pub placeholder_visible: bool,
    pub remove_enabled: bool,
    pub object_position: String,
    pub cursor: String,
}

pub struct PhotoPositioner<F: FocalFields> {
    fields: F,
    config: PositionerConfig,
    image: Option<DisplayedImage>,
    pending: Option<PendingImage>,
    focal: FocalPoint,
    drag: Option<DragSession>,
    next_ticket: u64,
}

impl<F: FocalFields> PhotoPositioner<F> {
    /// Seeds the focal point from `fields`. A non-empty `persisted_src`
    /// starts the widget with that image shown.
    pub fn new(fields: F, config: PositionerConfig, persisted_src: Option<String>) -> Self {
        let focal = fields.load();
        let image = persisted_src
            .filter(|s| !s.trim().is_empty())
            .map(|src| DisplayedImage {
                src,
                origin: ImageOrigin::Persisted,
            });
        Self {
            fields,
            config,
            image,
            pending: None,
            focal,
            drag: None,
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        match (&self.image, &self.drag) {
            (None, _) => Phase::Empty,
            (Some(_), None) => Phase::Idle,
            (Some(_), Some(_)) => Phase::Dragging,
        }
    }

    pub fn focal(&self) -> FocalPoint {
        self.focal
    }

    #[cfg(test)]
    pub fn image(&self) -> Option<&DisplayedImage> {
        self.image.as_ref()
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<&PendingImage> {
        self.pending.as_ref()
    }

    /// Validates a picked file. On success the caller reads the bytes and
    /// hands them back through [`finish_load`](Self::finish_load) with the
    /// returned ticket; the current image stays up until then. A rejected
    /// file changes nothing.
    pub fn select_file(&mut self, meta: FileMeta) -> Result<LoadTicket, PhotoError> {
        self.config.validate(&meta)?;
        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        tracing::debug!(name = %meta.name, size = meta.size, "photo selected");
        self.pending = Some(PendingImage { meta, ticket });
        Ok(ticket)
    }

    /// Shows the loaded image and recentres. Returns false for a stale ticket.
    pub fn finish_load(&mut self, ticket: LoadTicket, src: String) -> bool {
        let Some(pending) = self.pending.take_if(|p| p.ticket == ticket) else {
            tracing::debug!(?ticket, "ignoring stale photo load");
            return false;
        };
        tracing::info!(name = %pending.meta.name, "photo loaded");
        self.image = Some(DisplayedImage {
            src,
            origin: ImageOrigin::Selected(pending.meta),
        });
        self.drag = None;
        self.focal = FocalPoint::CENTER;
        self.fields.store(self.focal);
        true
    }

    /// The read for `ticket` failed; the previous image stays as it was.
    pub fn fail_load(&mut self, ticket: LoadTicket, reason: &str) -> Option<PhotoError> {
        let pending = self.pending.take_if(|p| p.ticket == ticket)?;
        tracing::warn!(name = %pending.meta.name, reason, "photo read failed");
        Some(PhotoError::ReadFailed(reason.to_string()))
    }

    pub fn remove_image(&mut self) {
        match self.image.take().map(|i| i.origin) {
            Some(ImageOrigin::Selected(meta)) => {
                tracing::info!(name = %meta.name, "unsaved photo discarded")
            }
            Some(ImageOrigin::Persisted) => tracing::info!("saved photo cleared"),
            None => {}
        }
        self.pending = None;
        self.drag = None;
        self.focal = FocalPoint::CENTER;
        self.fields.store(self.focal);
    }

    /// Starts a drag at `p`. No-op without an image or while a drag is
    /// already running.
    pub fn begin_drag(&mut self, p: PointerInput) -> bool {
        if self.image.is_none() || self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragSession::start(p));
        true
    }

    /// Moves the focal point by the pointer's movement since the previous
    /// event, scaled by the container measured for this event.
    pub fn continue_drag(&mut self, p: PointerInput, container: ContainerSize) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let (dx, dy) = drag.advance(p, container);
        self.focal = self.focal.shifted(dx, dy);
        true
    }

    /// Ends the drag and persists the focal point. `None` when no drag was active.
    pub fn end_drag(&mut self) -> Option<FocalPoint> {
        let drag = self.drag.take()?;
        self.fields.store(self.focal);
        tracing::debug!(source = ?drag.source, x = self.focal.x, y = self.focal.y, "focal point committed");
        Some(self.focal)
    }

    pub fn view(&self) -> PhotoView {
        let cursor = if self.drag.is_some() {
            &self.config.grabbing_cursor
        } else {
            &self.config.grab_cursor
        };
        PhotoView {
            src: self.image.as_ref().map(|i| i.src.clone()),
            image_visible: self.image.is_some(),
            placeholder_visible: self.image.is_none(),
            remove_enabled: self.image.is_some(),
            object_position: self.focal.anchor(),
            cursor: cursor.clone(),
        }
    }
}
