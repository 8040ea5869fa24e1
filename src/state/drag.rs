// Drag session: lives from press to release over the image
use super::pointer::{PointerInput, PointerSource};
use crate::model::ContainerSize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub source: PointerSource,
    pub last_x: f64,
    pub last_y: f64,
}

impl DragSession {
    pub fn start(p: PointerInput) -> Self {
        Self {
            source: p.source,
            last_x: p.x,
            last_y: p.y,
        }
    }

    /// Percentage delta since the previous pointer position, then re-anchors
    /// on `p` so each move is measured relative to the last one.
    pub fn advance(&mut self, p: PointerInput, container: ContainerSize) -> (f64, f64) {
        let dx = p.x - self.last_x;
        let dy = p.y - self.last_y;
        self.last_x = p.x;
        self.last_y = p.y;
        container.percent_delta(dx, dy)
    }
}
