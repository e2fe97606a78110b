//! Scroll arithmetic for the container around the page surface.

/// Padding between the viewport edge and the page surface.
pub const CONTAINER_MARGIN: i32 = 30;
/// Minimum distance kept between the caret and the viewport edges.
pub const CARET_MARGIN_X: i32 = 50;
pub const CARET_MARGIN_Y: i32 = 100;

/// Left edge of a surface of width `surface_w` centered in the viewport,
/// never closer than `margin` to the left side.
pub fn centered_origin(viewport_w: i32, surface_w: i32, margin: i32) -> i32 {
    ((viewport_w - surface_w) / 2).max(margin)
}

/// Smallest change to `offset` that brings `point` at least `margin`
/// away from both viewport edges, within `[0, content - viewport]`.
pub fn reveal_offset(offset: i32, viewport: i32, content: i32, point: i32, margin: i32) -> i32 {
    let margin = margin.min(viewport / 2).max(0);
    let max_offset = (content - viewport).max(0);
    let target = if point - margin < offset {
        point - margin
    } else if point > offset + viewport - margin {
        point - viewport + margin
    } else {
        offset
    };
    target.clamp(0, max_offset)
}

/// Scroll position and extents of the container, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub x: i32,
    pub y: i32,
    pub viewport_w: i32,
    pub viewport_h: i32,
    pub content_w: i32,
    pub content_h: i32,
}

impl ScrollState {
    /// Scroll position that keeps the caret at (`cx`, `cy`) visible.
    pub fn reveal(&self, cx: i32, cy: i32) -> (i32, i32) {
        (
            reveal_offset(self.x, self.viewport_w, self.content_w, cx, CARET_MARGIN_X),
            reveal_offset(self.y, self.viewport_h, self.content_h, cy, CARET_MARGIN_Y),
        )
    }
}
