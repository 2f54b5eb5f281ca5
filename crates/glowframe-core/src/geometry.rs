//! Overlay placement derived from the host window's geometry.
//!
//! Each overlay is a strip `THICKNESS` pixels deep. Horizontal strips
//! extend past the host by one thickness on both ends so they cover the
//! corners; vertical strips do the same above and below.

use crate::{Point, Rect, Side};

/// Depth of every glow strip in pixels. Also the number of gradient rings.
pub const THICKNESS: i32 = 9;

/// Returns the overlay's `(width, height)` for a host client area.
pub fn overlay_size(side: Side, client_width: i32, client_height: i32) -> (i32, i32) {
    if side.is_horizontal() {
        (client_width + THICKNESS * 2, THICKNESS)
    } else {
        (THICKNESS, client_height + THICKNESS * 2)
    }
}

/// Returns the overlay's screen-space top-left for a host window rectangle.
pub fn overlay_origin(side: Side, host: &Rect) -> Point {
    match side {
        Side::Top | Side::Left => Point::new(host.x - THICKNESS, host.y - THICKNESS),
        Side::Bottom => Point::new(host.x - THICKNESS, host.y + host.height),
        Side::Right => Point::new(host.x + host.width, host.y - THICKNESS),
    }
}
