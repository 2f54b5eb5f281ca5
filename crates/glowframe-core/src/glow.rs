//! Platform-independent state of a single glow strip.
//!
//! The Win32 overlay owns one of these and consults it for everything
//! that does not involve a window handle: which ramp to draw with, what
//! a press or hover means, and whether resize affordance is on.

use crate::{
    ALPHA_RAMP, Color, ColorRamps, CursorShape, GlowBitmap, HitRegion, Point, Rect, ResizeIntent,
    Side,
};

#[derive(Debug, Clone)]
pub struct GlowState {
    side: Side,
    ramps: ColorRamps,
    parent_focused: bool,
    topmost: bool,
    resize_enabled: bool,
}

impl GlowState {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            ramps: ColorRamps::default(),
            parent_focused: false,
            topmost: false,
            resize_enabled: false,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn active_color(&self) -> Color {
        self.ramps.active_color()
    }

    pub fn set_active_color(&mut self, color: Color) {
        self.ramps.set_active_color(color);
    }

    pub fn inactive_color(&self) -> Color {
        self.ramps.inactive_color()
    }

    pub fn set_inactive_color(&mut self, color: Color) {
        self.ramps.set_inactive_color(color);
    }

    pub fn is_parent_focused(&self) -> bool {
        self.parent_focused
    }

    pub fn set_parent_focused(&mut self, focused: bool) {
        self.parent_focused = focused;
    }

    pub fn is_topmost(&self) -> bool {
        self.topmost
    }

    pub fn set_topmost(&mut self, topmost: bool) {
        self.topmost = topmost;
    }

    pub fn is_resize_enabled(&self) -> bool {
        self.resize_enabled
    }

    pub fn set_resize_enabled(&mut self, enabled: bool) {
        self.resize_enabled = enabled;
    }

    /// The fixed per-ring alpha values. Unaffected by color changes.
    pub fn alpha_ramp(&self) -> &'static [u8] {
        &ALPHA_RAMP
    }

    /// The color ramp the next render will use.
    pub fn current_ramp(&self) -> &[Color] {
        self.ramps.select(self.parent_focused)
    }

    /// Renders the strip for an overlay window occupying `area`.
    ///
    /// Returns `None` when the window has no area yet.
    pub fn render(&self, area: &Rect) -> Option<GlowBitmap> {
        if area.is_empty() {
            return None;
        }
        Some(GlowBitmap::render(
            self.side,
            area.width,
            area.height,
            self.current_ramp(),
        ))
    }

    /// Cursor for a hover at `point` (strip client coordinates), or
    /// `None` when resize affordance is off and the OS default applies.
    pub fn cursor_at(&self, point: Point, width: i32, height: i32) -> Option<CursorShape> {
        if !self.resize_enabled {
            return None;
        }
        Some(HitRegion::classify(self.side, point, width, height).cursor())
    }

    /// Resize intent for a press at `point`, or `None` when resize
    /// affordance is off.
    pub fn press_at(&self, point: Point, width: i32, height: i32) -> Option<ResizeIntent> {
        if !self.resize_enabled {
            return None;
        }
        Some(ResizeIntent {
            side: self.side,
            region: HitRegion::classify(self.side, point, width, height),
        })
    }
}
