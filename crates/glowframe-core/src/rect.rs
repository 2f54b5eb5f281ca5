/// A point in screen or window-client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle representing a window's position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from Win32-style edge coordinates.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns `true` when either dimension is zero or negative.
    ///
    /// A freshly created window has no size until the first layout
    /// pass; [`GlowState::render`](crate::GlowState::render) skips it.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_computes_size() {
        // Act
        let rect = Rect::from_edges(91, 91, 909, 100);

        // Assert
        assert_eq!(rect, Rect::new(91, 91, 818, 9));
        assert_eq!(rect.origin(), Point::new(91, 91));
    }

    #[test]
    fn zero_sized_rect_is_empty() {
        // Act / Assert
        assert!(Rect::new(10, 10, 0, 9).is_empty());
        assert!(Rect::new(10, 10, 9, 0).is_empty());
        assert!(!Rect::new(10, 10, 9, 9).is_empty());
    }
}
