//! Corner-aware classification of points on a glow strip.

use crate::{Point, Side};

/// Distance from either end of a strip, in pixels, that counts as a corner.
pub const CORNER_AREA: i32 = 20;

/// The resize direction a point on a strip maps to.
///
/// Discriminants match the Win32 `HT*` hit-test codes so a host can
/// forward them straight to `WM_NCLBUTTONDOWN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum HitRegion {
    /// Never produced by [`HitRegion::classify`]; kept for hosts that
    /// switch over every hit-test code.
    #[default]
    None = 0,
    Left = 10,
    Right = 11,
    Top = 12,
    TopLeft = 13,
    TopRight = 14,
    Bottom = 15,
    BottomLeft = 16,
    BottomRight = 17,
}

impl HitRegion {
    /// Classifies a point given in the strip's client coordinates.
    ///
    /// Only the coordinate running along the strip matters: the first and
    /// last [`CORNER_AREA`] pixels resolve to the diagonal, everything in
    /// between to the strip's own edge. Comparisons are strict, so a point
    /// exactly `CORNER_AREA` in from either end is on the edge.
    pub fn classify(side: Side, point: Point, width: i32, height: i32) -> Self {
        match side {
            Side::Top => along(point.x, width, Self::TopLeft, Self::TopRight, Self::Top),
            Side::Bottom => along(
                point.x,
                width,
                Self::BottomLeft,
                Self::BottomRight,
                Self::Bottom,
            ),
            Side::Left => along(point.y, height, Self::TopLeft, Self::BottomLeft, Self::Left),
            Side::Right => along(
                point.y,
                height,
                Self::TopRight,
                Self::BottomRight,
                Self::Right,
            ),
        }
    }

    /// The Win32 `HT*` code for this region.
    pub fn ht_code(self) -> u32 {
        self as u32
    }

    /// The cursor to show while hovering this region.
    pub fn cursor(self) -> CursorShape {
        match self {
            Self::Top | Self::Bottom => CursorShape::SizeNS,
            Self::Left | Self::Right => CursorShape::SizeWE,
            Self::TopLeft | Self::BottomRight => CursorShape::SizeNWSE,
            Self::TopRight | Self::BottomLeft => CursorShape::SizeNESW,
            Self::None => CursorShape::Hand,
        }
    }
}

fn along(pos: i32, extent: i32, start: HitRegion, end: HitRegion, edge: HitRegion) -> HitRegion {
    if pos < CORNER_AREA {
        start
    } else if pos > extent - CORNER_AREA {
        end
    } else {
        edge
    }
}

/// System cursors a strip can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    /// Neutral pointer for points that map to no resize direction.
    Hand,
    /// Vertical double arrow.
    SizeNS,
    /// Horizontal double arrow.
    SizeWE,
    /// Diagonal double arrow, north-west to south-east.
    SizeNWSE,
    /// Diagonal double arrow, north-east to south-west.
    SizeNESW,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_strip_splits_into_corners_and_edge() {
        // Act / Assert
        assert_eq!(
            HitRegion::classify(Side::Top, Point::new(15, 4), 200, 9),
            HitRegion::TopLeft
        );
        assert_eq!(
            HitRegion::classify(Side::Top, Point::new(25, 4), 200, 9),
            HitRegion::Top
        );
        assert_eq!(
            HitRegion::classify(Side::Top, Point::new(181, 4), 200, 9),
            HitRegion::TopRight
        );
    }

    #[test]
    fn exact_margin_falls_on_the_edge() {
        // Act / Assert
        assert_eq!(
            HitRegion::classify(Side::Bottom, Point::new(20, 0), 200, 9),
            HitRegion::Bottom
        );
        assert_eq!(
            HitRegion::classify(Side::Bottom, Point::new(180, 0), 200, 9),
            HitRegion::Bottom
        );
        assert_eq!(
            HitRegion::classify(Side::Left, Point::new(0, 20), 9, 300),
            HitRegion::Left
        );
        assert_eq!(
            HitRegion::classify(Side::Right, Point::new(0, 280), 9, 300),
            HitRegion::Right
        );
    }

    #[test]
    fn vertical_strips_use_y() {
        // Act / Assert
        assert_eq!(
            HitRegion::classify(Side::Left, Point::new(500, 5), 9, 300),
            HitRegion::TopLeft
        );
        assert_eq!(
            HitRegion::classify(Side::Left, Point::new(0, 299), 9, 300),
            HitRegion::BottomLeft
        );
        assert_eq!(
            HitRegion::classify(Side::Right, Point::new(0, -3), 9, 300),
            HitRegion::TopRight
        );
        assert_eq!(
            HitRegion::classify(Side::Right, Point::new(0, 281), 9, 300),
            HitRegion::BottomRight
        );
    }

    #[test]
    fn classification_never_yields_none() {
        // Arrange
        let (w, h) = (60, 60);

        // Act / Assert
        for side in Side::ALL {
            for pos in -5..=w + 5 {
                let region = HitRegion::classify(side, Point::new(pos, pos), w, h);
                assert_ne!(region, HitRegion::None, "{side} at {pos}");
            }
        }
    }

    #[test]
    fn cursor_follows_resize_axis() {
        // Act / Assert
        assert_eq!(HitRegion::Top.cursor(), CursorShape::SizeNS);
        assert_eq!(HitRegion::Bottom.cursor(), CursorShape::SizeNS);
        assert_eq!(HitRegion::Left.cursor(), CursorShape::SizeWE);
        assert_eq!(HitRegion::Right.cursor(), CursorShape::SizeWE);
        assert_eq!(HitRegion::TopLeft.cursor(), CursorShape::SizeNWSE);
        assert_eq!(HitRegion::BottomRight.cursor(), CursorShape::SizeNWSE);
        assert_eq!(HitRegion::TopRight.cursor(), CursorShape::SizeNESW);
        assert_eq!(HitRegion::BottomLeft.cursor(), CursorShape::SizeNESW);
        assert_eq!(HitRegion::None.cursor(), CursorShape::Hand);
    }

    #[test]
    fn ht_codes_match_win32() {
        // Act / Assert
        assert_eq!(HitRegion::None.ht_code(), 0);
        assert_eq!(HitRegion::Left.ht_code(), 10);
        assert_eq!(HitRegion::BottomRight.ht_code(), 17);
    }
}
