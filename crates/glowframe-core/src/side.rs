use std::fmt;

/// The edge of the host window an overlay is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All four sides, in the order a decorator creates its overlays.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Returns `true` for Top and Bottom, whose strips run horizontally.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_sides_are_top_and_bottom() {
        // Act / Assert
        assert!(Side::Top.is_horizontal());
        assert!(Side::Bottom.is_horizontal());
        assert!(!Side::Left.is_horizontal());
        assert!(!Side::Right.is_horizontal());
    }
}
