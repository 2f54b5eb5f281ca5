use crate::THICKNESS;

/// Per-ring alpha values, from the ring touching the host outwards.
///
/// The last ring is fully transparent so the glow fades to nothing.
pub const ALPHA_RAMP: [u8; THICKNESS as usize] = [64, 46, 25, 19, 10, 7, 2, 1, 0];

/// RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);
    pub const LIGHT_GRAY: Color = Color::rgb(0xD3, 0xD3, 0xD3);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#00b4d8" or "00b4d8".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Packs the color with an alpha into a straight `0xAARRGGBB` pixel.
    pub fn argb(self, alpha: u8) -> u32 {
        (u32::from(alpha) << 24)
            | (u32::from(self.r) << 16)
            | (u32::from(self.g) << 8)
            | u32::from(self.b)
    }
}

/// The active and inactive color ramps of one overlay.
///
/// Both ramps hold one entry per ring. Every entry currently repeats
/// the base color, but rings stay individually addressable so the
/// gradient can treat each one separately.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamps {
    active_color: Color,
    inactive_color: Color,
    active: Vec<Color>,
    inactive: Vec<Color>,
}

impl ColorRamps {
    pub fn new(active_color: Color, inactive_color: Color) -> Self {
        let mut ramps = Self {
            active_color,
            inactive_color,
            active: Vec::with_capacity(THICKNESS as usize),
            inactive: Vec::with_capacity(THICKNESS as usize),
        };
        ramps.rebuild();
        ramps
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn inactive_color(&self) -> Color {
        self.inactive_color
    }

    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
        self.rebuild();
    }

    pub fn set_inactive_color(&mut self, color: Color) {
        self.inactive_color = color;
        self.rebuild();
    }

    /// Returns the ramp used while the host is focused (`true`) or not.
    pub fn select(&self, parent_focused: bool) -> &[Color] {
        if parent_focused {
            &self.active
        } else {
            &self.inactive
        }
    }

    fn rebuild(&mut self) {
        self.active.clear();
        self.inactive.clear();
        for _ in 0..THICKNESS {
            self.active.push(self.active_color);
            self.inactive.push(self.inactive_color);
        }
    }
}

impl Default for ColorRamps {
    fn default() -> Self {
        Self::new(Color::YELLOW, Color::LIGHT_GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color() {
        // Assert
        assert_eq!(
            Color::from_hex("#00b4d8"),
            Some(Color {
                r: 0x00,
                g: 0xB4,
                b: 0xD8
            })
        );
        assert_eq!(Color::from_hex("2d6a4f"), Some(Color::rgb(0x2D, 0x6A, 0x4F)));
        assert_eq!(Color::from_hex("bad"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("+fffff"), None);
    }

    #[test]
    fn hex_round_trips() {
        // Arrange
        let color = Color::rgb(0x12, 0xAB, 0xEF);

        // Act / Assert
        assert_eq!(color.to_hex(), "#12abef");
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn argb_packs_alpha_in_high_byte() {
        // Act / Assert
        assert_eq!(Color::rgb(0x11, 0x22, 0x33).argb(0x40), 0x4011_2233);
    }

    #[test]
    fn ramps_have_one_entry_per_ring() {
        // Act
        let ramps = ColorRamps::default();

        // Assert
        assert_eq!(ramps.select(true).len(), ALPHA_RAMP.len());
        assert_eq!(ramps.select(false).len(), ALPHA_RAMP.len());
    }

    #[test]
    fn recolor_rebuilds_only_that_ramp() {
        // Arrange
        let mut ramps = ColorRamps::default();
        let red = Color::rgb(0xFF, 0, 0);

        // Act
        ramps.set_inactive_color(red);

        // Assert
        assert!(ramps.select(false).iter().all(|c| *c == red));
        assert!(ramps.select(true).iter().all(|c| *c == Color::YELLOW));
        assert_eq!(ramps.inactive_color(), red);
    }

    #[test]
    fn alpha_ramp_fades_to_transparent() {
        // Assert
        assert_eq!(ALPHA_RAMP, [64, 46, 25, 19, 10, 7, 2, 1, 0]);
    }
}
