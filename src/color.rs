use std::fmt::{Display, Formatter};
use std::str::FromStr;
use ggez::graphics::Color;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Parses `#rrggbb` or `rrggbb`, case-insensitive.
    pub fn from_hex(input: &str) -> Result<Rgb, ColorParseError> {
        let digits = input.trim().strip_prefix('#').unwrap_or(input.trim());
        if digits.chars().count() != 6 {
            return Err(ColorParseError::Length(input.to_string()));
        }
        // from_str_radix would accept a leading '+'
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(input.to_string()));
        }
        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .map_err(|_| ColorParseError::Digit(input.to_string()))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend, `factor` is not clamped so values outside [0, 1]
    /// extrapolate. Channels saturate at 0 and 255.
    pub fn lerp(self, other: Rgb, factor: f64) -> Rgb {
        let blend = |start: u8, end: u8| {
            let start = start as f64;
            let value = (start + (end as f64 - start) * factor).round();
            value.clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            blend(self.r, other.r),
            blend(self.g, other.g),
            blend(self.b, other.b),
        )
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Color {
        Color::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Blends two hex colors and formats the result as `rgb(r, g, b)`.
///
/// When either input is not a 6-digit hex color, `color_a` is returned as is.
pub fn interpolate(color_a: &str, color_b: &str, factor: f64) -> String {
    match (Rgb::from_hex(color_a), Rgb::from_hex(color_b)) {
        (Ok(a), Ok(b)) => a.lerp(b, factor).to_string(),
        _ => {
            log::warn!("cannot interpolate {:?} and {:?}, keeping the first", color_a, color_b);
            color_a.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#ff8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("FF8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!("#0a0B0c".parse::<Rgb>(), Ok(Rgb::new(10, 11, 12)));
    }

    #[test]
    fn rejects_non_hex() {
        assert!(matches!(Rgb::from_hex("red"), Err(ColorParseError::Length(_))));
        assert!(matches!(Rgb::from_hex("#fff"), Err(ColorParseError::Length(_))));
        assert!(matches!(Rgb::from_hex("#gg0000"), Err(ColorParseError::Digit(_))));
        assert!(matches!(Rgb::from_hex("#+f0000"), Err(ColorParseError::Digit(_))));
        assert!(matches!(Rgb::from_hex("#ééé000"), Err(ColorParseError::Digit(_))));
    }

    #[test]
    fn formats_as_rgb_and_hex() {
        let color = Rgb::new(1, 22, 255);
        assert_eq!(color.to_string(), "rgb(1, 22, 255)");
        assert_eq!(color.to_hex(), "#0116ff");
    }

    #[test]
    fn interpolates_endpoints_exactly() {
        assert_eq!(interpolate("#102030", "#f0e0d0", 0.0), "rgb(16, 32, 48)");
        assert_eq!(interpolate("#102030", "#f0e0d0", 1.0), "rgb(240, 224, 208)");
    }

    #[test]
    fn interpolates_midpoint_with_rounding() {
        // 0 + 255 * 0.5 = 127.5
        assert_eq!(interpolate("#000000", "#ffffff", 0.5), "rgb(128, 128, 128)");
        assert_eq!(interpolate("#000000", "#0a0000", 0.25), "rgb(3, 0, 0)");
    }

    #[test]
    fn same_color_is_fixed_point() {
        for step in 0..=10 {
            let factor = step as f64 / 10.0;
            assert_eq!(interpolate("#7c3aed", "#7c3aed", factor), "rgb(124, 58, 237)");
        }
    }

    #[test]
    fn malformed_input_returns_first_color() {
        assert_eq!(interpolate("red", "#ffffff", 0.5), "red");
        assert_eq!(interpolate("#000000", "blue", 0.5), "#000000");
        assert_eq!(interpolate("", "", 1.0), "");
    }

    #[test]
    fn factor_outside_range_extrapolates_and_saturates() {
        let a = Rgb::new(100, 100, 100);
        let b = Rgb::new(200, 150, 100);
        assert_eq!(a.lerp(b, 1.5), Rgb::new(250, 175, 100));
        assert_eq!(a.lerp(b, 2.0), Rgb::new(255, 200, 100));
        assert_eq!(a.lerp(b, -2.0), Rgb::new(0, 0, 100));
    }

    #[test]
    fn channels_are_monotonic_in_factor() {
        let a = Rgb::new(3, 250, 40);
        let b = Rgb::new(251, 7, 40);
        let mut previous = a;
        for step in 1..=100 {
            let current = a.lerp(b, step as f64 / 100.0);
            assert!(current.r >= previous.r);
            assert!(current.g <= previous.g);
            assert_eq!(current.b, 40);
            previous = current;
        }
        assert_eq!(previous, b);
    }

    #[test]
    fn converts_to_drawing_color() {
        let color: Color = Rgb::new(255, 0, 0).into();
        assert_eq!(color, Color::from_rgb(255, 0, 0));
    }
}
