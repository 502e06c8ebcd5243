use crate::error;
use crate::lang::{unquote, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## 24-bit screen color

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse `RRGGBB` with an optional leading `#` and optional quotes.
    pub fn parse(s: &str) -> Result<Color> {
        let hex = Color::strip(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(error!(MalformedLiteral; "color must be 6 hex digits: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| error!(MalformedLiteral; "color must be 6 hex digits: {}", s))
        };
        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Parse a 2 hex digit per-channel tolerance.
    pub fn parse_threshold(s: &str) -> Result<u8> {
        let hex = Color::strip(s);
        if hex.len() != 2 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(error!(MalformedLiteral; "threshold must be 2 hex digits: {}", s));
        }
        u8::from_str_radix(&hex, 16)
            .map_err(|_| error!(MalformedLiteral; "threshold must be 2 hex digits: {}", s))
    }

    fn strip(s: &str) -> String {
        let s = unquote(s).unwrap_or_else(|| s.to_string());
        s.trim().trim_start_matches('#').to_string()
    }

    /// True when no channel differs by more than `threshold`.
    pub fn matches(&self, other: &Color, threshold: u8) -> bool {
        let within = |a: u8, b: u8| (a as i16 - b as i16).abs() <= threshold as i16;
        within(self.r, other.r) && within(self.g, other.g) && within(self.b, other.b)
    }

    pub fn to_rgb_string(&self) -> String {
        format!("RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
