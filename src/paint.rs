use serde::{Deserialize, Serialize};

/// An sRGB color with optional alpha (0.0 - 1.0, omitted when opaque)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    pub fn alpha(&self) -> f64 {
        self.a.unwrap_or(1.0)
    }

    /// Parses `#rgb`, `#rrggbb` and `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                Self::from_hex(&expanded)
            }
            6 => Some(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            8 => {
                let alpha = f64::from(channel(&digits[6..8])?) / 255.0;
                let mut color = Self::from_hex(&digits[0..6])?;
                if alpha < 1.0 {
                    color.a = Some((alpha * 100.0).round() / 100.0);
                }
                Some(color)
            }
            _ => None,
        }
    }

    /// CSS notation: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        let alpha = self.alpha();
        if alpha >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintKind {
    #[default]
    Solid,
    Linear,
    Radial,
    Conic,
}

impl PaintKind {
    fn is_solid(&self) -> bool {
        matches!(self, PaintKind::Solid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: Rgba,
    pub position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintSize {
    pub w: f64,
    pub h: f64,
}

/// A fill description: a solid color or a gradient.
///
/// Solid paints carry no `type` on the wire; gradients do.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paint {
    #[serde(rename = "type", default, skip_serializing_if = "PaintKind::is_solid")]
    pub kind: PaintKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stops: Vec<ColorStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<PaintPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<PaintSize>,
}

impl Paint {
    pub fn solid(color: Rgba) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn linear(stops: Vec<ColorStop>, rotation: f64) -> Self {
        Self {
            kind: PaintKind::Linear,
            stops,
            rotation: Some(rotation),
            ..Self::default()
        }
    }

    pub fn radial(stops: Vec<ColorStop>, size: PaintSize) -> Self {
        Self {
            kind: PaintKind::Radial,
            stops,
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// The solid color, if this is a solid paint
    pub fn solid_color(&self) -> Option<Rgba> {
        match self.kind {
            PaintKind::Solid => self.color,
            _ => None,
        }
    }
}

pub(crate) fn default_background_color() -> Paint {
    Paint::solid(Rgba::WHITE)
}
