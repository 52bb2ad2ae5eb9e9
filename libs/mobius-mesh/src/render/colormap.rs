//! Perceptually uniform colormap for surface shading.

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form used in SVG attributes.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Wire edge color.
    pub const WIRE: Color = Color::rgb(0, 0, 0);
    /// Plot background.
    pub const BACKGROUND: Color = Color::rgb(255, 255, 255);
}

// Viridis sampled at nine evenly spaced stops
const VIRIDIS: [Color; 9] = [
    Color::rgb(68, 1, 84),
    Color::rgb(71, 45, 123),
    Color::rgb(59, 82, 139),
    Color::rgb(44, 114, 142),
    Color::rgb(33, 145, 140),
    Color::rgb(40, 174, 128),
    Color::rgb(94, 201, 98),
    Color::rgb(173, 220, 48),
    Color::rgb(253, 231, 37),
];

/// Maps `t` in `[0, 1]` onto the viridis colormap.
///
/// Values outside the range are clamped; NaN maps to the low end.
///
/// # Examples
/// ```
/// use mobius_mesh::render::colormap::{viridis, Color};
///
/// assert_eq!(viridis(0.0), Color::rgb(68, 1, 84));
/// assert_eq!(viridis(1.0), Color::rgb(253, 231, 37));
/// ```
pub fn viridis(t: f64) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lo = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - lo as f64;
    let (a, b) = (VIRIDIS[lo], VIRIDIS[lo + 1]);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    Color::rgb(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}
