//! Pointer-following hover effects.
//!
//! Both effects normalize the pointer to the element's half-size, so the
//! element's edges map to ±1 on each axis.

use serde::{Deserialize, Serialize};

use crate::layout::Rect;

/// Hover effect tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Rotation (degrees) at the card's edge.
    pub tilt_degrees: f64,
    /// Translation (px) at the button's edge.
    pub magnetic_strength: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            tilt_degrees: 8.0,
            magnetic_strength: 18.0,
        }
    }
}

/// Pointer offset from the rect's center, normalized to half-size.
///
/// Zero-sized rects yield `(0, 0)`.
#[must_use]
pub fn normalized_offset(rect: Rect, pointer_x: f64, pointer_y: f64) -> (f64, f64) {
    let (cx, cy) = rect.center();
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;
    let dx = if half_w > 0.0 { (pointer_x - cx) / half_w } else { 0.0 };
    let dy = if half_h > 0.0 { (pointer_y - cy) / half_h } else { 0.0 };
    (dx, dy)
}

/// 3D tilt of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    /// Rotation around X (degrees).
    pub rot_x: f64,
    /// Rotation around Y (degrees).
    pub rot_y: f64,
}

impl Tilt {
    /// The resting transform.
    pub const RESET: Self = Self { rot_x: 0.0, rot_y: 0.0 };

    /// Returns the CSS transform.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.rot_x, self.rot_y)
    }
}

/// Tilt that leans the card toward the pointer.
#[must_use]
pub fn tilt(rect: Rect, pointer_x: f64, pointer_y: f64, config: &PointerConfig) -> Tilt {
    let (dx, dy) = normalized_offset(rect, pointer_x, pointer_y);
    Tilt {
        rot_x: dy * -config.tilt_degrees,
        rot_y: dx * config.tilt_degrees,
    }
}

/// CSS translate that pulls a button toward the pointer.
#[must_use]
pub fn magnetic(rect: Rect, pointer_x: f64, pointer_y: f64, config: &PointerConfig) -> String {
    let (dx, dy) = normalized_offset(rect, pointer_x, pointer_y);
    let s = config.magnetic_strength;
    format!("translate({}px, {}px)", dx * s, dy * s)
}

/// Resting magnetic transform.
pub const MAGNETIC_RESET: &str = "translate(0,0)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_at_corner() {
        let card = Rect::new(100.0, 100.0, 200.0, 100.0);
        let t = tilt(card, 300.0, 200.0, &PointerConfig::default());
        assert!((t.rot_x + 8.0).abs() < 1e-9);
        assert!((t.rot_y - 8.0).abs() < 1e-9);
        assert_eq!(Tilt::RESET.to_css(), "rotateX(0deg) rotateY(0deg)");
    }

    #[test]
    fn test_magnetic_at_center_is_zero() {
        let button = Rect::new(0.0, 0.0, 40.0, 20.0);
        assert_eq!(
            magnetic(button, 20.0, 10.0, &PointerConfig::default()),
            "translate(0px, 0px)"
        );
        assert_eq!(
            magnetic(button, 40.0, 10.0, &PointerConfig::default()),
            "translate(18px, 0px)"
        );
    }

    #[test]
    fn test_zero_size_rect() {
        assert_eq!(normalized_offset(Rect::ZERO, 5.0, 5.0), (0.0, 0.0));
    }
}
