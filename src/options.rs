//! Rendering options and the derived light model.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};

/// Which subdivision algorithm lays out a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    KDirStat,
    SequoiaView,
    Simple,
}

impl Default for Style {
    fn default() -> Self {
        Style::KDirStat
    }
}

/// Style, grid, light, height, scale, and ambient parameters for a draw call.
///
/// The normalized light vector and the `cushion_shading_enabled` flag are
/// both plain methods over the stored fields rather than cached, so there is
/// no stale derived state to worry about when a field changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Options {
    pub style: Style,
    pub grid: bool,
    pub grid_color: Rgb,
    pub brightness: f64,
    pub height: f64,
    pub scale_factor: f64,
    pub ambient: f64,
    pub light_x: f64,
    pub light_y: f64,
}

impl Default for Options {
    /// The "modern" cushion-rendering defaults.
    fn default() -> Self {
        Options {
            style: Style::KDirStat,
            grid: false,
            grid_color: Rgb::BLACK,
            brightness: 0.88,
            height: 0.38,
            scale_factor: 0.91,
            ambient: 0.13,
            light_x: -1.0,
            light_y: -1.0,
        }
    }
}

impl Options {
    /// The normalized light direction `(Lx, Ly, Lz)`, with `z` fixed at 10
    /// before normalization.
    pub fn light_vector(&self) -> (f64, f64, f64) {
        let (x, y, z) = (self.light_x, self.light_y, 10.0);
        let len = (x * x + y * y + z * z).sqrt();
        if len <= 0.0 {
            return (0.0, 0.0, 1.0);
        }
        (x / len, y / len, z / len)
    }

    /// Whether cushion shading is active for this configuration:
    /// `ambient < 1 ∧ height > 0 ∧ scale_factor > 0`.
    pub fn cushion_shading_enabled(&self) -> bool {
        self.ambient < 1.0 && self.height > 0.0 && self.scale_factor > 0.0
    }

    /// Apply the low-color-display override: brightness forced to 0.6 on
    /// displays that can show 256 colors or fewer.
    pub fn for_display(mut self, is_256_colors: bool) -> Self {
        if is_256_colors {
            self.brightness = 0.6;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_kdirstat() {
        assert_eq!(Options::default().style, Style::KDirStat);
    }

    #[test]
    fn light_vector_is_normalized() {
        let opts = Options::default();
        let (x, y, z) = opts.light_vector();
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - 1.0).abs() < 1e-9);
    }

    #[test]
    fn overhead_light_has_zero_xy_component() {
        let opts = Options {
            light_x: 0.0,
            light_y: 0.0,
            ..Options::default()
        };
        let (x, y, z) = opts.light_vector();
        assert!(x.abs() < 1e-12);
        assert!(y.abs() < 1e-12);
        assert!((z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cushion_shading_disabled_when_ambient_is_one() {
        let opts = Options {
            ambient: 1.0,
            ..Options::default()
        };
        assert!(!opts.cushion_shading_enabled());
    }

    #[test]
    fn cushion_shading_disabled_when_height_is_zero() {
        let opts = Options {
            height: 0.0,
            ..Options::default()
        };
        assert!(!opts.cushion_shading_enabled());
    }

    #[test]
    fn low_color_display_forces_brightness() {
        let opts = Options::default().for_display(true);
        assert!((opts.brightness - 0.6).abs() < 1e-12);
    }

    #[test]
    fn serde_round_trip_preserves_equality() {
        let opts = Options::default();
        let json = serde_json::to_string(&opts).unwrap();
        let back: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, back);
    }
}
