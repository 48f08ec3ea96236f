//! Display color math.
//!
//! Event colors are opaque `#rrggbb` strings as far as the layout is
//! concerned; this module exists for renderers that restyle them, e.g. the
//! CLI dimming inactive events through HSL lightness. Components are `f64`
//! in `0.0..=1.0` throughout.

use crate::error::ValidationError;

/// Parse a `#rrggbb` hex color into unit-range RGB components.
///
/// # Errors
/// Returns a `ValidationError` for anything that is not a 7-character
/// `#`-prefixed hex triplet.
pub fn parse_hex(hex: &str) -> Result<[f64; 3], ValidationError> {
    let invalid = |message: String| ValidationError::InvalidValue {
        field: "color".to_string(),
        message,
    };

    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| invalid(format!("expected '#rrggbb', got '{hex}'")))?;
    if digits.len() != 6 {
        return Err(invalid(format!("expected '#rrggbb', got '{hex}'")));
    }

    let mut rgb = [0.0; 3];
    for (i, component) in rgb.iter_mut().enumerate() {
        let value = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| invalid(format!("invalid hex digits in '{hex}'")))?;
        *component = value as f64 / 255.0;
    }
    Ok(rgb)
}

/// Format unit-range RGB components as `#rrggbb`.
pub fn to_hex(rgb: [f64; 3]) -> String {
    let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", byte(rgb[0]), byte(rgb[1]), byte(rgb[2]))
}

/// RGB to HSL, hue as a `0.0..=1.0` fraction of the circle.
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);

    let l = (c_max + c_min) / 2.0;

    let s = if l == 1.0 || c_max == c_min {
        0.0
    } else if l < 0.5 {
        (c_max - c_min) / (c_max + c_min)
    } else {
        (c_max - c_min) / (2.0 - c_max - c_min)
    };

    let mut h = 0.0;
    if s > 0.0 {
        if r == c_max {
            h = (g - b) / (c_max - c_min) * 60.0;
        } else if g == c_max {
            h = ((b - r) / (c_max - c_min) + 2.0) * 60.0;
        } else if b == c_max {
            h = ((r - g) / (c_max - c_min) + 4.0) * 60.0;
        }
    }

    [h / 360.0, s, l]
}

/// HSL back to RGB. Inverse of [`rgb_to_hsl`] for in-gamut values.
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;

    if s == 0.0 {
        return [l, l, l];
    }

    let v1 = if l < 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let v2 = 2.0 * l - v1;

    let mut rgb = [0.0; 3];
    for (component, offset) in rgb.iter_mut().zip([1.0 / 3.0, 0.0, -1.0 / 3.0]) {
        let mut t = h + offset;
        if t < 0.0 {
            t += 1.0;
        } else if t > 1.0 {
            t -= 1.0;
        }

        *component = if t * 6.0 < 1.0 {
            v2 + (v1 - v2) * 6.0 * t
        } else if t * 2.0 < 1.0 {
            v1
        } else if t * 3.0 < 2.0 {
            v2 + (v1 - v2) * (2.0 / 3.0 - t) * 6.0
        } else {
            v2
        };
    }

    rgb
}

/// Scale a color's lightness through HSL space.
///
/// `factor` below 1.0 dims, above 1.0 brightens (lightness clamped to 1.0).
pub fn dim(rgb: [f64; 3], factor: f64) -> [f64; 3] {
    let mut hsl = rgb_to_hsl(rgb);
    hsl[2] = (hsl[2] * factor).clamp(0.0, 1.0);
    hsl_to_rgb(hsl)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: [f64; 3], b: [f64; 3]) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-9, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn hex_round_trip() {
        let rgb = parse_hex("#ffaa00").unwrap();
        assert_eq!(to_hex(rgb), "#ffaa00");
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert!(parse_hex("ffaa00").is_err());
        assert!(parse_hex("#ffaa0").is_err());
        assert!(parse_hex("#ggaa00").is_err());
    }

    #[test]
    fn grays_have_no_saturation() {
        assert_close(rgb_to_hsl([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_close(rgb_to_hsl([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_close(rgb_to_hsl([0.5, 0.5, 0.5]), [0.0, 0.0, 0.5]);
    }

    #[test]
    fn primaries_convert_to_expected_hues() {
        assert_close(rgb_to_hsl([1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);
        assert_close(rgb_to_hsl([0.0, 1.0, 0.0]), [1.0 / 3.0, 1.0, 0.5]);
        assert_close(rgb_to_hsl([0.0, 0.0, 1.0]), [2.0 / 3.0, 1.0, 0.5]);
    }

    #[test]
    fn hsl_round_trips_saturated_colors() {
        for rgb in [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 2.0 / 3.0, 0.0],
            [0.2, 0.4, 0.6],
        ] {
            assert_close(hsl_to_rgb(rgb_to_hsl(rgb)), rgb);
        }
    }

    #[test]
    fn dim_halves_lightness() {
        let dimmed = dim([0.5, 0.5, 0.5], 0.5);
        assert_close(dimmed, [0.25, 0.25, 0.25]);
    }
}
