//! Hex to HSL conversion for CSS custom property values.
//!
//! Theme manifests author colors as `#RGB`/`#RRGGBB` hex strings, while the
//! generated CSS custom properties carry space-separated `H S% L%` triples.
//! The conversion follows JavaScript `Math.round`/`toFixed` semantics so
//! the generated values match what a browser-side converter would emit:
//! hue is a rounded integer with a +360 correction for negative sector
//! results, saturation and lightness are percentages rounded to one
//! decimal place and printed without a trailing `.0`.

/// Convert a `#RGB` or `#RRGGBB` hex color into an `"H S% L%"` triple.
///
/// Callers are expected to invoke this only for values starting with `#`;
/// anything else is passed through unchanged at the propagation layer.
/// Malformed hex input is out of contract and resolves channel-wise to
/// zero rather than failing.
pub fn hex_to_hsl_triple(hex: &str) -> String {
    let (r, g, b) = parse_channels(hex);

    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let cmin = r.min(g).min(b);
    let cmax = r.max(g).max(b);
    let delta = cmax - cmin;

    let h = if delta == 0.0 {
        0.0
    } else if cmax == r {
        ((g - b) / delta) % 6.0
    } else if cmax == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let mut h = js_round(h * 60.0);
    if h < 0.0 {
        h += 360.0;
    }

    let l = (cmax + cmin) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    let s = round_one_decimal(s * 100.0);
    let l = round_one_decimal(l * 100.0);

    format!("{} {}% {}%", h as i64, fmt_number(s), fmt_number(l))
}

fn parse_channels(hex: &str) -> (u8, u8, u8) {
    if !hex.is_ascii() {
        return (0, 0, 0);
    }

    match hex.len() {
        4 => (
            channel(&hex[1..2], true),
            channel(&hex[2..3], true),
            channel(&hex[3..4], true),
        ),
        7 => (
            channel(&hex[1..3], false),
            channel(&hex[3..5], false),
            channel(&hex[5..7], false),
        ),
        _ => (0, 0, 0),
    }
}

fn channel(digits: &str, short: bool) -> u8 {
    let expanded;
    let digits = if short {
        expanded = format!("{digits}{digits}");
        &expanded
    } else {
        digits
    };
    u8::from_str_radix(digits, 16).unwrap_or(0)
}

// Math.round semantics: halves round toward positive infinity.
fn js_round(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

// JS prints 87.0 as "87" and 48.4 as "48.4"; match that so the generated
// CSS values are stable across authoring tools.
fn fmt_number(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{}", x as i64)
    } else {
        format!("{x:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_form_conversion() {
        assert_eq!(hex_to_hsl_triple("#e7b910"), "47 87% 48.4%");
        assert_eq!(hex_to_hsl_triple("#09090b"), "240 10% 3.9%");
        assert_eq!(hex_to_hsl_triple("#fafafa"), "0 0% 98%");
    }

    #[test]
    fn test_negative_hue_correction() {
        // Magenta's sector formula yields -60 before the +360 correction.
        assert_eq!(hex_to_hsl_triple("#ff00ff"), "300 100% 50%");
    }

    #[test]
    fn test_short_form_conversion() {
        assert_eq!(hex_to_hsl_triple("#fff"), "0 0% 100%");
        assert_eq!(hex_to_hsl_triple("#000"), "0 0% 0%");
        assert_eq!(hex_to_hsl_triple("#f00"), "0 100% 50%");
    }

    #[test]
    fn test_achromatic_has_zero_hue_and_saturation() {
        assert_eq!(hex_to_hsl_triple("#808080"), "0 0% 50.2%");
    }

    #[test]
    fn test_malformed_input_does_not_panic() {
        assert_eq!(hex_to_hsl_triple("#12345"), "0 0% 0%");
        assert_eq!(hex_to_hsl_triple("#"), "0 0% 0%");
        assert_eq!(hex_to_hsl_triple("#zzzzzz"), "0 0% 0%");
        assert_eq!(hex_to_hsl_triple("#ÿÿÿ"), "0 0% 0%");
    }

    // Reference HSL -> RGB conversion used only to check round-trip
    // consistency of the forward transform.
    fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
        let s = s / 100.0;
        let l = l / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;
        let (r, g, b) = match h as u32 {
            0..=59 => (c, x, 0.0),
            60..=119 => (x, c, 0.0),
            120..=179 => (0.0, c, x),
            180..=239 => (0.0, x, c),
            240..=299 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        (
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        )
    }

    fn parse_triple(triple: &str) -> (f64, f64, f64) {
        let parts: Vec<&str> = triple.split(' ').collect();
        (
            parts[0].parse().unwrap(),
            parts[1].trim_end_matches('%').parse().unwrap(),
            parts[2].trim_end_matches('%').parse().unwrap(),
        )
    }

    #[test]
    fn test_round_trip_within_rounding_tolerance() {
        let samples = [
            "#e7b910", "#db1436", "#27272a", "#a1a1aa", "#7f1d1d", "#d4d4d8",
            "#18181b", "#0066cc", "#ffcc00", "#336699",
        ];
        for hex in samples {
            let (h, s, l) = parse_triple(&hex_to_hsl_triple(hex));
            let (r, g, b) = hsl_to_rgb(h, s, l);
            let expected = (
                u8::from_str_radix(&hex[1..3], 16).unwrap(),
                u8::from_str_radix(&hex[3..5], 16).unwrap(),
                u8::from_str_radix(&hex[5..7], 16).unwrap(),
            );
            // One integer degree of hue and 0.05% of S/L rounding slack can
            // move a channel by a couple of steps.
            assert!(
                (i32::from(r) - i32::from(expected.0)).abs() <= 3
                    && (i32::from(g) - i32::from(expected.1)).abs() <= 3
                    && (i32::from(b) - i32::from(expected.2)).abs() <= 3,
                "round trip drifted for {hex}: got ({r}, {g}, {b})"
            );
        }
    }
}
