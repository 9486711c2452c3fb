//! Conversion between color representations.
//!
//! Terminals understand three families of SGR color parameters: the 16 basic
//! colors, the 256 indexed colors, and 24-bit RGB. The functions in this
//! module project downward through that hierarchy, which is how a true-color
//! style degrades gracefully on terminals with a lower
//! [`Level`](crate::style::Level) of color support.
//!
//! All functions are pure and deterministic. Their results are bit-exact
//! renditions of the well-known formulas and hence directly comparable with
//! other implementations of the same conversions.

/// Parse a hexadecimal color string into its RGB coordinates.
///
/// This function accepts 3- and 6-digit hexadecimal colors, with or without
/// a leading `#`, in either case. 3-digit colors are expanded by duplicating
/// each digit, i.e., `#f80` is `#ff8800`.
///
/// Malformed input does not fail but yields black `(0, 0, 0)`. That fallback
/// is part of this function's documented contract.
///
/// # Examples
///
/// ```
/// # use griseo::convert::hex_to_rgb;
/// assert_eq!(hex_to_rgb("#FF0000"), (255, 0, 0));
/// assert_eq!(hex_to_rgb("f80"), (255, 136, 0));
/// assert_eq!(hex_to_rgb("not a color"), (0, 0, 0));
/// ```
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let Some(digits) = extract_hex_digits(hex) else {
        return (0, 0, 0);
    };

    let expanded;
    let digits = if digits.len() == 3 {
        expanded = digits
            .chars()
            .flat_map(|c| [c, c])
            .collect::<String>();
        expanded.as_str()
    } else {
        digits
    };

    // The slice has exactly six ASCII hex digits at this point.
    let value = u32::from_str_radix(digits, 16).unwrap_or(0);
    (
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}

/// Find the first run of hex digits usable as a 6- or 3-digit color.
///
/// Mirrors the alternation `[a-f\d]{6}|[a-f\d]{3}`: a run of six or more
/// digits contributes its first six, a run of three to five its first three,
/// and shorter runs are skipped.
fn extract_hex_digits(hex: &str) -> Option<&str> {
    let mut rest = hex;
    while !rest.is_empty() {
        let start = rest.find(|c: char| c.is_ascii_hexdigit())?;
        let run = &rest[start..];
        let len = run
            .find(|c: char| !c.is_ascii_hexdigit())
            .unwrap_or(run.len());

        if 6 <= len {
            return Some(&run[..6]);
        } else if 3 <= len {
            return Some(&run[..3]);
        }

        rest = &run[len..];
    }

    None
}

/// Convert RGB coordinates to the nearest 8-bit indexed color.
///
/// Achromatic colors map onto the 24-step grayscale gradient (indices 232
/// through 255), except that near-black and near-white snap to the corners
/// of the 6x6x6 cube, which are darker and lighter than the gradient's
/// extremes. All other colors map into the cube (indices 16 through 231).
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return ((r as f64 - 8.0) / 247.0 * 24.0).round() as u8 + 232;
    }

    16 + 36 * (r as f64 / 255.0 * 5.0).round() as u8
        + 6 * (g as f64 / 255.0 * 5.0).round() as u8
        + (b as f64 / 255.0 * 5.0).round() as u8
}

/// Convert an 8-bit indexed color to the SGR parameter of the closest basic
/// foreground color.
///
/// The result is in `30..=37` for regular and `90..=97` for bright colors;
/// background parameters are the same values plus the background offset.
/// Indices 0 through 15 map directly onto their namesake parameters. Larger
/// indices are projected back from the cube or gradient: each channel rounds
/// to one bit of the color number, and the color brightens when its largest
/// channel is at full intensity.
pub fn ansi256_to_ansi16(code: u8) -> u8 {
    if code < 8 {
        return 30 + code;
    }
    if code < 16 {
        return 90 + (code - 8);
    }

    let (r, g, b) = if code >= 232 {
        let gray = ((code as f64 - 232.0) * 10.0 + 8.0) / 255.0;
        (gray, gray, gray)
    } else {
        let code = code - 16;
        let remainder = code % 36;
        (
            (code / 36) as f64 / 5.0,
            (remainder / 6) as f64 / 5.0,
            (remainder % 6) as f64 / 5.0,
        )
    };

    let value = r.max(g).max(b) * 2.0;
    if value == 0.0 {
        return 30;
    }

    let mut result =
        30 + (((b.round() as u8) << 2) | ((g.round() as u8) << 1) | r.round() as u8);
    if value == 2.0 {
        result += 60;
    }

    result
}

/// Convert RGB coordinates to the SGR parameter of the closest basic
/// foreground color.
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    ansi256_to_ansi16(rgb_to_ansi256(r, g, b))
}

/// Parse a hexadecimal color and convert it to the nearest 8-bit indexed
/// color.
pub fn hex_to_ansi256(hex: &str) -> u8 {
    let (r, g, b) = hex_to_rgb(hex);
    rgb_to_ansi256(r, g, b)
}

/// Parse a hexadecimal color and convert it to the SGR parameter of the
/// closest basic foreground color.
pub fn hex_to_ansi16(hex: &str) -> u8 {
    ansi256_to_ansi16(hex_to_ansi256(hex))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF0000"), (255, 0, 0));
        assert_eq!(hex_to_rgb("ff0000"), (255, 0, 0));
        assert_eq!(hex_to_rgb("#DEADED"), (0xde, 0xad, 0xed));
        assert_eq!(hex_to_rgb("#f80"), (255, 136, 0));
        assert_eq!(hex_to_rgb("0f0"), (0, 255, 0));

        // The documented fallback for malformed input is black.
        assert_eq!(hex_to_rgb(""), (0, 0, 0));
        assert_eq!(hex_to_rgb("#f8"), (0, 0, 0));
        assert_eq!(hex_to_rgb("nope"), (0, 0, 0));

        // Junk around and within otherwise valid digits.
        assert_eq!(hex_to_rgb("0x1234"), hex_to_rgb("123"));
        assert_eq!(hex_to_rgb("xyz ffaa00 tail"), (255, 170, 0));
    }

    #[test]
    fn test_rgb_to_ansi256() {
        // Corners of the cube.
        assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
        assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
        assert_eq!(rgb_to_ansi256(255, 0, 0), 196);
        assert_eq!(rgb_to_ansi256(0, 0, 255), 21);

        // The grayscale gradient, including its clamped extremes.
        assert_eq!(rgb_to_ansi256(7, 7, 7), 16);
        assert_eq!(rgb_to_ansi256(249, 249, 249), 231);
        assert_eq!(rgb_to_ansi256(8, 8, 8), 232);
        assert_eq!(rgb_to_ansi256(128, 128, 128), 244);
        assert_eq!(rgb_to_ansi256(248, 248, 248), 255);

        // An off-axis color.
        assert_eq!(rgb_to_ansi256(222, 173, 237), 183);
    }

    #[test]
    fn test_ansi256_to_ansi16() {
        // Direct mappings for the 16 basic colors.
        assert_eq!(ansi256_to_ansi16(0), 30);
        assert_eq!(ansi256_to_ansi16(7), 37);
        assert_eq!(ansi256_to_ansi16(8), 90);
        assert_eq!(ansi256_to_ansi16(15), 97);

        // Projections from the cube.
        assert_eq!(ansi256_to_ansi16(16), 30);
        assert_eq!(ansi256_to_ansi16(196), 91);
        assert_eq!(ansi256_to_ansi16(21), 94);
        assert_eq!(ansi256_to_ansi16(231), 97);

        // Projections from the grayscale gradient.
        assert_eq!(ansi256_to_ansi16(232), 30);
        assert_eq!(ansi256_to_ansi16(255), 37);
    }

    #[test]
    fn test_compositions() {
        assert_eq!(rgb_to_ansi16(255, 0, 0), 91);
        assert_eq!(hex_to_ansi256("#FF0000"), 196);
        assert_eq!(hex_to_ansi16("#FF0000"), 91);
    }
}
