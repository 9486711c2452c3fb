//! The SGR code table.
//!
//! This module is the crate's static styling vocabulary: the text
//! [`Attribute`]s, the 16 [`AnsiColor`]s, and the [`Sgr`] parameter pairs
//! they resolve to. Every pair belongs to exactly one [`Channel`], the unit
//! of conflict resolution when chaining styles: a resolved [`StyleSpec`]
//! holds at most one pair per channel.

use crate::error::OutOfBoundsError;
use crate::style::context::Layer;

/// The modifier style names, in table order.
pub const MODIFIER_NAMES: [&str; 9] = [
    "reset",
    "bold",
    "dim",
    "italic",
    "underline",
    "overline",
    "inverse",
    "hidden",
    "strikethrough",
];

/// The foreground color names, including the `gray`/`grey` aliases.
pub const FOREGROUND_COLOR_NAMES: [&str; 17] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "gray",
    "grey",
    "red_bright",
    "green_bright",
    "yellow_bright",
    "blue_bright",
    "magenta_bright",
    "cyan_bright",
    "white_bright",
];

/// The background color names.
pub const BACKGROUND_COLOR_NAMES: [&str; 17] = [
    "bg_black",
    "bg_red",
    "bg_green",
    "bg_yellow",
    "bg_blue",
    "bg_magenta",
    "bg_cyan",
    "bg_white",
    "bg_gray",
    "bg_grey",
    "bg_red_bright",
    "bg_green_bright",
    "bg_yellow_bright",
    "bg_blue_bright",
    "bg_magenta_bright",
    "bg_cyan_bright",
    "bg_white_bright",
];

// ====================================================================================================================
// Attributes
// ====================================================================================================================

/// A text attribute other than color.
///
/// Each attribute knows the SGR parameter that enables it and the canonical
/// parameter that undoes it again. Bold and dim are distinct attributes but
/// share an undo parameter and hence a [`Channel`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Overline,
    Inverse,
    Hidden,
    Strikethrough,
}

impl Attribute {
    /// Get the SGR parameter for enabling this attribute.
    pub const fn open_sgr(&self) -> u8 {
        use self::Attribute::*;

        match self {
            Reset => 0,
            Bold => 1,
            Dim => 2,
            Italic => 3,
            Underline => 4,
            Overline => 53,
            Inverse => 7,
            Hidden => 8,
            Strikethrough => 9,
        }
    }

    /// Get the SGR parameter for disabling this attribute.
    ///
    /// Bold and dim both disable with parameter 22; there is no parameter
    /// that disables only one of them.
    pub const fn close_sgr(&self) -> u8 {
        use self::Attribute::*;

        match self {
            Reset => 0,
            Bold | Dim => 22,
            Italic => 23,
            Underline => 24,
            Overline => 55,
            Inverse => 27,
            Hidden => 28,
            Strikethrough => 29,
        }
    }

    /// Get the channel this attribute occupies in a resolved chain.
    pub const fn channel(&self) -> Channel {
        use self::Attribute::*;

        match self {
            Reset => Channel::Reset,
            Bold | Dim => Channel::Weight,
            Italic => Channel::Italic,
            Underline => Channel::Underline,
            Overline => Channel::Overline,
            Inverse => Channel::Inverse,
            Hidden => Channel::Hidden,
            Strikethrough => Channel::Strikethrough,
        }
    }

    /// Get this attribute's style name.
    pub const fn name(&self) -> &'static str {
        use self::Attribute::*;

        match self {
            Reset => "reset",
            Bold => "bold",
            Dim => "dim",
            Italic => "italic",
            Underline => "underline",
            Overline => "overline",
            Inverse => "inverse",
            Hidden => "hidden",
            Strikethrough => "strikethrough",
        }
    }

    /// Look up an attribute by its style name.
    pub fn from_name(name: &str) -> Option<Self> {
        use self::Attribute::*;

        Some(match name {
            "reset" => Reset,
            "bold" => Bold,
            "dim" => Dim,
            "italic" => Italic,
            "underline" => Underline,
            "overline" => Overline,
            "inverse" => Inverse,
            "hidden" => Hidden,
            "strikethrough" => Strikethrough,
            _ => return None,
        })
    }
}

// ====================================================================================================================
// Ansi Color
// ====================================================================================================================

/// The 16 extended ANSI colors.
///
/// The bright-black variant doubles as `gray`/`grey` when styles are named;
/// the original color vocabulary has no `black_bright`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// Determine whether this ANSI color is bright.
    pub fn is_bright(&self) -> bool {
        8 <= *self as u8
    }

    /// Get the base version of this ANSI color.
    ///
    /// If this color is bright, this method returns its non-bright version.
    /// Otherwise, it returns the same color.
    pub fn to_base(&self) -> AnsiColor {
        let mut index = *self as u8;
        if 8 <= index {
            index -= 8;
        }
        // Index is within bounds by construction.
        AnsiColor::try_from(index).unwrap_or_default()
    }

    /// Get the SGR parameter for this color on the foreground layer.
    ///
    /// The result is in `30..=37` for regular and `90..=97` for bright
    /// colors. The background parameter is the same value plus
    /// [`Layer::Background`]'s offset.
    pub fn sgr_param(&self) -> u8 {
        let base = if self.is_bright() { 90 } else { 30 };
        base + self.to_base() as u8
    }
}

impl TryFrom<u8> for AnsiColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use self::AnsiColor::*;

        let color = match value {
            0 => Black,
            1 => Red,
            2 => Green,
            3 => Yellow,
            4 => Blue,
            5 => Magenta,
            6 => Cyan,
            7 => White,
            8 => BrightBlack,
            9 => BrightRed,
            10 => BrightGreen,
            11 => BrightYellow,
            12 => BrightBlue,
            13 => BrightMagenta,
            14 => BrightCyan,
            15 => BrightWhite,
            _ => return Err(OutOfBoundsError::new(value, 0..=15)),
        };

        Ok(color)
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> u8 {
        value as u8
    }
}

/// Look up a color by style name, e.g. `red`, `bg_blue`, or `grey`.
///
/// Background names carry the `bg_` prefix; `gray` and `grey` both denote
/// bright black.
pub fn named_color(name: &str) -> Option<(Layer, AnsiColor)> {
    use self::AnsiColor::*;

    let (layer, base) = match name.strip_prefix("bg_") {
        Some(rest) => (Layer::Background, rest),
        None => (Layer::Foreground, name),
    };

    let color = match base {
        "black" => Black,
        "red" => Red,
        "green" => Green,
        "yellow" => Yellow,
        "blue" => Blue,
        "magenta" => Magenta,
        "cyan" => Cyan,
        "white" => White,
        "gray" | "grey" => BrightBlack,
        "red_bright" => BrightRed,
        "green_bright" => BrightGreen,
        "yellow_bright" => BrightYellow,
        "blue_bright" => BrightBlue,
        "magenta_bright" => BrightMagenta,
        "cyan_bright" => BrightCyan,
        "white_bright" => BrightWhite,
        _ => return None,
    };

    Some((layer, color))
}

// ====================================================================================================================
// Channels and resolved pairs
// ====================================================================================================================

/// A mutually exclusive style slot.
///
/// A resolved chain holds at most one SGR pair per channel; requesting a
/// second style on an occupied channel replaces the first, so later styles
/// win conflicts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Foreground,
    Background,
    Reset,
    Weight,
    Italic,
    Underline,
    Overline,
    Inverse,
    Hidden,
    Strikethrough,
}

/// A resolved SGR pair: the parameters that open a style and the canonical
/// parameters that undo it.
///
/// Color pairs record the layer they apply to; their undo parameter is the
/// layer's default-color parameter (39 or 49). True-color requests resolve
/// into [`Sgr::Rgb`], [`Sgr::Indexed`], or [`Sgr::Basic`] depending on the
/// [`Level`](crate::style::Level) current at request time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sgr {
    /// A text attribute.
    Attribute(Attribute),
    /// A basic color, stored as its foreground-relative SGR parameter in
    /// `30..=37` or `90..=97`.
    Basic { layer: Layer, code: u8 },
    /// An 8-bit indexed color (`38;5;n`).
    Indexed { layer: Layer, index: u8 },
    /// A 24-bit RGB color (`38;2;r;g;b`).
    Rgb { layer: Layer, rgb: (u8, u8, u8) },
}

impl Sgr {
    /// Get the channel this pair occupies.
    pub fn channel(&self) -> Channel {
        match *self {
            Sgr::Attribute(attr) => attr.channel(),
            Sgr::Basic { layer, .. } | Sgr::Indexed { layer, .. } | Sgr::Rgb { layer, .. } => {
                match layer {
                    Layer::Foreground => Channel::Foreground,
                    Layer::Background => Channel::Background,
                }
            }
        }
    }

    /// Render the escape sequence that opens this style.
    pub fn open(&self) -> String {
        match *self {
            Sgr::Attribute(attr) => format!("\x1b[{}m", attr.open_sgr()),
            Sgr::Basic { layer, code } => format!("\x1b[{}m", code + layer.offset()),
            Sgr::Indexed { layer, index } => {
                format!("\x1b[{};5;{}m", 38 + layer.offset(), index)
            }
            Sgr::Rgb {
                layer,
                rgb: (r, g, b),
            } => format!("\x1b[{};2;{};{};{}m", 38 + layer.offset(), r, g, b),
        }
    }

    /// Render the escape sequence that undoes this style.
    pub fn close(&self) -> String {
        match *self {
            Sgr::Attribute(attr) => format!("\x1b[{}m", attr.close_sgr()),
            Sgr::Basic { layer, .. } | Sgr::Indexed { layer, .. } | Sgr::Rgb { layer, .. } => {
                format!("\x1b[{}m", 39 + layer.offset())
            }
        }
    }
}

// ====================================================================================================================
// Style specification
// ====================================================================================================================

/// An ordered set of resolved SGR pairs, at most one per channel.
///
/// This is the persistent value behind a [`Chain`](crate::Chain): deriving a
/// new chain clones the specification and installs one more pair, replacing
/// any pair already occupying the same channel. It also is the cache key for
/// memoized formatters, which works because true-color pairs are resolved
/// against the support level before they get here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleSpec {
    entries: Vec<Sgr>,
}

impl StyleSpec {
    /// Determine whether this specification requests any styling at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive a new specification with the given pair installed.
    ///
    /// Any existing pair on the same channel is removed first; the new pair
    /// is appended at the end. Later styles therefore win conflicts while
    /// keeping the most recent request's position in the escape sequence.
    pub fn with(&self, sgr: Sgr) -> Self {
        let channel = sgr.channel();
        let mut entries = self.entries.clone();
        entries.retain(|existing| existing.channel() != channel);
        entries.push(sgr);
        Self { entries }
    }

    /// Get the resolved pairs in application order.
    pub fn entries(&self) -> &[Sgr] {
        &self.entries
    }

    /// Render the concatenated opening escape sequences.
    pub fn open(&self) -> String {
        self.entries.iter().map(Sgr::open).collect()
    }

    /// Render the concatenated closing escape sequences, in reverse order of
    /// application so that the innermost style closes first.
    pub fn close(&self) -> String {
        self.entries.iter().rev().map(Sgr::close).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_attribute_codes() {
        assert_eq!(Attribute::Bold.open_sgr(), 1);
        assert_eq!(Attribute::Bold.close_sgr(), 22);
        assert_eq!(Attribute::Dim.open_sgr(), 2);
        assert_eq!(Attribute::Dim.close_sgr(), 22);
        assert_eq!(Attribute::Bold.channel(), Attribute::Dim.channel());
        assert_eq!(Attribute::Overline.open_sgr(), 53);
        assert_eq!(Attribute::Overline.close_sgr(), 55);
        assert_eq!(Attribute::Reset.open_sgr(), 0);
        assert_eq!(Attribute::Reset.close_sgr(), 0);
        assert_eq!(Attribute::from_name("strikethrough"), Some(Attribute::Strikethrough));
        assert_eq!(Attribute::from_name("blink"), None);
    }

    #[test]
    fn test_ansi_color() {
        assert_eq!(AnsiColor::Red.sgr_param(), 31);
        assert_eq!(AnsiColor::White.sgr_param(), 37);
        assert_eq!(AnsiColor::BrightBlack.sgr_param(), 90);
        assert_eq!(AnsiColor::BrightWhite.sgr_param(), 97);
        assert!(AnsiColor::BrightRed.is_bright());
        assert_eq!(AnsiColor::BrightRed.to_base(), AnsiColor::Red);
        assert!(AnsiColor::try_from(16).is_err());
    }

    #[test]
    fn test_named_color() {
        assert_eq!(
            named_color("red"),
            Some((Layer::Foreground, AnsiColor::Red))
        );
        assert_eq!(
            named_color("bg_blue"),
            Some((Layer::Background, AnsiColor::Blue))
        );
        assert_eq!(named_color("gray"), named_color("grey"));
        assert_eq!(
            named_color("grey"),
            Some((Layer::Foreground, AnsiColor::BrightBlack))
        );
        assert_eq!(
            named_color("bg_red_bright"),
            Some((Layer::Background, AnsiColor::BrightRed))
        );
        assert_eq!(named_color("mauve"), None);

        for name in FOREGROUND_COLOR_NAMES {
            assert!(named_color(name).is_some_and(|(layer, _)| layer.is_foreground()));
        }
        for name in BACKGROUND_COLOR_NAMES {
            assert!(named_color(name).is_some_and(|(layer, _)| layer.is_background()));
        }
        for name in MODIFIER_NAMES {
            assert!(Attribute::from_name(name).is_some());
        }
    }

    #[test]
    fn test_sgr_sequences() {
        let red = Sgr::Basic {
            layer: Layer::Foreground,
            code: 31,
        };
        assert_eq!(red.open(), "\x1b[31m");
        assert_eq!(red.close(), "\x1b[39m");

        let bg_red = Sgr::Basic {
            layer: Layer::Background,
            code: 31,
        };
        assert_eq!(bg_red.open(), "\x1b[41m");
        assert_eq!(bg_red.close(), "\x1b[49m");

        let indexed = Sgr::Indexed {
            layer: Layer::Foreground,
            index: 196,
        };
        assert_eq!(indexed.open(), "\x1b[38;5;196m");

        let rgb = Sgr::Rgb {
            layer: Layer::Background,
            rgb: (255, 0, 0),
        };
        assert_eq!(rgb.open(), "\x1b[48;2;255;0;0m");
        assert_eq!(rgb.close(), "\x1b[49m");
    }

    #[test]
    fn test_spec_channels() {
        let spec = StyleSpec::default()
            .with(Sgr::Basic {
                layer: Layer::Foreground,
                code: 31,
            })
            .with(Sgr::Attribute(Attribute::Underline))
            .with(Sgr::Basic {
                layer: Layer::Foreground,
                code: 32,
            });

        // Last write wins on the foreground channel.
        assert_eq!(spec.entries().len(), 2);
        assert_eq!(spec.open(), "\x1b[4m\x1b[32m");
        assert_eq!(spec.close(), "\x1b[39m\x1b[24m");

        // Bold and dim share the weight channel.
        let spec = StyleSpec::default()
            .with(Sgr::Attribute(Attribute::Bold))
            .with(Sgr::Attribute(Attribute::Dim));
        assert_eq!(spec.open(), "\x1b[2m");
        assert_eq!(spec.close(), "\x1b[22m");
    }
}
