//! The chainable style builder.

use std::fmt;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

use crate::cache::FormatterCache;
use crate::convert::{ansi256_to_ansi16, hex_to_rgb, rgb_to_ansi256};
use crate::error::UnknownStyleError;
use crate::style::context::{Layer, Level};
use crate::style::sgr::{named_color, AnsiColor, Attribute, Sgr, StyleSpec};
use crate::supports::{color_support, Stream};

/// The state shared between a brush and every chain derived from it: the
/// support level, readable and writable at any time, and the formatter
/// cache. Chains hold the state behind an `Arc`, so changing the level on
/// any of them is visible to all of them.
#[derive(Debug)]
struct BrushState {
    level: AtomicU8,
    cache: FormatterCache,
}

impl BrushState {
    fn new(level: Level) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            cache: FormatterCache::default(),
        }
    }

    fn level(&self) -> Level {
        // The atomic only ever stores `Level as u8` values.
        Level::try_from(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }
}

// ====================================================================================================================
// Brush
// ====================================================================================================================

/// A source of style chains with its own support level and formatter cache.
///
/// The two process-wide brushes behind [`brush()`] and [`brush_stderr()`]
/// detect their level from the environment. Explicitly constructed brushes
/// are independent: each owns a fresh cache, so brushes configured with
/// different levels never share resolved true-color codes.
#[derive(Clone, Debug)]
pub struct Brush {
    state: Arc<BrushState>,
}

impl Brush {
    /// Create a new brush with the given support level.
    pub fn new(level: Level) -> Self {
        Self {
            state: Arc::new(BrushState::new(level)),
        }
    }

    /// Create a new brush, detecting the support level for the given output
    /// stream.
    pub fn detect(stream: Stream) -> Self {
        Self::new(color_support(stream))
    }

    /// Get the current support level.
    pub fn level(&self) -> Level {
        self.state.level()
    }

    /// Set the support level.
    ///
    /// The change is visible to every chain already derived from this brush.
    /// It does not invalidate cached formatters: named styles resolve to the
    /// same codes at every level, and a chain with an already-resolved
    /// true-color code keeps that code by design.
    pub fn set_level(&self, level: Level) {
        self.state.set_level(level);
    }

    /// Get an empty style chain for this brush.
    pub fn chain(&self) -> Chain {
        Chain {
            state: self.state.clone(),
            spec: StyleSpec::default(),
            visible: false,
        }
    }
}

impl Default for Brush {
    /// Create a brush with all colors disabled, the level-agnostic default.
    fn default() -> Self {
        Self::new(Level::None)
    }
}

/// Get an empty chain for the process-wide brush writing to standard output.
///
/// The brush detects its level on first use and memoizes formatters for the
/// lifetime of the process.
pub fn brush() -> Chain {
    static STDOUT: OnceLock<Brush> = OnceLock::new();
    STDOUT.get_or_init(|| Brush::detect(Stream::Stdout)).chain()
}

/// Get an empty chain for the process-wide brush writing to standard error.
pub fn brush_stderr() -> Chain {
    static STDERR: OnceLock<Brush> = OnceLock::new();
    STDERR.get_or_init(|| Brush::detect(Stream::Stderr)).chain()
}

// ====================================================================================================================
// Chain
// ====================================================================================================================

macro_rules! fg_methods {
    ($($name:ident => $color:ident),* $(,)?) => {
        $(
            #[doc = concat!("Derive a new chain with a ", stringify!($color), " foreground.")]
            pub fn $name(&self) -> Self {
                self.color(AnsiColor::$color)
            }
        )*
    };
}

macro_rules! bg_methods {
    ($($name:ident => $color:ident),* $(,)?) => {
        $(
            #[doc = concat!("Derive a new chain with a ", stringify!($color), " background.")]
            pub fn $name(&self) -> Self {
                self.bg(AnsiColor::$color)
            }
        )*
    };
}

/// An immutable chain of resolved styles.
///
/// Chains are persistent values: every builder method derives a new chain
/// and leaves the receiver untouched, so partial chains can be stored and
/// reused freely. When chaining, order doesn't matter, and later styles have
/// higher priority in case of a conflict, i.e., `red().yellow().green()` is
/// equivalent to `green()`.
///
/// A chain renders with [`Chain::paint`], which consults the owning brush's
/// [`Level`] once per call. Named styles render the same codes at every
/// level above [`Level::None`]; true-color requests instead resolve against
/// the level current when the builder method runs.
#[derive(Clone, Debug)]
pub struct Chain {
    state: Arc<BrushState>,
    spec: StyleSpec,
    visible: bool,
}

impl Chain {
    fn with(&self, sgr: Sgr) -> Self {
        Self {
            state: self.state.clone(),
            spec: self.spec.with(sgr),
            visible: self.visible,
        }
    }

    /// Get the support level currently in effect.
    pub fn level(&self) -> Level {
        self.state.level()
    }

    /// Set the support level.
    ///
    /// The level lives on the owning brush, so the change propagates to the
    /// brush and every other chain derived from it.
    pub fn set_level(&self, level: Level) {
        self.state.set_level(level);
    }

    // ----------------------------------------------------------------------------------------------------------------
    // Modifiers

    /// Derive a new chain that resets all styling.
    pub fn reset(&self) -> Self {
        self.attribute(Attribute::Reset)
    }

    /// Derive a new chain with bold text.
    pub fn bold(&self) -> Self {
        self.attribute(Attribute::Bold)
    }

    /// Derive a new chain with dim text.
    ///
    /// Dim and bold occupy the same channel, so requesting one replaces the
    /// other.
    pub fn dim(&self) -> Self {
        self.attribute(Attribute::Dim)
    }

    /// Derive a new chain with italic text.
    pub fn italic(&self) -> Self {
        self.attribute(Attribute::Italic)
    }

    /// Derive a new chain with underlined text.
    pub fn underline(&self) -> Self {
        self.attribute(Attribute::Underline)
    }

    /// Derive a new chain with overlined text.
    pub fn overline(&self) -> Self {
        self.attribute(Attribute::Overline)
    }

    /// Derive a new chain with foreground and background swapped.
    pub fn inverse(&self) -> Self {
        self.attribute(Attribute::Inverse)
    }

    /// Derive a new chain with concealed text.
    pub fn hidden(&self) -> Self {
        self.attribute(Attribute::Hidden)
    }

    /// Derive a new chain with struck-through text.
    pub fn strikethrough(&self) -> Self {
        self.attribute(Attribute::Strikethrough)
    }

    /// Derive a new chain with the given text attribute.
    pub fn attribute(&self, attribute: Attribute) -> Self {
        self.with(Sgr::Attribute(attribute))
    }

    // ----------------------------------------------------------------------------------------------------------------
    // Named colors

    /// Derive a new chain with the given foreground color.
    pub fn color(&self, color: AnsiColor) -> Self {
        self.with(Sgr::Basic {
            layer: Layer::Foreground,
            code: color.sgr_param(),
        })
    }

    /// Derive a new chain with the given background color.
    pub fn bg(&self, color: AnsiColor) -> Self {
        self.with(Sgr::Basic {
            layer: Layer::Background,
            code: color.sgr_param(),
        })
    }

    fg_methods! {
        black => Black,
        red => Red,
        green => Green,
        yellow => Yellow,
        blue => Blue,
        magenta => Magenta,
        cyan => Cyan,
        white => White,
        gray => BrightBlack,
        grey => BrightBlack,
        red_bright => BrightRed,
        green_bright => BrightGreen,
        yellow_bright => BrightYellow,
        blue_bright => BrightBlue,
        magenta_bright => BrightMagenta,
        cyan_bright => BrightCyan,
        white_bright => BrightWhite,
    }

    bg_methods! {
        bg_black => Black,
        bg_red => Red,
        bg_green => Green,
        bg_yellow => Yellow,
        bg_blue => Blue,
        bg_magenta => Magenta,
        bg_cyan => Cyan,
        bg_white => White,
        bg_gray => BrightBlack,
        bg_grey => BrightBlack,
        bg_red_bright => BrightRed,
        bg_green_bright => BrightGreen,
        bg_yellow_bright => BrightYellow,
        bg_blue_bright => BrightBlue,
        bg_magenta_bright => BrightMagenta,
        bg_cyan_bright => BrightCyan,
        bg_white_bright => BrightWhite,
    }

    // ----------------------------------------------------------------------------------------------------------------
    // True color

    /// Derive a new chain with an RGB foreground, resolved against the
    /// current support level.
    pub fn rgb(&self, r: u8, g: u8, b: u8) -> Self {
        self.with(resolve_rgb(Layer::Foreground, self.level(), (r, g, b)))
    }

    /// Derive a new chain with an RGB background, resolved against the
    /// current support level.
    pub fn bg_rgb(&self, r: u8, g: u8, b: u8) -> Self {
        self.with(resolve_rgb(Layer::Background, self.level(), (r, g, b)))
    }

    /// Derive a new chain with a hexadecimal-color foreground, e.g.
    /// `hex("#DEADED")`.
    ///
    /// Malformed colors fall back to black, per
    /// [`hex_to_rgb`](crate::convert::hex_to_rgb).
    pub fn hex(&self, hex: &str) -> Self {
        let (r, g, b) = hex_to_rgb(hex);
        self.with(resolve_rgb(Layer::Foreground, self.level(), (r, g, b)))
    }

    /// Derive a new chain with a hexadecimal-color background.
    pub fn bg_hex(&self, hex: &str) -> Self {
        let (r, g, b) = hex_to_rgb(hex);
        self.with(resolve_rgb(Layer::Background, self.level(), (r, g, b)))
    }

    /// Derive a new chain with an 8-bit indexed foreground color.
    ///
    /// Below [`Level::Ansi256`], the index degrades to the closest basic
    /// color.
    pub fn ansi256(&self, index: u8) -> Self {
        self.with(resolve_indexed(Layer::Foreground, self.level(), index))
    }

    /// Derive a new chain with an 8-bit indexed background color.
    pub fn bg_ansi256(&self, index: u8) -> Self {
        self.with(resolve_indexed(Layer::Background, self.level(), index))
    }

    // ----------------------------------------------------------------------------------------------------------------
    // Utilities

    /// Derive a new chain whose output vanishes when colors are disabled.
    ///
    /// At [`Level::None`], a visible chain paints the empty string instead
    /// of plain text. Use it for purely cosmetic content that should not
    /// clutter dumb terminals.
    pub fn visible(&self) -> Self {
        Self {
            state: self.state.clone(),
            spec: self.spec.clone(),
            visible: true,
        }
    }

    /// Derive a new chain by style name, e.g. `"red"`, `"bg_blue"`, or
    /// `"bold"`.
    ///
    /// The name must match one of the builder methods; anything else fails
    /// with an [`UnknownStyleError`] rather than passing text through
    /// unstyled.
    pub fn style(&self, name: &str) -> Result<Self, UnknownStyleError> {
        if name == "visible" {
            return Ok(self.visible());
        }
        if let Some(attribute) = Attribute::from_name(name) {
            return Ok(self.attribute(attribute));
        }
        if let Some((layer, color)) = named_color(name) {
            return Ok(match layer {
                Layer::Foreground => self.color(color),
                Layer::Background => self.bg(color),
            });
        }

        Err(UnknownStyleError::new(name))
    }

    // ----------------------------------------------------------------------------------------------------------------
    // Rendering

    /// Apply this chain's styles to the given text.
    ///
    /// The support level is read once at the start of the call. At
    /// [`Level::None`] the text passes through unstyled (or vanishes for
    /// [`Chain::visible`] chains), and empty input stays empty rather than
    /// becoming a bare escape-code pair.
    pub fn paint(&self, text: impl fmt::Display) -> String {
        let level = self.level();
        let text = text.to_string();

        if self.visible && level == Level::None {
            return String::new();
        }
        if level == Level::None || text.is_empty() || self.spec.is_empty() {
            return text;
        }

        self.state.cache.formatter(&self.spec).format(&text)
    }

    /// Apply this chain's styles to several pieces of text, joined with a
    /// single space.
    pub fn paint_parts<I>(&self, parts: I) -> String
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let mut joined = String::new();
        for (index, part) in parts.into_iter().enumerate() {
            if 0 < index {
                joined.push(' ');
            }
            let _ = write!(joined, "{}", part);
        }

        self.paint(joined)
    }

    /// Get this chain's resolved style specification.
    pub fn spec(&self) -> &StyleSpec {
        &self.spec
    }
}

fn resolve_rgb(layer: Layer, level: Level, rgb: (u8, u8, u8)) -> Sgr {
    let (r, g, b) = rgb;
    match level {
        Level::TrueColor => Sgr::Rgb { layer, rgb },
        Level::Ansi256 => Sgr::Indexed {
            layer,
            index: rgb_to_ansi256(r, g, b),
        },
        Level::Basic | Level::None => Sgr::Basic {
            layer,
            code: ansi256_to_ansi16(rgb_to_ansi256(r, g, b)),
        },
    }
}

fn resolve_indexed(layer: Layer, level: Level, index: u8) -> Sgr {
    if level.has_256() {
        Sgr::Indexed { layer, index }
    } else {
        Sgr::Basic {
            layer,
            code: ansi256_to_ansi16(index),
        }
    }
}

// ====================================================================================================================
