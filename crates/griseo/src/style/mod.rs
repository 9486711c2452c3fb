//! Terminal text styling with ANSI SGR escape sequences.
//!
//! This module supports styling terminal output through [`Chain`]s, immutable
//! builders that accumulate text attributes and colors, and [`Brush`]es,
//! which tie chains to a shared support [`Level`] and formatter cache.
//!
//! It also defines [`Layer`] to distinguish between foreground and background
//! colors, [`Attribute`] and [`AnsiColor`] for the individual styles, and
//! [`StyleSpec`] as the resolved, order-preserving style combination.
//!
//!
//! # The One-Two-Three of Styling
//!
//! The three steps for styling text are:
//!
//!  1. Get a chain, either from the process-wide [`brush()`](crate::brush)
//!     or from an explicitly configured [`Brush`].
//!  2. Fluently derive a styled chain with builder methods such as
//!     [`Chain::red`], [`Chain::bg_green`], or [`Chain::bold`].
//!  3. Apply the chain to text with [`Chain::paint`], which wraps the text
//!     in opening and closing escape sequences, or leaves it alone when
//!     colors are disabled.
//!
//!
//! # Examples
//!
//! Style bold red text on a terminal with basic color support:
//! ```
//! # use griseo::style::{Brush, Level};
//! let chain = Brush::new(Level::Basic).chain();
//! assert_eq!(
//!     chain.red().bold().paint("error"),
//!     "\x1b[31m\x1b[1merror\x1b[22m\x1b[39m"
//! );
//! ```
//!
//! When chaining, order doesn't matter, and later styles win conflicts, so
//! `red().green()` is just `green()`:
//! ```
//! # use griseo::style::{Brush, Level};
//! # let chain = Brush::new(Level::Basic).chain();
//! assert_eq!(chain.red().green().paint("go"), chain.green().paint("go"));
//! ```
//!
//! True-color requests degrade to the closest supported color. The same hex
//! color renders as a 24-bit sequence, an 8-bit index, or a bright ANSI
//! color, depending on the level:
//! ```
//! # use griseo::style::{Brush, Level};
//! let full = Brush::new(Level::TrueColor).chain();
//! assert_eq!(full.hex("#FF0000").paint("hot"), "\x1b[38;2;255;0;0mhot\x1b[39m");
//!
//! let basic = Brush::new(Level::Basic).chain();
//! assert_eq!(basic.hex("#FF0000").paint("hot"), "\x1b[91mhot\x1b[39m");
//! ```

mod chain;
mod context;
mod sgr;

pub use chain::{brush, brush_stderr, Brush, Chain};
pub use context::{Layer, Level};
pub use sgr::{
    named_color, AnsiColor, Attribute, Channel, Sgr, StyleSpec, BACKGROUND_COLOR_NAMES,
    FOREGROUND_COLOR_NAMES, MODIFIER_NAMES,
};
