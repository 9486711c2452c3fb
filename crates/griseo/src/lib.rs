//! # Griseo
//!
//! Griseo paints terminal text with ANSI SGR escape sequences, no matter
//! whether the terminal renders 16 million colors or none at all.
//!
//!
//! ## Overview
//!
//! Griseo's main abstractions are:
//!
//!   * [`Chain`] implements the **chainable style builder**. Chains are
//!     immutable values: every builder method, say [`Chain::red`] or
//!     [`Chain::bold`], derives a new chain, and [`Chain::paint`] wraps text
//!     in the accumulated escape sequences. Order doesn't matter while
//!     chaining, and later styles win conflicts.
//!   * [`Brush`] ties chains to a support [`Level`] and a formatter cache.
//!     The process-wide [`brush()`] and [`brush_stderr()`] detect their
//!     level from the environment; explicit brushes pin it.
//!   * [`Level`] captures a terminal's color support, from [`Level::None`]
//!     through the 16 ANSI colors and the 8-bit cube up to 24-bit RGB.
//!     True-color requests such as [`Chain::hex`] degrade to the closest
//!     color the level supports, with the conversions in [`convert`].
//!   * [`supports`](crate::supports) implements **capability detection** for
//!     an output stream, honoring `FORCE_COLOR`, `NO_COLOR`, command line
//!     flags, CI vendors, and the terminal's own advertisements.
//!
//! Styled text nests and wraps cleanly: painting over already-painted text
//! re-opens the outer style where the inner one closed it, and every line of
//! a multi-line payload is wrapped on its own, which keeps output legible
//! when lines are filtered, padded, or reflowed downstream.
//!
//!
//! ## Example
//!
//! ```
//! use griseo::{Brush, Level};
//!
//! let chain = Brush::new(Level::TrueColor).chain();
//! assert_eq!(chain.red().paint("alert"), "\x1b[31malert\x1b[39m");
//! assert_eq!(
//!     chain.hex("#DEADED").bg_black().paint("velvet"),
//!     "\x1b[38;2;222;173;237m\x1b[40mvelvet\x1b[49m\x1b[39m"
//! );
//! ```
//!
//! In application code, prefer the process-wide [`brush()`], which styles
//! only when the standard output actually supports it:
//!
//! ```no_run
//! use griseo::brush;
//!
//! println!("{}", brush().green().bold().paint("success"));
//! ```

mod cache;
pub mod convert;
pub mod error;
mod render;
pub mod style;
pub mod supports;

pub use style::{brush, brush_stderr, Brush, Chain, Level};
