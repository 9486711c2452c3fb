use crate::error::OutOfBoundsError;

/// The targeted display layer: Foreground or background.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background layer.
    Background,
}

impl Layer {
    /// Determine whether this layer is the foreground.
    pub fn is_foreground(&self) -> bool {
        matches!(self, Self::Foreground)
    }

    /// Determine whether this layer is the background.
    pub fn is_background(&self) -> bool {
        matches!(self, Self::Background)
    }

    /// Determine the offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colors
    /// and therefore zero for [`Layer::Foreground`].
    pub fn offset(&self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

/// A terminal's level of color support.
///
/// This enumeration captures the four levels of the [termstandard colors
/// taxonomy](https://github.com/termstandard/colors). It usually reflects the
/// capabilities of the terminal attached to an output stream, as produced by
/// [`color_support`](crate::supports::color_support), but it can equally
/// represent a user preference, notably [`Level::None`] for suppressing
/// color altogether.
///
/// Levels are ordered: a terminal at some level renders every color family
/// at or below it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// All colors disabled; text renders unstyled.
    #[default]
    None = 0,
    /// The 16 basic ANSI colors.
    Basic = 1,
    /// 8-bit indexed colors, i.e., the 256-color palette.
    Ansi256 = 2,
    /// 24-bit RGB, i.e., truecolor.
    TrueColor = 3,
}

impl Level {
    /// Determine whether this level supports the 16 basic colors.
    pub fn has_basic(&self) -> bool {
        Level::Basic <= *self
    }

    /// Determine whether this level supports 8-bit indexed colors.
    pub fn has_256(&self) -> bool {
        Level::Ansi256 <= *self
    }

    /// Determine whether this level supports 24-bit RGB colors.
    pub fn has_16m(&self) -> bool {
        Level::TrueColor <= *self
    }
}

impl TryFrom<u8> for Level {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let level = match value {
            0 => Level::None,
            1 => Level::Basic,
            2 => Level::Ansi256,
            3 => Level::TrueColor,
            _ => return Err(OutOfBoundsError::new(value, 0..=3)),
        };

        Ok(level)
    }
}

impl From<Level> for u8 {
    fn from(value: Level) -> u8 {
        value as u8
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_level() {
        assert_eq!(Level::try_from(0), Ok(Level::None));
        assert_eq!(Level::try_from(3), Ok(Level::TrueColor));
        assert!(Level::try_from(4).is_err());

        assert!(Level::None < Level::Basic);
        assert!(Level::Ansi256 < Level::TrueColor);

        assert!(!Level::None.has_basic());
        assert!(Level::Basic.has_basic());
        assert!(!Level::Basic.has_256());
        assert!(Level::Ansi256.has_256());
        assert!(!Level::Ansi256.has_16m());
        assert!(Level::TrueColor.has_16m());
    }

    #[test]
    fn test_layer() {
        assert!(Layer::Foreground.is_foreground());
        assert!(Layer::Background.is_background());
        assert_eq!(Layer::Foreground.offset(), 0);
        assert_eq!(Layer::Background.offset(), 10);
    }
}
