use crate::util::EnumExt;
use enum_map::Enum;
use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The names of the available color themes
#[derive(Clone, Copy, Debug, Default, Enum, Eq, Hash, PartialEq)]
pub(crate) enum ThemeName {
    #[default]
    Classic,
    Ocean,
    Sunset,
    Retro,
}

impl ThemeName {
    /// Width of the longest theme name
    pub(crate) const DISPLAY_WIDTH: u16 = 7;

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ThemeName::Classic => "Classic",
            ThemeName::Ocean => "Ocean",
            ThemeName::Sunset => "Sunset",
            ThemeName::Retro => "Retro",
        }
    }

    pub(crate) fn theme(self) -> Theme {
        match self {
            ThemeName::Classic => Theme {
                background: Color::Rgb(0x00, 0x00, 0x00),
                snake: Color::Rgb(0x00, 0xFF, 0x00),
                food: Color::Rgb(0xFF, 0x00, 0x00),
            },
            ThemeName::Ocean => Theme {
                background: Color::Rgb(0x00, 0x1F, 0x3F),
                snake: Color::Rgb(0x7F, 0xDB, 0xFF),
                food: Color::Rgb(0x39, 0xCC, 0xCC),
            },
            ThemeName::Sunset => Theme {
                background: Color::Rgb(0xFB, 0x90, 0x62),
                snake: Color::Rgb(0xCE, 0x49, 0x93),
                food: Color::Rgb(0xEE, 0x5D, 0x6C),
            },
            ThemeName::Retro => Theme {
                background: Color::Rgb(0xF6, 0xDC, 0xAC),
                snake: Color::Rgb(0x02, 0x83, 0x91),
                food: Color::Rgb(0xF8, 0x55, 0x25),
            },
        }
    }

    /// The theme after this one in the selector, wrapping around
    pub(crate) fn cycle_next(self) -> ThemeName {
        self.next().unwrap_or_else(ThemeName::min)
    }

    /// The theme before this one in the selector, wrapping around
    pub(crate) fn cycle_prev(self) -> ThemeName {
        self.prev().unwrap_or_else(ThemeName::max)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = InvalidThemeError;

    /// Theme names are matched case-insensitively
    fn from_str(s: &str) -> Result<ThemeName, InvalidThemeError> {
        ThemeName::iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidThemeError(s.to_owned()))
    }
}

/// The colors used to draw the playfield
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) background: Color,
    pub(crate) snake: Color,
    pub(crate) food: Color,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown theme {0:?}; expected one of Classic, Ocean, Sunset, Retro")]
pub(crate) struct InvalidThemeError(String);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Classic", ThemeName::Classic)]
    #[case("ocean", ThemeName::Ocean)]
    #[case("SUNSET", ThemeName::Sunset)]
    #[case(" Retro ", ThemeName::Retro)]
    fn parse_theme(#[case] s: &str, #[case] name: ThemeName) {
        assert_eq!(s.parse::<ThemeName>(), Ok(name));
    }

    #[rstest]
    #[case("")]
    #[case("Neon")]
    #[case("Classic Ocean")]
    fn parse_unknown_theme(#[case] s: &str) {
        assert_eq!(
            s.parse::<ThemeName>(),
            Err(InvalidThemeError(s.to_owned()))
        );
    }

    #[test]
    fn display_width() {
        let actual_width = ThemeName::iter()
            .map(|name| name.as_str().chars().count())
            .max()
            .unwrap_or_default();
        assert_eq!(actual_width, usize::from(ThemeName::DISPLAY_WIDTH));
    }

    #[test]
    fn cycle() {
        assert_eq!(ThemeName::Classic.cycle_next(), ThemeName::Ocean);
        assert_eq!(ThemeName::Retro.cycle_next(), ThemeName::Classic);
        assert_eq!(ThemeName::Classic.cycle_prev(), ThemeName::Retro);
        assert_eq!(ThemeName::Sunset.cycle_prev(), ThemeName::Ocean);
    }

    #[test]
    fn classic_colors() {
        let theme = ThemeName::Classic.theme();
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.snake, Color::Rgb(0, 255, 0));
        assert_eq!(theme.food, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn colors_from_hex() {
        for (name, hex) in [
            (ThemeName::Ocean, "#001f3f"),
            (ThemeName::Sunset, "#FB9062"),
            (ThemeName::Retro, "#F6DCAC"),
        ] {
            assert_eq!(hex.parse::<Color>().ok(), Some(name.theme().background));
        }
    }
}
