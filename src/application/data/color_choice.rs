use clap::ValueEnum;
use supports_color::Stream;

use crate::diagram::Palette;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves `Auto` by asking whether stdout supports color.
    pub fn palette(self) -> Palette {
        let colored = match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => supports_color::on(Stream::Stdout).is_some(),
        };
        if colored {
            Palette::Colored
        } else {
            Palette::Plain
        }
    }
}
