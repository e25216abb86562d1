use clap::ValueEnum;
use color_eyre::{
    Result,
    config::{HookBuilder, Theme},
};

/// When to emit colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Color {
    /// Never color
    No,
    /// Always color
    Yes,
    /// Color when stdout is a terminal that supports it
    Auto,
}

impl Color {
    /// Resolves `Auto` against the current stdout.
    pub fn is_enabled(self) -> bool {
        match self {
            Color::No => false,
            Color::Yes => true,
            Color::Auto => supports_color::on(supports_color::Stream::Stdout).is_some(),
        }
    }
}

/// Installs the color-eyre panic and error report handlers, honouring `color`.
pub fn install_color_eyre(color: Color) -> Result<()> {
    if color.is_enabled() {
        color_eyre::install()
    } else {
        // Use an empty theme to disable error coloring
        HookBuilder::new().theme(Theme::new()).install()
    }
}
