use clap::ValueEnum;
use serde::Serialize;

use crate::command::Cli;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub(crate) enum Output {
    JSON,
    YAML,
    None,
}

pub struct RenderConfig {
    pub output: Output,
    pub quiet: bool,
}

impl RenderConfig {
    pub fn new(cli: &Cli) -> Self {
        Self {
            output: cli.output,
            quiet: cli.quiet,
        }
    }

    /// Formats a single value for stdout, or `None` when nothing should be printed.
    pub fn format<T: Serialize>(&self, value: &T) -> color_eyre::eyre::Result<Option<String>> {
        if self.quiet {
            return Ok(None);
        }

        let text = match self.output {
            // One compact document per line so the output can be streamed
            Output::JSON => serde_json::to_string(value)?,
            Output::YAML => format!("---\n{}", serde_yaml::to_string(value)?.trim_end()),
            Output::None => return Ok(None),
        };

        Ok(Some(text))
    }

    /// Prints a single value. Failures are logged rather than returned, as rendering happens
    /// from inside dispatch callbacks.
    pub fn render<T: Serialize>(&self, value: &T) {
        match self.format(value) {
            Ok(Some(text)) => println!("{text}"),
            Ok(None) => {}
            Err(error) => tracing::error!(%error, "Failed to render output"),
        }
    }
}
