//! Output style selection for simulator runs.

use crate::error::RunnerError;
use std::fmt;
use std::str::FromStr;

/// How simulator output is presented.
///
/// `vis` is only meaningful on backends with a waveform visualizer (Questa);
/// elsewhere it degrades to the backend's plain GUI behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Batch run with plain text output (the default).
    #[default]
    Text,
    /// Launch the backend's interactive GUI.
    Gui,
    /// GUI plus the backend's waveform-visualizer arguments.
    Vis,
}

impl OutputStyle {
    /// True if this style launches an interactive session.
    pub fn is_interactive(self) -> bool {
        self != OutputStyle::Text
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputStyle::Text => f.write_str("text"),
            OutputStyle::Gui => f.write_str("gui"),
            OutputStyle::Vis => f.write_str("vis"),
        }
    }
}

impl FromStr for OutputStyle {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputStyle::Text),
            "gui" => Ok(OutputStyle::Gui),
            "vis" => Ok(OutputStyle::Vis),
            _ => Err(RunnerError::UnknownStyle(s.to_string())),
        }
    }
}
