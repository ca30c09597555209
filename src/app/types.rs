//! Type definitions for the application

use strum::{Display, EnumIter, EnumString};

use crate::config::{ANALYZE_LABEL, ANALYZE_PATH, COMPARE_LABEL, COMPARE_PATH};

/// Which backend operation the selection is submitted to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    #[default]
    Analyze,
    Compare,
}

impl Mode {
    /// Get the previous mode, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Self::Analyze => Self::Compare,
            Self::Compare => Self::Analyze,
        }
    }

    /// Get the next mode, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Analyze => Self::Compare,
            Self::Compare => Self::Analyze,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Analyze => "Analyze",
            Self::Compare => "Compare",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Analyze => ANALYZE_LABEL,
            Self::Compare => COMPARE_LABEL,
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Analyze => ANALYZE_PATH,
            Self::Compare => COMPARE_PATH,
        }
    }
}
