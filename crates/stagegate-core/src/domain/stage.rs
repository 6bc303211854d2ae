//! Pipeline stages (the matrix columns).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ParseStageError;

/// Ordered pipeline phase. Declaration order is the column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    Acquisition,
    Eho,
    Development,
    Presentation,
    Calibration,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 5] = [
        PipelineStage::Acquisition,
        PipelineStage::Eho,
        PipelineStage::Development,
        PipelineStage::Presentation,
        PipelineStage::Calibration,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PipelineStage::Acquisition => "acquisition",
            PipelineStage::Eho => "eho",
            PipelineStage::Development => "development",
            PipelineStage::Presentation => "presentation",
            PipelineStage::Calibration => "calibration",
        }
    }

    /// Column header label.
    pub const fn label(self) -> &'static str {
        match self {
            PipelineStage::Acquisition => "Adquisición",
            PipelineStage::Eho => "EHO",
            PipelineStage::Development => "Desarrollo",
            PipelineStage::Presentation => "Presentación",
            PipelineStage::Calibration => "Calibración",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineStage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PipelineStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| ParseStageError(s.to_string()))
    }
}
