use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative band for the questionnaire total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TotalBand {
    /// 320 and above.
    Consolidated,
    /// 240 to 319.
    Developing,
    /// 160 to 239. The default band.
    Initial,
    /// Below 160.
    Undefined,
}

impl TotalBand {
    /// Heading shown on the score summary.
    pub fn label(&self) -> &'static str {
        match self {
            TotalBand::Consolidated => "Marca Personal Consolidada",
            TotalBand::Developing => "Marca Personal en Desarrollo",
            TotalBand::Initial => "Marca Personal Inicial",
            TotalBand::Undefined => "Sin Marca Personal Definida",
        }
    }

    /// Compact status sent with relayed results.
    pub fn short_label(&self) -> &'static str {
        match self {
            TotalBand::Consolidated => "Consolidada",
            TotalBand::Developing => "En Desarrollo",
            TotalBand::Initial => "Inicial",
            TotalBand::Undefined => "No definida",
        }
    }
}

/// Qualitative band for a single axis score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AxisBand {
    /// 80 and above.
    Strength,
    /// 60 to 79.
    Competent,
    /// 40 to 59.
    Weakness,
    /// Below 40.
    CriticalWeakness,
}

impl AxisBand {
    pub fn label(&self) -> &'static str {
        match self {
            AxisBand::Strength => "FORTALEZA",
            AxisBand::Competent => "COMPETENTE",
            AxisBand::Weakness => "DEBILIDAD",
            AxisBand::CriticalWeakness => "DEBILIDAD CRÍTICA",
        }
    }
}
