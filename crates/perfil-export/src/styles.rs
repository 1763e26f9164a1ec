use serde::{Deserialize, Serialize};

/// Fonts and sizes applied to DOCX exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    pub body_font: String,
    pub heading_font: String,

    /// Sizes in points.
    pub body_size: usize,
    pub title_size: usize,
    pub section_size: usize,
    pub subsection_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Georgia".to_string(),
            heading_font: "Helvetica".to_string(),
            body_size: 11,
            title_size: 20,
            section_size: 15,
            subsection_size: 12,
        }
    }
}
