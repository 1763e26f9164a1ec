use serde::{Deserialize, Serialize};
use tera::escape_html;

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::styles::DocumentStyles;

const FALLBACK_FILENAME: &str = "documento";

/// One stored text field, exported under its own heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSection {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// HTML wrapped with Office namespaces; word processors open it as a
    /// document.
    Doc,
    Markdown,
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Doc => "doc",
            ExportFormat::Markdown => "md",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Doc => "application/msword",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// A finished export, ready to be offered as a download.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Concatenate sections into a single artifact of the requested format.
pub fn export(
    title: &str,
    sections: &[ExportSection],
    format: ExportFormat,
) -> Result<Artifact, ExportError> {
    let bytes = match format {
        ExportFormat::Doc => render_doc_html(title, sections).into_bytes(),
        ExportFormat::Markdown => render_markdown(title, sections).into_bytes(),
        ExportFormat::Docx => {
            generate_docx(&render_markdown(title, sections), &DocumentStyles::default())?
        }
    };

    let filename = export_filename(title, format);
    tracing::info!(
        filename = %filename,
        sections = sections.len(),
        bytes = bytes.len(),
        "document exported"
    );

    Ok(Artifact {
        filename,
        content_type: format.content_type(),
        bytes,
    })
}

/// `# title`, then `## heading` + body per section, separated by `---`.
pub fn render_markdown(title: &str, sections: &[ExportSection]) -> String {
    let body = sections
        .iter()
        .map(|s| format!("## {}\n\n{}", s.heading, s.body.trim_end()))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n");

    format!("# {title}\n\n{body}\n")
}

pub fn render_doc_html(title: &str, sections: &[ExportSection]) -> String {
    let title = escape_html(title);
    let mut html = format!(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
         xmlns:w='urn:schemas-microsoft-com:office:word' \
         xmlns='http://www.w3.org/TR/REC-html40'>\
         <head><meta charset='utf-8'><title>{title}</title></head><body>\
         <h1>{title}</h1>"
    );

    for section in sections {
        html.push_str(&format!("<h2>{}</h2>", escape_html(&section.heading)));
        for paragraph in section.body.split("\n\n").filter(|p| !p.trim().is_empty()) {
            let lines: Vec<String> = paragraph.trim().lines().map(escape_html).collect();
            html.push_str(&format!("<p>{}</p>", lines.join("<br>")));
        }
    }

    html.push_str("</body></html>");
    html
}

/// Lower-cased ASCII alphanumerics of the title plus the format extension.
pub fn export_filename(title: &str, format: ExportFormat) -> String {
    let stem: String = title
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let stem = if stem.is_empty() {
        FALLBACK_FILENAME
    } else {
        &stem
    };
    format!("{stem}.{}", format.extension())
}
