use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

const HEADINGS: [(&str, &str); 3] = [
    ("# ", "Heading1"),
    ("## ", "Heading2"),
    ("### ", "Heading3"),
];

/// Convert the markdown subset produced by this crate into DOCX bytes.
///
/// Recognised, line by line:
/// - `#`, `##`, `###` headings
/// - `- item` bullets
/// - `---` / `***` page breaks
/// - `**bold**` inline, anywhere
///
/// Anything else becomes a body paragraph.
pub fn generate_docx(markdown: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.title_size))
        .add_style(heading_style("Heading2", "heading 2", styles.section_size))
        .add_style(heading_style("Heading3", "heading 3", styles.subsection_size));

    for line in markdown.lines() {
        docx = docx.add_paragraph(paragraph_for(line.trim(), styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(bytes = buf.get_ref().len(), "docx generated");
    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // half-points
}

fn paragraph_for(line: &str, styles: &DocumentStyles) -> Paragraph {
    if line.is_empty() {
        return Paragraph::new();
    }
    if line == "---" || line == "***" {
        return Paragraph::new().add_run(Run::new().add_break(BreakType::Page));
    }

    for (prefix, style_id) in HEADINGS {
        if let Some(text) = line.strip_prefix(prefix) {
            return add_runs(
                Paragraph::new().style(style_id),
                inline_runs(text, &styles.heading_font, None),
            );
        }
    }

    let body_size = Some(styles.body_size * 2);
    let para = Paragraph::new().align(AlignmentType::Left);
    match line.strip_prefix("- ") {
        Some(item) => {
            let bullet = Run::new()
                .add_text("\u{2022} ")
                .fonts(RunFonts::new().ascii(&styles.body_font));
            add_runs(
                para.add_run(bullet),
                inline_runs(item, &styles.body_font, body_size),
            )
        }
        None => add_runs(para, inline_runs(line, &styles.body_font, body_size)),
    }
}

fn add_runs(mut para: Paragraph, runs: Vec<Run>) -> Paragraph {
    for run in runs {
        para = para.add_run(run);
    }
    para
}

/// Split on `**` markers; odd segments are bold. An unmatched trailing
/// marker is kept as literal text.
fn inline_runs(text: &str, font: &str, half_points: Option<usize>) -> Vec<Run> {
    let segments: Vec<&str> = text.split("**").collect();
    let unclosed = segments.len() % 2 == 0;
    let last = segments.len() - 1;

    segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(i, segment)| {
            let literal = unclosed && i == last;
            let content = if literal {
                format!("**{segment}")
            } else {
                segment.to_string()
            };
            let mut run = Run::new()
                .add_text(content)
                .fonts(RunFonts::new().ascii(font));
            if i % 2 == 1 && !literal {
                run = run.bold();
            }
            if let Some(size) = half_points {
                run = run.size(size);
            }
            run
        })
        .collect()
}

