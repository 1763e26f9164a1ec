use perfil_core::models::answer::{AnswerEntry, AnswerSet, QuestionId};
use perfil_core::models::variant::Variant;
use perfil_export::document::{
    ExportFormat, ExportSection, export, export_filename, render_doc_html, render_markdown,
};
use perfil_export::docx::generate_docx;
use perfil_export::render::{render_report, render_template};
use perfil_export::styles::DocumentStyles;
use perfil_instruments::instrument_for;

fn sections() -> Vec<ExportSection> {
    vec![
        ExportSection {
            heading: "Sinopsis".to_string(),
            body: "Una novela sobre faros.\n\nSegundo párrafo.".to_string(),
        },
        ExportSection {
            heading: "Personajes <principales>".to_string(),
            body: "Ana & Luis\nMarta".to_string(),
        },
    ]
}

fn sample_report() -> perfil_core::models::report::AssessmentReport {
    let instrument = instrument_for(Variant::Fiction);
    let mut answers = AnswerSet::new();
    for (a, axis) in instrument.axes().iter().enumerate() {
        for (q, _) in axis.questions.iter().enumerate() {
            answers.record(QuestionId::new(a, q), AnswerEntry::new(0, a));
        }
    }
    for (a, points) in [85, 70, 45, 20].into_iter().enumerate() {
        answers.record(QuestionId::new(a, 0), AnswerEntry::new(points, a));
    }
    instrument.evaluate(&answers).unwrap()
}

#[test]
fn filename_strips_non_alphanumerics_and_lowercases() {
    assert_eq!(
        export_filename("Mi Novela: Parte 2!", ExportFormat::Markdown),
        "minovelaparte2.md"
    );
    assert_eq!(export_filename("El Faro", ExportFormat::Doc), "elfaro.doc");
    assert_eq!(export_filename("¿¡ !?", ExportFormat::Docx), "documento.docx");
}

#[test]
fn markdown_separates_sections() {
    let markdown = render_markdown("El Faro", &sections());

    assert!(markdown.starts_with("# El Faro\n\n## Sinopsis\n\n"));
    assert_eq!(markdown.matches("\n---\n").count(), 1);
    assert!(markdown.contains("## Personajes <principales>"));
}

#[test]
fn doc_html_escapes_and_splits_paragraphs() {
    let html = render_doc_html("El Faro", &sections());

    assert!(html.starts_with("<html xmlns:o='urn:schemas-microsoft-com:office:office'"));
    assert!(html.contains("<title>El Faro</title>"));
    assert!(html.contains("<h2>Personajes &lt;principales&gt;</h2>"));
    assert!(html.contains("<p>Una novela sobre faros.</p><p>Segundo párrafo.</p>"));
    assert!(html.contains("<p>Ana &amp; Luis<br>Marta</p>"));
    assert!(html.ends_with("</body></html>"));
}

#[test]
fn export_reports_filename_and_content_type() {
    let artifact = export("El Faro", &sections(), ExportFormat::Doc).unwrap();
    assert_eq!(artifact.filename, "elfaro.doc");
    assert_eq!(artifact.content_type, "application/msword");
    assert!(!artifact.bytes.is_empty());
}

#[test]
fn docx_output_is_a_zip_package() {
    let bytes = generate_docx(
        "# Title\n\n- **bold** item\n\n---\n\nBody with **emphasis",
        &DocumentStyles::default(),
    )
    .unwrap();
    assert_eq!(&bytes[..2], b"PK");

    let artifact = export("El Faro", &sections(), ExportFormat::Docx).unwrap();
    assert_eq!(artifact.filename, "elfaro.docx");
    assert_eq!(&artifact.bytes[..2], b"PK");
}

#[test]
fn report_template_lists_scores_breakdown_and_recommendations() {
    let rendered = render_report(&sample_report()).unwrap();

    assert!(rendered.starts_with("# Assessment para Autores de Ficción (Novela)"));
    assert!(rendered.contains("**220 / 400**: Marca Personal Inicial"));
    assert!(rendered.contains("- **Voz Editorial**: 85 / 100 (FORTALEZA)"));
    assert!(rendered.contains("- **Comunidad**: 20 / 100 (DEBILIDAD CRÍTICA)"));
    assert!(rendered.contains("- Alto rendimiento en **Voz Editorial** (85 pts)"));
    assert!(rendered.contains("### EJE 4: COMUNIDAD Y CONECTIVIDAD (20 pts)"));
    assert!(rendered.contains("**Acción recomendada:** Fundamentos"));
}

#[test]
fn custom_templates_see_report_fields() {
    let rendered = render_template(
        "summary.txt",
        "{{ variant }}:{{ total }}:{{ scores | length }}",
        &sample_report(),
    )
    .unwrap();
    assert_eq!(rendered, "fiction:220:4");
}

#[test]
fn broken_templates_surface_parse_errors() {
    let err = render_template("bad.md", "{% for %}", &sample_report()).unwrap_err();
    assert!(matches!(err, perfil_export::error::ExportError::TemplateParse(_)));
}
