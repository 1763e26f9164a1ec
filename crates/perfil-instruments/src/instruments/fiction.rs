use perfil_core::models::variant::Variant;

use super::{axis, question};
use crate::Instrument;
use crate::scoring::Axis;

/// Assessment for fiction authors (novelists).
/// Editorial voice, audience, authority and community axes; 100 points each.
pub struct Fiction;

impl Instrument for Fiction {
    fn variant(&self) -> Variant {
        Variant::Fiction
    }

    fn name(&self) -> &str {
        "Assessment para Autores de Ficción (Novela)"
    }

    fn axes(&self) -> &[Axis] {
        static AXES: std::sync::LazyLock<Vec<Axis>> = std::sync::LazyLock::new(|| {
            vec![
                axis(
                    "EJE 1: IDENTIDAD Y VOZ EDITORIAL",
                    "Voz Editorial",
                    vec![
                        question(
                            "Claridad de tu voz narrativa única",
                            &[
                                ("Voz distintiva y consistente", 10),
                                ("Definida pero evoluciona", 7),
                                ("Explorando/Varía", 4),
                                ("No tengo claridad", 0),
                            ],
                        ),
                        question(
                            "Coherencia temática en tu obra",
                            &[
                                ("Temas centrales claros", 10),
                                ("Temas relacionados", 7),
                                ("Diversos sin conexión", 4),
                                ("Sin temas recurrentes", 0),
                            ],
                        ),
                        question(
                            "Tono emocional consistente",
                            &[
                                ("Distintivo y consistente", 5),
                                ("Variaciones", 3),
                                ("Cambia significativamente", 0),
                            ],
                        ),
                        question(
                            "Especialización en género",
                            &[
                                ("Género específico y demandado", 15),
                                ("Género popular, no especializado", 10),
                                ("Múltiples géneros", 5),
                                ("Sin claridad", 0),
                            ],
                        ),
                        question(
                            "Alineación tendencias 2026",
                            &[
                                ("Alta demanda (Romantasy, Thriller, etc)", 10),
                                ("Demanda moderada", 5),
                                ("Baja demanda/Nicho", 0),
                            ],
                        ),
                        question(
                            "Transparencia proceso",
                            &[
                                ("Comparto regularmente", 10),
                                ("Ocasionalmente", 7),
                                ("Raramente", 3),
                                ("Nunca", 0),
                            ],
                        ),
                        question(
                            "Conexión personal",
                            &[
                                ("Conexión profunda y comunicada", 10),
                                ("Conexión pero no comunicada", 7),
                                ("Entretenimiento puro", 3),
                                ("Sin conexión", 0),
                            ],
                        ),
                        question(
                            "Propósito inspirador",
                            &[
                                ("Claro y compartido", 5),
                                ("No articulado", 3),
                                ("No definido", 0),
                            ],
                        ),
                        question(
                            "Coherencia visual",
                            &[
                                ("Identidad consistente todas plataformas", 10),
                                ("Elementos visuales parciales", 7),
                                ("Estética diferente por plataforma", 3),
                                ("Sin identidad", 0),
                            ],
                        ),
                        question(
                            "Promesa al lector",
                            &[
                                ("Experiencia clara definida", 10),
                                ("Expectativas generales", 7),
                                ("Obras diversas/confuso", 3),
                                ("No establecida", 0),
                            ],
                        ),
                        question(
                            "Tagline de marca",
                            &[
                                ("Memorable y efectivo", 5),
                                ("Existe pero no memorable", 3),
                                ("No tengo", 0),
                            ],
                        ),
                    ],
                ),
                axis(
                    "EJE 2: AUDIENCIA Y NICHO",
                    "Audiencia",
                    vec![
                        question(
                            "Claridad lector ideal",
                            &[
                                ("Avatar detallado", 15),
                                ("Perfil general", 10),
                                ("Idea vaga", 5),
                                ("No definido", 0),
                            ],
                        ),
                        question(
                            "Alineación libro-lector",
                            &[
                                ("Diseñado para avatar", 10),
                                ("Alineación general", 7),
                                ("Lo que me gusta a mí", 3),
                                ("No considero audiencia", 0),
                            ],
                        ),
                        question(
                            "Necesidades emocionales",
                            &[
                                ("Sé exactamente qué satisfago", 10),
                                ("Idea general", 7),
                                ("No analizado", 3),
                                ("Desconozco", 0),
                            ],
                        ),
                        question(
                            "Seguidores totales",
                            &[
                                ("10,000+", 15),
                                ("5,000-10,000", 10),
                                ("1,000-5,000", 5),
                                ("500-1,000", 2),
                                ("<500", 0),
                            ],
                        ),
                        question(
                            "Engagement Rate",
                            &[
                                ("Por encima benchmark", 10),
                                ("Promedio", 7),
                                ("Debajo", 3),
                                ("No mido", 0),
                            ],
                        ),
                        question(
                            "Tamaño Newsletter",
                            &[
                                ("5,000+", 10),
                                ("1,000-5,000", 7),
                                ("500-1,000", 4),
                                ("100-500", 2),
                                ("<100/Nada", 0),
                            ],
                        ),
                        question(
                            "Uso Pinterest",
                            &[
                                ("Activo optimizado", 10),
                                ("Sin estrategia", 7),
                                ("Irregular", 3),
                                ("No uso", 0),
                            ],
                        ),
                        question(
                            "Estrategia Newsletter",
                            &[
                                ("Activa con lead magnets y ventas", 10),
                                ("Activa sin monetización", 7),
                                ("Irregular", 3),
                                ("No tengo", 0),
                            ],
                        ),
                        question(
                            "TikTok/Reels Aesthetic",
                            &[
                                ("Regular con engagement", 10),
                                ("Ocasional", 7),
                                ("Probado sin consistencia", 3),
                                ("No uso", 0),
                            ],
                        ),
                    ],
                ),
                axis(
                    "EJE 3: AUTORIDAD Y PRUEBA SOCIAL",
                    "Autoridad",
                    vec![
                        question(
                            "Libros publicados",
                            &[("5+", 15), ("3-4", 10), ("2", 7), ("1", 4), ("0", 0)],
                        ),
                        question(
                            "Ventas totales",
                            &[
                                ("50,000+", 15),
                                ("10k-50k", 10),
                                ("5k-10k", 7),
                                ("1k-5k", 4),
                                ("<1k", 0),
                            ],
                        ),
                        question(
                            "Modelo publicación",
                            &[
                                ("Tradicional prestigio / Bestseller", 10),
                                ("Media / Ventas consistentes", 7),
                                ("Pequeña / Modestas", 4),
                                ("Sin publicar", 0),
                            ],
                        ),
                        question(
                            "Reseñas Goodreads",
                            &[
                                ("500+ (4.0+)", 10),
                                ("200-500 (3.8+)", 7),
                                ("50-200 (3.5+)", 4),
                                ("<50", 2),
                                ("Sin presencia", 0),
                            ],
                        ),
                        question(
                            "Reseñas Amazon",
                            &[
                                ("200+ (4.5+)", 10),
                                ("100-200 (4.0+)", 7),
                                ("50-100 (3.5+)", 4),
                                ("<50", 2),
                                ("Sin reseñas", 0),
                            ],
                        ),
                        question(
                            "Premios",
                            &[
                                ("Nacional/Intl", 10),
                                ("Regional/Mención", 7),
                                ("Antologías prestigio", 3),
                                ("Ninguno", 0),
                            ],
                        ),
                        question(
                            "Coherencia Portadas",
                            &[
                                ("Profesionales y claras", 10),
                                ("Buenas con inconsistencias", 7),
                                ("Variable", 3),
                                ("Amateur", 0),
                            ],
                        ),
                        question(
                            "Foto Autor",
                            &[
                                ("Profesional high-quality", 5),
                                ("Decente", 3),
                                ("No tengo", 0),
                            ],
                        ),
                        question(
                            "BookTok/Tube Presencia",
                            &[
                                ("Activa con menciones", 10),
                                ("Moderada", 7),
                                ("Mínima", 3),
                                ("Ninguna", 0),
                            ],
                        ),
                        question(
                            "Website Autor",
                            &[
                                ("Profesional actualizado", 5),
                                ("Básico", 3),
                                ("No tengo", 0),
                            ],
                        ),
                    ],
                ),
                axis(
                    "EJE 4: COMUNIDAD Y CONECTIVIDAD",
                    "Comunidad",
                    vec![
                        question(
                            "Colaboraciones",
                            &[
                                ("Regular (antologías, podcasts)", 15),
                                ("Algunas", 10),
                                ("1-2 veces", 5),
                                ("Ninguna", 0),
                            ],
                        ),
                        question(
                            "Networking",
                            &[
                                ("Miembro activo comunidades", 10),
                                ("Ocasional", 7),
                                ("Poco activo", 3),
                                ("No participo", 0),
                            ],
                        ),
                        question(
                            "Intercambio Audiencias",
                            &[
                                ("Cross-promotion efectiva", 10),
                                ("Intentos mixtos", 7),
                                ("No estratégico", 3),
                                ("No explorado", 0),
                            ],
                        ),
                        question(
                            "Respuesta fans",
                            &[
                                ("Consistente", 15),
                                ("Frecuente", 10),
                                ("Ocasional", 5),
                                ("Rara vez", 0),
                            ],
                        ),
                        question(
                            "Dinámicas participativas",
                            &[
                                ("Regularmente involucre a lectores", 10),
                                ("Algunas veces", 7),
                                ("Rara vez", 3),
                                ("Nunca", 0),
                            ],
                        ),
                        question(
                            "Comunidad leal",
                            &[
                                ("Street team / Core group", 10),
                                ("Lectores recurrentes", 7),
                                ("Algunos", 3),
                                ("No construida", 0),
                            ],
                        ),
                        question(
                            "Habilidades digitales",
                            &[
                                ("Domino múltiples", 10),
                                ("Decente", 7),
                                ("Básico", 4),
                                ("Limitado", 0),
                            ],
                        ),
                        question(
                            "Craft escritura",
                            &[
                                ("Excepcional", 10),
                                ("Sólido", 7),
                                ("En desarrollo", 4),
                                ("Básico", 0),
                            ],
                        ),
                        question(
                            "Speaking/Presentaciones",
                            &[
                                ("Experiencia, cómodo", 5),
                                ("Dispuesto a aprender", 3),
                                ("Incómodo", 0),
                            ],
                        ),
                        question(
                            "Personalidad",
                            &[
                                ("Carismática, conecto fácil", 5),
                                ("Requiere esfuerzo", 3),
                                ("Me cuesta", 0),
                            ],
                        ),
                    ],
                ),
            ]
        });
        &AXES
    }
}
