use perfil_core::models::variant::Variant;

use super::{axis, question};
use crate::Instrument;
use crate::scoring::Axis;

/// Assessment for nonfiction authors (essayists, subject-matter experts).
/// Identity, platform, credibility and monetization axes; 100 points each.
pub struct Nonfiction;

impl Instrument for Nonfiction {
    fn variant(&self) -> Variant {
        Variant::Nonfiction
    }

    fn name(&self) -> &str {
        "Assessment para Autores de No Ficción (Ensayo/Expertos)"
    }

    fn axes(&self) -> &[Axis] {
        static AXES: std::sync::LazyLock<Vec<Axis>> = std::sync::LazyLock::new(|| {
            vec![
                axis(
                    "EJE 1: IDENTIDAD Y AUTORIDAD",
                    "Identidad/Autoridad",
                    vec![
                        question(
                            "Claridad Expertise",
                            &[
                                ("Nicho específico definido", 15),
                                ("General", 10),
                                ("Amplia", 5),
                                ("No definido", 0),
                            ],
                        ),
                        question(
                            "Demanda Temática",
                            &[
                                ("Alta demanda tendencia 2026", 15),
                                ("Moderada", 10),
                                ("Nicho limitado", 5),
                                ("Baja/Saturado", 0),
                            ],
                        ),
                        question(
                            "Formación Académica",
                            &[
                                ("Doctorado/Máster", 10),
                                ("Licenciatura", 7),
                                ("Autodidacta+Certs", 4),
                                ("Sin formal", 0),
                            ],
                        ),
                        question(
                            "Experiencia Pro",
                            &[
                                ("10+ años", 15),
                                ("5-10 años", 10),
                                ("2-5 años", 6),
                                ("<2 años", 3),
                                ("Sin experiencia", 0),
                            ],
                        ),
                        question(
                            "Credenciales Extra",
                            &[
                                ("Múltiples reconocidas", 5),
                                ("Alguna", 3),
                                ("Ninguna", 0),
                            ],
                        ),
                        question(
                            "Propósito Claro",
                            &[
                                ("Transformacional comunicado", 10),
                                ("No público", 7),
                                ("Vago", 3),
                                ("No definido", 0),
                            ],
                        ),
                        question(
                            "Promesa Valor",
                            &[
                                ("Específica y medible", 10),
                                ("General", 7),
                                ("Confusa", 3),
                                ("No definida", 0),
                            ],
                        ),
                        question(
                            "Metodología Propia",
                            &[
                                ("Framework único con nombre", 5),
                                ("Enfoque particular", 3),
                                ("No tengo", 0),
                            ],
                        ),
                        question(
                            "Thought Leadership",
                            &[
                                ("Reconocido y citado", 10),
                                ("Construyendo", 7),
                                ("Sin posicionamiento", 3),
                                ("No trabajo activo", 0),
                            ],
                        ),
                        question(
                            "Innovación",
                            &[
                                ("Perspectiva novedosa", 5),
                                ("Sólida pero común", 3),
                                ("Similar a otros", 0),
                            ],
                        ),
                    ],
                ),
                axis(
                    "EJE 2: AUDIENCIA Y PLATAFORMA",
                    "Audiencia/Plat",
                    vec![
                        question(
                            "Claridad Audiencia",
                            &[
                                ("Avatar detallado (industria, cargo)", 15),
                                ("Perfil general", 10),
                                ("Idea vaga", 5),
                                ("No definido", 0),
                            ],
                        ),
                        question(
                            "Alineación Contenido",
                            &[
                                ("Diseñado para resolver problemas", 10),
                                ("General", 7),
                                ("Genérico", 3),
                                ("No considero", 0),
                            ],
                        ),
                        question(
                            "Capacidad Pago",
                            &[
                                ("Alto poder adquisitivo", 5),
                                ("Moderado", 3),
                                ("Bajo", 0),
                            ],
                        ),
                        question(
                            "Presencia LinkedIn",
                            &[
                                ("Optimizado, 2-3x/sem, alto engagement", 15),
                                ("Activo, engagement bajo", 10),
                                ("Básico/Irregular", 5),
                                ("Inactivo", 0),
                            ],
                        ),
                        question(
                            "Seguidores Totales",
                            &[
                                ("10,000+", 10),
                                ("5k-10k", 7),
                                ("1k-5k", 4),
                                ("500-1k", 2),
                                ("<500", 0),
                            ],
                        ),
                        question(
                            "Newsletter Pro",
                            &[
                                ("5000+ (25% open)", 10),
                                ("1k-5k", 7),
                                ("500-1k", 4),
                                ("100-500", 2),
                                ("<100/No", 0),
                            ],
                        ),
                        question(
                            "Website Pro",
                            &[
                                ("Pro + Blog activo SEO", 10),
                                ("Funcional", 7),
                                ("Básico desactualizado", 3),
                                ("No", 0),
                            ],
                        ),
                        question(
                            "Medios Externos",
                            &[
                                ("Regular en medios reconocidos", 10),
                                ("Algunos artículos", 7),
                                ("Solo blog propio", 3),
                                ("Nada", 0),
                            ],
                        ),
                        question(
                            "Contenido Gratuito",
                            &[
                                ("Biblioteca extensa alto valor", 10),
                                ("Algunos recursos", 7),
                                ("Limitado", 3),
                                ("No ofrezco", 0),
                            ],
                        ),
                        question(
                            "Video/Audio",
                            &[
                                ("Activa (YouTube/Podcast)", 5),
                                ("Ocasional", 3),
                                ("Nada", 0),
                            ],
                        ),
                    ],
                ),
                axis(
                    "EJE 3: CREDIBILIDAD Y PRUEBA SOCIAL",
                    "Credibilidad",
                    vec![
                        question(
                            "Libros Publicados",
                            &[("3+", 15), ("2", 10), ("1", 7), ("0", 0)],
                        ),
                        question(
                            "Prestigio Editorial",
                            &[
                                ("Tradicional Top / Big 5", 10),
                                ("Univ / Mediana", 7),
                                ("Pequeña / Auto Pro", 4),
                                ("Sin / Básica", 0),
                            ],
                        ),
                        question(
                            "Ventas",
                            &[
                                ("Bestseller (Listas)", 10),
                                ("10k+", 7),
                                ("3k-10k", 4),
                                ("1k-3k", 2),
                                ("<1k", 0),
                            ],
                        ),
                        question(
                            "Medios Tradicionales",
                            &[
                                ("Regulares (TV/Prensa)", 15),
                                ("Varias regional/industria", 10),
                                ("1-3 menores", 5),
                                ("Ninguna", 0),
                            ],
                        ),
                        question(
                            "Podcasts/Digital",
                            &[
                                ("20+ relevantes", 10),
                                ("10-20", 7),
                                ("3-10", 4),
                                ("<3", 0),
                            ],
                        ),
                        question(
                            "Speaker",
                            &[
                                ("Pro 20+ charlas pagadas", 10),
                                ("10-20 (pagadas o no)", 7),
                                ("3-10 menores", 4),
                                ("1-2", 2),
                                ("0", 0),
                            ],
                        ),
                        question(
                            "Premios",
                            &[
                                ("Nacional/Intl", 10),
                                ("Regional/Industria", 7),
                                ("Menciones", 3),
                                ("Ninguno", 0),
                            ],
                        ),
                        question(
                            "Reseñas/Testimonios",
                            &[
                                ("200+ (4.5+) Transformación", 10),
                                ("100-200 (4.0+)", 7),
                                ("50-100", 4),
                                ("<50", 0),
                            ],
                        ),
                        question(
                            "Citas expertos",
                            &[
                                ("Regularmente citado", 5),
                                ("Ocasional", 3),
                                ("Nunca", 0),
                            ],
                        ),
                        question(
                            "Identidad Visual",
                            &[
                                ("Completa y consistente", 5),
                                ("Básica", 3),
                                ("Ninguna", 0),
                            ],
                        ),
                    ],
                ),
                axis(
                    "EJE 4: MONETIZACIÓN Y ECOSISTEMA",
                    "Negocio/$$$",
                    vec![
                        question(
                            "Ingresos Libros",
                            &[
                                ("$20k+/año", 10),
                                ("$10k-20k", 7),
                                ("$3k-10k", 4),
                                ("$1k-3k", 2),
                                ("<$1k", 0),
                            ],
                        ),
                        question(
                            "Ingresos Speaking",
                            &[
                                ("$30k+/año", 10),
                                ("$15k-30k", 7),
                                ("$5k-15k", 4),
                                ("$1k-5k", 2),
                                ("<$1k", 0),
                            ],
                        ),
                        question(
                            "Cursos/Prod Digitales",
                            &[
                                ("$50k+/año", 10),
                                ("$20k-50k", 7),
                                ("$10k-20k", 4),
                                ("$1k-10k", 2),
                                ("<$1k", 0),
                            ],
                        ),
                        question(
                            "Consultoría",
                            &[
                                ("$100k+/año", 10),
                                ("$50k-100k", 7),
                                ("$20k-50k", 4),
                                ("$5k-20k", 2),
                                ("<$5k", 0),
                            ],
                        ),
                        question(
                            "Funnel Conversión",
                            &[
                                ("Completo optimizado", 10),
                                ("Básico", 7),
                                ("Incoherente", 3),
                                ("Sin funnel", 0),
                            ],
                        ),
                        question(
                            "Modelo Negocio",
                            &[
                                ("Claro escalable", 10),
                                ("Definido en desarrollo", 7),
                                ("Poco claro", 3),
                                ("No definido", 0),
                            ],
                        ),
                        question(
                            "Diversificación",
                            &[
                                ("4+ streams", 10),
                                ("3 streams", 7),
                                ("2 streams", 4),
                                ("1/ninguno", 0),
                            ],
                        ),
                        question(
                            "Habilidades Tech",
                            &[
                                ("Domino todo", 10),
                                ("Decente", 7),
                                ("Básico", 4),
                                ("Limitado", 0),
                            ],
                        ),
                        question(
                            "Comunicación",
                            &[
                                ("Excepcional", 10),
                                ("Buenas", 7),
                                ("Básicas", 4),
                                ("Limitadas", 0),
                            ],
                        ),
                        question(
                            "Red Colaboradores",
                            &[
                                ("Sólida", 10),
                                ("Algunas", 7),
                                ("Limitada", 3),
                                ("Ninguna", 0),
                            ],
                        ),
                    ],
                ),
            ]
        });
        &AXES
    }
}
