//! perfil-export
//!
//! Turns assessment reports and free-text sections into downloadable
//! artifacts: markdown, HTML-flavoured `.doc`, and DOCX.

pub mod document;
pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
