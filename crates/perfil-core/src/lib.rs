//! perfil-core
//!
//! Pure domain types shared by the scoring engine, the exporter, the relay
//! and the HTTP service. No I/O lives here.

pub mod error;
pub mod models;
