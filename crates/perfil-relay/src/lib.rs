//! perfil-relay
//!
//! Best-effort delivery of completed assessment results to a form-relay
//! endpoint. Delivery runs on a detached task; its outcome is logged and
//! never reaches the respondent.

pub mod client;
pub mod error;
pub mod submission;
