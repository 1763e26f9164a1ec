pub mod answer;
pub mod band;
pub mod report;
pub mod variant;
