//! Generates sample multiple-choice question banks for physics, chemistry
//! and biology from a JSON manifest of subjects and chapters.

pub mod bank;
pub mod config;
