//! Arune: the financial-personality analysis engine behind the counseling
//! platform's survey feature.
//!
//! The core turns a survey answer map and a birth year into four category
//! scores, an animal-type classification, a life-clock projection, and
//! tiered recommendations, packaged as one immutable report document.

pub mod config;
pub mod error;
pub mod survey;
pub mod telemetry;
