//! Shared presentational widgets used by the project case studies.

mod code;
mod metrics;
mod orbit;
mod phone;
mod stepper;

pub use code::CodeShowcase;
pub use metrics::ImpactMetrics;
pub use orbit::TechStackOrbit;
pub use phone::{PhoneBorder, PhoneMockup};
pub use stepper::FlowStepper;
