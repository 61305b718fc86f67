//! Rule-based salary estimation.
//!
//! `estimate` is the pure core: a profile goes in, a prediction comes out, and
//! nothing else happens. The surrounding modules validate form input, wrap the
//! estimator in an async service, render results, and expose it over CSV and
//! HTTP.

pub mod batch;
pub mod catalog;
mod config;
pub mod domain;
mod engine;
pub mod intake;
pub mod report;
pub mod router;
mod rules;
pub mod service;
pub mod tables;

#[cfg(test)]
mod tests;

pub use batch::{write_predictions, BatchError, BatchEstimator, BatchRow, BatchRowError};
pub use catalog::{CategoryCatalog, CategoryOption};
pub use config::PredictionConfig;
pub use domain::{
    CompanySize, EducationLevel, FactorKind, JobRole, Location, Profile, ProfileSubmission,
};
pub use engine::{estimate, FactorBreakdown, Prediction, ProfileMultipliers};
pub use intake::{IntakeGuard, IntakeViolation};
pub use report::{format_currency, ConfidenceLevel, PredictionView, ProfileSummary};
pub use router::{salary_router, PredictionResponse};
pub use rules::experience_multiplier;
pub use service::{PredictionError, PredictionRecord, PredictionService, UNAVAILABLE_NOTICE};
