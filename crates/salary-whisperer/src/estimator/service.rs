use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::PredictionConfig;
use super::domain::{Profile, ProfileSubmission};
use super::engine::{estimate, Prediction};
use super::intake::{IntakeGuard, IntakeViolation};

/// Notice shown to users when a prediction cannot be produced.
pub const UNAVAILABLE_NOTICE: &str = "prediction failed, please try again later";

/// A validated submission together with the estimate it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub submission: ProfileSubmission,
    pub profile: Profile,
    pub prediction: Prediction,
}

/// Async boundary around the estimator: intake, simulated latency, timeout.
pub struct PredictionService {
    guard: IntakeGuard,
    config: PredictionConfig,
}

impl PredictionService {
    pub fn new(config: PredictionConfig) -> Self {
        Self::with_guard(IntakeGuard::default(), config)
    }

    pub fn with_guard(guard: IntakeGuard, config: PredictionConfig) -> Self {
        Self { guard, config }
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Validate and estimate a submission, honoring the configured latency.
    pub async fn predict(
        &self,
        submission: ProfileSubmission,
    ) -> Result<PredictionRecord, PredictionError> {
        let profile = self.guard.profile_from_submission(&submission)?;

        let latency = self.config.latency();
        let pending = async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            estimate(&profile)
        };

        let prediction = match tokio::time::timeout(self.config.timeout(), pending).await {
            Ok(prediction) => prediction,
            Err(_) => {
                warn!(
                    latency_ms = self.config.latency_ms,
                    timeout_ms = self.config.timeout_ms,
                    "salary prediction timed out"
                );
                return Err(PredictionError::Unavailable);
            }
        };

        debug!(
            role = profile.job_role.tag(),
            location = profile.location.tag(),
            avg_salary = prediction.avg_salary,
            confidence = prediction.confidence,
            "salary prediction complete"
        );

        Ok(PredictionRecord {
            submission,
            profile,
            prediction,
        })
    }
}

impl Default for PredictionService {
    fn default() -> Self {
        Self::new(PredictionConfig::default())
    }
}

/// Error raised by the prediction service.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error("prediction failed, please try again later")]
    Unavailable,
}
