use std::ops::RangeInclusive;

use super::domain::{Profile, ProfileSubmission};

const DEFAULT_EXPERIENCE_RANGE: RangeInclusive<f64> = 0.0..=50.0;

/// Validation errors raised before a submission reaches the estimator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("years of experience must be between {min} and {max} (found {found})")]
    ExperienceOutOfRange { min: f64, max: f64, found: f64 },
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Guard producing `Profile` values from raw form submissions.
///
/// Only blank categories are rejected. A non-blank but unrecognized tag is
/// accepted and resolved to the category's fallback entry.
#[derive(Debug, Clone)]
pub struct IntakeGuard {
    experience_range: RangeInclusive<f64>,
}

impl Default for IntakeGuard {
    fn default() -> Self {
        Self {
            experience_range: DEFAULT_EXPERIENCE_RANGE,
        }
    }
}

impl IntakeGuard {
    pub fn experience_range(&self) -> &RangeInclusive<f64> {
        &self.experience_range
    }

    pub fn validate(&self, submission: &ProfileSubmission) -> Result<(), IntakeViolation> {
        let years = submission.years_experience;
        if !years.is_finite() || !self.experience_range.contains(&years) {
            return Err(IntakeViolation::ExperienceOutOfRange {
                min: *self.experience_range.start(),
                max: *self.experience_range.end(),
                found: years,
            });
        }

        let required = [
            ("education", &submission.education),
            ("job_role", &submission.job_role),
            ("location", &submission.location),
            ("company_size", &submission.company_size),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(IntakeViolation::MissingField(field));
            }
        }

        Ok(())
    }

    pub fn profile_from_submission(
        &self,
        submission: &ProfileSubmission,
    ) -> Result<Profile, IntakeViolation> {
        self.validate(submission)?;
        Ok(Profile::from(submission))
    }
}
