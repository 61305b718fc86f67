use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

use super::domain::ProfileSubmission;
use super::engine::{estimate, Prediction};
use super::intake::{IntakeGuard, IntakeViolation};

#[derive(Debug)]
pub enum BatchError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Io(err) => write!(f, "failed to access batch file: {}", err),
            BatchError::Csv(err) => write!(f, "invalid batch CSV data: {}", err),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(err) => Some(err),
            BatchError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Why a single batch row produced no prediction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BatchRowError {
    #[error("years of experience '{0}' is not a number")]
    InvalidExperience(String),
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
}

/// Outcome for one input row; `row` is 1-based and excludes the header.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    pub row: usize,
    pub outcome: Result<Prediction, BatchRowError>,
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    years_experience: String,
    #[serde(default)]
    education: String,
    #[serde(default)]
    job_role: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    company_size: String,
}

impl ProfileRow {
    fn into_submission(self) -> Result<ProfileSubmission, BatchRowError> {
        let years_experience = self
            .years_experience
            .parse::<f64>()
            .map_err(|_| BatchRowError::InvalidExperience(self.years_experience.clone()))?;

        Ok(ProfileSubmission {
            years_experience,
            education: self.education,
            job_role: self.job_role,
            location: self.location,
            company_size: self.company_size,
        })
    }
}

#[derive(Debug, Serialize)]
struct PredictionRow<'a> {
    row: usize,
    avg_salary: Option<i64>,
    min_salary: Option<i64>,
    max_salary: Option<i64>,
    confidence: Option<u8>,
    error: Option<&'a str>,
}

/// Runs every row of a profile CSV through intake and the estimator.
pub struct BatchEstimator;

impl BatchEstimator {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<BatchRow>, BatchError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Invalid rows are kept with their error; only malformed CSV aborts.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<BatchRow>, BatchError> {
        let guard = IntakeGuard::default();
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows = Vec::new();

        for (index, record) in csv_reader.deserialize::<ProfileRow>().enumerate() {
            let outcome = record?.into_submission().and_then(|submission| {
                let profile = guard.profile_from_submission(&submission)?;
                Ok(estimate(&profile))
            });

            rows.push(BatchRow {
                row: index + 1,
                outcome,
            });
        }

        Ok(rows)
    }
}

pub fn write_predictions<W: Write>(writer: W, rows: &[BatchRow]) -> Result<(), BatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for batch_row in rows {
        let message;
        let row = match &batch_row.outcome {
            Ok(prediction) => PredictionRow {
                row: batch_row.row,
                avg_salary: Some(prediction.avg_salary),
                min_salary: Some(prediction.min_salary),
                max_salary: Some(prediction.max_salary),
                confidence: Some(prediction.confidence),
                error: None,
            },
            Err(err) => {
                message = err.to_string();
                PredictionRow {
                    row: batch_row.row,
                    avg_salary: None,
                    min_salary: None,
                    max_salary: None,
                    confidence: None,
                    error: Some(&message),
                }
            }
        };
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
