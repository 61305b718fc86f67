use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

use crate::estimator::domain::{
    CompanySize, EducationLevel, JobRole, Location, Profile, ProfileSubmission,
};
use crate::estimator::{salary_router, PredictionConfig, PredictionService};

pub(super) fn submission(
    years_experience: f64,
    education: &str,
    job_role: &str,
    location: &str,
    company_size: &str,
) -> ProfileSubmission {
    ProfileSubmission {
        years_experience,
        education: education.to_string(),
        job_role: job_role.to_string(),
        location: location.to_string(),
        company_size: company_size.to_string(),
    }
}

pub(super) fn entry_level_engineer() -> ProfileSubmission {
    submission(0.0, "bachelor", "software-engineer", "denver", "medium")
}

pub(super) fn senior_data_scientist() -> ProfileSubmission {
    submission(10.0, "master", "data-scientist", "san-francisco", "enterprise")
}

pub(super) fn profile(
    years_experience: f64,
    education: EducationLevel,
    job_role: JobRole,
    location: Location,
    company_size: CompanySize,
) -> Profile {
    Profile {
        years_experience,
        education,
        job_role,
        location,
        company_size,
    }
}

/// Every offered option combination at a given experience level.
pub(super) fn all_profiles(years_experience: f64) -> Vec<Profile> {
    let mut profiles = Vec::new();
    for education in EducationLevel::ordered() {
        for job_role in JobRole::ordered() {
            for location in Location::ordered() {
                for company_size in CompanySize::ordered() {
                    profiles.push(profile(
                        years_experience,
                        education,
                        job_role,
                        location,
                        company_size,
                    ));
                }
            }
        }
    }
    profiles
}

pub(super) fn instant_service() -> PredictionService {
    PredictionService::new(PredictionConfig::default())
}

pub(super) fn router() -> axum::Router {
    salary_router(Arc::new(instant_service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
