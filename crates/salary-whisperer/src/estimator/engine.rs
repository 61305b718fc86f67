use serde::{Deserialize, Serialize};

use super::domain::{FactorKind, Profile};
use super::rules;
use super::tables;

/// Per-dimension multipliers resolved from the lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileMultipliers {
    pub base_salary: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
    pub company: f64,
}

impl ProfileMultipliers {
    pub fn resolve(profile: &Profile) -> Self {
        Self {
            base_salary: tables::base_salary(profile.job_role),
            experience: rules::experience_multiplier(profile.years_experience),
            education: tables::education_multiplier(profile.education),
            location: tables::location_multiplier(profile.location),
            company: tables::company_multiplier(profile.company_size),
        }
    }

    /// Unrounded point estimate; multiplication order is part of the contract.
    pub fn raw_salary(&self) -> f64 {
        self.base_salary * self.experience * self.education * self.location * self.company
    }
}

/// Relative weight shown for each attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub experience: f64,
    pub education: f64,
    pub role: f64,
    pub location: f64,
    pub company: f64,
}

impl FactorBreakdown {
    pub fn weight(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::Experience => self.experience,
            FactorKind::Education => self.education,
            FactorKind::Role => self.role,
            FactorKind::Location => self.location,
            FactorKind::Company => self.company,
        }
    }

    pub fn entries(&self) -> [(FactorKind, f64); 5] {
        FactorKind::ordered().map(|kind| (kind, self.weight(kind)))
    }
}

/// Estimator output for a single profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub min_salary: i64,
    pub max_salary: i64,
    pub avg_salary: i64,
    pub confidence: u8,
    pub factors: FactorBreakdown,
}

/// Deterministic salary estimate for `profile`. Never fails; out-of-range
/// experience is carried through the formula as given.
pub fn estimate(profile: &Profile) -> Prediction {
    let multipliers = ProfileMultipliers::resolve(profile);

    let avg_salary = multipliers.raw_salary().round() as i64;
    let (min_salary, max_salary) = rules::salary_range(avg_salary);

    Prediction {
        min_salary,
        max_salary,
        avg_salary,
        confidence: rules::confidence(profile),
        factors: rules::factor_breakdown(profile, &multipliers),
    }
}
