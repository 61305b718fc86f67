use serde::Serialize;

use super::domain::{FactorKind, Profile};
use super::engine::Prediction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub const fn from_score(confidence: u8) -> Self {
        if confidence >= 80 {
            Self::High
        } else if confidence >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Whole-dollar USD amount with thousands separators, e.g. `$95,000`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Human-readable recap of the profile behind a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub experience: String,
    pub background: String,
    pub location: String,
    pub company: String,
}

impl ProfileSummary {
    pub fn from_profile(profile: &Profile) -> Self {
        let unit = if profile.years_experience == 1.0 {
            "Year"
        } else {
            "Years"
        };

        Self {
            experience: format!("{} {unit} Experience", profile.years_experience),
            background: format!(
                "{} • {}",
                profile.education.label(),
                profile.job_role.label()
            ),
            location: profile.location.label().to_string(),
            company: format!("{} Company", profile.company_size.short_label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorEntry {
    pub factor: FactorKind,
    pub label: &'static str,
    pub weight: f64,
}

/// Display-ready rendering of a prediction shared by the CLI and HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionView {
    pub estimated_salary: String,
    pub salary_range: String,
    pub confidence: u8,
    pub confidence_level: ConfidenceLevel,
    pub confidence_label: String,
    pub factors: Vec<FactorEntry>,
    pub summary: ProfileSummary,
}

impl PredictionView {
    pub fn new(profile: &Profile, prediction: &Prediction) -> Self {
        let level = ConfidenceLevel::from_score(prediction.confidence);
        let factors = prediction
            .factors
            .entries()
            .into_iter()
            .map(|(factor, weight)| FactorEntry {
                factor,
                label: factor.label(),
                weight,
            })
            .collect();

        Self {
            estimated_salary: format_currency(prediction.avg_salary),
            salary_range: format!(
                "{} - {}",
                format_currency(prediction.min_salary),
                format_currency(prediction.max_salary)
            ),
            confidence: prediction.confidence,
            confidence_level: level,
            confidence_label: format!("{} ({}%)", level.label(), prediction.confidence),
            factors,
            summary: ProfileSummary::from_profile(profile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::domain::{CompanySize, EducationLevel, JobRole, Location};
    use crate::estimator::estimate;

    fn profile(years_experience: f64) -> Profile {
        Profile {
            years_experience,
            education: EducationLevel::Master,
            job_role: JobRole::DataScientist,
            location: Location::SanFrancisco,
            company_size: CompanySize::Enterprise,
        }
    }

    #[test]
    fn formats_currency_with_grouping() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(950), "$950");
        assert_eq!(format_currency(95_000), "$95,000");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
        assert_eq!(format_currency(-1_200), "-$1,200");
    }

    #[test]
    fn confidence_levels_follow_thresholds() {
        assert_eq!(ConfidenceLevel::from_score(95), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(80), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(79), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(60), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(59), ConfidenceLevel::Low);
    }

    #[test]
    fn summary_uses_singular_for_one_year() {
        let summary = ProfileSummary::from_profile(&profile(1.0));
        assert_eq!(summary.experience, "1 Year Experience");
        assert_eq!(summary.background, "Master's Degree • Data Scientist");
        assert_eq!(summary.location, "San Francisco, CA");
        assert_eq!(summary.company, "Enterprise Company");

        let summary = ProfileSummary::from_profile(&profile(12.0));
        assert_eq!(summary.experience, "12 Years Experience");
    }

    #[test]
    fn view_lists_factors_in_display_order() {
        let profile = profile(10.0);
        let prediction = estimate(&profile);
        let view = PredictionView::new(&profile, &prediction);

        assert_eq!(view.estimated_salary, "$340,032");
        assert_eq!(view.salary_range, "$289,027 - $391,037");
        assert_eq!(view.confidence_label, "High (95%)");
        let labels: Vec<_> = view.factors.iter().map(|entry| entry.label).collect();
        assert_eq!(
            labels,
            ["Experience Level", "Education", "Job Role", "Location", "Company Size"]
        );
    }
}
