use super::domain::Profile;
use super::engine::{FactorBreakdown, ProfileMultipliers};

const BASE_CONFIDENCE: u8 = 75;
const MAX_CONFIDENCE: u8 = 95;
const EXPERIENCE_SWEET_SPOT: std::ops::RangeInclusive<f64> = 2.0..=15.0;

const EXPERIENCE_STEP: f64 = 0.06;
const EXPERIENCE_CAP: f64 = 2.5;

pub(crate) const RANGE_FLOOR: f64 = 0.85;
pub(crate) const RANGE_CEILING: f64 = 1.15;

/// Linear experience uplift, capped at 2.5x (reached at 25 years).
pub fn experience_multiplier(years_experience: f64) -> f64 {
    (1.0 + years_experience * EXPERIENCE_STEP).min(EXPERIENCE_CAP)
}

/// Heuristic reliability score. Additive only, so the floor is the base score.
pub(crate) fn confidence(profile: &Profile) -> u8 {
    let mut confidence = BASE_CONFIDENCE;

    if EXPERIENCE_SWEET_SPOT.contains(&profile.years_experience) {
        confidence += 10;
    }
    if profile.location.is_major_market() {
        confidence += 5;
    }
    if profile.job_role.is_well_sampled() {
        confidence += 5;
    }

    confidence.min(MAX_CONFIDENCE)
}

/// Display weights per attribute. These are a fixed readout, not an
/// attribution of the multipliers, and do not sum to 100.
pub(crate) fn factor_breakdown(
    profile: &Profile,
    multipliers: &ProfileMultipliers,
) -> FactorBreakdown {
    let experience = (20.0 + profile.years_experience * 0.8).clamp(20.0, 40.0);
    let education = (((multipliers.education - 0.85) / 0.4) * 15.0).round() + 10.0;
    let location = (((multipliers.location - 0.95) / 0.45) * 15.0).round() + 10.0;
    let company = (((multipliers.company - 0.9) / 0.3) * 10.0).round() + 8.0;

    FactorBreakdown {
        experience,
        education,
        role: 25.0,
        location,
        company,
    }
}

/// Returns `(min, max)` around an already rounded point estimate.
pub(crate) fn salary_range(point: i64) -> (i64, i64) {
    let point = point as f64;
    (
        (point * RANGE_FLOOR).round() as i64,
        (point * RANGE_CEILING).round() as i64,
    )
}
