use super::domain::{CompanySize, EducationLevel, JobRole, Location};

/// Multiplier applied when a category falls back to its neutral entry.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

pub const fn base_salary(role: JobRole) -> f64 {
    match role {
        JobRole::SoftwareEngineer => 95_000.0,
        JobRole::DataScientist => 110_000.0,
        JobRole::ProductManager => 120_000.0,
        JobRole::Designer => 80_000.0,
        JobRole::Marketing => 75_000.0,
        JobRole::Sales => 70_000.0,
        JobRole::Hr => 68_000.0,
        JobRole::Finance => 78_000.0,
        JobRole::Operations => 82_000.0,
        JobRole::Other => 70_000.0,
    }
}

pub const fn education_multiplier(level: EducationLevel) -> f64 {
    match level {
        EducationLevel::HighSchool => 0.85,
        EducationLevel::Bachelor => 1.0,
        EducationLevel::Master => 1.15,
        EducationLevel::Phd => 1.25,
        EducationLevel::Other => 0.95,
        EducationLevel::Unspecified => NEUTRAL_MULTIPLIER,
    }
}

/// Cost-of-living adjustment for the work location.
pub const fn location_multiplier(location: Location) -> f64 {
    match location {
        Location::SanFrancisco => 1.4,
        Location::NewYork => 1.3,
        Location::Seattle => 1.25,
        Location::Boston => 1.2,
        Location::LosAngeles => 1.15,
        Location::Austin => 1.1,
        Location::Chicago => 1.05,
        Location::Denver => 1.0,
        Location::Remote => 0.95,
        Location::Other => NEUTRAL_MULTIPLIER,
    }
}

pub const fn company_multiplier(size: CompanySize) -> f64 {
    match size {
        CompanySize::Startup => 0.9,
        CompanySize::Small => 0.95,
        CompanySize::Medium => 1.0,
        CompanySize::Large => 1.1,
        CompanySize::Enterprise => 1.2,
        CompanySize::Unspecified => NEUTRAL_MULTIPLIER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_entries_are_neutral() {
        assert_eq!(base_salary(JobRole::Other), 70_000.0);
        assert_eq!(education_multiplier(EducationLevel::Unspecified), 1.0);
        assert_eq!(location_multiplier(Location::Other), 1.0);
        assert_eq!(company_multiplier(CompanySize::Unspecified), 1.0);
    }

    #[test]
    fn education_other_is_not_the_fallback() {
        assert_eq!(education_multiplier(EducationLevel::Other), 0.95);
        assert_eq!(
            education_multiplier(EducationLevel::from_tag("bootcamp")),
            NEUTRAL_MULTIPLIER
        );
    }

    #[test]
    fn product_manager_tops_the_base_table() {
        let top = JobRole::ordered()
            .into_iter()
            .max_by(|a, b| base_salary(*a).total_cmp(&base_salary(*b)))
            .expect("roles are not empty");
        assert_eq!(top, JobRole::ProductManager);
    }
}
