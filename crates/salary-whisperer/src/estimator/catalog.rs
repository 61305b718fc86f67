use serde::Serialize;

use super::domain::{CompanySize, EducationLevel, JobRole, Location};
use super::tables;

/// One selectable form option and the table value behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOption {
    pub tag: &'static str,
    pub label: &'static str,
    pub value: f64,
}

/// Every option offered for each category, in form order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCatalog {
    pub education: Vec<CategoryOption>,
    pub job_roles: Vec<CategoryOption>,
    pub locations: Vec<CategoryOption>,
    pub company_sizes: Vec<CategoryOption>,
}

impl CategoryCatalog {
    pub fn standard() -> Self {
        Self {
            education: EducationLevel::ordered()
                .into_iter()
                .map(|level| CategoryOption {
                    tag: level.tag(),
                    label: level.label(),
                    value: tables::education_multiplier(level),
                })
                .collect(),
            job_roles: JobRole::ordered()
                .into_iter()
                .map(|role| CategoryOption {
                    tag: role.tag(),
                    label: role.label(),
                    value: tables::base_salary(role),
                })
                .collect(),
            locations: Location::ordered()
                .into_iter()
                .map(|location| CategoryOption {
                    tag: location.tag(),
                    label: location.label(),
                    value: tables::location_multiplier(location),
                })
                .collect(),
            company_sizes: CompanySize::ordered()
                .into_iter()
                .map(|size| CategoryOption {
                    tag: size.tag(),
                    label: size.label(),
                    value: tables::company_multiplier(size),
                })
                .collect(),
        }
    }
}
