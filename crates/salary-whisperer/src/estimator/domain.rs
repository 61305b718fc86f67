use serde::{Deserialize, Serialize};

/// Highest completed education, as offered on the intake form.
///
/// `Unspecified` is the neutral fallback for tags the form never offers; it is
/// distinct from `Other`, which carries its own multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    HighSchool,
    Bachelor,
    Master,
    Phd,
    Other,
    Unspecified,
}

impl EducationLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::HighSchool,
            Self::Bachelor,
            Self::Master,
            Self::Phd,
            Self::Other,
        ]
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "high-school" => Self::HighSchool,
            "bachelor" => Self::Bachelor,
            "master" => Self::Master,
            "phd" => Self::Phd,
            "other" => Self::Other,
            _ => Self::Unspecified,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::HighSchool => "high-school",
            Self::Bachelor => "bachelor",
            Self::Master => "master",
            Self::Phd => "phd",
            Self::Other => "other",
            Self::Unspecified => "unspecified",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::Bachelor => "Bachelor's Degree",
            Self::Master => "Master's Degree",
            Self::Phd => "PhD",
            Self::Other => "Other",
            Self::Unspecified => "Unspecified",
        }
    }
}

/// Job role; unrecognized tags fall back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobRole {
    SoftwareEngineer,
    DataScientist,
    ProductManager,
    Designer,
    Marketing,
    Sales,
    Hr,
    Finance,
    Operations,
    Other,
}

impl JobRole {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::SoftwareEngineer,
            Self::DataScientist,
            Self::ProductManager,
            Self::Designer,
            Self::Marketing,
            Self::Sales,
            Self::Hr,
            Self::Finance,
            Self::Operations,
            Self::Other,
        ]
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "software-engineer" => Self::SoftwareEngineer,
            "data-scientist" => Self::DataScientist,
            "product-manager" => Self::ProductManager,
            "designer" => Self::Designer,
            "marketing" => Self::Marketing,
            "sales" => Self::Sales,
            "hr" => Self::Hr,
            "finance" => Self::Finance,
            "operations" => Self::Operations,
            _ => Self::Other,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::SoftwareEngineer => "software-engineer",
            Self::DataScientist => "data-scientist",
            Self::ProductManager => "product-manager",
            Self::Designer => "designer",
            Self::Marketing => "marketing",
            Self::Sales => "sales",
            Self::Hr => "hr",
            Self::Finance => "finance",
            Self::Operations => "operations",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SoftwareEngineer => "Software Engineer",
            Self::DataScientist => "Data Scientist",
            Self::ProductManager => "Product Manager",
            Self::Designer => "UX/UI Designer",
            Self::Marketing => "Marketing Manager",
            Self::Sales => "Sales Representative",
            Self::Hr => "HR Manager",
            Self::Finance => "Financial Analyst",
            Self::Operations => "Operations Manager",
            Self::Other => "Other",
        }
    }

    /// Roles with enough market data to lift the confidence score.
    pub const fn is_well_sampled(self) -> bool {
        matches!(
            self,
            Self::SoftwareEngineer | Self::DataScientist | Self::ProductManager
        )
    }
}

/// Work location; unrecognized tags fall back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    SanFrancisco,
    NewYork,
    Seattle,
    Boston,
    LosAngeles,
    Austin,
    Chicago,
    Denver,
    Remote,
    Other,
}

impl Location {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::SanFrancisco,
            Self::NewYork,
            Self::Seattle,
            Self::Austin,
            Self::Chicago,
            Self::Boston,
            Self::LosAngeles,
            Self::Denver,
            Self::Remote,
            Self::Other,
        ]
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "san-francisco" => Self::SanFrancisco,
            "new-york" => Self::NewYork,
            "seattle" => Self::Seattle,
            "boston" => Self::Boston,
            "los-angeles" => Self::LosAngeles,
            "austin" => Self::Austin,
            "chicago" => Self::Chicago,
            "denver" => Self::Denver,
            "remote" => Self::Remote,
            _ => Self::Other,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::SanFrancisco => "san-francisco",
            Self::NewYork => "new-york",
            Self::Seattle => "seattle",
            Self::Boston => "boston",
            Self::LosAngeles => "los-angeles",
            Self::Austin => "austin",
            Self::Chicago => "chicago",
            Self::Denver => "denver",
            Self::Remote => "remote",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SanFrancisco => "San Francisco, CA",
            Self::NewYork => "New York, NY",
            Self::Seattle => "Seattle, WA",
            Self::Boston => "Boston, MA",
            Self::LosAngeles => "Los Angeles, CA",
            Self::Austin => "Austin, TX",
            Self::Chicago => "Chicago, IL",
            Self::Denver => "Denver, CO",
            Self::Remote => "Remote",
            Self::Other => "Other",
        }
    }

    /// High-demand markets that lift the confidence score.
    pub const fn is_major_market(self) -> bool {
        matches!(
            self,
            Self::SanFrancisco | Self::NewYork | Self::Seattle | Self::Boston
        )
    }
}

/// Employer headcount band. `Unspecified` is the neutral fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
    Unspecified,
}

impl CompanySize {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Startup,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::Enterprise,
        ]
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "startup" => Self::Startup,
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            "enterprise" => Self::Enterprise,
            _ => Self::Unspecified,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Enterprise => "enterprise",
            Self::Unspecified => "unspecified",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Startup => "Startup (1-50 employees)",
            Self::Small => "Small (51-200 employees)",
            Self::Medium => "Medium (201-1000 employees)",
            Self::Large => "Large (1001-5000 employees)",
            Self::Enterprise => "Enterprise (5000+ employees)",
            Self::Unspecified => "Unspecified",
        }
    }

    /// Label without the headcount range, for profile summaries.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Startup => "Startup",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Enterprise => "Enterprise",
            Self::Unspecified => "Unspecified",
        }
    }
}

/// Raw form values exactly as the caller supplied them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub years_experience: f64,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub job_role: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub company_size: String,
}

/// Typed estimator input. Every category is resolved, so estimation is total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub years_experience: f64,
    pub education: EducationLevel,
    pub job_role: JobRole,
    pub location: Location,
    pub company_size: CompanySize,
}

impl From<&ProfileSubmission> for Profile {
    fn from(submission: &ProfileSubmission) -> Self {
        Self {
            years_experience: submission.years_experience,
            education: EducationLevel::from_tag(&submission.education),
            job_role: JobRole::from_tag(&submission.job_role),
            location: Location::from_tag(&submission.location),
            company_size: CompanySize::from_tag(&submission.company_size),
        }
    }
}

impl From<ProfileSubmission> for Profile {
    fn from(submission: ProfileSubmission) -> Self {
        Self::from(&submission)
    }
}

/// Attribute dimensions reported in the factor breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Experience,
    Education,
    Role,
    Location,
    Company,
}

impl FactorKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Experience,
            Self::Education,
            Self::Role,
            Self::Location,
            Self::Company,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Experience => "Experience Level",
            Self::Education => "Education",
            Self::Role => "Job Role",
            Self::Location => "Location",
            Self::Company => "Company Size",
        }
    }
}
