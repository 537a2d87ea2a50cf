use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub avatar_url: String,
    pub short_bio: String,
}

/// One row of the job list, also used for similar jobs on the detail view.
///
/// `package_per_annum` is always present for list rows; the API leaves it out
/// of similar-job entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub location: String,
    pub package_per_annum: Option<String>,
    pub rating: f64,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeAtCompany {
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDetail {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub company_website_url: String,
    pub employment_type: String,
    pub location: String,
    pub package_per_annum: Option<String>,
    pub rating: f64,
    pub job_description: String,
    pub skills: Vec<Skill>,
    pub life_at_company: LifeAtCompany,
}

/// A job and its similar jobs, fetched together but kept apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDetailBundle {
    pub primary: JobDetail,
    pub related: Vec<JobSummary>,
}
