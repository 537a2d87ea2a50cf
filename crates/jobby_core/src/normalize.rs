//! Mapping from the jobs API's JSON payloads into view models.
//!
//! Every required field must be present with the right type; a missing one
//! fails the whole payload with [`NormalizeError::MalformedPayload`] instead
//! of being defaulted.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{
    ErrorKind, JobDetail, JobDetailBundle, JobSummary, LifeAtCompany, ProfileSummary, Skill,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl NormalizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NormalizeError::MalformedPayload(_) => ErrorKind::MalformedPayload,
        }
    }
}

#[derive(Deserialize)]
struct ProfileEnvelope {
    profile_details: RawProfile,
}

#[derive(Deserialize)]
struct RawProfile {
    name: String,
    profile_image_url: String,
    short_bio: String,
}

#[derive(Deserialize)]
struct JobsEnvelope {
    jobs: Vec<RawJob>,
}

#[derive(Deserialize)]
struct RawJob {
    id: String,
    title: String,
    company_logo_url: String,
    employment_type: String,
    location: String,
    package_per_annum: String,
    rating: f64,
    job_description: String,
}

#[derive(Deserialize)]
struct DetailEnvelope {
    job_details: RawJobDetail,
    similar_jobs: Vec<RawSimilarJob>,
}

#[derive(Deserialize)]
struct RawJobDetail {
    id: String,
    title: String,
    company_logo_url: String,
    company_website_url: String,
    employment_type: String,
    location: String,
    package_per_annum: Option<String>,
    rating: f64,
    job_description: String,
    skills: Vec<RawSkill>,
    life_at_company: RawLifeAtCompany,
}

#[derive(Deserialize)]
struct RawSkill {
    name: String,
    image_url: String,
}

#[derive(Deserialize)]
struct RawLifeAtCompany {
    description: String,
    image_url: String,
}

#[derive(Deserialize)]
struct RawSimilarJob {
    id: String,
    title: String,
    company_logo_url: String,
    employment_type: String,
    location: String,
    package_per_annum: Option<String>,
    rating: f64,
    job_description: String,
}

/// `GET /profile`
pub fn normalize_profile(body: &[u8]) -> Result<ProfileSummary, NormalizeError> {
    let envelope: ProfileEnvelope = parse(body)?;
    let raw = envelope.profile_details;
    Ok(ProfileSummary {
        name: raw.name,
        avatar_url: raw.profile_image_url,
        short_bio: raw.short_bio,
    })
}

/// `GET /jobs?...`
pub fn normalize_job_list(body: &[u8]) -> Result<Vec<JobSummary>, NormalizeError> {
    let envelope: JobsEnvelope = parse(body)?;
    Ok(envelope.jobs.into_iter().map(job_summary).collect())
}

/// `GET /jobs/<id>`: splits the response into the job itself and its similar jobs.
pub fn normalize_job_detail_bundle(body: &[u8]) -> Result<JobDetailBundle, NormalizeError> {
    let envelope: DetailEnvelope = parse(body)?;
    Ok(JobDetailBundle {
        primary: job_detail(envelope.job_details),
        related: envelope
            .similar_jobs
            .into_iter()
            .map(similar_job_summary)
            .collect(),
    })
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T, NormalizeError> {
    serde_json::from_slice(body).map_err(|err| NormalizeError::MalformedPayload(err.to_string()))
}

fn job_summary(raw: RawJob) -> JobSummary {
    JobSummary {
        id: raw.id,
        title: raw.title,
        company_logo_url: raw.company_logo_url,
        employment_type: raw.employment_type,
        location: raw.location,
        package_per_annum: Some(raw.package_per_annum),
        rating: raw.rating,
        job_description: raw.job_description,
    }
}

fn similar_job_summary(raw: RawSimilarJob) -> JobSummary {
    JobSummary {
        id: raw.id,
        title: raw.title,
        company_logo_url: raw.company_logo_url,
        employment_type: raw.employment_type,
        location: raw.location,
        package_per_annum: raw.package_per_annum,
        rating: raw.rating,
        job_description: raw.job_description,
    }
}

fn job_detail(raw: RawJobDetail) -> JobDetail {
    JobDetail {
        id: raw.id,
        title: raw.title,
        company_logo_url: raw.company_logo_url,
        company_website_url: raw.company_website_url,
        employment_type: raw.employment_type,
        location: raw.location,
        package_per_annum: raw.package_per_annum,
        rating: raw.rating,
        job_description: raw.job_description,
        skills: raw
            .skills
            .into_iter()
            .map(|skill| Skill {
                name: skill.name,
                icon_url: skill.image_url,
            })
            .collect(),
        life_at_company: LifeAtCompany {
            description: raw.life_at_company.description,
            image_url: raw.life_at_company.image_url,
        },
    }
}
