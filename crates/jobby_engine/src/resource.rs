use jobby_core::{
    normalize_job_detail_bundle, normalize_job_list, normalize_profile, FilterCriteria,
    JobDetailBundle, JobSummary, NormalizeError, ProfileSummary,
};

use crate::{ApiRequest, FailureKind, Method, TransportError};

pub const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in";

/// Validated API root that resource paths are appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    base: url::Url,
}

impl ApiEndpoint {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let base = url::Url::parse(base_url)
            .map_err(|err| TransportError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(TransportError::new(
                FailureKind::InvalidUrl,
                format!("{base_url} cannot be used as a base url"),
            ));
        }
        Ok(Self { base })
    }

    fn url(&self, segments: &[&str], query: Option<&str>) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.set_query(query);
        url.to_string()
    }
}

/// A remote resource a controller can fetch: where it lives and how its payload maps.
pub trait Resource: Send + Sync + 'static {
    type Params: Clone + Send + Sync + 'static;
    type Data: Clone + Send + Sync + 'static;

    fn name(&self) -> &'static str;
    fn url(&self, params: &Self::Params) -> String;
    fn normalize(&self, body: &[u8]) -> Result<Self::Data, NormalizeError>;
}

/// Builds the request for `params`; the token, when present, goes in as a bearer header.
pub fn build_request<R: Resource + ?Sized>(
    resource: &R,
    params: &R::Params,
    token: Option<&str>,
) -> ApiRequest {
    let headers = token
        .map(|token| vec![("Authorization".to_string(), format!("Bearer {token}"))])
        .unwrap_or_default();
    ApiRequest {
        method: Method::Get,
        url: resource.url(params),
        headers,
    }
}

#[derive(Debug, Clone)]
pub struct ProfileResource {
    endpoint: ApiEndpoint,
}

impl ProfileResource {
    pub fn new(endpoint: ApiEndpoint) -> Self {
        Self { endpoint }
    }
}

impl Resource for ProfileResource {
    type Params = ();
    type Data = ProfileSummary;

    fn name(&self) -> &'static str {
        "profile"
    }

    fn url(&self, _params: &()) -> String {
        self.endpoint.url(&["profile"], None)
    }

    fn normalize(&self, body: &[u8]) -> Result<ProfileSummary, NormalizeError> {
        normalize_profile(body)
    }
}

#[derive(Debug, Clone)]
pub struct JobListResource {
    endpoint: ApiEndpoint,
}

impl JobListResource {
    pub fn new(endpoint: ApiEndpoint) -> Self {
        Self { endpoint }
    }
}

impl Resource for JobListResource {
    type Params = FilterCriteria;
    type Data = Vec<JobSummary>;

    fn name(&self) -> &'static str {
        "jobs"
    }

    fn url(&self, criteria: &FilterCriteria) -> String {
        self.endpoint.url(&["jobs"], Some(&criteria.to_query()))
    }

    fn normalize(&self, body: &[u8]) -> Result<Vec<JobSummary>, NormalizeError> {
        normalize_job_list(body)
    }
}

/// A single job; the id is fixed when the resource is built.
#[derive(Debug, Clone)]
pub struct JobDetailResource {
    endpoint: ApiEndpoint,
    job_id: String,
}

impl JobDetailResource {
    pub fn new(endpoint: ApiEndpoint, job_id: impl Into<String>) -> Self {
        Self {
            endpoint,
            job_id: job_id.into(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }
}

impl Resource for JobDetailResource {
    type Params = ();
    type Data = JobDetailBundle;

    fn name(&self) -> &'static str {
        "job_detail"
    }

    fn url(&self, _params: &()) -> String {
        self.endpoint.url(&["jobs", self.job_id.as_str()], None)
    }

    fn normalize(&self, body: &[u8]) -> Result<JobDetailBundle, NormalizeError> {
        normalize_job_detail_bundle(body)
    }
}
