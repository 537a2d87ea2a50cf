#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, Once};

use jobby_engine::{
    ApiEndpoint, ApiRequest, ControllerContext, FailureKind, MemoryCredentialStore, Transport,
    TransportError, TransportResponse,
};
use tokio::sync::oneshot;

pub const BASE: &str = "https://api.test";

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobby_logging::initialize_for_tests);
}

pub fn endpoint() -> ApiEndpoint {
    ApiEndpoint::new(BASE).unwrap()
}

pub fn ok(body: &str) -> Result<TransportResponse, TransportError> {
    Ok(TransportResponse {
        ok: true,
        body: body.as_bytes().to_vec(),
    })
}

pub fn not_ok(body: &str) -> Result<TransportResponse, TransportError> {
    Ok(TransportResponse {
        ok: false,
        body: body.as_bytes().to_vec(),
    })
}

pub fn network_error() -> Result<TransportResponse, TransportError> {
    Err(TransportError::new(FailureKind::Network, "connection refused"))
}

pub fn jobs_body(ids: &[&str]) -> String {
    let jobs = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{"company_logo_url": "logo-{id}", "employment_type": "Full Time", "job_description": "desc {id}", "location": "Hyderabad", "package_per_annum": "10 LPA", "rating": 4, "title": "Job {id}", "id": "{id}"}}"#
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"jobs": [{jobs}], "total": {}}}"#, ids.len())
}

pub const PROFILE_BODY: &str = r#"{"profile_details": {"name": "Rahul Attuluri", "profile_image_url": "https://a/p.png", "short_bio": "Lead Software Developer"}}"#;

pub const DETAIL_BODY: &str = r#"{
    "job_details": {
        "company_logo_url": "l", "company_website_url": "w", "employment_type": "Full Time",
        "id": "job-1", "job_description": "d", "location": "Mumbai", "package_per_annum": "12 LPA",
        "rating": 5, "title": "Data Scientist",
        "life_at_company": {"description": "ld", "image_url": "li"},
        "skills": [{"name": "Python", "image_url": "u"}]
    },
    "similar_jobs": [
        {"company_logo_url": "l2", "employment_type": "Freelance", "id": "job-2", "job_description": "d2", "location": "Pune", "rating": 3, "title": "ML Engineer"}
    ]
}"#;

/// Replays scripted responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<TransportResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn request(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(network_error)
    }
}

/// Holds each request open until the test releases the response for its url.
#[derive(Default)]
pub struct GatedTransport {
    gates: Mutex<HashMap<String, oneshot::Receiver<TransportResponse>>>,
}

impl GatedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gate(&self, url: &str) -> oneshot::Sender<TransportResponse> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(url.to_string(), rx);
        tx
    }
}

#[async_trait::async_trait]
impl Transport for GatedTransport {
    async fn request(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError> {
        let gate = self.gates.lock().unwrap().remove(&request.url);
        match gate {
            Some(rx) => rx
                .await
                .map_err(|_| TransportError::new(FailureKind::Network, "gate dropped")),
            None => network_error(),
        }
    }
}

pub fn context(
    transport: Arc<dyn Transport>,
    credentials: Arc<MemoryCredentialStore>,
) -> ControllerContext {
    ControllerContext::new(transport, credentials)
}
