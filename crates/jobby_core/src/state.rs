use serde::{Deserialize, Serialize};

/// Monotonic sequence number handed out each time a fetch is triggered.
pub type RequestSeq = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum ErrorKind {
    /// Transport returned a non-ok status or failed outright.
    #[error("request failed")]
    RequestFailed,
    /// Response body lacked required structure.
    #[error("malformed payload")]
    MalformedPayload,
    /// No bearer token was available when the fetch was triggered.
    #[error("unauthenticated")]
    Unauthenticated,
}

/// Which resolved responses a controller applies to its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StaleResponsePolicy {
    /// Every response is applied when it resolves; the last one to resolve wins.
    #[default]
    ApplyAll,
    /// Only the response to the most recently issued request is applied.
    LatestOnly,
}

impl StaleResponsePolicy {
    pub fn accepts(self, seq: RequestSeq, latest_issued: RequestSeq) -> bool {
        match self {
            StaleResponsePolicy::ApplyAll => true,
            StaleResponsePolicy::LatestOnly => seq == latest_issued,
        }
    }
}

/// Fetch lifecycle of one remote resource as seen by the presentation layer.
///
/// `data` survives `Loading` and `Failure` once a fetch has succeeded, so a
/// view can keep showing the previous result while a refetch is pending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceState<T> {
    status: FetchStatus,
    data: Option<T>,
    last_error: Option<ErrorKind>,
    #[serde(skip)]
    issued: RequestSeq,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            data: None,
            last_error: None,
            issued: 0,
        }
    }
}

impl<T> ResourceState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    /// Sequence number of the most recently triggered fetch (0 before the first).
    pub fn latest_issued(&self) -> RequestSeq {
        self.issued
    }

    pub(crate) fn begin_fetch(&mut self) -> RequestSeq {
        self.issued += 1;
        self.status = FetchStatus::Loading;
        self.issued
    }

    pub(crate) fn resolve(&mut self, outcome: Result<T, ErrorKind>) {
        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.last_error = None;
                self.status = FetchStatus::Success;
            }
            Err(kind) => {
                self.last_error = Some(kind);
                self.status = FetchStatus::Failure;
            }
        }
    }
}
