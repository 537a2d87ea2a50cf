//! Jobby engine: transport, credentials and the resource fetch controllers.
mod controller;
mod credentials;
mod jobs;
mod persist;
mod resource;
mod transport;
mod types;

pub use controller::{ControllerContext, PendingFetch, ResourceController, SubscriptionId};
pub use credentials::{
    CredentialError, CredentialStore, FileCredentialStore, MemoryCredentialStore,
};
pub use jobs::{JobDetailController, JobListController, ProfileController};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use resource::{
    build_request, ApiEndpoint, JobDetailResource, JobListResource, ProfileResource, Resource,
    DEFAULT_BASE_URL,
};
pub use transport::{ReqwestTransport, Transport, TransportSettings};
pub use types::{ApiRequest, FailureKind, Method, TransportError, TransportResponse};
