//! Fetch lifecycle controller for one remote resource.
//!
//! A controller owns a [`ResourceState`] and drives it through the pure
//! [`update_resource`] transition. Triggering a fetch moves the state to
//! `Loading` immediately and hands back a [`PendingFetch`]; awaiting it performs
//! the request and applies the result.
//!
//! Fetches are never cancelled or coalesced. With the default
//! [`StaleResponsePolicy::ApplyAll`] every response is applied as it resolves,
//! so when requests overlap the one that resolves last decides the final state
//! even if an older request resolves after a newer one.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use jobby_core::{
    update_resource, ErrorKind, FetchMsg, RequestSeq, ResourceState, StaleResponsePolicy,
};
use jobby_logging::{jobby_debug, jobby_warn};

use crate::resource::{build_request, Resource};
use crate::{ApiRequest, CredentialStore, Transport};

/// Collaborators shared by every controller of a session.
#[derive(Clone)]
pub struct ControllerContext {
    pub transport: Arc<dyn Transport>,
    pub credentials: Arc<dyn CredentialStore>,
    pub policy: StaleResponsePolicy,
}

impl ControllerContext {
    pub fn new(transport: Arc<dyn Transport>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            transport,
            credentials,
            policy: StaleResponsePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StaleResponsePolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Arc<dyn Fn(&ResourceState<T>) + Send + Sync>;

pub(crate) struct Shared<R: Resource> {
    state: ResourceState<R::Data>,
    pub(crate) params: R::Params,
    last_params: Option<R::Params>,
}

pub struct ResourceController<R: Resource> {
    resource: Arc<R>,
    ctx: ControllerContext,
    shared: Arc<Mutex<Shared<R>>>,
    listeners: Arc<Mutex<Vec<(SubscriptionId, Listener<R::Data>)>>>,
    next_subscription: Arc<AtomicU64>,
}

impl<R: Resource> Clone for ResourceController<R> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
            ctx: self.ctx.clone(),
            shared: self.shared.clone(),
            listeners: self.listeners.clone(),
            next_subscription: self.next_subscription.clone(),
        }
    }
}

impl<R: Resource> ResourceController<R> {
    pub fn new(resource: R, params: R::Params, ctx: ControllerContext) -> Self {
        Self {
            resource: Arc::new(resource),
            ctx,
            shared: Arc::new(Mutex::new(Shared {
                state: ResourceState::new(),
                params,
                last_params: None,
            })),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_subscription: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ResourceState<R::Data> {
        self.lock().state.clone()
    }

    /// Parameters the next `trigger` will use.
    pub fn params(&self) -> R::Params {
        self.lock().params.clone()
    }

    /// Starts a fetch with the held parameters.
    pub fn trigger(&self) -> PendingFetch {
        let params = self.params();
        self.start(params)
    }

    /// Repeats the last issued request, ignoring parameter edits made since.
    pub fn retry(&self) -> PendingFetch {
        let params = {
            let shared = self.lock();
            shared
                .last_params
                .clone()
                .unwrap_or_else(|| shared.params.clone())
        };
        self.start(params)
    }

    /// Registers a listener called with a snapshot after every state change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&ResourceState<R::Data>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Shared<R>> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn start(&self, params: R::Params) -> PendingFetch {
        let (seq, snapshot) = {
            let mut shared = self.lock();
            let state = std::mem::take(&mut shared.state);
            shared.state = update_resource(state, FetchMsg::Triggered, self.ctx.policy);
            shared.last_params = Some(params.clone());
            (shared.state.latest_issued(), shared.state.clone())
        };
        self.notify(&snapshot);

        let token = self.ctx.credentials.get();
        if token.is_none() {
            jobby_warn!(
                "{} fetch #{}: {}, sending without credentials",
                self.resource.name(),
                seq,
                ErrorKind::Unauthenticated
            );
        }
        let request = build_request(self.resource.as_ref(), &params, token.as_deref());
        jobby_debug!("{} fetch #{} -> {}", self.resource.name(), seq, request.url);

        let this = self.clone();
        let issued = request.clone();
        PendingFetch {
            seq,
            request,
            future: Box::pin(async move { this.complete(seq, issued).await }),
        }
    }

    async fn complete(&self, seq: RequestSeq, request: ApiRequest) {
        let outcome = match self.ctx.transport.request(&request).await {
            Ok(response) if response.ok => self.resource.normalize(&response.body).map_err(|err| {
                jobby_debug!("{} fetch #{}: {}", self.resource.name(), seq, err);
                err.kind()
            }),
            Ok(_) => Err(ErrorKind::RequestFailed),
            Err(err) => {
                jobby_debug!("{} fetch #{}: {}", self.resource.name(), seq, err);
                Err(ErrorKind::RequestFailed)
            }
        };

        let snapshot = {
            let mut shared = self.lock();
            if !self.ctx.policy.accepts(seq, shared.state.latest_issued()) {
                jobby_debug!(
                    "{} fetch #{} superseded by #{}, dropping response",
                    self.resource.name(),
                    seq,
                    shared.state.latest_issued()
                );
                return;
            }
            let state = std::mem::take(&mut shared.state);
            shared.state =
                update_resource(state, FetchMsg::Resolved { seq, outcome }, self.ctx.policy);
            shared.state.clone()
        };
        self.notify(&snapshot);
    }

    fn notify(&self, snapshot: &ResourceState<R::Data>) {
        let listeners: Vec<Listener<R::Data>> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }
}

/// An issued fetch. The state is already `Loading`; awaiting this performs
/// the request and applies its result.
#[must_use = "the request is only sent when the pending fetch is awaited"]
pub struct PendingFetch {
    seq: RequestSeq,
    request: ApiRequest,
    future: BoxFuture<'static, ()>,
}

impl PendingFetch {
    pub fn seq(&self) -> RequestSeq {
        self.seq
    }

    pub fn request(&self) -> &ApiRequest {
        &self.request
    }
}

impl Future for PendingFetch {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.future.as_mut().poll(cx)
    }
}
