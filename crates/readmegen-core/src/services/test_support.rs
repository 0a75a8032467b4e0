//! Scripted backend shared by the workflow tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::{GenerationRequest, PublishReply, PublishRequest, RepositorySummary};
use crate::ports::{ReadmeBackendPort, TransportError, TransportResult};

/// Replies are consumed in order; an exhausted queue answers with a network error.
#[derive(Default)]
pub struct ScriptedBackend {
    generate: Mutex<VecDeque<TransportResult<String>>>,
    identity: Mutex<VecDeque<TransportResult<bool>>>,
    repos: Mutex<VecDeque<TransportResult<Vec<RepositorySummary>>>>,
    publish: Mutex<VecDeque<TransportResult<PublishReply>>>,
    /// When set, `generate_readme` and `publish` wait for a notification first.
    pub gate: Option<Notify>,
    pub generate_calls: AtomicUsize,
    pub identity_calls: AtomicUsize,
    pub repos_calls: AtomicUsize,
    pub publish_calls: AtomicUsize,
    pub last_generate: Mutex<Option<GenerationRequest>>,
    pub last_publish: Mutex<Option<PublishRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::default()
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn on_generate(self, reply: TransportResult<String>) -> Self {
        self.generate.lock().unwrap().push_back(reply);
        self
    }

    pub fn on_identity(self, reply: TransportResult<bool>) -> Self {
        self.identity.lock().unwrap().push_back(reply);
        self
    }

    pub fn on_repos(self, reply: TransportResult<Vec<RepositorySummary>>) -> Self {
        self.repos.lock().unwrap().push_back(reply);
        self
    }

    pub fn on_publish(self, reply: TransportResult<PublishReply>) -> Self {
        self.publish.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

fn next<T>(queue: &Mutex<VecDeque<TransportResult<T>>>) -> TransportResult<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_string())))
}

#[async_trait]
impl ReadmeBackendPort for ScriptedBackend {
    async fn generate_readme(&self, request: &GenerationRequest) -> TransportResult<String> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_generate.lock().unwrap() = Some(request.clone());
        self.wait_for_gate().await;
        next(&self.generate)
    }

    async fn check_identity(&self) -> TransportResult<bool> {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);
        next(&self.identity)
    }

    async fn list_repositories(&self) -> TransportResult<Vec<RepositorySummary>> {
        self.repos_calls.fetch_add(1, Ordering::SeqCst);
        next(&self.repos)
    }

    async fn publish(&self, request: &PublishRequest) -> TransportResult<PublishReply> {
        self.publish_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_publish.lock().unwrap() = Some(request.clone());
        self.wait_for_gate().await;
        next(&self.publish)
    }
}

pub fn summary(full_name: &str, description: Option<&str>) -> RepositorySummary {
    RepositorySummary {
        full_name: full_name.to_string(),
        description: description.map(str::to_string),
        is_private: false,
        primary_language: None,
    }
}
