//! Shared fixtures for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use federation_shell::error::ResolveError;
use federation_shell::{
    ComponentRef, ModuleHandle, ModuleResolver, RemoteDescriptor, RemoteRegistry, Renderer, Shell,
    ShellConfig, View,
};

/// Resolver backed by the descriptor itself, with programmable latency
/// and failure injection.
pub struct StaticResolver {
    fetches: AtomicUsize,
    delay: Option<Duration>,
    fail_remaining: AtomicUsize,
    hang: bool,
}

#[allow(dead_code)]
impl StaticResolver {
    pub fn new() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            delay: None,
            fail_remaining: AtomicUsize::new(0),
            hang: false,
        }
    }

    /// Every resolve sleeps for `delay` before returning.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    /// The next `times` resolves fail with a network error.
    pub fn failing(times: usize) -> Self {
        Self {
            fail_remaining: AtomicUsize::new(times),
            ..Self::new()
        }
    }

    /// Resolves never complete (deadline tests).
    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::new()
        }
    }

    /// Number of resolve calls issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModuleResolver for StaticResolver {
    async fn resolve(
        &self,
        descriptor: &RemoteDescriptor,
        module: &str,
    ) -> Result<ModuleHandle, ResolveError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if self.hang {
            std::future::pending::<()>().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self
            .fail_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(ResolveError::Network("connection refused".to_string()));
        }

        Ok(ModuleHandle {
            remote: descriptor.id.clone(),
            exposed_module: module.to_string(),
            entry_component: ComponentRef::from(format!("{}::{}", descriptor.id, module)),
        })
    }
}

/// Renderer that records every view it is asked to mount.
#[derive(Default)]
pub struct RecordingRenderer {
    views: Mutex<Vec<View>>,
}

#[allow(dead_code)]
impl RecordingRenderer {
    pub fn views(&self) -> Vec<View> {
        self.views.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<View> {
        self.views.lock().unwrap().last().cloned()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, view: View) {
        self.views.lock().unwrap().push(view);
    }
}

/// The canonical shell setup: home, three remote children, wildcard
/// fallback.
#[allow(dead_code)]
pub fn demo_config() -> ShellConfig {
    toml::from_str(
        r#"
        [[remotes]]
        id = "child1"
        entry_url = "http://localhost:4201/remoteEntry.json"
        exposed_modules = ["./Component"]

        [[remotes]]
        id = "child2"
        entry_url = "http://localhost:4202/remoteEntry.json"
        exposed_modules = ["./Component"]

        [[remotes]]
        id = "child3"
        entry_url = "http://localhost:4203/remoteEntry.json"
        exposed_modules = ["./Component"]

        [[routes]]
        path = "/"
        view = "home"

        [[routes]]
        path = "/child1"
        remote = "child1"
        module = "./Component"

        [[routes]]
        path = "/child2"
        remote = "child2"
        module = "./Component"

        [[routes]]
        path = "/child3"
        remote = "child3"
        module = "./Component"

        [[routes]]
        path = "/**"
        view = "not-found"

        [timeouts]
        load_secs = 0
        "#,
    )
    .unwrap()
}

/// Registry matching [`demo_config`], for loader-level tests.
#[allow(dead_code)]
pub fn demo_registry() -> RemoteRegistry {
    RemoteRegistry::from_config(&demo_config().remotes).unwrap()
}

/// Shell over [`demo_config`] with the given resolver.
#[allow(dead_code)]
pub fn build_shell(resolver: Arc<StaticResolver>) -> (Arc<Shell>, Arc<RecordingRenderer>) {
    let renderer = Arc::new(RecordingRenderer::default());
    let shell = Shell::from_config(&demo_config(), resolver, renderer.clone()).unwrap();
    (Arc::new(shell), renderer)
}
