//! Navigation orchestration.
//!
//! # States
//! - Idle: navigation created, lookup not yet started
//! - Resolving: route matched (or not); remote load in progress if any
//! - Rendered: a view was handed to the renderer
//! - Failed: a remote load failed; the error view was rendered
//!
//! # State Transitions
//! ```text
//! Idle → Resolving: navigate() starts the route lookup
//! Resolving → Rendered: local view, not-found fallback, or loaded remote
//! Resolving → Failed: remote load error (error view rendered)
//! ```
//!
//! # Design Decisions
//! - One state machine instance per navigation; no global lock
//! - A navigation superseded by a newer one renders nothing; its
//!   completed load still populates the cache for future use
//! - Load failures surface twice: as a rendered error view and as the
//!   returned error

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use super::view::{Renderer, View};
use crate::config::schema::ShellConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::error::LoadError;
use crate::loader::{ModuleLoader, ModuleResolver};
use crate::observability::metrics;
use crate::registry::RemoteRegistry;
use crate::routing::{RouteBinding, RouteTable};

/// Lifecycle of a single navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    Idle,
    Resolving,
    Rendered,
    Failed,
}

/// Result of one navigation.
#[derive(Debug)]
pub enum NavigationOutcome {
    /// A view was rendered (a component or the not-found fallback).
    Rendered(View),

    /// The matched remote failed to load; the error view was rendered.
    Failed(LoadError),

    /// A newer navigation started first; nothing was rendered.
    Superseded,
}

struct Navigation {
    id: Uuid,
    path: String,
    epoch: u64,
    state: NavigationState,
}

impl Navigation {
    fn transition(&mut self, next: NavigationState) {
        tracing::debug!(
            navigation_id = %self.id,
            path = %self.path,
            from = ?self.state,
            to = ?next,
            "Navigation state change"
        );
        self.state = next;
    }
}

/// The shell router: matches paths, drives loads, and renders views.
pub struct Shell {
    table: RouteTable,
    loader: Arc<ModuleLoader>,
    renderer: Arc<dyn Renderer>,
    epoch: AtomicU64,
}

impl Shell {
    pub fn new(table: RouteTable, loader: Arc<ModuleLoader>, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            table,
            loader,
            renderer,
            epoch: AtomicU64::new(0),
        }
    }

    /// Build a shell from validated configuration.
    pub fn from_config(
        config: &ShellConfig,
        resolver: Arc<dyn ModuleResolver>,
        renderer: Arc<dyn Renderer>,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_config(config)?;

        let registry = Arc::new(RemoteRegistry::from_config(&config.remotes)?);
        let table = RouteTable::from_config(&config.routes)?;

        let mut loader = ModuleLoader::new(registry, resolver);
        if config.timeouts.load_secs > 0 {
            loader = loader.with_load_timeout(Duration::from_secs(config.timeouts.load_secs));
        }

        Ok(Self::new(table, Arc::new(loader), renderer))
    }

    /// Handle one navigation request for `path`.
    pub async fn navigate(&self, path: &str) -> NavigationOutcome {
        let mut nav = Navigation {
            id: Uuid::new_v4(),
            path: path.to_string(),
            epoch: self.epoch.fetch_add(1, Ordering::SeqCst) + 1,
            state: NavigationState::Idle,
        };
        nav.transition(NavigationState::Resolving);

        let Some(entry) = self.table.match_path(path) else {
            tracing::info!(navigation_id = %nav.id, path = %path, "No route matched");
            metrics::record_navigation("not_found");
            self.renderer.render(View::NotFound);
            nav.transition(NavigationState::Rendered);
            return NavigationOutcome::Rendered(View::NotFound);
        };

        match &entry.binding {
            RouteBinding::Local(component) => {
                let view = View::Component(component.clone());
                metrics::record_navigation("local");
                self.renderer.render(view.clone());
                nav.transition(NavigationState::Rendered);
                NavigationOutcome::Rendered(view)
            }
            RouteBinding::Remote { remote, module } => {
                // The one suspension point: other navigations may start
                // and finish while this load is in flight.
                let loaded = self.loader.load(remote, module).await;

                if self.superseded(&nav) {
                    return NavigationOutcome::Superseded;
                }

                match loaded {
                    Ok(handle) => {
                        let view = View::Component(handle.entry_component.clone());
                        metrics::record_navigation("remote");
                        self.renderer.render(view.clone());
                        nav.transition(NavigationState::Rendered);
                        NavigationOutcome::Rendered(view)
                    }
                    Err(err) => {
                        let view = View::LoadError {
                            remote: remote.clone(),
                            module: module.clone(),
                            message: err.to_string(),
                        };
                        metrics::record_navigation("failed");
                        self.renderer.render(view);
                        nav.transition(NavigationState::Failed);
                        NavigationOutcome::Failed(err)
                    }
                }
            }
        }
    }

    /// True if a newer navigation started after `nav`.
    fn superseded(&self, nav: &Navigation) -> bool {
        let superseded = self.epoch.load(Ordering::SeqCst) != nav.epoch;
        if superseded {
            tracing::debug!(
                navigation_id = %nav.id,
                path = %nav.path,
                "Navigation superseded; discarding result"
            );
            metrics::record_navigation("superseded");
        }
        superseded
    }
}
