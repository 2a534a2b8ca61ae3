//! Micro-frontend shell routing library.
//!
//! Resolves navigation paths to independently deployed UI modules
//! ("remotes"), loading each remote's entry module lazily on first use.
//! Loads are cached for the process lifetime and de-duplicated while in
//! flight; unmatched paths fall back to a not-found view.
//!
//! # Data Flow
//! ```text
//! navigation path
//!     → shell (per-navigation state machine)
//!     → routing (ordered first-match table)
//!     → loader (cache + in-flight de-duplication + resolver)
//!     → renderer (host-supplied view sink)
//! ```
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use federation_shell::{HttpManifestResolver, Renderer, Shell, View};
//!
//! struct LogRenderer;
//!
//! impl Renderer for LogRenderer {
//!     fn render(&self, view: View) {
//!         println!("mount: {view:?}");
//!     }
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = federation_shell::config::load_config(Path::new("shell.toml"))?;
//! federation_shell::observability::init_logging(&config.observability);
//!
//! let shell = Shell::from_config(
//!     &config,
//!     Arc::new(HttpManifestResolver::new()),
//!     Arc::new(LogRenderer),
//! )
//! .map_err(|errors| format!("invalid config: {errors:?}"))?;
//!
//! shell.navigate("/child1").await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod observability;
pub mod registry;
pub mod routing;
pub mod shell;

pub use config::ShellConfig;
pub use error::{LoadError, LoadResult, ResolveError};
pub use loader::{ComponentRef, HttpManifestResolver, ModuleHandle, ModuleLoader, ModuleResolver};
pub use registry::{RemoteDescriptor, RemoteRegistry};
pub use routing::{RouteBinding, RouteEntry, RoutePattern, RouteTable};
pub use shell::{NavigationOutcome, Renderer, Shell, View};
