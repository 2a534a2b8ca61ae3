//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! navigation path
//!     → table.rs (ordered scan, first match wins)
//!     → pattern.rs (exact / wildcard matching)
//!     → Return: matched RouteEntry or None
//!
//! Route compilation (at startup):
//!     RouteConfig[]
//!     → Parse patterns, classify bindings
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Declaration order decides ties; exact entries belong before the
//!   wildcard fallback
//! - Deterministic: the same path always matches the same entry

pub mod pattern;
pub mod table;

pub use pattern::{PatternError, RoutePattern};
pub use table::{RouteBinding, RouteEntry, RouteTable};
