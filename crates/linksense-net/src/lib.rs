//! System platform collaborator for Linksense.
//!
//! Supplies the live interface snapshots and the global "any network"
//! signal that `linksense-core` evaluates. All OS access lives here; the
//! core itself never touches the system.
//!
//! # Example
//!
//! ```no_run
//! use linksense_core::{check, EvaluationConfig};
//! use linksense_net::SystemNetwork;
//!
//! let report = check(&SystemNetwork::new(), EvaluationConfig::default());
//! println!("network available: {}", report.available);
//! ```

mod system;

pub use system::SystemNetwork;
