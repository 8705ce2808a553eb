//! Evaluation core for Linksense.
//!
//! Answers one question: is there a usable, physical, active network
//! connection on this machine right now? The input is a point-in-time
//! snapshot of the host's interfaces plus the platform's global "any
//! network" signal; the output is a verdict and an ordered trace of
//! per-interface decisions.
//!
//! The core is pure computation: no I/O, no OS calls, no shared state.
//! Acquiring the snapshot is the job of a [`Platform`] collaborator such as
//! `linksense-net`'s system implementation.
//!
//! # Example
//!
//! ```
//! use linksense_core::{
//!     evaluate, EvaluationConfig, InterfaceKind, InterfaceSnapshot, OperationalStatus,
//! };
//!
//! let snapshot = vec![InterfaceSnapshot {
//!     name: "eth0".to_string(),
//!     description: "Intel Ethernet".to_string(),
//!     status: OperationalStatus::Up,
//!     kind: InterfaceKind::Ethernet,
//!     speed_bps: 1_000_000_000,
//! }];
//!
//! let report = evaluate(&snapshot, true, EvaluationConfig::default());
//! assert!(report.available);
//! assert_eq!(report.accepted_interface(), Some("eth0"));
//! ```

mod config;
mod evaluate;
mod platform;
mod snapshot;

pub use config::{EvaluationConfig, SUGGESTED_MINIMUM_SPEED_BPS};
pub use evaluate::{
    evaluate, Decision, EvaluationReport, SkipReason, MISREPORTED_LOOPBACK_DESCRIPTION,
};
pub use platform::{check, Platform};
pub use snapshot::{InterfaceKind, InterfaceSnapshot, OperationalStatus};
