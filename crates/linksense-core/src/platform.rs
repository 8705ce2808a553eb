//! The live-platform collaborator contract.

use crate::config::EvaluationConfig;
use crate::evaluate::{evaluate, EvaluationReport};
use crate::snapshot::InterfaceSnapshot;

/// Source of live network state.
///
/// Both queries are synchronous, side-effect-free reads of OS state at call
/// time. Keeping them behind a trait lets evaluations run against synthetic
/// snapshots instead of real hardware.
pub trait Platform {
    /// Global platform signal: does the OS consider any network available?
    fn is_network_available(&self) -> bool;

    /// All network interfaces, in platform enumeration order.
    fn interfaces(&self) -> Vec<InterfaceSnapshot>;
}

/// Evaluate current availability against a live platform.
///
/// Queries the global availability signal first; when it is negative the
/// interfaces are not enumerated at all.
pub fn check<P: Platform + ?Sized>(platform: &P, config: EvaluationConfig) -> EvaluationReport {
    if !platform.is_network_available() {
        return evaluate(&[], false, config);
    }
    evaluate(&platform.interfaces(), true, config)
}
