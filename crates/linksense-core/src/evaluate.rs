//! The availability decision procedure.
//!
//! Interfaces are inspected in platform enumeration order. Each one is run
//! through a fixed sequence of exclusion predicates; the first predicate
//! that matches records a [`Decision::Skipped`] and moves on. The first
//! interface that passes every predicate is accepted and evaluation stops.
//! Hard signals (operational status, interface category) come before the
//! string heuristics so a weak textual match never masks a hard
//! disqualification.

use crate::config::EvaluationConfig;
use crate::snapshot::{InterfaceKind, InterfaceSnapshot, OperationalStatus};

/// Adapter description some platforms report for a software loopback
/// adapter filed under an Ethernet category rather than Loopback.
pub const MISREPORTED_LOOPBACK_DESCRIPTION: &str = "Microsoft Loopback Adapter";

/// Why an interface was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The interface is not operationally up, or belongs to a category
    /// that never counts as a physical connection (loopback, tunnel).
    StatusOrKind {
        /// Reported operational state.
        status: OperationalStatus,
        /// Reported category.
        kind: InterfaceKind,
    },
    /// Reported link speed is below the configured minimum.
    BelowMinimumSpeed {
        /// Speed the platform reported, in bits per second.
        speed_bps: i64,
        /// Configured minimum, in bits per second.
        minimum_bps: i64,
    },
    /// "virtual" appears in the interface name or description. Catches VM
    /// host-only networks and hypervisor bridges that enumerate under
    /// ordinary categories.
    VirtualAdapter {
        /// Reported adapter description.
        description: String,
    },
    /// The description matches [`MISREPORTED_LOOPBACK_DESCRIPTION`]
    /// exactly.
    MisreportedLoopback,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StatusOrKind { status, kind } => {
                write!(f, "status {status}, category {kind}")
            }
            Self::BelowMinimumSpeed { speed_bps, minimum_bps } => {
                write!(f, "link speed {speed_bps} bps below minimum {minimum_bps} bps")
            }
            Self::VirtualAdapter { description } => {
                write!(f, "virtual adapter ({description})")
            }
            Self::MisreportedLoopback => write!(f, "misreported loopback adapter"),
        }
    }
}

/// A single step in the evaluation trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The named interface was rejected by the first matching predicate.
    Skipped {
        /// Interface name.
        interface: String,
        /// The predicate that fired.
        reason: SkipReason,
    },
    /// The named interface passed every predicate; evaluation stopped here.
    Accepted {
        /// Interface name.
        interface: String,
    },
    /// The platform reported no network at all; interfaces were not
    /// inspected.
    NoNetworkReported,
    /// Every interface was rejected.
    NoInterfaceQualified,
}

/// Outcome of one availability evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationReport {
    /// Whether at least one interface qualified as a real connection.
    pub available: bool,
    /// Ordered trace of per-interface decisions, ending in a terminal
    /// record.
    pub decisions: Vec<Decision>,
}

impl EvaluationReport {
    /// Name of the accepted interface, if one qualified.
    pub fn accepted_interface(&self) -> Option<&str> {
        self.decisions.iter().find_map(|decision| match decision {
            Decision::Accepted { interface } => Some(interface.as_str()),
            _ => None,
        })
    }
}

/// Decide whether the snapshot contains a usable, physical, active network
/// connection.
///
/// `network_reported` is the platform's global "any network available"
/// signal; when false the interfaces are not inspected at all. Interfaces
/// are otherwise taken in the order given, and evaluation stops at the
/// first one that qualifies.
///
/// Never fails: an empty snapshot or a snapshot with no qualifying
/// interface is a normal `false` result.
pub fn evaluate(
    interfaces: &[InterfaceSnapshot],
    network_reported: bool,
    config: EvaluationConfig,
) -> EvaluationReport {
    if !network_reported {
        tracing::debug!(target: "linksense_core::evaluate", "platform reported no network");
        return EvaluationReport {
            available: false,
            decisions: vec![Decision::NoNetworkReported],
        };
    }

    tracing::debug!(
        target: "linksense_core::evaluate",
        count = interfaces.len(),
        "evaluating interface snapshot"
    );

    let mut decisions = Vec::with_capacity(interfaces.len() + 1);

    for iface in interfaces {
        match skip_reason(iface, &config) {
            Some(reason) => {
                tracing::debug!(
                    target: "linksense_core::evaluate",
                    interface = %iface.name,
                    %reason,
                    "interface skipped"
                );
                decisions.push(Decision::Skipped {
                    interface: iface.name.clone(),
                    reason,
                });
            }
            None => {
                tracing::debug!(
                    target: "linksense_core::evaluate",
                    interface = %iface.name,
                    "interface accepted"
                );
                decisions.push(Decision::Accepted {
                    interface: iface.name.clone(),
                });
                return EvaluationReport {
                    available: true,
                    decisions,
                };
            }
        }
    }

    decisions.push(Decision::NoInterfaceQualified);
    EvaluationReport {
        available: false,
        decisions,
    }
}

/// Apply the exclusion predicates in their fixed order; the first match
/// wins.
fn skip_reason(iface: &InterfaceSnapshot, config: &EvaluationConfig) -> Option<SkipReason> {
    if iface.status != OperationalStatus::Up
        || iface.kind == InterfaceKind::Loopback
        || iface.kind == InterfaceKind::Tunnel
    {
        return Some(SkipReason::StatusOrKind {
            status: iface.status,
            kind: iface.kind,
        });
    }

    if iface.speed_bps < config.minimum_speed_bps {
        return Some(SkipReason::BelowMinimumSpeed {
            speed_bps: iface.speed_bps,
            minimum_bps: config.minimum_speed_bps,
        });
    }

    if mentions_virtual(&iface.description) || mentions_virtual(&iface.name) {
        return Some(SkipReason::VirtualAdapter {
            description: iface.description.clone(),
        });
    }

    // Equality, not substring: only the exact description is known to be a
    // loopback in disguise.
    if iface
        .description
        .eq_ignore_ascii_case(MISREPORTED_LOOPBACK_DESCRIPTION)
    {
        return Some(SkipReason::MisreportedLoopback);
    }

    None
}

fn mentions_virtual(text: &str) -> bool {
    text.to_ascii_lowercase().contains("virtual")
}
