//! Command-line connectivity check.
//!
//! Evaluates the host's network interfaces once, prints one line per
//! decision plus a final verdict, and waits for Enter before exiting.
//! Evaluator diagnostics go through `tracing`; set `RUST_LOG` to see them.

use std::io;

use linksense_core::{check, Decision, EvaluationConfig};
use linksense_net::SystemNetwork;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("Checking network availability...");

    // Speed filtering stays off here; see SUGGESTED_MINIMUM_SPEED_BPS for
    // the opt-in threshold.
    let report = check(&SystemNetwork::new(), EvaluationConfig::default());
    for decision in &report.decisions {
        println!("{}", render(decision));
    }

    println!();
    println!("Press Enter to exit...");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(())
}

/// One console line per trace decision.
fn render(decision: &Decision) -> String {
    match decision {
        Decision::Skipped { interface, reason } => {
            format!("Skipping interface ({interface}): {reason}")
        }
        Decision::Accepted { interface } => {
            format!("Network available is true! Qualifying interface: {interface}")
        }
        Decision::NoNetworkReported => {
            "The operating system reported that no network is available.".to_string()
        }
        Decision::NoInterfaceQualified => "Network available is false!".to_string(),
    }
}
