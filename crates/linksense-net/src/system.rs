//! Live interface snapshots backed by the operating system.

use linksense_core::{InterfaceKind, InterfaceSnapshot, OperationalStatus, Platform};

/// [`Platform`] implementation that queries the operating system through
/// `netdev`.
///
/// Stateless; every query reads live OS state at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNetwork;

impl SystemNetwork {
    /// Create a new system platform handle.
    pub fn new() -> Self {
        Self
    }
}

impl Platform for SystemNetwork {
    /// The system counts as having a network when at least one interface
    /// is up, not loopback, and has an address assigned.
    fn is_network_available(&self) -> bool {
        netdev::get_interfaces().iter().any(|iface| {
            iface.is_up()
                && !iface.is_loopback()
                && (!iface.ipv4.is_empty() || !iface.ipv6.is_empty())
        })
    }

    fn interfaces(&self) -> Vec<InterfaceSnapshot> {
        let interfaces = netdev::get_interfaces();
        tracing::debug!(
            target: "linksense_net::system",
            count = interfaces.len(),
            "collected interface snapshot"
        );
        interfaces.into_iter().map(snapshot_from).collect()
    }
}

/// Map one OS interface record into the core's snapshot model.
fn snapshot_from(iface: netdev::Interface) -> InterfaceSnapshot {
    let status = if iface.is_up() {
        OperationalStatus::Up
    } else {
        OperationalStatus::Down
    };
    let kind = kind_of(&iface);
    let speed_bps = link_speed_bps(&iface);

    InterfaceSnapshot {
        // The raw name is an adapter GUID on Windows; the friendly name is
        // what users (and the virtual-adapter heuristic) see.
        name: iface.friendly_name.unwrap_or(iface.name),
        description: iface.description.unwrap_or_default(),
        status,
        kind,
        speed_bps,
    }
}

fn kind_of(iface: &netdev::Interface) -> InterfaceKind {
    use netdev::interface::InterfaceType;

    // Flags are more reliable than the reported type on Unix.
    if iface.is_loopback() {
        return InterfaceKind::Loopback;
    }
    if iface.is_tun() {
        return InterfaceKind::Tunnel;
    }

    match iface.if_type {
        InterfaceType::Wireless80211 => InterfaceKind::Wireless,
        InterfaceType::Ethernet
        | InterfaceType::Ethernet3Megabit
        | InterfaceType::FastEthernetT
        | InterfaceType::FastEthernetFx
        | InterfaceType::GigabitEthernet => InterfaceKind::Ethernet,
        InterfaceType::Loopback => InterfaceKind::Loopback,
        InterfaceType::Tunnel => InterfaceKind::Tunnel,
        _ => InterfaceKind::Other,
    }
}

/// Nominal link speed in bits per second; zero when the platform does not
/// report one.
fn link_speed_bps(iface: &netdev::Interface) -> i64 {
    iface
        .transmit_speed
        .or(iface.receive_speed)
        .map_or(0, |bps| bps as i64)
}
