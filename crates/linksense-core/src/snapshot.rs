//! Point-in-time records of the host's network interfaces.

/// OS-reported operational state of an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationalStatus {
    /// The interface is up and able to pass packets.
    Up,
    /// The interface is down.
    Down,
    /// The platform reported some other state, or none at all.
    Unknown,
}

impl std::fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// OS classification of an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceKind {
    /// Wired Ethernet interface.
    Ethernet,
    /// Wireless (802.11) interface.
    Wireless,
    /// Loopback interface (localhost).
    Loopback,
    /// Tunnel interface (VPN, 6to4, etc.).
    Tunnel,
    /// Any other category.
    Other,
}

impl std::fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ethernet => write!(f, "Ethernet"),
            Self::Wireless => write!(f, "Wireless"),
            Self::Loopback => write!(f, "Loopback"),
            Self::Tunnel => write!(f, "Tunnel"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A read-only record of a single network interface, captured once per
/// evaluation by the platform collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSnapshot {
    /// Interface name (e.g., "eth0", "en0", "Wi-Fi").
    pub name: String,
    /// Human-readable adapter description (Windows only, empty on other
    /// platforms).
    pub description: String,
    /// Whether the interface is currently up.
    pub status: OperationalStatus,
    /// Interface category (Ethernet, Wireless, Loopback, etc.).
    pub kind: InterfaceKind,
    /// Nominal link speed in bits per second. Platforms report 0 or a
    /// negative sentinel when the speed is unknown; the value is taken at
    /// face value either way.
    pub speed_bps: i64,
}
