//! Wire data model for the daemon's `status` response.
//!
//! Field names mirror the daemon's camelCase JSON. Tier-coded fields
//! decode totally: an unrecognized or absent code becomes the Unknown
//! variant instead of failing the whole report. Counters the daemon may
//! omit stay `Option` here; normalizing them to 0 belongs to the
//! formatting layer.

use serde::Deserialize;

use crate::health::{HealthTier, ShareState};

/// One managed share as reported by the daemon. Read-only input,
/// consumed once per report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareSnapshot {
    /// Opaque identifier, unique within one response.
    pub id: String,
    /// Filesystem path associated with the share. Display only.
    pub storage_path: String,
    /// Overall worker state.
    pub state: ShareState,
    /// Elapsed milliseconds since the worker started.
    pub uptime_ms: u64,
    /// Restart counter. The daemon omits it for freshly added shares.
    pub num_restarts: Option<u64>,
    /// Runtime farming metrics.
    pub farmer_state: FarmerState,
}

/// The farming subset of a share's runtime metrics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FarmerState {
    /// Connected peer count.
    pub total_peers: Option<u64>,
    /// Storage contract count. Subject to display capping.
    pub contract_count: Option<u64>,
    /// Clock synchronization health.
    pub ntp_status: NtpStatus,
    /// Reachability of the share's listen port.
    pub port_status: PortStatus,
    /// Space consumed, pre-formatted by the daemon (e.g. "10GB").
    pub space_used: String,
    /// Percentage of allocated space consumed, nominal 0-100.
    pub percent_used: f64,
}

/// Clock offset report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NtpStatus {
    pub status: HealthTier,
    /// Clock offset in milliseconds.
    pub delta: f64,
}

/// Listen-port reachability report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortStatus {
    pub connection_status: HealthTier,
    pub listen_port: u16,
    /// How the port was opened (e.g. "TCP", "UPnP").
    pub connection_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_payload() {
        let json = r#"{
            "id": "d6f4a7b2",
            "storagePath": "/mnt/shares/alpha",
            "state": 1,
            "uptimeMs": 185000,
            "numRestarts": 2,
            "farmerState": {
                "totalPeers": 3,
                "contractCount": 150000000,
                "ntpStatus": {"status": 0, "delta": 12},
                "portStatus": {"connectionStatus": 2, "listenPort": 4000, "connectionType": "UPnP"},
                "spaceUsed": "10GB",
                "percentUsed": 50
            }
        }"#;
        let share: ShareSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(share.id, "d6f4a7b2");
        assert_eq!(share.storage_path, "/mnt/shares/alpha");
        assert_eq!(share.state, ShareState::Running);
        assert_eq!(share.uptime_ms, 185_000);
        assert_eq!(share.num_restarts, Some(2));
        let farmer = &share.farmer_state;
        assert_eq!(farmer.total_peers, Some(3));
        assert_eq!(farmer.contract_count, Some(150_000_000));
        assert_eq!(farmer.ntp_status.status, HealthTier::Healthy);
        assert_eq!(farmer.ntp_status.delta, 12.0);
        assert_eq!(farmer.port_status.connection_status, HealthTier::Critical);
        assert_eq!(farmer.port_status.listen_port, 4000);
        assert_eq!(farmer.port_status.connection_type, "UPnP");
        assert_eq!(farmer.space_used, "10GB");
        assert_eq!(farmer.percent_used, 50.0);
    }

    #[test]
    fn test_missing_fields_decode_to_defaults() {
        let share: ShareSnapshot = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();
        assert_eq!(share.id, "bare");
        assert_eq!(share.state, ShareState::Unknown);
        assert_eq!(share.uptime_ms, 0);
        assert_eq!(share.num_restarts, None);
        assert_eq!(share.farmer_state.total_peers, None);
        assert_eq!(share.farmer_state.contract_count, None);
        assert_eq!(share.farmer_state.ntp_status.status, HealthTier::Unknown);
        assert_eq!(share.farmer_state.port_status.connection_status, HealthTier::Unknown);
        assert_eq!(share.farmer_state.space_used, "");
    }

    #[test]
    fn test_out_of_range_codes_decode_to_unknown() {
        let json = r#"{
            "id": "odd",
            "state": 7,
            "farmerState": {
                "ntpStatus": {"status": -1, "delta": 0},
                "portStatus": {"connectionStatus": 99, "listenPort": 0, "connectionType": ""}
            }
        }"#;
        let share: ShareSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(share.state, ShareState::Unknown);
        assert_eq!(share.farmer_state.ntp_status.status, HealthTier::Unknown);
        assert_eq!(
            share.farmer_state.port_status.connection_status,
            HealthTier::Unknown
        );
    }
}
