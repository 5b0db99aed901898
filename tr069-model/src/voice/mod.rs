//! TR-104 VoiceService objects.

mod call_control;
mod call_log;
mod capabilities;
mod interwork;
mod pots;
mod profile;
mod sip;
mod trunk;

pub use call_control::*;
pub use call_log::*;
pub use capabilities::*;
pub use interwork::*;
pub use pots::*;
pub use profile::*;
pub use sip::*;
pub use trunk::*;

use crate::schema::Facets;
use crate::value::Alias;

/// Values of the common `Status` parameter of voice objects.
pub(crate) const STATUS: &[&str] = &["Up", "Error", "Testing", "Quiescent", "Disabled"];
/// Values of `Origin`: whether a row was created by the device or configured.
pub(crate) const ORIGIN: &[&str] = &["AutoConfigured", "Static"];
pub(crate) const CALL_STATUS: &[&str] = &[
    "Idle",
    "Dialing",
    "Delivered",
    "Connected",
    "Alerting",
    "Disconnected",
];

data_object! {
    /// One voice service instance: its capabilities, the analog and SIP
    /// interfaces, call control, trunks and the call log.
    pub struct VoiceService = "VoiceService.{i}." {
        params {
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Number of rows in `Interwork`.
            interwork_number_of_entries / with_interwork_number_of_entries: u32 = "InterworkNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `Trunk`.
            trunk_number_of_entries / with_trunk_number_of_entries: u32 = "TrunkNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `CallLog`.
            call_log_number_of_entries / with_call_log_number_of_entries: u32 = "CallLogNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `VoIPProfile`.
            voip_profile_number_of_entries / with_voip_profile_number_of_entries: u32 = "VoIPProfileNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `CodecProfile`.
            codec_profile_number_of_entries / with_codec_profile_number_of_entries: u32 = "CodecProfileNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {
            capabilities / with_capabilities: Capabilities = "Capabilities";
            reserved_ports / with_reserved_ports: ReservedPorts = "ReservedPorts";
            pots / with_pots: Pots = "POTS";
            sip / with_sip: Sip = "SIP";
            call_control / with_call_control: CallControl = "CallControl";
        }
        tables {
            interworks / with_interwork: Interwork = "Interwork";
            trunks / with_trunk: Trunk = "Trunk";
            call_logs / with_call_log: CallLog = "CallLog";
            voip_profiles / with_voip_profile: VoipProfile = "VoIPProfile";
            codec_profiles / with_codec_profile: CodecProfile = "CodecProfile";
        }
    }
}

data_object! {
    /// Port ranges the voice service keeps for itself on the WAN and LAN
    /// sides, e.g. `5060,16384-16483`.
    pub struct ReservedPorts = "VoiceService.{i}.ReservedPorts." {
        params {}
        lists {
            /// Ports and port ranges reserved on the WAN side.
            wan_port_range / with_wan_port_range: String = "WANPortRange", ReadOnly, Facets::NONE;
            /// Ports and port ranges reserved on the LAN side.
            lan_port_range / with_lan_port_range: String = "LANPortRange", ReadOnly, Facets::NONE;
        }
        objects {}
        tables {}
    }
}
