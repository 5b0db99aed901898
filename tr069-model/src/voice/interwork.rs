use chrono::{DateTime, Utc};

use crate::schema::Facets;
use crate::value::Alias;

use super::{ORIGIN, STATUS};

data_object! {
    /// Interworking between network-side SIP networks and user-side
    /// registrars, driven by a rule set.
    pub struct Interwork = "VoiceService.{i}.Interwork.{i}." {
        params {
            /// Enables or disables this interworking function.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Stops accepting new calls while letting existing ones finish.
            quiescent_mode / with_quiescent_mode: bool = "QuiescentMode", ReadWrite, Facets::NONE, default "false";
            /// Operational state of the interworking function.
            status / with_status: String = "Status", ReadOnly, Facets::enumeration(STATUS), default "Disabled";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Human readable name.
            name / with_name: String = "Name", ReadWrite, Facets::max_len(64);
            /// The SIP proxy that carries the interworked calls.
            proxy_server / with_proxy_server: String = "ProxyServer", ReadWrite,
                Facets::reference("VoiceService.{i}.SIP.Proxy.{i}.").with_max_len(256);
            /// URL of the interworking rule set.
            interworking_rule_set / with_interworking_rule_set: String = "InterworkingRuleSet", ReadWrite, Facets::max_len(256);
            /// When the rule set was last loaded.
            interworking_rule_set_time / with_interworking_rule_set_time: DateTime<Utc> = "InterworkingRuleSetTime", ReadOnly, Facets::NONE;
            /// URL of the firewall rule set applied with it.
            firewall_rule_set / with_firewall_rule_set: String = "FirewallRuleSet", ReadWrite, Facets::max_len(256);
            /// How strictly numbers are checked against E.164.
            e164_mode / with_e164_mode: String = "E164Mode", ReadWrite,
                Facets::enumeration(&["Disabled", "Loose", "Strict"]), default "Disabled";
            /// Number of rows in `UserInterface`.
            user_interface_number_of_entries / with_user_interface_number_of_entries: u32 = "UserInterfaceNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `Map`.
            map_number_of_entries / with_map_number_of_entries: u32 = "MapNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {
            /// SIP networks on the network side.
            networks / with_network: String = "Networks", ReadWrite,
                Facets::reference("VoiceService.{i}.SIP.Network.{i}.").with_list_max_len(256);
        }
        objects {}
        tables {
            user_interfaces / with_user_interface: InterworkUserInterface = "UserInterface";
            maps / with_map: InterworkMap = "Map";
        }
    }
}

data_object! {
    /// A user-side registrar and network pair.
    pub struct InterworkUserInterface = "VoiceService.{i}.Interwork.{i}.UserInterface.{i}." {
        params {
            /// Enables or disables this user interface.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// The registrar users attach to.
            registrar / with_registrar: String = "Registrar", ReadWrite,
                Facets::reference("VoiceService.{i}.SIP.Registrar.{i}.").with_max_len(256);
            /// The SIP network users belong to.
            network / with_network: String = "Network", ReadWrite,
                Facets::reference("VoiceService.{i}.SIP.Network.{i}.").with_max_len(256);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// One mapping from a network connection to a user connection.
    pub struct InterworkMap = "VoiceService.{i}.Interwork.{i}.Map.{i}." {
        params {
            /// Enables or disables this mapping.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Whether the mapping is in use.
            status / with_status: String = "Status", ReadOnly,
                Facets::enumeration(&["Active", "Inactive", "Error", "Disabled"]), default "Disabled";
            /// Reason for the current status.
            status_description / with_status_description: String = "StatusDescription", ReadOnly, Facets::max_len(256);
            /// Whether the row was created by the device or configured.
            origin / with_origin: String = "Origin", ReadOnly, Facets::enumeration(ORIGIN), default "Static";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// When the mapping was last used.
            last_time / with_last_time: DateTime<Utc> = "LastTime", ReadOnly, Facets::NONE;
            /// Path of the network side connection.
            network_connection / with_network_connection: String = "NetworkConnection", ReadWrite, Facets::max_len(256);
            /// Path of the user side connection.
            user_connection / with_user_connection: String = "UserConnection", ReadWrite, Facets::max_len(256);
            /// Digit map selecting calls for this mapping.
            digit_map / with_digit_map: String = "DigitMap", ReadWrite, Facets::max_len(256);
            /// Applies `DigitMap` when true.
            digit_map_enable / with_digit_map_enable: bool = "DigitMapEnable", ReadWrite, Facets::NONE, default "true";
            /// Lower values are tried first.
            priority / with_priority: u32 = "Priority", ReadWrite, Facets::NONE;
        }
        lists {}
        objects {}
        tables {}
    }
}
