//! TR-196 FAPService objects for femto access points.

mod capabilities;
mod control;

pub use capabilities::*;
pub use control::*;

use chrono::{DateTime, Utc};

use crate::schema::Facets;
use crate::value::Alias;

data_object! {
    /// One femto access point service.
    pub struct FapService = "FAPService.{i}." {
        params {
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Whether the FAP is a standalone box or integrated into another device.
            device_type / with_device_type: String = "DeviceType", ReadOnly,
                Facets::enumeration(&["Standalone", "Integrated"]);
            /// Prefix of the distinguished name used in PM files.
            dn_prefix / with_dn_prefix: String = "DNPrefix", ReadWrite, Facets::max_len(256);
        }
        lists {}
        objects {
            capabilities / with_capabilities: Capabilities = "Capabilities";
            fap_control / with_fap_control: FapControl = "FAPControl";
            perf_mgmt / with_perf_mgmt: PerfMgmt = "PerfMgmt";
        }
        tables {}
    }
}

data_object! {
    /// Performance management: where and how often PM files are uploaded.
    pub struct PerfMgmt = "FAPService.{i}.PerfMgmt." {
        params {
            /// Number of rows in `Config`.
            config_number_of_entries / with_config_number_of_entries: u32 = "ConfigNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {}
        tables {
            configs / with_config: PerfMgmtConfig = "Config";
        }
    }
}

data_object! {
    /// Periodic upload of performance measurement files.
    pub struct PerfMgmtConfig = "FAPService.{i}.PerfMgmt.Config.{i}." {
        params {
            /// Enables uploads for this configuration.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// URL the PM files are uploaded to.
            url / with_url: String = "URL", ReadWrite, Facets::max_len(256);
            /// Username for the upload server.
            username / with_username: String = "Username", ReadWrite, Facets::max_len(256);
            /// Password for the upload server. Reads return an empty string.
            password / with_password: String = "Password", ReadWrite, Facets::max_len(256);
            /// Seconds.
            periodic_upload_interval / with_periodic_upload_interval: u32 = "PeriodicUploadInterval", ReadWrite, Facets::min_value(1);
            /// Reference time that uploads are aligned to.
            periodic_upload_time / with_periodic_upload_time: DateTime<Utc> = "PeriodicUploadTime", ReadWrite, Facets::NONE;
        }
        lists {}
        objects {}
        tables {}
    }
}
