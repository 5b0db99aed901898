//! TR-098 InternetGatewayDevice root and the objects every gateway carries.

use chrono::{DateTime, Utc};

use crate::fap::FapService;
use crate::schema::Facets;
use crate::voice::VoiceService;

data_object! {
    /// Root of a gateway's parameter tree.
    pub struct InternetGatewayDevice = "InternetGatewayDevice." {
        params {
            /// Supported data models and profiles, e.g.
            /// `InternetGatewayDevice:1.4[](Baseline:1), VoiceService:2.0[1](Endpoint:1)`.
            device_summary / with_device_summary: String = "DeviceSummary", ReadOnly, Facets::max_len(1024);
        }
        lists {}
        objects {
            device_info / with_device_info: DeviceInfo = "DeviceInfo";
            management_server / with_management_server: ManagementServer = "ManagementServer";
            time / with_time: Time = "Time";
            services / with_services: Services = "Services";
        }
        tables {}
    }
}

impl InternetGatewayDevice {
    /// Path prefix of every parameter in the tree.
    pub const ROOT_PATH: &'static str = "InternetGatewayDevice.";

    /// Rows of `Services.VoiceService`, empty when `Services` is absent.
    pub fn voice_services(&self) -> &[VoiceService] {
        self.services.as_ref().map(|s| s.voice_services.as_slice()).unwrap_or_default()
    }

    pub fn fap_services(&self) -> &[FapService] {
        self.services.as_ref().map(|s| s.fap_services.as_slice()).unwrap_or_default()
    }
}

data_object! {
    /// General device information: identity, versions and uptime.
    pub struct DeviceInfo = "InternetGatewayDevice.DeviceInfo." {
        params {
            /// Manufacturer of the device, human readable.
            manufacturer / with_manufacturer: String = "Manufacturer", ReadOnly, Facets::max_len(64);
            /// Organizationally unique identifier of the manufacturer, six
            /// upper-case hex digits.
            manufacturer_oui / with_manufacturer_oui: String = "ManufacturerOUI", ReadOnly, Facets::max_len(6);
            /// Model name of the device, human readable.
            model_name / with_model_name: String = "ModelName", ReadOnly, Facets::max_len(64);
            /// Full description of the device, human readable.
            description / with_description: String = "Description", ReadOnly, Facets::max_len(256);
            /// Identifier of the class of product the serial number applies to.
            product_class / with_product_class: String = "ProductClass", ReadOnly, Facets::max_len(64);
            /// Serial number of the device, unique within the manufacturer OUI and
            /// product class.
            serial_number / with_serial_number: String = "SerialNumber", ReadOnly, Facets::max_len(64);
            /// Hardware version of the device.
            hardware_version / with_hardware_version: String = "HardwareVersion", ReadOnly, Facets::max_len(64);
            /// Software version currently installed, as shown to the ACS.
            software_version / with_software_version: String = "SoftwareVersion", ReadOnly, Facets::max_len(64);
            /// Version of the modem firmware, where the modem is a separate part.
            modem_firmware_version / with_modem_firmware_version: String = "ModemFirmwareVersion", ReadOnly, Facets::max_len(64);
            /// Version of the specification implemented by the device.
            spec_version / with_spec_version: String = "SpecVersion", ReadOnly, Facets::max_len(16), default "1.0";
            /// Opaque code the ACS sets to describe the device's service
            /// provisioning. Each 4-character field is separated by a dot.
            provisioning_code / with_provisioning_code: String = "ProvisioningCode", ReadWrite, Facets::max_len(64);
            /// Seconds since boot.
            up_time / with_up_time: u32 = "UpTime", ReadOnly, Facets::NONE;
            /// Date and time the device was first set up with a WAN connection.
            first_use_date / with_first_use_date: DateTime<Utc> = "FirstUseDate", ReadOnly, Facets::NONE;
            /// Vendor specific log of recent significant events, newest last.
            device_log / with_device_log: String = "DeviceLog", ReadOnly, Facets::max_len(32768);
            /// Number of rows in `VendorConfigFile`.
            vendor_config_file_number_of_entries / with_vendor_config_file_number_of_entries: u32 = "VendorConfigFileNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {
            /// Additional hardware versions, for devices with several hardware parts.
            additional_hardware_version / with_additional_hardware_version: String = "AdditionalHardwareVersion", ReadOnly, Facets::NONE.with_list_max_len(64);
            /// Additional software versions, for devices with several software images.
            additional_software_version / with_additional_software_version: String = "AdditionalSoftwareVersion", ReadOnly, Facets::NONE.with_list_max_len(64);
        }
        objects {}
        tables {
            vendor_config_files / with_vendor_config_file: VendorConfigFile = "VendorConfigFile";
        }
    }
}

data_object! {
    /// A vendor configuration file installed on the device.
    pub struct VendorConfigFile = "InternetGatewayDevice.DeviceInfo.VendorConfigFile.{i}." {
        params {
            /// Name of the vendor configuration file.
            name / with_name: String = "Name", ReadOnly, Facets::max_len(64);
            /// Version of the vendor configuration file.
            version / with_version: String = "Version", ReadOnly, Facets::max_len(16);
            /// Date and time the configuration file was applied.
            date / with_date: DateTime<Utc> = "Date", ReadOnly, Facets::NONE;
            /// Textual description of the configuration file.
            description / with_description: String = "Description", ReadOnly, Facets::max_len(256);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// CWMP client settings: how and when the device talks to its ACS, and
    /// how the ACS reaches it.
    pub struct ManagementServer = "InternetGatewayDevice.ManagementServer." {
        params {
            /// URL the CPE uses to contact the ACS.
            url / with_url: String = "URL", ReadWrite, Facets::max_len(256);
            /// Username the CPE uses to authenticate to the ACS.
            username / with_username: String = "Username", ReadWrite, Facets::max_len(256);
            /// Password the CPE uses to authenticate to the ACS. Reads return
            /// an empty string.
            password / with_password: String = "Password", ReadWrite, Facets::max_len(256);
            /// Whether the CPE sends periodic Inform calls.
            periodic_inform_enable / with_periodic_inform_enable: bool = "PeriodicInformEnable", ReadWrite, Facets::NONE;
            /// Seconds between periodic Inform calls.
            periodic_inform_interval / with_periodic_inform_interval: u32 = "PeriodicInformInterval", ReadWrite, Facets::min_value(1);
            /// Reference time that periodic Informs are aligned to.
            periodic_inform_time / with_periodic_inform_time: DateTime<Utc> = "PeriodicInformTime", ReadWrite, Facets::NONE;
            /// Set from the last SetParameterValues, AddObject or
            /// DeleteObject that succeeded.
            parameter_key / with_parameter_key: String = "ParameterKey", ReadOnly, Facets::max_len(32);
            /// HTTP URL the ACS uses for a connection request to the CPE.
            connection_request_url / with_connection_request_url: String = "ConnectionRequestURL", ReadOnly, Facets::max_len(256);
            /// Username the ACS must present in a connection request.
            connection_request_username / with_connection_request_username: String = "ConnectionRequestUsername", ReadWrite, Facets::max_len(256);
            /// Password the ACS must present in a connection request.
            connection_request_password / with_connection_request_password: String = "ConnectionRequestPassword", ReadWrite, Facets::max_len(256);
            /// The CPE takes software upgrades only from the ACS.
            upgrades_managed / with_upgrades_managed: bool = "UpgradesManaged", ReadWrite, Facets::NONE;
            /// URL of the web server the CPE redirects a kicked browser to.
            kick_url / with_kick_url: String = "KickURL", ReadOnly, Facets::max_len(256);
            /// URL the CPE shows while a download is in progress.
            download_progress_url / with_download_progress_url: String = "DownloadProgressURL", ReadOnly, Facets::max_len(256);
            /// Minimum seconds between active notifications of value changes.
            default_active_notification_throttle / with_default_active_notification_throttle: u32 = "DefaultActiveNotificationThrottle", ReadWrite, Facets::NONE;
            /// Base of the session retry wait interval, in seconds.
            cwmp_retry_minimum_wait_interval / with_cwmp_retry_minimum_wait_interval: u32 = "CWMPRetryMinimumWaitInterval", ReadWrite, Facets::range(1, 65535), default "5";
            /// Session retry interval multiplier, in thousandths.
            cwmp_retry_interval_multiplier / with_cwmp_retry_interval_multiplier: u32 = "CWMPRetryIntervalMultiplier", ReadWrite, Facets::range(1000, 65535), default "2000";
            /// `host:port` the ACS uses for UDP connection requests (TR-111).
            udp_connection_request_address / with_udp_connection_request_address: String = "UDPConnectionRequestAddress", ReadOnly, Facets::max_len(256);
            /// Enables STUN for UDP connection requests.
            stun_enable / with_stun_enable: bool = "STUNEnable", ReadWrite, Facets::NONE;
            /// Host name or IP address of the STUN server.
            stun_server_address / with_stun_server_address: String = "STUNServerAddress", ReadWrite, Facets::max_len(256);
            /// Port of the STUN server.
            stun_server_port / with_stun_server_port: u32 = "STUNServerPort", ReadWrite, Facets::range(0, 65535);
            /// STUN username, when binding requests are authenticated.
            stun_username / with_stun_username: String = "STUNUsername", ReadWrite, Facets::max_len(256);
            /// STUN password, when binding requests are authenticated.
            stun_password / with_stun_password: String = "STUNPassword", ReadWrite, Facets::max_len(256);
            /// `-1` leaves the keep-alive period unbounded.
            stun_maximum_keep_alive_period / with_stun_maximum_keep_alive_period: i32 = "STUNMaximumKeepAlivePeriod", ReadWrite, Facets::min_value(-1);
            /// Shortest period, in seconds, between STUN binding requests.
            stun_minimum_keep_alive_period / with_stun_minimum_keep_alive_period: u32 = "STUNMinimumKeepAlivePeriod", ReadWrite, Facets::NONE;
            /// A NAT was detected between the CPE and the STUN server.
            nat_detected / with_nat_detected: bool = "NATDetected", ReadOnly, Facets::NONE;
            /// Number of rows in `ManageableDevice`.
            manageable_device_number_of_entries / with_manageable_device_number_of_entries: u32 = "ManageableDeviceNumberOfEntries", ReadOnly, Facets::NONE;
            /// Minimum seconds between active notifications of
            /// `ManageableDeviceNumberOfEntries`.
            manageable_device_notification_limit / with_manageable_device_notification_limit: u32 = "ManageableDeviceNotificationLimit", ReadWrite, Facets::NONE;
        }
        lists {}
        objects {}
        tables {
            manageable_devices / with_manageable_device: ManageableDevice = "ManageableDevice";
        }
    }
}

data_object! {
    /// A LAN device that identified itself to the gateway through DHCP
    /// vendor options (TR-111).
    pub struct ManageableDevice = "InternetGatewayDevice.ManagementServer.ManageableDevice.{i}." {
        params {
            /// OUI of the device's manufacturer, from its DHCP vendor options.
            manufacturer_oui / with_manufacturer_oui: String = "ManufacturerOUI", ReadOnly, Facets::max_len(6);
            /// Serial number the device reported.
            serial_number / with_serial_number: String = "SerialNumber", ReadOnly, Facets::max_len(64);
            /// Product class the device reported, empty when it sent none.
            product_class / with_product_class: String = "ProductClass", ReadOnly, Facets::max_len(64);
        }
        lists {
            /// Host table entries for this device.
            hosts / with_host: String = "Host", ReadOnly, Facets::NONE.with_list_max_len(1024);
        }
        objects {}
        tables {}
    }
}

data_object! {
    /// Time client settings and the current local time.
    pub struct Time = "InternetGatewayDevice.Time." {
        params {
            /// Enables NTP time synchronisation.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE;
            /// State of time synchronisation.
            status / with_status: String = "Status", ReadOnly,
                Facets::enumeration(&["Disabled", "Unsynchronized", "Synchronized", "Error_FailedToSynchronize", "Error"]),
                default "Disabled";
            /// First NTP server, host name or IP address.
            ntp_server1 / with_ntp_server1: String = "NTPServer1", ReadWrite, Facets::max_len(64);
            /// Second NTP server, host name or IP address.
            ntp_server2 / with_ntp_server2: String = "NTPServer2", ReadWrite, Facets::max_len(64);
            /// Current date and time in the local time zone.
            current_local_time / with_current_local_time: DateTime<Utc> = "CurrentLocalTime", ReadOnly, Facets::NONE;
            /// POSIX TZ string, e.g. `CET-1CEST,M3.5.0/2,M10.5.0/3`.
            local_time_zone_name / with_local_time_zone_name: String = "LocalTimeZoneName", ReadWrite, Facets::max_len(64);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// Application services hosted by the gateway.
    pub struct Services = "InternetGatewayDevice.Services." {
        params {
            /// Number of rows in `VoiceService`.
            voice_service_number_of_entries / with_voice_service_number_of_entries: u32 = "VoiceServiceNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `FAPService`.
            fap_service_number_of_entries / with_fap_service_number_of_entries: u32 = "FAPServiceNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {}
        tables {
            voice_services / with_voice_service: VoiceService = "VoiceService";
            fap_services / with_fap_service: FapService = "FAPService";
        }
    }
}
