use chrono::{DateTime, Utc};

use crate::schema::Facets;
use crate::value::{Alias, IpAddress};

use super::{CALL_STATUS, ORIGIN, STATUS};

const TRANSPORT: &[&str] = &["UDP", "TCP", "TLS", "SCTP"];
const PORT: Facets = Facets::range(0, 65535);

data_object! {
    /// SIP signalling: clients registering towards a provider, the
    /// networks they use, and the proxy and registrar the device can act as.
    pub struct Sip = "VoiceService.{i}.SIP." {
        params {
            /// Number of rows in `Client`.
            client_number_of_entries / with_client_number_of_entries: u32 = "ClientNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `Network`.
            network_number_of_entries / with_network_number_of_entries: u32 = "NetworkNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `Proxy`.
            proxy_number_of_entries / with_proxy_number_of_entries: u32 = "ProxyNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `Registrar`.
            registrar_number_of_entries / with_registrar_number_of_entries: u32 = "RegistrarNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {}
        tables {
            clients / with_client: SipClient = "Client";
            networks / with_network: SipNetwork = "Network";
            proxies / with_proxy: SipProxy = "Proxy";
            registrars / with_registrar: SipRegistrar = "Registrar";
        }
    }
}

data_object! {
    /// A SIP user agent registering with a provider.
    pub struct SipClient = "VoiceService.{i}.SIP.Client.{i}." {
        params {
            /// Enables or disables this client.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Stops accepting new calls while letting existing ones finish.
            quiescent_mode / with_quiescent_mode: bool = "QuiescentMode", ReadWrite, Facets::NONE, default "false";
            /// Registration state of the client.
            status / with_status: String = "Status", ReadOnly,
                Facets::enumeration(&[
                    "Up", "Initializing", "Registering", "Deregistering", "Error_Misconfigured",
                    "Error_Network", "Error_Registration", "Quiescent", "Disabled",
                ]),
                default "Disabled";
            /// Whether the row was created by the device or configured.
            origin / with_origin: String = "Origin", ReadOnly, Facets::enumeration(ORIGIN), default "Static";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// How the client registers: one AOR, static, or a whole range (RFC 6140).
            register_mode / with_register_mode: String = "RegisterMode", ReadWrite,
                Facets::enumeration(&["RFC3261", "STATIC", "RFC6140"]), default "RFC3261";
            /// Username for digest authentication.
            auth_user_name / with_auth_user_name: String = "AuthUserName", ReadWrite, Facets::max_len(128);
            /// Password for digest authentication. Reads return an empty string.
            auth_password / with_auth_password: String = "AuthPassword", ReadWrite, Facets::max_len(128);
            /// The SIP network the client registers through.
            network / with_network: String = "Network", ReadWrite,
                Facets::reference("VoiceService.{i}.SIP.Network.{i}.").with_max_len(256);
            /// Most simultaneous sessions; 0 means no limit.
            max_sessions / with_max_sessions: u32 = "MaxSessions", ReadWrite, Facets::NONE;
            /// Address of record registered, e.g. `sip:alice@example.com`.
            register_uri / with_register_uri: String = "RegisterURI", ReadWrite, Facets::max_len(389);
            /// Number of rows in `Contact`.
            contact_number_of_entries / with_contact_number_of_entries: u32 = "ContactNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `EventSubscribe`.
            event_subscribe_number_of_entries / with_event_subscribe_number_of_entries: u32 = "EventSubscribeNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {}
        tables {
            contacts / with_contact: SipClientContact = "Contact";
            event_subscribes / with_event_subscribe: SipClientEventSubscribe = "EventSubscribe";
        }
    }
}

data_object! {
    /// A contact address registered by the client.
    pub struct SipClientContact = "VoiceService.{i}.SIP.Client.{i}.Contact.{i}." {
        params {
            /// Enables or disables this contact.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// State of the contact.
            status / with_status: String = "Status", ReadOnly,
                Facets::enumeration(&["Up", "Disabled", "Error"]), default "Disabled";
            /// Whether the row was created by the device or configured.
            origin / with_origin: String = "Origin", ReadOnly, Facets::enumeration(ORIGIN), default "Static";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Address the contact points to.
            ip_address / with_ip_address: IpAddress = "IPAddress", ReadOnly, Facets::NONE;
            /// Port the contact points to.
            port / with_port: u32 = "Port", ReadOnly, PORT;
            /// Contact URI sent in REGISTER.
            contact_uri / with_contact_uri: String = "ContactURI", ReadWrite, Facets::max_len(256);
            /// When the registration of this contact runs out.
            expire_time / with_expire_time: DateTime<Utc> = "ExpireTime", ReadOnly, Facets::NONE;
            /// Seconds between keep-alive pings; 0 disables them.
            ping_interval / with_ping_interval: u32 = "PingInterval", ReadWrite, PORT;
            /// User-Agent header of the registering terminal.
            user_agent / with_user_agent: String = "UserAgent", ReadOnly, Facets::max_len(256);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// A SUBSCRIBE the client keeps alive.
    pub struct SipClientEventSubscribe = "VoiceService.{i}.SIP.Client.{i}.EventSubscribe.{i}." {
        params {
            /// Enables or disables the subscription.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Event package, e.g. `message-summary`.
            event / with_event: String = "Event", ReadWrite, Facets::max_len(32);
            /// Username for the subscription.
            auth_user_name / with_auth_user_name: String = "AuthUserName", ReadWrite, Facets::max_len(128);
            /// Password for the subscription. Reads return an empty string.
            auth_password / with_auth_password: String = "AuthPassword", ReadWrite, Facets::max_len(128);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// Provider side SIP settings shared by clients: servers, transports,
    /// timers and QoS marking.
    pub struct SipNetwork = "VoiceService.{i}.SIP.Network.{i}." {
        params {
            /// Enables or disables this network.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Stops accepting new calls while letting existing ones finish.
            quiescent_mode / with_quiescent_mode: bool = "QuiescentMode", ReadWrite, Facets::NONE, default "false";
            /// Resolution state of the network's servers.
            status / with_status: String = "Status", ReadOnly,
                Facets::enumeration(&["Up", "Resolving", "Error_DNS", "Error_Other", "Disabled"]),
                default "Disabled";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Host name or IP address of the outbound proxy server.
            proxy_server / with_proxy_server: String = "ProxyServer", ReadWrite, Facets::max_len(256);
            /// Port of the proxy server.
            proxy_server_port / with_proxy_server_port: u32 = "ProxyServerPort", ReadWrite, PORT, default "5060";
            /// Transport towards the proxy server.
            proxy_server_transport / with_proxy_server_transport: String = "ProxyServerTransport", ReadWrite,
                Facets::enumeration(TRANSPORT), default "UDP";
            /// Host name or IP address of the registrar.
            registrar_server / with_registrar_server: String = "RegistrarServer", ReadWrite, Facets::max_len(256);
            /// Port of the registrar.
            registrar_server_port / with_registrar_server_port: u32 = "RegistrarServerPort", ReadWrite, PORT, default "5060";
            /// Transport towards the registrar.
            registrar_server_transport / with_registrar_server_transport: String = "RegistrarServerTransport", ReadWrite,
                Facets::enumeration(TRANSPORT), default "UDP";
            /// Domain of the SIP servers, resolved through DNS SRV.
            server_domain / with_server_domain: String = "ServerDomain", ReadWrite, Facets::max_len(256);
            /// Domain currently in use.
            chosen_domain / with_chosen_domain: String = "ChosenDomain", ReadOnly, Facets::max_len(256);
            /// Server address currently in use.
            chosen_ip_address / with_chosen_ip_address: IpAddress = "ChosenIPAddress", ReadOnly, Facets::NONE;
            /// Server port currently in use.
            chosen_port / with_chosen_port: u32 = "ChosenPort", ReadOnly, PORT;
            /// Host part of the device's SIP URIs.
            user_agent_domain / with_user_agent_domain: String = "UserAgentDomain", ReadWrite, Facets::max_len(256);
            /// Local SIP port.
            user_agent_port / with_user_agent_port: u32 = "UserAgentPort", ReadWrite, PORT;
            /// Transport used for outgoing requests.
            user_agent_transport / with_user_agent_transport: String = "UserAgentTransport", ReadWrite,
                Facets::enumeration(TRANSPORT), default "UDP";
            /// Host name or IP address of the outbound proxy.
            outbound_proxy / with_outbound_proxy: String = "OutboundProxy", ReadWrite, Facets::max_len(256);
            /// Address the outbound proxy resolved to.
            outbound_proxy_resolved_address / with_outbound_proxy_resolved_address: IpAddress = "OutboundProxyResolvedAddress", ReadOnly, Facets::NONE;
            /// Whether DHCP or the static value picks the outbound proxy.
            outbound_proxy_precedence / with_outbound_proxy_precedence: String = "OutboundProxyPrecedence", ReadWrite,
                Facets::enumeration(&["DHCP", "Static"]), default "Static";
            /// Port of the outbound proxy.
            outbound_proxy_port / with_outbound_proxy_port: u32 = "OutboundProxyPort", ReadWrite, PORT, default "5060";
            /// Uses STUN to learn the public address.
            stun_enable / with_stun_enable: bool = "STUNEnable", ReadWrite, Facets::NONE;
            /// Host name or IP address of the STUN server.
            stun_server / with_stun_server: String = "STUNServer", ReadWrite, Facets::max_len(256);
            /// Seconds between registration refreshes.
            registration_period / with_registration_period: u32 = "RegistrationPeriod", ReadWrite, Facets::min_value(1);
            /// Expiry requested in REGISTER, in seconds.
            register_expires / with_register_expires: u32 = "RegisterExpires", ReadWrite, Facets::min_value(1);
            /// Seconds to wait after a failed registration.
            register_retry_interval / with_register_retry_interval: u32 = "RegisterRetryInterval", ReadWrite, Facets::NONE;
            /// How incoming requests are authenticated.
            inbound_auth / with_inbound_auth: String = "InboundAuth", ReadWrite,
                Facets::enumeration(&["None", "Digest", "SourceFilter"]), default "None";
            /// Username for inbound digest authentication.
            inbound_auth_username / with_inbound_auth_username: String = "InboundAuthUsername", ReadWrite, Facets::max_len(256);
            /// Password for inbound digest authentication.
            inbound_auth_password / with_inbound_auth_password: String = "InboundAuthPassword", ReadWrite, Facets::max_len(256);
            /// DSCP value for outgoing SIP packets.
            dscp_mark / with_dscp_mark: u32 = "DSCPMark", ReadWrite, Facets::range(0, 63);
            /// VLAN ID for outgoing SIP packets. `-1` leaves it untagged.
            vlan_id_mark / with_vlan_id_mark: i32 = "VLANIDMark", ReadWrite, Facets::range(-1, 4094), default "-1";
            /// Ethernet priority code point. `-1` leaves it unset.
            ethernet_priority_mark / with_ethernet_priority_mark: i32 = "EthernetPriorityMark", ReadWrite, Facets::range(-1, 7), default "-1";
            /// The VoIP profile supplying media settings.
            voip_profile / with_voip_profile: String = "VoIPProfile", ReadWrite,
                Facets::reference("VoiceService.{i}.VoIPProfile.{i}.").with_max_len(256);
            /// Number of rows in `FQDNServer`.
            fqdn_server_number_of_entries / with_fqdn_server_number_of_entries: u32 = "FQDNServerNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {
            /// Codec profiles offered on this network, in priority order.
            codec_list / with_codec: String = "CodecList", ReadWrite,
                Facets::reference("VoiceService.{i}.CodecProfile.{i}.").with_list_max_len(1024);
        }
        objects {}
        tables {
            fqdn_servers / with_fqdn_server: SipFqdnServer = "FQDNServer";
        }
    }
}

data_object! {
    /// A server found for the network's domain.
    pub struct SipFqdnServer = "VoiceService.{i}.SIP.Network.{i}.FQDNServer.{i}." {
        params {
            /// Enables or disables this server.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Whether the row was created by the device or configured.
            origin / with_origin: String = "Origin", ReadOnly, Facets::enumeration(ORIGIN), default "Static";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Domain name of the server.
            domain / with_domain: String = "Domain", ReadWrite, Facets::max_len(256);
            /// SRV weight among servers of equal priority.
            weight / with_weight: u32 = "Weight", ReadWrite, PORT;
            /// SRV priority; lower values are tried first.
            priority / with_priority: u32 = "Priority", ReadWrite, PORT;
            /// Port of the server.
            port / with_port: u32 = "Port", ReadWrite, PORT, default "5060";
        }
        lists {
            /// Addresses the domain resolved to.
            ip_addresses / with_ip_address: IpAddress = "IPAddresses", ReadOnly, Facets::NONE;
        }
        objects {}
        tables {}
    }
}

data_object! {
    /// The device acting as a SIP proxy for locally attached terminals.
    pub struct SipProxy = "VoiceService.{i}.SIP.Proxy.{i}." {
        params {
            /// Enables or disables the proxy.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Operational state of the proxy.
            status / with_status: String = "Status", ReadOnly,
                Facets::enumeration(&["Up", "Error", "Disabled"]), default "Disabled";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Local address the proxy listens on.
            proxy_ip_address / with_proxy_ip_address: IpAddress = "ProxyIPAddress", ReadWrite, Facets::NONE;
            /// Local port the proxy listens on.
            proxy_port / with_proxy_port: u32 = "ProxyPort", ReadWrite, PORT;
            /// Contact URI the proxy uses.
            contact_uri / with_contact_uri: String = "ContactURI", ReadWrite, Facets::max_len(256);
            /// The VoIP profile supplying media settings.
            voip_profile / with_voip_profile: String = "VoIPProfile", ReadWrite,
                Facets::reference("VoiceService.{i}.VoIPProfile.{i}.").with_max_len(256);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// The device acting as a SIP registrar.
    pub struct SipRegistrar = "VoiceService.{i}.SIP.Registrar.{i}." {
        params {
            /// Enables or disables the registrar.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Stops accepting new calls while letting existing ones finish.
            quiescent_mode / with_quiescent_mode: bool = "QuiescentMode", ReadWrite, Facets::NONE, default "false";
            /// Operational state of the registrar.
            status / with_status: String = "Status", ReadOnly,
                Facets::enumeration(&["Up", "Error", "Disabled"]), default "Disabled";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Local address the registrar listens on.
            registrar_ip_address / with_registrar_ip_address: IpAddress = "RegistrarIPAddress", ReadWrite, Facets::NONE;
            /// Local port the registrar listens on.
            registrar_port / with_registrar_port: u32 = "RegistrarPort", ReadWrite, PORT, default "5060";
            /// Expiry granted to registrations, in seconds.
            register_expires / with_register_expires: u32 = "RegisterExpires", ReadWrite, Facets::min_value(1), default "3600";
            /// Seconds between keep-alive pings; 0 disables them.
            ping_interval / with_ping_interval: u32 = "PingInterval", ReadWrite, PORT;
            /// Value of the Organization header.
            organization / with_organization: String = "Organization", ReadWrite, Facets::max_len(256);
            /// Realm used in digest challenges.
            realm / with_realm: String = "Realm", ReadWrite, Facets::max_len(256);
            /// The VoIP profile supplying media settings.
            voip_profile / with_voip_profile: String = "VoIPProfile", ReadWrite,
                Facets::reference("VoiceService.{i}.VoIPProfile.{i}.").with_max_len(256);
            /// Number of rows in `Account`.
            account_number_of_entries / with_account_number_of_entries: u32 = "AccountNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {}
        tables {
            accounts / with_account: SipRegistrarAccount = "Account";
        }
    }
}

data_object! {
    /// An account terminals register against.
    pub struct SipRegistrarAccount = "VoiceService.{i}.SIP.Registrar.{i}.Account.{i}." {
        params {
            /// Enables or disables this account.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Stops accepting new calls while letting existing ones finish.
            quiescent_mode / with_quiescent_mode: bool = "QuiescentMode", ReadWrite, Facets::NONE, default "false";
            /// Operational state of the account.
            status / with_status: String = "Status", ReadOnly, Facets::enumeration(STATUS), default "Disabled";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Whether the row was created by the device or configured.
            origin / with_origin: String = "Origin", ReadOnly, Facets::enumeration(ORIGIN), default "Static";
            /// State of the call on the account.
            call_status / with_call_status: String = "CallStatus", ReadOnly, Facets::enumeration(CALL_STATUS), default "Idle";
            /// Username terminals authenticate with.
            auth_user_name / with_auth_user_name: String = "AuthUserName", ReadWrite, Facets::max_len(128);
            /// Password terminals authenticate with. Reads return an empty string.
            auth_password / with_auth_password: String = "AuthPassword", ReadWrite, Facets::max_len(128);
            /// Whether a terminal is registered.
            registration_status / with_registration_status: String = "RegistrationStatus", ReadOnly,
                Facets::enumeration(&["Registered", "Unregistered"]), default "Unregistered";
            /// Address of record of the account.
            uri / with_uri: String = "URI", ReadWrite, Facets::max_len(389);
            /// Domain of the account.
            domain / with_domain: String = "Domain", ReadWrite, Facets::max_len(256);
            /// The VoIP profile supplying media settings.
            voip_profile / with_voip_profile: String = "VoIPProfile", ReadWrite,
                Facets::reference("VoiceService.{i}.VoIPProfile.{i}.").with_max_len(256);
        }
        lists {
            /// Codec profiles offered to the terminal, in priority order.
            codec_list / with_codec: String = "CodecList", ReadWrite,
                Facets::reference("VoiceService.{i}.CodecProfile.{i}.").with_list_max_len(256);
        }
        objects {}
        tables {}
    }
}
