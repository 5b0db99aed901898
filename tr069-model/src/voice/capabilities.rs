use crate::schema::Facets;
use crate::value::Alias;

data_object! {
    /// What the voice service supports. All read-only.
    ///
    /// Counts of `-1` mean no explicit limit.
    pub struct Capabilities = "VoiceService.{i}.Capabilities." {
        params {
            /// Most lines the service can hold.
            max_line_count / with_max_line_count: i32 = "MaxLineCount", ReadOnly, Facets::min_value(-1);
            /// Most extensions the service can hold.
            max_extension_count / with_max_extension_count: i32 = "MaxExtensionCount", ReadOnly, Facets::min_value(-1);
            /// Most call log rows kept.
            max_call_log_count / with_max_call_log_count: i32 = "MaxCallLogCount", ReadOnly, Facets::min_value(-1);
            /// Most simultaneous sessions across the service.
            max_session_count / with_max_session_count: i32 = "MaxSessionCount", ReadOnly, Facets::min_value(-1);
            /// Most simultaneous sessions on one line.
            max_sessions_per_line / with_max_sessions_per_line: i32 = "MaxSessionsPerLine", ReadOnly, Facets::min_value(-1);
            /// Most simultaneous sessions on one extension.
            max_sessions_per_extension / with_max_sessions_per_extension: i32 = "MaxSessionsPerExtension", ReadOnly, Facets::min_value(-1);
            /// Number of rows in `Codec`.
            codec_number_of_entries / with_codec_number_of_entries: u32 = "CodecNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {
            /// Connection modes offered towards the network.
            network_connection_modes / with_network_connection_mode: String = "NetworkConnectionModes", ReadOnly, Facets::NONE;
            /// Connection modes offered towards users.
            user_connection_modes / with_user_connection_mode: String = "UserConnectionModes", ReadOnly, Facets::NONE;
            /// Audio formats accepted for tone files.
            tone_file_formats / with_tone_file_format: String = "ToneFileFormats", ReadOnly,
                Facets::enumeration(&["G.711MuLaw", "G.711ALaw", "MP3", "WAV", "AMR"]);
            /// Audio formats accepted for ring files.
            ring_file_formats / with_ring_file_format: String = "RingFileFormats", ReadOnly,
                Facets::enumeration(&["MIDI", "SMAF", "RTTTL", "MP3", "WAV", "AMR"]);
            /// Call control facility actions, e.g. `CallPark`.
            facility_actions / with_facility_action: String = "FacilityActions", ReadOnly, Facets::NONE;
        }
        objects {
            sip / with_sip: SipCapabilities = "SIP";
            pots / with_pots: PotsCapabilities = "POTS";
            quality_indicator / with_quality_indicator: QualityIndicatorCapabilities = "QualityIndicator";
        }
        tables {
            codecs / with_codec: CodecCapability = "Codec";
        }
    }
}

data_object! {
    /// SIP client and registrar capabilities.
    pub struct SipCapabilities = "VoiceService.{i}.Capabilities.SIP." {
        params {}
        lists {}
        objects {
            client / with_client: SipClientCapabilities = "Client";
            registrar / with_registrar: SipRegistrarCapabilities = "Registrar";
        }
        tables {}
    }
}

data_object! {
    /// Capabilities of the SIP user agent.
    pub struct SipClientCapabilities = "VoiceService.{i}.Capabilities.SIP.Client." {
        params {}
        lists {
            /// SIP extension methods, e.g. `REFER`, `INFO`.
            extensions / with_extension: String = "Extensions", ReadOnly, Facets::NONE;
            /// URI schemes accepted besides `sip`.
            uri_schemes / with_uri_scheme: String = "URISchemes", ReadOnly, Facets::NONE;
            /// Event packages the client can subscribe to.
            event_types / with_event_type: String = "EventTypes", ReadOnly, Facets::max_len(32);
            /// TLS message authentication algorithms.
            tls_authentication_protocols / with_tls_authentication_protocol: String = "TLSAuthenticationProtocols", ReadOnly,
                Facets::enumeration(&["Null", "MD5", "SHA-1", "SHA-2", "AEAD"]);
            /// TLS ciphers.
            tls_encryption_protocols / with_tls_encryption_protocol: String = "TLSEncryptionProtocols", ReadOnly,
                Facets::enumeration(&["Null", "RC4", "RC2", "DES", "3DES", "AES", "Camellia"]);
            /// TLS key exchange algorithms.
            tls_key_exchange_protocols / with_tls_key_exchange_protocol: String = "TLSKeyExchangeProtocols", ReadOnly,
                Facets::enumeration(&["RSA", "DSS", "DHE-RSA", "DHE-DSS", "ECDHE-RSA", "ECDHE-ECDSA"]);
        }
        objects {}
        tables {}
    }
}

data_object! {
    /// Capabilities of the SIP registrar.
    pub struct SipRegistrarCapabilities = "VoiceService.{i}.Capabilities.SIP.Registrar." {
        params {}
        lists {
            /// SIP extension methods the registrar handles.
            extensions / with_extension: String = "Extensions", ReadOnly, Facets::NONE;
            /// URI schemes accepted besides `sip`.
            uri_schemes / with_uri_scheme: String = "URISchemes", ReadOnly, Facets::NONE;
            /// Event packages the registrar accepts subscriptions for.
            event_types / with_event_type: String = "EventTypes", ReadOnly, Facets::max_len(32);
        }
        objects {}
        tables {}
    }
}

data_object! {
    /// Capabilities of the analog interfaces.
    pub struct PotsCapabilities = "VoiceService.{i}.Capabilities.POTS." {
        params {
            /// Dialing methods detected on FXS ports.
            dial_type / with_dial_type: String = "DialType", ReadOnly,
                Facets::enumeration(&["Tone", "Pulse", "Tone/Pulse"]);
            /// Caller ID can be sent to analog phones.
            clip_generation / with_clip_generation: bool = "ClipGeneration", ReadOnly, Facets::NONE;
            /// Charging pulses can be generated.
            charging_pulse / with_charging_pulse: bool = "ChargingPulse", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// Call quality indicator support.
    pub struct QualityIndicatorCapabilities = "VoiceService.{i}.Capabilities.QualityIndicator." {
        params {
            /// Most quality indicator values kept per session.
            max_qi_values / with_max_qi_values: u32 = "MaxQIValues", ReadOnly, Facets::NONE;
            /// Most worst-case values kept per session.
            max_worst_qi_values / with_max_worst_qi_values: u32 = "MaxWorstQIValues", ReadOnly, Facets::NONE;
        }
        lists {
            /// Quality indicator types reported.
            qi_types_supported / with_qi_type_supported: String = "QITypesSupported", ReadOnly, Facets::NONE;
        }
        objects {}
        tables {}
    }
}

data_object! {
    /// One codec the device implements.
    pub struct CodecCapability = "VoiceService.{i}.Capabilities.Codec.{i}." {
        params {
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Codec name.
            codec / with_codec: String = "Codec", ReadOnly,
                Facets::enumeration(&[
                    "G.711MuLaw", "G.711ALaw", "G.726", "G.729", "G.729a", "G.729e", "G.728",
                    "G.723.1", "G.722", "G.722.1", "G.722.2", "GSM-FR", "GSM-HR", "GSM-EFR",
                    "iLBC", "AMR", "AMR-WB", "Opus",
                ]);
            /// Bits per second.
            bit_rate / with_bit_rate: u32 = "BitRate", ReadOnly, Facets::NONE;
            /// The codec can suppress silence.
            silence_suppression / with_silence_suppression: bool = "SilenceSuppression", ReadOnly, Facets::NONE;
        }
        lists {
            /// Packetization periods supported, in milliseconds, e.g. `20` or `10-30`.
            packetization_period / with_packetization_period: String = "PacketizationPeriod", ReadOnly,
                Facets::max_len(64);
        }
        objects {}
        tables {}
    }
}
