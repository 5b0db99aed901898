use crate::schema::Facets;
use crate::value::Alias;

data_object! {
    /// Media settings shared by the SIP networks, proxies and registrar
    /// accounts referencing this profile.
    pub struct VoipProfile = "VoiceService.{i}.VoIPProfile.{i}." {
        params {
            /// Enables or disables this profile.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Stops accepting new calls while letting existing ones finish.
            quiescent_mode / with_quiescent_mode: bool = "QuiescentMode", ReadWrite, Facets::NONE, default "false";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Human readable name of the profile.
            name / with_name: String = "Name", ReadWrite, Facets::max_len(64);
            /// How DTMF digits are carried.
            dtmf_method / with_dtmf_method: String = "DTMFMethod", ReadWrite,
                Facets::enumeration(&["InBand", "RFC4733", "SIPInfo"]), default "RFC4733";
            /// Quality indicator model used for calls.
            qi_model_used / with_qi_model_used: String = "QIModelUsed", ReadWrite, Facets::max_len(64);
            /// Seconds between quality indicator calculations.
            qi_calculation_interval / with_qi_calculation_interval: u32 = "QICalculationInterval", ReadWrite, Facets::NONE;
            /// Worst quality indicator values kept per call.
            number_of_worst_qi_values / with_number_of_worst_qi_values: u32 = "NumberOfWorstQIValues", ReadWrite, Facets::NONE;
        }
        lists {}
        objects {
            rtp / with_rtp: VoipProfileRtp = "RTP";
            fax_t38 / with_fax_t38: FaxT38 = "FaxT38";
        }
        tables {}
    }
}

data_object! {
    /// RTP settings of the profile.
    pub struct VoipProfileRtp = "VoiceService.{i}.VoIPProfile.{i}.RTP." {
        params {
            /// Lowest local port used for RTP.
            local_port_min / with_local_port_min: u32 = "LocalPortMin", ReadWrite, Facets::range(0, 65535);
            /// Highest local port used for RTP.
            local_port_max / with_local_port_max: u32 = "LocalPortMax", ReadWrite, Facets::range(0, 65535);
            /// DSCP value for outgoing RTP packets.
            dscp_mark / with_dscp_mark: u32 = "DSCPMark", ReadWrite, Facets::range(0, 63);
            /// VLAN ID for outgoing RTP packets. `-1` leaves it untagged.
            vlan_id_mark / with_vlan_id_mark: i32 = "VLANIDMark", ReadWrite, Facets::range(-1, 4094), default "-1";
            /// Ethernet priority code point. `-1` leaves it unset.
            ethernet_priority_mark / with_ethernet_priority_mark: i32 = "EthernetPriorityMark", ReadWrite, Facets::range(-1, 7), default "-1";
            /// RTP payload type of RFC 4733 telephone events.
            telephone_event_payload_type / with_telephone_event_payload_type: u32 = "TelephoneEventPayloadType", ReadWrite, Facets::range(0, 128);
            /// Whether the jitter buffer size adapts to the network.
            jitter_buffer_type / with_jitter_buffer_type: String = "JitterBufferType", ReadWrite,
                Facets::enumeration(&["Static", "Dynamic"]);
            /// Milliseconds.
            jitter_buffer_max_size / with_jitter_buffer_max_size: u32 = "JitterBufferMaxSize", ReadWrite, Facets::NONE;
            /// Milliseconds.
            jitter_buffer_min_size / with_jitter_buffer_min_size: u32 = "JitterBufferMinSize", ReadWrite, Facets::NONE;
            /// Current jitter buffer size, in milliseconds.
            jitter_buffer_actual_size / with_jitter_buffer_actual_size: u32 = "JitterBufferActualSize", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {
            rtcp / with_rtcp: VoipProfileRtcp = "RTCP";
            srtp / with_srtp: VoipProfileSrtp = "SRTP";
        }
        tables {}
    }
}

data_object! {
    /// RTCP settings of the profile.
    pub struct VoipProfileRtcp = "VoiceService.{i}.VoIPProfile.{i}.RTP.RTCP." {
        params {
            /// Enables RTCP.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE;
            /// Seconds between RTCP reports.
            tx_repeat_interval / with_tx_repeat_interval: u32 = "TxRepeatInterval", ReadWrite, Facets::min_value(1);
            /// Local CNAME sent in RTCP reports.
            local_c_name / with_local_c_name: String = "LocalCName", ReadWrite, Facets::max_len(64);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// SRTP settings of the profile.
    pub struct VoipProfileSrtp = "VoiceService.{i}.VoIPProfile.{i}.RTP.SRTP." {
        params {
            /// Enables SRTP.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE;
        }
        lists {
            /// Key exchange methods offered.
            keying_methods / with_keying_method: String = "KeyingMethods", ReadWrite,
                Facets::enumeration(&["Null", "Static", "SDP", "IKE"]);
            /// Key sizes offered, in bits.
            encryption_key_sizes / with_encryption_key_size: u32 = "EncryptionKeySizes", ReadWrite, Facets::NONE;
        }
        objects {}
        tables {}
    }
}

data_object! {
    /// T.38 fax relay settings.
    pub struct FaxT38 = "VoiceService.{i}.VoIPProfile.{i}.FaxT38." {
        params {
            /// Highest fax rate, in bits per second.
            max_bit_rate / with_max_bit_rate: u32 = "MaxBitRate", ReadWrite, Facets::NONE;
            /// Redundant copies of high-speed packets.
            high_speed_redundancy / with_high_speed_redundancy: u32 = "HighSpeedRedundancy", ReadWrite, Facets::range(0, 3);
            /// Redundant copies of low-speed packets.
            low_speed_redundancy / with_low_speed_redundancy: u32 = "LowSpeedRedundancy", ReadWrite, Facets::range(0, 5);
            /// Where training check frames are generated.
            tcf_method / with_tcf_method: String = "TCFMethod", ReadWrite,
                Facets::enumeration(&["Local", "Network"]);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// Settings for one codec, selected from the capability table.
    pub struct CodecProfile = "VoiceService.{i}.CodecProfile.{i}." {
        params {
            /// Enables or disables this codec profile.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Stops accepting new calls while letting existing ones finish.
            quiescent_mode / with_quiescent_mode: bool = "QuiescentMode", ReadWrite, Facets::NONE, default "false";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// The codec capability these settings apply to.
            codec / with_codec: String = "Codec", ReadWrite,
                Facets::reference("VoiceService.{i}.Capabilities.Codec.{i}.").with_max_len(256);
            /// Suppress silence when the codec supports it.
            silence_suppression / with_silence_suppression: bool = "SilenceSuppression", ReadWrite, Facets::NONE;
        }
        lists {
            /// Packetization periods in milliseconds, or ranges like `10-30`.
            packetization_period / with_packetization_period: String = "PacketizationPeriod", ReadWrite,
                Facets::max_len(64);
        }
        objects {}
        tables {}
    }
}
