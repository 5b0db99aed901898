use chrono::{DateTime, Utc};

use crate::schema::Facets;
use crate::value::{Alias, HexBinary, IpAddress};

data_object! {
    /// A completed call. Created by the device; everything but the alias is
    /// read-only.
    pub struct CallLog = "VoiceService.{i}.CallLog.{i}." {
        params {
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Number of the party that placed the call.
            calling_party_number / with_calling_party_number: String = "CallingPartyNumber", ReadOnly, Facets::max_len(256);
            /// Number that was dialed.
            called_party_number / with_called_party_number: String = "CalledPartyNumber", ReadOnly, Facets::max_len(256);
            /// Path of the object the call came from.
            source / with_source: String = "Source", ReadOnly, Facets::max_len(256);
            /// Path of the object the call went to.
            destination / with_destination: String = "Destination", ReadOnly, Facets::max_len(256);
            /// Number or URI of the far party.
            remote_party / with_remote_party: String = "RemoteParty", ReadOnly, Facets::max_len(256);
            /// The line the call used.
            used_line / with_used_line: String = "UsedLine", ReadOnly,
                Facets::reference("VoiceService.{i}.CallControl.Line.{i}.").with_max_len(256);
            /// Direction of the call, seen from the device.
            direction / with_direction: String = "Direction", ReadOnly,
                Facets::enumeration(&["Incoming", "Outgoing"]);
            /// When the call started.
            start / with_start: DateTime<Utc> = "Start", ReadOnly, Facets::NONE;
            /// Seconds.
            duration / with_duration: u32 = "Duration", ReadOnly, Facets::NONE;
            /// Why the call ended.
            call_termination_cause / with_call_termination_cause: String = "CallTerminationCause", ReadOnly,
                Facets::enumeration(&[
                    "NoExtensionsMapped", "NoExtensionsAvailable", "AnonymousCallRejection",
                    "CallWaitingRejected", "CallForwardingUnconditional", "CallForwardingBusy",
                    "CallForwardingNoReply", "LocalDisconnect", "LocalForbidden", "LocalTimeout",
                    "LocalMediaError", "LocalPriority", "LocalReject", "LocalTransfer",
                    "LocalInternalError", "RemoteDisconnect", "RemoteBadRequest", "RemoteForbidden",
                    "RemoteNotFound", "RemoteReject", "RemoteNotAllowed", "RemoteNotAcceptable",
                    "RemoteTimeout", "RemoteUnavailable", "RemoteBusy", "RemoteNotSupported",
                    "RemoteNetworkFailure",
                ]);
            /// Number of rows in `SignalingPerformance`.
            signaling_performance_number_of_entries / with_signaling_performance_number_of_entries: u32 = "SignalingPerformanceNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `Session`.
            session_number_of_entries / with_session_number_of_entries: u32 = "SessionNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {
            /// The extensions the call used.
            used_extensions / with_used_extension: String = "UsedExtensions", ReadOnly,
                Facets::reference("VoiceService.{i}.CallControl.Extension.{i}.").with_list_max_len(256);
        }
        objects {}
        tables {
            signaling_performances / with_signaling_performance: CallLogSignalingPerformance = "SignalingPerformance";
            sessions / with_session: CallLogSession = "Session";
        }
    }
}

data_object! {
    /// Signaling delays of a call for one protocol.
    pub struct CallLogSignalingPerformance = "VoiceService.{i}.CallLog.{i}.SignalingPerformance.{i}." {
        params {
            /// Signaling protocol measured, e.g. `SIP`.
            protocol / with_protocol: String = "Protocol", ReadOnly, Facets::max_len(64);
            /// Milliseconds; `-1` when unknown.
            call_setup_delay / with_call_setup_delay: i32 = "CallSetupDelay", ReadOnly, Facets::min_value(-1);
            /// Milliseconds until outgoing media flowed; `-1` when unknown.
            outgoing_media_establish_delay / with_outgoing_media_establish_delay: i32 = "OutgoingMediaEstablishDelay", ReadOnly, Facets::min_value(-1);
            /// Milliseconds until incoming media flowed; `-1` when unknown.
            incoming_media_establish_delay / with_incoming_media_establish_delay: i32 = "IncomingMediaEstablishDelay", ReadOnly, Facets::min_value(-1);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// One media session of a call.
    pub struct CallLogSession = "VoiceService.{i}.CallLog.{i}.Session.{i}." {
        params {
            /// Kind of media carried.
            stream_type / with_stream_type: String = "StreamType", ReadOnly,
                Facets::enumeration(&["Audio", "Video", "Fax", "Modem"]);
            /// When the session started.
            start / with_start: DateTime<Utc> = "Start", ReadOnly, Facets::NONE;
            /// Seconds.
            duration / with_duration: u32 = "Duration", ReadOnly, Facets::NONE;
            /// Identifier of the session.
            session_id / with_session_id: HexBinary = "SessionID", ReadOnly, Facets::max_len(16);
        }
        lists {}
        objects {
            source / with_source: SessionEndpoint = "Source";
            destination / with_destination: SessionEndpoint = "Destination";
        }
        tables {}
    }
}

data_object! {
    /// Statistics for one side of a session. Mounted as both `Source.` and
    /// `Destination.`.
    pub struct SessionEndpoint = "VoiceService.{i}.CallLog.{i}.Session.{i}.Source." {
        params {}
        lists {}
        objects {
            rtp / with_rtp: SessionRtp = "RTP";
            voice_quality / with_voice_quality: SessionVoiceQuality = "VoiceQuality";
        }
        tables {}
    }
}

data_object! {
    /// RTP statistics for one side of a session.
    pub struct SessionRtp = "VoiceService.{i}.CallLog.{i}.Session.{i}.Source.RTP." {
        params {
            /// Address of the far end.
            far_end_ip_address / with_far_end_ip_address: IpAddress = "FarEndIPAddress", ReadOnly, Facets::NONE;
            /// UDP port of the far end.
            far_end_udp_port / with_far_end_udp_port: u32 = "FarEndUDPPort", ReadOnly, Facets::range(0, 65535);
            /// Local UDP port.
            local_udp_port / with_local_udp_port: u32 = "LocalUDPPort", ReadOnly, Facets::range(0, 65535);
            /// Microseconds.
            min_jitter / with_min_jitter: i32 = "MinJitter", ReadOnly, Facets::NONE;
            /// Microseconds.
            max_jitter / with_max_jitter: i32 = "MaxJitter", ReadOnly, Facets::NONE;
            /// Microseconds.
            mean_jitter / with_mean_jitter: i32 = "MeanJitter", ReadOnly, Facets::NONE;
            /// Microseconds.
            packet_delay_variation / with_packet_delay_variation: i32 = "PacketDelayVariation", ReadOnly, Facets::NONE;
            /// Average jitter buffer delay, in microseconds.
            buffer_delay / with_buffer_delay: i32 = "BufferDelay", ReadOnly, Facets::NONE;
            /// Bursts of lost packets.
            burst_count / with_burst_count: u32 = "BurstCount", ReadOnly, Facets::NONE;
            /// RTP packets received.
            packets_received / with_packets_received: u64 = "PacketsReceived", ReadOnly, Facets::NONE;
            /// RTP packets sent.
            packets_sent / with_packets_sent: u64 = "PacketsSent", ReadOnly, Facets::NONE;
            /// RTP packets lost.
            packets_lost / with_packets_lost: u32 = "PacketsLost", ReadOnly, Facets::NONE;
            /// RTP packets discarded by the jitter buffer.
            packets_discarded / with_packets_discarded: u32 = "PacketsDiscarded", ReadOnly, Facets::NONE;
            /// RTP payload bytes received.
            bytes_received / with_bytes_received: u64 = "BytesReceived", ReadOnly, Facets::NONE;
            /// RTP payload bytes sent.
            bytes_sent / with_bytes_sent: u64 = "BytesSent", ReadOnly, Facets::NONE;
            /// Percent.
            receive_packet_loss_rate / with_receive_packet_loss_rate: u32 = "ReceivePacketLossRate", ReadOnly, Facets::range(0, 100);
            /// Loss rate the far end reported, in percent.
            far_end_packet_loss_rate / with_far_end_packet_loss_rate: u32 = "FarEndPacketLossRate", ReadOnly, Facets::range(0, 100);
            /// Microseconds; `-1` when unknown.
            round_trip_delay / with_round_trip_delay: i32 = "RoundTripDelay", ReadOnly, Facets::min_value(-1);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// Voice quality indicators for one side of a session.
    pub struct SessionVoiceQuality = "VoiceService.{i}.CallLog.{i}.Session.{i}.Source.VoiceQuality." {
        params {
            /// Quality indicator for the whole session.
            voip_quality_indicator / with_voip_quality_indicator: String = "VoIPQualityIndicator", ReadOnly, Facets::max_len(64);
        }
        lists {
            /// Worst indicator values seen.
            worst_voip_quality_indicators_values / with_worst_voip_quality_indicators_value: String = "WorstVoIPQualityIndicatorsValues", ReadOnly, Facets::NONE;
            /// When each of the worst values was seen.
            worst_voip_quality_indicator_timestamps / with_worst_voip_quality_indicator_timestamp: DateTime<Utc> = "WorstVoIPQualityIndicatorTimestamps", ReadOnly, Facets::NONE;
        }
        objects {}
        tables {}
    }
}
