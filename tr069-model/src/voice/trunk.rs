use crate::schema::Facets;
use crate::value::Alias;

use super::{ORIGIN, STATUS};

data_object! {
    /// A trunk: a group of channels towards one provider, used to place
    /// and receive calls on behalf of the lines and extensions.
    ///
    /// Channel counts of `-1` mean unlimited. The sum of the outbound and
    /// inbound limits is expected not to exceed `MaxChannels`, which is only
    /// checked by the semantic validator.
    pub struct Trunk = "VoiceService.{i}.Trunk.{i}." {
        params {
            /// Enables or disables this trunk.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Stops accepting new calls while letting existing ones finish.
            quiescent_mode / with_quiescent_mode: bool = "QuiescentMode", ReadWrite, Facets::NONE, default "false";
            /// Operational state of the trunk.
            status / with_status: String = "Status", ReadOnly, Facets::enumeration(STATUS), default "Disabled";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Whether the row was created by the device or configured.
            origin / with_origin: String = "Origin", ReadOnly, Facets::enumeration(ORIGIN), default "Static";
            /// Human readable name of the trunk.
            name / with_name: String = "Name", ReadOnly, Facets::max_len(64);
            /// Direct dial-in range, e.g. `+1-212-555-[0100-0199]`.
            ddi_range / with_ddi_range: String = "DDIRange", ReadWrite, Facets::max_len(256);
            /// The device creates a line per DDI number on its own.
            line_object_creation / with_line_object_creation: bool = "LineObjectCreation", ReadOnly, Facets::NONE;
            /// Channels the trunk can carry at once.
            max_channels / with_max_channels: u32 = "MaxChannels", ReadOnly, Facets::NONE;
            /// Limit on channels used for outgoing calls.
            max_outbound_channel_count / with_max_outbound_channel_count: i32 = "MaxOutboundChannelCount", ReadWrite, Facets::min_value(-1), default "-1";
            /// Limit on channels used for incoming calls.
            max_inbound_channel_count / with_max_inbound_channel_count: i32 = "MaxInboundChannelCount", ReadWrite, Facets::min_value(-1), default "-1";
            /// Whose codec preference wins when negotiating a call.
            codec_priority / with_codec_priority: String = "CodecPriority", ReadWrite, Facets::enumeration(&["Local", "Remote"]), default "Local";
            /// The provider this trunk connects to.
            provider / with_provider: String = "Provider", ReadWrite,
                Facets::reference("VoiceService.{i}.SIP.Client.{i}.").with_max_len(256);
        }
        lists {}
        objects {}
        tables {}
    }
}
