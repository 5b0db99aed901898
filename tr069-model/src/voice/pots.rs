use crate::schema::Facets;
use crate::value::Alias;

const PORT_STATUS: &[&str] = &["Up", "Error", "Testing", "Disabled"];
const PASS_THROUGH: &[&str] = &["Disable", "Auto", "Force"];

data_object! {
    /// Analog telephony ports: FXO towards the PSTN, FXS towards phones.
    pub struct Pots = "VoiceService.{i}.POTS." {
        params {
            /// Two-letter region code (ISO 3166-1) selecting tones and
            /// ring cadences.
            region / with_region: String = "Region", ReadWrite, Facets::max_len(2);
            /// Number of rows in `FXO`.
            fxo_number_of_entries / with_fxo_number_of_entries: u32 = "FXONumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `FXS`.
            fxs_number_of_entries / with_fxs_number_of_entries: u32 = "FXSNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {
            ringer / with_ringer: Ringer = "Ringer";
        }
        tables {
            fxo / with_fxo: Fxo = "FXO";
            fxs / with_fxs: Fxs = "FXS";
        }
    }
}

data_object! {
    /// An FXO port towards the PSTN.
    pub struct Fxo = "VoiceService.{i}.POTS.FXO.{i}." {
        params {
            /// Enables or disables this port.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Operational state of the port.
            status / with_status: String = "Status", ReadOnly, Facets::enumeration(PORT_STATUS), default "Disabled";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Human readable name of the port.
            name / with_name: String = "Name", ReadOnly, Facets::max_len(64);
            /// Path of the tone event profile the port plays.
            tone_event_profile / with_tone_event_profile: String = "ToneEventProfile", ReadWrite, Facets::max_len(256);
            /// Collect a second set of digits after the line answers.
            second_step_dialing / with_second_step_dialing: bool = "SecondStepDialing", ReadWrite, Facets::NONE;
            /// Seconds to wait after seizing the line before dialing.
            timeout_before_dialing / with_timeout_before_dialing: u32 = "TimeoutBeforeDialing", ReadWrite, Facets::NONE;
            /// Seconds of ringing before an incoming call is answered.
            ring_timeout / with_ring_timeout: u32 = "RingTimeout", ReadWrite, Facets::NONE;
            /// Rings before an incoming call is answered.
            ring_number / with_ring_number: u32 = "RingNumber", ReadWrite, Facets::NONE;
            /// A call is in progress on the port.
            active / with_active: bool = "Active", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// An FXS port an analog phone is plugged into.
    pub struct Fxs = "VoiceService.{i}.POTS.FXS.{i}." {
        params {
            /// Enables or disables this port.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Operational state of the port.
            status / with_status: String = "Status", ReadOnly, Facets::enumeration(PORT_STATUS), default "Disabled";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Human readable name of the port.
            name / with_name: String = "Name", ReadOnly, Facets::max_len(64);
            /// Path of the tone event profile the port plays.
            tone_event_profile / with_tone_event_profile: String = "ToneEventProfile", ReadWrite, Facets::max_len(256);
            /// When fax signals are passed through instead of relayed.
            fax_pass_through / with_fax_pass_through: String = "FaxPassThrough", ReadWrite,
                Facets::enumeration(PASS_THROUGH), default "Auto";
            /// When modem signals are passed through.
            modem_pass_through / with_modem_pass_through: String = "ModemPassThrough", ReadWrite,
                Facets::enumeration(PASS_THROUGH), default "Auto";
            /// Dialing method expected from the phone.
            dial_type / with_dial_type: String = "DialType", ReadWrite,
                Facets::enumeration(&["Tone", "Pulse", "Tone/Pulse"]), default "Tone";
            /// Sends caller ID to the phone.
            clip_generation / with_clip_generation: bool = "ClipGeneration", ReadWrite, Facets::NONE;
            /// Kind of terminal attached to the port.
            terminal_type / with_terminal_type: String = "TerminalType", ReadWrite,
                Facets::enumeration(&["Audio", "Fax", "Modem", "Any"]), default "Any";
        }
        lists {}
        objects {
            voice_processing / with_voice_processing: FxsVoiceProcessing = "VoiceProcessing";
        }
        tables {}
    }
}

data_object! {
    /// Gain and echo cancellation of an FXS port.
    pub struct FxsVoiceProcessing = "VoiceService.{i}.POTS.FXS.{i}.VoiceProcessing." {
        params {
            /// Gain in units of 0.1 dB.
            transmit_gain / with_transmit_gain: i32 = "TransmitGain", ReadWrite, Facets::NONE;
            /// Gain in units of 0.1 dB.
            receive_gain / with_receive_gain: i32 = "ReceiveGain", ReadWrite, Facets::NONE;
            /// Enables echo cancellation.
            echo_cancellation_enable / with_echo_cancellation_enable: bool = "EchoCancellationEnable", ReadWrite, Facets::NONE;
            /// Echo cancellation is active right now.
            echo_cancellation_in_use / with_echo_cancellation_in_use: bool = "EchoCancellationInUse", ReadOnly, Facets::NONE;
            /// Tail length of the echo canceller, in milliseconds.
            echo_cancellation_tail / with_echo_cancellation_tail: u32 = "EchoCancellationTail", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// Ring cadences of the analog ports.
    pub struct Ringer = "VoiceService.{i}.POTS.Ringer." {
        params {
            /// Number of rows in `Event`.
            event_number_of_entries / with_event_number_of_entries: u32 = "EventNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {}
        tables {
            events / with_event: RingerEvent = "Event";
        }
    }
}

data_object! {
    /// Ring cadence for one ringing function.
    pub struct RingerEvent = "VoiceService.{i}.POTS.Ringer.Event.{i}." {
        params {
            /// The ringing function this cadence plays for.
            function / with_function: String = "Function", ReadOnly,
                Facets::enumeration(&[
                    "Default", "Alternative1", "Alternative2", "Alternative3", "Alternative4",
                    "CallWaiting", "Group", "X_Vendor",
                ]);
            /// Alternating on and off durations in milliseconds.
            cadence / with_cadence: String = "Cadence", ReadWrite, Facets::max_len(256);
        }
        lists {}
        objects {}
        tables {}
    }
}
