use crate::schema::Facets;
use crate::value::Alias;

use super::{CALL_STATUS, ORIGIN, STATUS};

data_object! {
    /// Call control: the mapping between lines on the network side and
    /// extensions on the user side, plus groups, mailboxes and numbering
    /// plans.
    pub struct CallControl = "VoiceService.{i}.CallControl." {
        params {
            /// Maximum number of `Line` rows the device supports.
            max_number_of_lines / with_max_number_of_lines: u32 = "MaxNumberOfLines", ReadOnly, Facets::NONE;
            /// Maximum number of `Extension` rows the device supports.
            max_number_of_extensions / with_max_number_of_extensions: u32 = "MaxNumberOfExtensions", ReadOnly, Facets::NONE;
            /// Number of rows in `Line`.
            line_number_of_entries / with_line_number_of_entries: u32 = "LineNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `Extension`.
            extension_number_of_entries / with_extension_number_of_entries: u32 = "ExtensionNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `Group`.
            group_number_of_entries / with_group_number_of_entries: u32 = "GroupNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `Mailbox`.
            mailbox_number_of_entries / with_mailbox_number_of_entries: u32 = "MailboxNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `IncomingMap`.
            incoming_map_number_of_entries / with_incoming_map_number_of_entries: u32 = "IncomingMapNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `OutgoingMap`.
            outgoing_map_number_of_entries / with_outgoing_map_number_of_entries: u32 = "OutgoingMapNumberOfEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `NumberingPlan`.
            numbering_plan_number_of_entries / with_numbering_plan_number_of_entries: u32 = "NumberingPlanNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {
            calling_features / with_calling_features: CallingFeatures = "CallingFeatures";
        }
        tables {
            lines / with_line: Line = "Line";
            extensions / with_extension: Extension = "Extension";
            groups / with_group: Group = "Group";
            mailboxes / with_mailbox: Mailbox = "Mailbox";
            incoming_maps / with_incoming_map: IncomingMap = "IncomingMap";
            outgoing_maps / with_outgoing_map: OutgoingMap = "OutgoingMap";
            numbering_plans / with_numbering_plan: NumberingPlan = "NumberingPlan";
        }
    }
}

data_object! {
    /// A line: the network-facing end of a call, bound to a provider.
    pub struct Line = "VoiceService.{i}.CallControl.Line.{i}." {
        params {
            /// Enables or disables this line.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Stops accepting new calls while letting existing ones finish.
            quiescent_mode / with_quiescent_mode: bool = "QuiescentMode", ReadWrite, Facets::NONE, default "false";
            /// Operational state of the line.
            status / with_status: String = "Status", ReadOnly, Facets::enumeration(STATUS), default "Disabled";
            /// State of the call on the line.
            call_status / with_call_status: String = "CallStatus", ReadOnly, Facets::enumeration(CALL_STATUS), default "Idle";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Whether the row was created by the device or configured.
            origin / with_origin: String = "Origin", ReadOnly, Facets::enumeration(ORIGIN), default "Static";
            /// Directory number of the line.
            directory_number / with_directory_number: String = "DirectoryNumber", ReadWrite, Facets::max_len(32);
            /// The SIP client, trunk or FXO port carrying this line.
            provider / with_provider: String = "Provider", ReadWrite,
                Facets::reference("VoiceService.{i}.SIP.Client.{i}.").with_max_len(256);
            /// The calling feature set applied to the line.
            calling_features / with_calling_features: String = "CallingFeatures", ReadWrite,
                Facets::reference("VoiceService.{i}.CallControl.CallingFeatures.Set.{i}.").with_max_len(256);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// An extension: the user-facing end of a call (a phone on an FXS
    /// port, a SIP terminal registered with the device).
    pub struct Extension = "VoiceService.{i}.CallControl.Extension.{i}." {
        params {
            /// Enables or disables this extension.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Stops accepting new calls while letting existing ones finish.
            quiescent_mode / with_quiescent_mode: bool = "QuiescentMode", ReadWrite, Facets::NONE, default "false";
            /// Operational state of the extension.
            status / with_status: String = "Status", ReadOnly, Facets::enumeration(STATUS), default "Disabled";
            /// State of the call on the extension.
            call_status / with_call_status: String = "CallStatus", ReadOnly, Facets::enumeration(CALL_STATUS), default "Idle";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Whether the row was created by the device or configured.
            origin / with_origin: String = "Origin", ReadOnly, Facets::enumeration(ORIGIN), default "Static";
            /// Human readable name of the extension.
            name / with_name: String = "Name", ReadWrite, Facets::max_len(64);
            /// Internal number dialed to reach the extension.
            extension_number / with_extension_number: String = "ExtensionNumber", ReadWrite, Facets::max_len(32);
            /// The FXS port or SIP terminal behind this extension.
            provider / with_provider: String = "Provider", ReadWrite,
                Facets::reference("VoiceService.{i}.POTS.FXS.{i}.").with_max_len(256);
            /// The numbering plan used for digits dialed here.
            numbering_plan / with_numbering_plan: String = "NumberingPlan", ReadWrite,
                Facets::reference("VoiceService.{i}.CallControl.NumberingPlan.{i}.").with_max_len(256);
            /// The calling feature set applied to the extension.
            calling_features / with_calling_features: String = "CallingFeatures", ReadWrite,
                Facets::reference("VoiceService.{i}.CallControl.CallingFeatures.Set.{i}.").with_max_len(256);
            /// The mailbox of the extension.
            voice_mail / with_voice_mail: String = "VoiceMail", ReadWrite,
                Facets::reference("VoiceService.{i}.CallControl.Mailbox.{i}.").with_max_len(256);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// A group of extensions rung together for incoming calls.
    pub struct Group = "VoiceService.{i}.CallControl.Group.{i}." {
        params {
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Order in which member extensions ring.
            ring_type / with_ring_type: String = "RingType", ReadWrite,
                Facets::enumeration(&["Simultaneous", "Hierarchical", "Cyclic", "Random"]), default "Simultaneous";
            /// Seconds before moving to the next extension; 0 disables.
            ring_timeout / with_ring_timeout: u32 = "RingTimeout", ReadWrite, Facets::NONE;
        }
        lists {
            /// Member extensions.
            extensions / with_extension: String = "Extensions", ReadWrite,
                Facets::reference("VoiceService.{i}.CallControl.Extension.{i}.").with_list_max_len(1024);
        }
        objects {}
        tables {}
    }
}

data_object! {
    /// A voice mailbox whose messages are forwarded by e-mail.
    pub struct Mailbox = "VoiceService.{i}.CallControl.Mailbox.{i}." {
        params {
            /// Enables or disables this mailbox.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Most messages the mailbox holds.
            max_msg / with_max_msg: u32 = "MaxMsg", ReadWrite, Facets::NONE;
            /// Maximum message length in seconds.
            max_message_time / with_max_message_time: u32 = "MaxMessageTime", ReadWrite, Facets::NONE;
            /// Minimum free storage in kilobytes.
            min_size / with_min_size: u32 = "MinSize", ReadWrite, Facets::NONE;
            /// Host name or IP address of the SMTP server.
            smtp_server_address / with_smtp_server_address: String = "SMTPServerAddress", ReadWrite, Facets::max_len(256);
            /// Port of the SMTP server.
            smtp_server_port / with_smtp_server_port: u32 = "SMTPServerPort", ReadWrite, Facets::range(1, 65535), default "25";
            /// SMTP username.
            smtp_user / with_smtp_user: String = "SMTPUser", ReadWrite, Facets::max_len(256);
            /// SMTP password. Reads return an empty string.
            smtp_password / with_smtp_password: String = "SMTPPassword", ReadWrite, Facets::max_len(256);
            /// How the SMTP connection is secured.
            smtp_authentication_type / with_smtp_authentication_type: String = "SMTPAuthenticationType", ReadWrite,
                Facets::enumeration(&["None", "SSL", "TLS", "Auto"]), default "None";
            /// Sender address of forwarded messages.
            smtp_from / with_smtp_from: String = "SMTPFrom", ReadWrite, Facets::max_len(256);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// Routes calls arriving on a line to an extension or group.
    pub struct IncomingMap = "VoiceService.{i}.CallControl.IncomingMap.{i}." {
        params {
            /// Enables or disables this mapping.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// The line calls arrive on.
            line / with_line: String = "Line", ReadWrite,
                Facets::reference("VoiceService.{i}.CallControl.Line.{i}.").with_max_len(256);
            /// The extension that rings.
            extension / with_extension: String = "Extension", ReadWrite,
                Facets::reference("VoiceService.{i}.CallControl.Extension.{i}.").with_max_len(256);
            /// Lower values ring first.
            order / with_order: u32 = "Order", ReadWrite, Facets::min_value(1);
            /// Seconds of ringing before the next mapping is tried.
            timeout / with_timeout: u32 = "Timeout", ReadWrite, Facets::NONE;
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// Routes calls placed on an extension to a line.
    pub struct OutgoingMap = "VoiceService.{i}.CallControl.OutgoingMap.{i}." {
        params {
            /// Enables or disables this mapping.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// The extension placing the call.
            extension / with_extension: String = "Extension", ReadWrite,
                Facets::reference("VoiceService.{i}.CallControl.Extension.{i}.").with_max_len(256);
            /// The line the call goes out on.
            line / with_line: String = "Line", ReadWrite,
                Facets::reference("VoiceService.{i}.CallControl.Line.{i}.").with_max_len(256);
            /// Number presented to the called party instead of the line's own.
            clip_no_screening_number / with_clip_no_screening_number: String = "CLIPNoScreeningNumber", ReadWrite, Facets::max_len(32);
            /// Lower values are tried first.
            order / with_order: u32 = "Order", ReadWrite, Facets::min_value(1);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// Digit collection rules for one numbering plan.
    pub struct NumberingPlan = "VoiceService.{i}.CallControl.NumberingPlan.{i}." {
        params {
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Fewest digits a complete number has.
            minimum_number_of_digits / with_minimum_number_of_digits: u32 = "MinimumNumberOfDigits", ReadWrite, Facets::range(1, 40), default "1";
            /// Most digits a complete number has.
            maximum_number_of_digits / with_maximum_number_of_digits: u32 = "MaximumNumberOfDigits", ReadWrite, Facets::range(1, 40), default "15";
            /// Milliseconds to wait between digits.
            inter_digit_timer_std / with_inter_digit_timer_std: u32 = "InterDigitTimerStd", ReadWrite, Facets::range(1, 50000);
            /// Milliseconds to wait between digits when more may follow.
            inter_digit_timer_open / with_inter_digit_timer_open: u32 = "InterDigitTimerOpen", ReadWrite, Facets::range(1, 50000);
            /// Path of the tone played for an invalid number.
            invalid_number_tone / with_invalid_number_tone: String = "InvalidNumberTone", ReadWrite, Facets::max_len(256);
            /// Most `PrefixInfo` rows the device supports.
            prefix_info_max_entries / with_prefix_info_max_entries: u32 = "PrefixInfoMaxEntries", ReadOnly, Facets::NONE;
            /// Number of rows in `PrefixInfo`.
            prefix_info_number_of_entries / with_prefix_info_number_of_entries: u32 = "PrefixInfoNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {}
        tables {
            prefix_infos / with_prefix_info: PrefixInfo = "PrefixInfo";
        }
    }
}

data_object! {
    /// Digit rules for numbers starting with one prefix.
    pub struct PrefixInfo = "VoiceService.{i}.CallControl.NumberingPlan.{i}.PrefixInfo.{i}." {
        params {
            /// Enables or disables this prefix.
            enable / with_enable: bool = "Enable", ReadWrite, Facets::NONE, default "false";
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Prefix digits, or a range like `[200-299]`.
            prefix_range / with_prefix_range: String = "PrefixRange", ReadWrite, Facets::max_len(42);
            /// Fewest digits of a number with this prefix.
            prefix_min_number_of_digits / with_prefix_min_number_of_digits: u32 = "PrefixMinNumberOfDigits", ReadWrite, Facets::range(0, 40);
            /// Most digits of a number with this prefix.
            prefix_max_number_of_digits / with_prefix_max_number_of_digits: u32 = "PrefixMaxNumberOfDigits", ReadWrite, Facets::range(0, 40);
            /// Digits stripped before the number is used.
            number_of_digits_to_remove / with_number_of_digits_to_remove: u32 = "NumberOfDigitsToRemove", ReadWrite, Facets::range(0, 40);
            /// Position of the first stripped digit.
            pos_of_digits_to_remove / with_pos_of_digits_to_remove: u32 = "PosOfDigitsToRemove", ReadWrite, Facets::range(0, 40);
            /// Facility action the prefix triggers.
            facility_action / with_facility_action: String = "FacilityAction", ReadWrite, Facets::max_len(64);
            /// Argument passed to the facility action.
            facility_action_argument / with_facility_action_argument: String = "FacilityActionArgument", ReadWrite, Facets::max_len(256);
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// Calling feature sets shared by lines and extensions.
    pub struct CallingFeatures = "VoiceService.{i}.CallControl.CallingFeatures." {
        params {
            /// Number of rows in `Set`.
            set_number_of_entries / with_set_number_of_entries: u32 = "SetNumberOfEntries", ReadOnly, Facets::NONE;
        }
        lists {}
        objects {}
        tables {
            sets / with_set: CallingFeatureSet = "Set";
        }
    }
}

data_object! {
    /// A named set of calling features shared by lines and extensions.
    pub struct CallingFeatureSet = "VoiceService.{i}.CallControl.CallingFeatures.Set.{i}." {
        params {
            /// Unique key of the row, stable across reboots.
            alias / with_alias: Alias = "Alias", ReadWrite, Facets::NONE;
            /// Presents the caller's number.
            caller_id_enable / with_caller_id_enable: bool = "CallerIDEnable", ReadWrite, Facets::NONE;
            /// Presents the caller's name.
            caller_id_name_enable / with_caller_id_name_enable: bool = "CallerIDNameEnable", ReadWrite, Facets::NONE;
            /// Allows a second incoming call during a call.
            call_waiting_enable / with_call_waiting_enable: bool = "CallWaitingEnable", ReadWrite, Facets::NONE;
            /// Forwards every incoming call.
            call_forward_unconditional_enable / with_call_forward_unconditional_enable: bool = "CallForwardUnconditionalEnable", ReadWrite, Facets::NONE;
            /// Where unconditionally forwarded calls go.
            call_forward_unconditional_number / with_call_forward_unconditional_number: String = "CallForwardUnconditionalNumber", ReadWrite, Facets::max_len(32);
            /// Forwards calls when busy.
            call_forward_on_busy_enable / with_call_forward_on_busy_enable: bool = "CallForwardOnBusyEnable", ReadWrite, Facets::NONE;
            /// Where calls go when busy.
            call_forward_on_busy_number / with_call_forward_on_busy_number: String = "CallForwardOnBusyNumber", ReadWrite, Facets::max_len(32);
            /// Forwards calls that are not answered.
            call_forward_on_no_answer_enable / with_call_forward_on_no_answer_enable: bool = "CallForwardOnNoAnswerEnable", ReadWrite, Facets::NONE;
            /// Where unanswered calls go.
            call_forward_on_no_answer_number / with_call_forward_on_no_answer_number: String = "CallForwardOnNoAnswerNumber", ReadWrite, Facets::max_len(32);
            /// Rings before an unanswered call is forwarded.
            call_forward_on_no_answer_ring_count / with_call_forward_on_no_answer_ring_count: u32 = "CallForwardOnNoAnswerRingCount", ReadWrite, Facets::NONE;
            /// Signals waiting messages.
            mwi_enable / with_mwi_enable: bool = "MWIEnable", ReadWrite, Facets::NONE;
            /// Signals waiting messages visually.
            vmwi_enable / with_vmwi_enable: bool = "VMWIEnable", ReadWrite, Facets::NONE;
            /// Rejects incoming calls.
            do_not_disturb_enable / with_do_not_disturb_enable: bool = "DoNotDisturbEnable", ReadWrite, Facets::NONE;
            /// Rejects calls with a withheld number.
            anonymous_call_rejection_enable / with_anonymous_call_rejection_enable: bool = "AnonymousCallRejectionEnable", ReadWrite, Facets::NONE;
            /// Withholds the number on outgoing calls.
            anonymous_call_enable / with_anonymous_call_enable: bool = "AnonymousCallEnable", ReadWrite, Facets::NONE;
        }
        lists {}
        objects {}
        tables {}
    }
}
