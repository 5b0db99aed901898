use crate::schema::Facets;

const PORT: Facets = Facets::range(0, 65535);

data_object! {
    /// Administrative control of the radio for each supported system.
    pub struct FapControl = "FAPService.{i}.FAPControl." {
        params {}
        lists {}
        objects {
            umts / with_umts: UmtsControl = "UMTS";
            lte / with_lte: LteControl = "LTE";
        }
        tables {}
    }
}

data_object! {
    /// Control of the UMTS radio.
    pub struct UmtsControl = "FAPService.{i}.FAPControl.UMTS." {
        params {
            /// Whether the radio is operational.
            op_state / with_op_state: bool = "OpState", ReadOnly, Facets::NONE;
            /// Lets the radio go into service when true.
            admin_state / with_admin_state: bool = "AdminState", ReadWrite, Facets::NONE, default "false";
            /// The radio transmitter is on.
            rf_tx_status / with_rf_tx_status: bool = "RFTxStatus", ReadOnly, Facets::NONE;
            /// The PM upload configuration this radio uses.
            pm_config / with_pm_config: String = "PMConfig", ReadWrite,
                Facets::reference("FAPService.{i}.PerfMgmt.Config.{i}.").with_max_len(256);
        }
        lists {}
        objects {
            gateway / with_gateway: UmtsGateway = "Gateway";
        }
        tables {}
    }
}

data_object! {
    /// Security and FAP gateways the access point connects to, in order
    /// of preference.
    pub struct UmtsGateway = "FAPService.{i}.FAPControl.UMTS.Gateway." {
        params {
            /// First security gateway, host name or IP address.
            sec_gw_server1 / with_sec_gw_server1: String = "SecGWServer1", ReadWrite, Facets::max_len(64);
            /// Second security gateway, host name or IP address.
            sec_gw_server2 / with_sec_gw_server2: String = "SecGWServer2", ReadWrite, Facets::max_len(64);
            /// Third security gateway, host name or IP address.
            sec_gw_server3 / with_sec_gw_server3: String = "SecGWServer3", ReadWrite, Facets::max_len(64);
            /// First FAP gateway, host name or IP address.
            fap_gw_server1 / with_fap_gw_server1: String = "FAPGWServer1", ReadWrite, Facets::max_len(64);
            /// Second FAP gateway, host name or IP address.
            fap_gw_server2 / with_fap_gw_server2: String = "FAPGWServer2", ReadWrite, Facets::max_len(64);
            /// Third FAP gateway, host name or IP address.
            fap_gw_server3 / with_fap_gw_server3: String = "FAPGWServer3", ReadWrite, Facets::max_len(64);
            /// SCTP port of the FAP gateway.
            fap_gw_port / with_fap_gw_port: u32 = "FAPGWPort", ReadWrite, PORT, default "29169";
        }
        lists {}
        objects {}
        tables {}
    }
}

data_object! {
    /// Control of the LTE radio.
    pub struct LteControl = "FAPService.{i}.FAPControl.LTE." {
        params {
            /// Whether the radio is operational.
            op_state / with_op_state: bool = "OpState", ReadOnly, Facets::NONE;
            /// Lets the radio go into service when true.
            admin_state / with_admin_state: bool = "AdminState", ReadWrite, Facets::NONE, default "false";
            /// The radio transmitter is on.
            rf_tx_status / with_rf_tx_status: bool = "RFTxStatus", ReadOnly, Facets::NONE;
            /// The PM upload configuration this radio uses.
            pm_config / with_pm_config: String = "PMConfig", ReadWrite,
                Facets::reference("FAPService.{i}.PerfMgmt.Config.{i}.").with_max_len(256);
        }
        lists {}
        objects {
            gateway / with_gateway: LteGateway = "Gateway";
        }
        tables {}
    }
}

data_object! {
    /// Security gateways and MMEs the LTE radio connects to.
    pub struct LteGateway = "FAPService.{i}.FAPControl.LTE.Gateway." {
        params {
            /// First security gateway, host name or IP address.
            sec_gw_server1 / with_sec_gw_server1: String = "SecGWServer1", ReadWrite, Facets::max_len(64);
            /// Second security gateway, host name or IP address.
            sec_gw_server2 / with_sec_gw_server2: String = "SecGWServer2", ReadWrite, Facets::max_len(64);
            /// Third security gateway, host name or IP address.
            sec_gw_server3 / with_sec_gw_server3: String = "SecGWServer3", ReadWrite, Facets::max_len(64);
            /// Connect to the first reachable MME only, or to all of them.
            s1_connection_mode / with_s1_connection_mode: String = "S1ConnectionMode", ReadWrite,
                Facets::enumeration(&["One", "All"]), default "One";
            /// SCTP port of the S1 signalling link.
            s1_sig_link_port / with_s1_sig_link_port: u32 = "S1SigLinkPort", ReadWrite, PORT, default "36412";
        }
        lists {
            /// MME addresses to try, in order.
            s1_sig_link_server_list / with_s1_sig_link_server: String = "S1SigLinkServerList", ReadWrite,
                Facets::max_len(64).with_list_max_len(256);
        }
        objects {}
        tables {}
    }
}
