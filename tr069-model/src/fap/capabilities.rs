use crate::schema::Facets;

const DUPLEX_MODE: &[&str] = &["FDDMode", "TDDMode"];

data_object! {
    /// Radio capabilities of the access point. All read-only.
    pub struct Capabilities = "FAPService.{i}.Capabilities." {
        params {
            /// The access point has a GPS receiver.
            gps_equipped / with_gps_equipped: bool = "GPSEquipped", ReadOnly, Facets::NONE;
            /// Maximum transmit power in dBm.
            max_tx_power / with_max_tx_power: u32 = "MaxTxPower", ReadOnly, Facets::NONE;
            /// The access point can transmit a beacon for hand-in.
            beacon / with_beacon: bool = "Beacon", ReadOnly, Facets::NONE;
        }
        lists {
            /// Radio systems the access point implements.
            supported_systems / with_supported_system: String = "SupportedSystems", ReadOnly,
                Facets::enumeration(&["UMTS", "LTE", "CDMA2000"]);
        }
        objects {
            umts / with_umts: UmtsCapabilities = "UMTS";
            lte / with_lte: LteCapabilities = "LTE";
        }
        tables {}
    }
}

data_object! {
    /// UMTS radio capabilities.
    pub struct UmtsCapabilities = "FAPService.{i}.Capabilities.UMTS." {
        params {
            /// Duplex mode of the UMTS radio.
            duplex_mode / with_duplex_mode: String = "DuplexMode", ReadOnly, Facets::enumeration(DUPLEX_MODE);
            /// The access point can listen to GSM cells around it.
            gsm_rx_supported / with_gsm_rx_supported: bool = "GSMRxSupported", ReadOnly, Facets::NONE;
            /// HSDPA is supported.
            hsdpa_supported / with_hsdpa_supported: bool = "HSDPASupported", ReadOnly, Facets::NONE;
            /// Kbps.
            max_hsdpa_data_rate_supported / with_max_hsdpa_data_rate_supported: u32 = "MaxHSDPADataRateSupported", ReadOnly, Facets::NONE;
            /// HSUPA is supported.
            hsupa_supported / with_hsupa_supported: bool = "HSUPASupported", ReadOnly, Facets::NONE;
            /// Kbps.
            max_hsupa_data_rate_supported / with_max_hsupa_data_rate_supported: u32 = "MaxHSUPADataRateSupported", ReadOnly, Facets::NONE;
            /// Most HS-PDSCH codes the radio can use.
            max_hspdschs_supported / with_max_hspdschs_supported: u32 = "MaxHSPDSCHsSupported", ReadOnly, Facets::range(0, 15);
            /// Most HS-SCCH codes the radio can use.
            max_hsscchs_supported / with_max_hsscchs_supported: u32 = "MaxHSSCCHsSupported", ReadOnly, Facets::range(0, 4);
        }
        lists {
            /// UMTS FDD bands supported, by Roman numeral.
            fdd_bands_supported / with_fdd_band_supported: String = "FDDBandsSupported", ReadOnly, Facets::max_len(8);
            /// GSM bands the receiver can listen to.
            gsm_rx_bands_supported / with_gsm_rx_band_supported: String = "GSMRxBandsSupported", ReadOnly,
                Facets::enumeration(&["T-GSM380", "T-GSM410", "GSM450", "GSM480", "GSM710", "GSM750", "T-GSM810", "GSM850", "P-GSM900", "E-GSM900", "R-GSM900", "T-GSM900", "DCS1800", "PCS1900"]);
        }
        objects {}
        tables {}
    }
}

data_object! {
    /// LTE radio capabilities.
    pub struct LteCapabilities = "FAPService.{i}.Capabilities.LTE." {
        params {
            /// Duplex mode of the LTE radio.
            duplex_mode / with_duplex_mode: String = "DuplexMode", ReadOnly, Facets::enumeration(DUPLEX_MODE);
            /// NAS node selection function.
            nnsf_supported / with_nnsf_supported: bool = "NNSFSupported", ReadOnly, Facets::NONE;
            /// The access point can listen to UMTS cells around it.
            umts_rx_supported / with_umts_rx_supported: bool = "UMTSRxSupported", ReadOnly, Facets::NONE;
            /// The access point can listen to GSM cells around it.
            gsm_rx_supported / with_gsm_rx_supported: bool = "GSMRxSupported", ReadOnly, Facets::NONE;
            /// The access point can listen to CDMA2000 cells around it.
            cdma2000_rx_supported / with_cdma2000_rx_supported: bool = "CDMA2000RxSupported", ReadOnly, Facets::NONE;
        }
        lists {
            /// E-UTRA bands supported.
            bands_supported / with_band_supported: u32 = "BandsSupported", ReadOnly, Facets::range(1, 256);
            /// UMTS bands the receiver can listen to.
            umts_rx_bands_supported / with_umts_rx_band_supported: String = "UMTSRxBandsSupported", ReadOnly, Facets::max_len(8);
            /// GSM bands the receiver can listen to.
            gsm_rx_bands_supported / with_gsm_rx_band_supported: String = "GSMRxBandsSupported", ReadOnly, Facets::max_len(16);
            /// CDMA2000 band classes the receiver can listen to.
            cdma2000_rx_band_classes_supported / with_cdma2000_rx_band_class_supported: String = "CDMA2000RxBandClassesSupported", ReadOnly, Facets::max_len(8);
        }
        objects {}
        tables {}
    }
}
