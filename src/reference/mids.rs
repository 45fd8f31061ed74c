// Maritime Identification Digits (MID) allocation table
// Source: ITU Table of Maritime Identification Digits (MARS)
// Last updated: 2025-01-01
//
// Each MID is a 3-digit code allocated by ITU to a country or geographic area.
// Many administrations hold several MIDs (e.g. USA: 338, 366-369).
//
// Fields:
// - mid: 3-digit MID, first digit 2-7 (maritime region)
// - alpha2: ISO 3166-1 alpha-2 code of the administration
// - alpha3: ISO 3166-1 alpha-3 code of the administration
// - reserved: unused slot kept for the 4-element record shape
// - country: country or geographic area name as listed by ITU

#[derive(Debug, Clone)]
pub struct MidEntry {
    pub mid: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub reserved: Option<&'static str>,
    pub country: &'static str,
}

impl MidEntry {
    /// The entry as a `[alpha2, alpha3, reserved, country]` record
    pub fn as_record(&self) -> [Option<&'static str>; 4] {
        [Some(self.alpha2), Some(self.alpha3), self.reserved, Some(self.country)]
    }
}

/// Allocated MIDs, grouped by maritime region (first digit)
pub const MID_ENTRIES: &[MidEntry] = &[
    // =========================================================================
    // EUROPE
    // =========================================================================
    MidEntry { mid: "201", alpha2: "AL", alpha3: "ALB", reserved: None, country: "Albania" },
    MidEntry { mid: "202", alpha2: "AD", alpha3: "AND", reserved: None, country: "Andorra" },
    MidEntry { mid: "203", alpha2: "AT", alpha3: "AUT", reserved: None, country: "Austria" },
    MidEntry { mid: "204", alpha2: "PT", alpha3: "PRT", reserved: None, country: "Azores (Portugal)" },
    MidEntry { mid: "205", alpha2: "BE", alpha3: "BEL", reserved: None, country: "Belgium" },
    MidEntry { mid: "206", alpha2: "BY", alpha3: "BLR", reserved: None, country: "Belarus" },
    MidEntry { mid: "207", alpha2: "BG", alpha3: "BGR", reserved: None, country: "Bulgaria" },
    MidEntry { mid: "208", alpha2: "VA", alpha3: "VAT", reserved: None, country: "Vatican City State" },
    MidEntry { mid: "209", alpha2: "CY", alpha3: "CYP", reserved: None, country: "Cyprus" },
    MidEntry { mid: "210", alpha2: "CY", alpha3: "CYP", reserved: None, country: "Cyprus" },
    MidEntry { mid: "211", alpha2: "DE", alpha3: "DEU", reserved: None, country: "Germany" },
    MidEntry { mid: "212", alpha2: "CY", alpha3: "CYP", reserved: None, country: "Cyprus" },
    MidEntry { mid: "213", alpha2: "GE", alpha3: "GEO", reserved: None, country: "Georgia" },
    MidEntry { mid: "214", alpha2: "MD", alpha3: "MDA", reserved: None, country: "Moldova" },
    MidEntry { mid: "215", alpha2: "MT", alpha3: "MLT", reserved: None, country: "Malta" },
    MidEntry { mid: "216", alpha2: "AM", alpha3: "ARM", reserved: None, country: "Armenia" },
    MidEntry { mid: "218", alpha2: "DE", alpha3: "DEU", reserved: None, country: "Germany" },
    MidEntry { mid: "219", alpha2: "DK", alpha3: "DNK", reserved: None, country: "Denmark" },
    MidEntry { mid: "220", alpha2: "DK", alpha3: "DNK", reserved: None, country: "Denmark" },
    MidEntry { mid: "224", alpha2: "ES", alpha3: "ESP", reserved: None, country: "Spain" },
    MidEntry { mid: "225", alpha2: "ES", alpha3: "ESP", reserved: None, country: "Spain" },
    MidEntry { mid: "226", alpha2: "FR", alpha3: "FRA", reserved: None, country: "France" },
    MidEntry { mid: "227", alpha2: "FR", alpha3: "FRA", reserved: None, country: "France" },
    MidEntry { mid: "228", alpha2: "FR", alpha3: "FRA", reserved: None, country: "France" },
    MidEntry { mid: "229", alpha2: "MT", alpha3: "MLT", reserved: None, country: "Malta" },
    MidEntry { mid: "230", alpha2: "FI", alpha3: "FIN", reserved: None, country: "Finland" },
    MidEntry { mid: "231", alpha2: "FO", alpha3: "FRO", reserved: None, country: "Faroe Islands" },
    MidEntry { mid: "232", alpha2: "GB", alpha3: "GBR", reserved: None, country: "United Kingdom" },
    MidEntry { mid: "233", alpha2: "GB", alpha3: "GBR", reserved: None, country: "United Kingdom" },
    MidEntry { mid: "234", alpha2: "GB", alpha3: "GBR", reserved: None, country: "United Kingdom" },
    MidEntry { mid: "235", alpha2: "GB", alpha3: "GBR", reserved: None, country: "United Kingdom" },
    MidEntry { mid: "236", alpha2: "GI", alpha3: "GIB", reserved: None, country: "Gibraltar" },
    MidEntry { mid: "237", alpha2: "GR", alpha3: "GRC", reserved: None, country: "Greece" },
    MidEntry { mid: "238", alpha2: "HR", alpha3: "HRV", reserved: None, country: "Croatia" },
    MidEntry { mid: "239", alpha2: "GR", alpha3: "GRC", reserved: None, country: "Greece" },
    MidEntry { mid: "240", alpha2: "GR", alpha3: "GRC", reserved: None, country: "Greece" },
    MidEntry { mid: "241", alpha2: "GR", alpha3: "GRC", reserved: None, country: "Greece" },
    MidEntry { mid: "242", alpha2: "MA", alpha3: "MAR", reserved: None, country: "Morocco" },
    MidEntry { mid: "243", alpha2: "HU", alpha3: "HUN", reserved: None, country: "Hungary" },
    MidEntry { mid: "244", alpha2: "NL", alpha3: "NLD", reserved: None, country: "Netherlands" },
    MidEntry { mid: "245", alpha2: "NL", alpha3: "NLD", reserved: None, country: "Netherlands" },
    MidEntry { mid: "246", alpha2: "NL", alpha3: "NLD", reserved: None, country: "Netherlands" },
    MidEntry { mid: "247", alpha2: "IT", alpha3: "ITA", reserved: None, country: "Italy" },
    MidEntry { mid: "248", alpha2: "MT", alpha3: "MLT", reserved: None, country: "Malta" },
    MidEntry { mid: "249", alpha2: "MT", alpha3: "MLT", reserved: None, country: "Malta" },
    MidEntry { mid: "250", alpha2: "IE", alpha3: "IRL", reserved: None, country: "Ireland" },
    MidEntry { mid: "251", alpha2: "IS", alpha3: "ISL", reserved: None, country: "Iceland" },
    MidEntry { mid: "252", alpha2: "LI", alpha3: "LIE", reserved: None, country: "Liechtenstein" },
    MidEntry { mid: "253", alpha2: "LU", alpha3: "LUX", reserved: None, country: "Luxembourg" },
    MidEntry { mid: "254", alpha2: "MC", alpha3: "MCO", reserved: None, country: "Monaco" },
    MidEntry { mid: "255", alpha2: "PT", alpha3: "PRT", reserved: None, country: "Madeira (Portugal)" },
    MidEntry { mid: "256", alpha2: "MT", alpha3: "MLT", reserved: None, country: "Malta" },
    MidEntry { mid: "257", alpha2: "NO", alpha3: "NOR", reserved: None, country: "Norway" },
    MidEntry { mid: "258", alpha2: "NO", alpha3: "NOR", reserved: None, country: "Norway" },
    MidEntry { mid: "259", alpha2: "NO", alpha3: "NOR", reserved: None, country: "Norway" },
    MidEntry { mid: "261", alpha2: "PL", alpha3: "POL", reserved: None, country: "Poland" },
    MidEntry { mid: "262", alpha2: "ME", alpha3: "MNE", reserved: None, country: "Montenegro" },
    MidEntry { mid: "263", alpha2: "PT", alpha3: "PRT", reserved: None, country: "Portugal" },
    MidEntry { mid: "264", alpha2: "RO", alpha3: "ROU", reserved: None, country: "Romania" },
    MidEntry { mid: "265", alpha2: "SE", alpha3: "SWE", reserved: None, country: "Sweden" },
    MidEntry { mid: "266", alpha2: "SE", alpha3: "SWE", reserved: None, country: "Sweden" },
    MidEntry { mid: "267", alpha2: "SK", alpha3: "SVK", reserved: None, country: "Slovakia" },
    MidEntry { mid: "268", alpha2: "SM", alpha3: "SMR", reserved: None, country: "San Marino" },
    MidEntry { mid: "269", alpha2: "CH", alpha3: "CHE", reserved: None, country: "Switzerland" },
    MidEntry { mid: "270", alpha2: "CZ", alpha3: "CZE", reserved: None, country: "Czech Republic" },
    MidEntry { mid: "271", alpha2: "TR", alpha3: "TUR", reserved: None, country: "Turkey" },
    MidEntry { mid: "272", alpha2: "UA", alpha3: "UKR", reserved: None, country: "Ukraine" },
    MidEntry { mid: "273", alpha2: "RU", alpha3: "RUS", reserved: None, country: "Russian Federation" },
    MidEntry { mid: "274", alpha2: "MK", alpha3: "MKD", reserved: None, country: "North Macedonia" },
    MidEntry { mid: "275", alpha2: "LV", alpha3: "LVA", reserved: None, country: "Latvia" },
    MidEntry { mid: "276", alpha2: "EE", alpha3: "EST", reserved: None, country: "Estonia" },
    MidEntry { mid: "277", alpha2: "LT", alpha3: "LTU", reserved: None, country: "Lithuania" },
    MidEntry { mid: "278", alpha2: "SI", alpha3: "SVN", reserved: None, country: "Slovenia" },
    MidEntry { mid: "279", alpha2: "RS", alpha3: "SRB", reserved: None, country: "Serbia" },

    // =========================================================================
    // NORTH AND CENTRAL AMERICA, CARIBBEAN
    // =========================================================================
    MidEntry { mid: "301", alpha2: "AI", alpha3: "AIA", reserved: None, country: "Anguilla" },
    MidEntry { mid: "303", alpha2: "US", alpha3: "USA", reserved: None, country: "Alaska (USA)" },
    MidEntry { mid: "304", alpha2: "AG", alpha3: "ATG", reserved: None, country: "Antigua and Barbuda" },
    MidEntry { mid: "305", alpha2: "AG", alpha3: "ATG", reserved: None, country: "Antigua and Barbuda" },
    MidEntry { mid: "306", alpha2: "CW", alpha3: "CUW", reserved: None, country: "Curacao" },
    MidEntry { mid: "307", alpha2: "AW", alpha3: "ABW", reserved: None, country: "Aruba" },
    MidEntry { mid: "308", alpha2: "BS", alpha3: "BHS", reserved: None, country: "Bahamas" },
    MidEntry { mid: "309", alpha2: "BS", alpha3: "BHS", reserved: None, country: "Bahamas" },
    MidEntry { mid: "310", alpha2: "BM", alpha3: "BMU", reserved: None, country: "Bermuda" },
    MidEntry { mid: "311", alpha2: "BS", alpha3: "BHS", reserved: None, country: "Bahamas" },
    MidEntry { mid: "312", alpha2: "BZ", alpha3: "BLZ", reserved: None, country: "Belize" },
    MidEntry { mid: "314", alpha2: "BB", alpha3: "BRB", reserved: None, country: "Barbados" },
    MidEntry { mid: "316", alpha2: "CA", alpha3: "CAN", reserved: None, country: "Canada" },
    MidEntry { mid: "319", alpha2: "KY", alpha3: "CYM", reserved: None, country: "Cayman Islands" },
    MidEntry { mid: "321", alpha2: "CR", alpha3: "CRI", reserved: None, country: "Costa Rica" },
    MidEntry { mid: "323", alpha2: "CU", alpha3: "CUB", reserved: None, country: "Cuba" },
    MidEntry { mid: "325", alpha2: "DM", alpha3: "DMA", reserved: None, country: "Dominica" },
    MidEntry { mid: "327", alpha2: "DO", alpha3: "DOM", reserved: None, country: "Dominican Republic" },
    MidEntry { mid: "329", alpha2: "GP", alpha3: "GLP", reserved: None, country: "Guadeloupe (France)" },
    MidEntry { mid: "330", alpha2: "GD", alpha3: "GRD", reserved: None, country: "Grenada" },
    MidEntry { mid: "331", alpha2: "GL", alpha3: "GRL", reserved: None, country: "Greenland" },
    MidEntry { mid: "332", alpha2: "GT", alpha3: "GTM", reserved: None, country: "Guatemala" },
    MidEntry { mid: "334", alpha2: "HN", alpha3: "HND", reserved: None, country: "Honduras" },
    MidEntry { mid: "336", alpha2: "HT", alpha3: "HTI", reserved: None, country: "Haiti" },
    MidEntry { mid: "338", alpha2: "US", alpha3: "USA", reserved: None, country: "United States of America" },
    MidEntry { mid: "339", alpha2: "JM", alpha3: "JAM", reserved: None, country: "Jamaica" },
    MidEntry { mid: "341", alpha2: "KN", alpha3: "KNA", reserved: None, country: "Saint Kitts and Nevis" },
    MidEntry { mid: "343", alpha2: "LC", alpha3: "LCA", reserved: None, country: "Saint Lucia" },
    MidEntry { mid: "345", alpha2: "MX", alpha3: "MEX", reserved: None, country: "Mexico" },
    MidEntry { mid: "347", alpha2: "MQ", alpha3: "MTQ", reserved: None, country: "Martinique (France)" },
    MidEntry { mid: "348", alpha2: "MS", alpha3: "MSR", reserved: None, country: "Montserrat" },
    MidEntry { mid: "350", alpha2: "NI", alpha3: "NIC", reserved: None, country: "Nicaragua" },
    MidEntry { mid: "351", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "352", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "353", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "354", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "355", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "356", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "357", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "358", alpha2: "PR", alpha3: "PRI", reserved: None, country: "Puerto Rico" },
    MidEntry { mid: "359", alpha2: "SV", alpha3: "SLV", reserved: None, country: "El Salvador" },
    MidEntry { mid: "361", alpha2: "PM", alpha3: "SPM", reserved: None, country: "Saint Pierre and Miquelon (France)" },
    MidEntry { mid: "362", alpha2: "TT", alpha3: "TTO", reserved: None, country: "Trinidad and Tobago" },
    MidEntry { mid: "364", alpha2: "TC", alpha3: "TCA", reserved: None, country: "Turks and Caicos Islands" },
    MidEntry { mid: "366", alpha2: "US", alpha3: "USA", reserved: None, country: "United States of America" },
    MidEntry { mid: "367", alpha2: "US", alpha3: "USA", reserved: None, country: "United States of America" },
    MidEntry { mid: "368", alpha2: "US", alpha3: "USA", reserved: None, country: "United States of America" },
    MidEntry { mid: "369", alpha2: "US", alpha3: "USA", reserved: None, country: "United States of America" },
    MidEntry { mid: "370", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "371", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "372", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "373", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "374", alpha2: "PA", alpha3: "PAN", reserved: None, country: "Panama" },
    MidEntry { mid: "375", alpha2: "VC", alpha3: "VCT", reserved: None, country: "Saint Vincent and the Grenadines" },
    MidEntry { mid: "376", alpha2: "VC", alpha3: "VCT", reserved: None, country: "Saint Vincent and the Grenadines" },
    MidEntry { mid: "377", alpha2: "VC", alpha3: "VCT", reserved: None, country: "Saint Vincent and the Grenadines" },
    MidEntry { mid: "378", alpha2: "VG", alpha3: "VGB", reserved: None, country: "British Virgin Islands" },
    MidEntry { mid: "379", alpha2: "VI", alpha3: "VIR", reserved: None, country: "United States Virgin Islands" },

    // =========================================================================
    // ASIA
    // =========================================================================
    MidEntry { mid: "401", alpha2: "AF", alpha3: "AFG", reserved: None, country: "Afghanistan" },
    MidEntry { mid: "403", alpha2: "SA", alpha3: "SAU", reserved: None, country: "Saudi Arabia" },
    MidEntry { mid: "405", alpha2: "BD", alpha3: "BGD", reserved: None, country: "Bangladesh" },
    MidEntry { mid: "408", alpha2: "BH", alpha3: "BHR", reserved: None, country: "Bahrain" },
    MidEntry { mid: "410", alpha2: "BT", alpha3: "BTN", reserved: None, country: "Bhutan" },
    MidEntry { mid: "412", alpha2: "CN", alpha3: "CHN", reserved: None, country: "China" },
    MidEntry { mid: "413", alpha2: "CN", alpha3: "CHN", reserved: None, country: "China" },
    MidEntry { mid: "414", alpha2: "CN", alpha3: "CHN", reserved: None, country: "China" },
    MidEntry { mid: "416", alpha2: "TW", alpha3: "TWN", reserved: None, country: "Taiwan" },
    MidEntry { mid: "417", alpha2: "LK", alpha3: "LKA", reserved: None, country: "Sri Lanka" },
    MidEntry { mid: "419", alpha2: "IN", alpha3: "IND", reserved: None, country: "India" },
    MidEntry { mid: "422", alpha2: "IR", alpha3: "IRN", reserved: None, country: "Iran" },
    MidEntry { mid: "423", alpha2: "AZ", alpha3: "AZE", reserved: None, country: "Azerbaijan" },
    MidEntry { mid: "425", alpha2: "IQ", alpha3: "IRQ", reserved: None, country: "Iraq" },
    MidEntry { mid: "428", alpha2: "IL", alpha3: "ISR", reserved: None, country: "Israel" },
    MidEntry { mid: "431", alpha2: "JP", alpha3: "JPN", reserved: None, country: "Japan" },
    MidEntry { mid: "432", alpha2: "JP", alpha3: "JPN", reserved: None, country: "Japan" },
    MidEntry { mid: "434", alpha2: "TM", alpha3: "TKM", reserved: None, country: "Turkmenistan" },
    MidEntry { mid: "436", alpha2: "KZ", alpha3: "KAZ", reserved: None, country: "Kazakhstan" },
    MidEntry { mid: "437", alpha2: "UZ", alpha3: "UZB", reserved: None, country: "Uzbekistan" },
    MidEntry { mid: "438", alpha2: "JO", alpha3: "JOR", reserved: None, country: "Jordan" },
    MidEntry { mid: "440", alpha2: "KR", alpha3: "KOR", reserved: None, country: "Korea (Republic of)" },
    MidEntry { mid: "441", alpha2: "KR", alpha3: "KOR", reserved: None, country: "Korea (Republic of)" },
    MidEntry { mid: "443", alpha2: "PS", alpha3: "PSE", reserved: None, country: "Palestine" },
    MidEntry { mid: "445", alpha2: "KP", alpha3: "PRK", reserved: None, country: "Korea (Democratic People's Republic of)" },
    MidEntry { mid: "447", alpha2: "KW", alpha3: "KWT", reserved: None, country: "Kuwait" },
    MidEntry { mid: "450", alpha2: "LB", alpha3: "LBN", reserved: None, country: "Lebanon" },
    MidEntry { mid: "451", alpha2: "KG", alpha3: "KGZ", reserved: None, country: "Kyrgyzstan" },
    MidEntry { mid: "453", alpha2: "MO", alpha3: "MAC", reserved: None, country: "Macao (China)" },
    MidEntry { mid: "455", alpha2: "MV", alpha3: "MDV", reserved: None, country: "Maldives" },
    MidEntry { mid: "457", alpha2: "MN", alpha3: "MNG", reserved: None, country: "Mongolia" },
    MidEntry { mid: "459", alpha2: "NP", alpha3: "NPL", reserved: None, country: "Nepal" },
    MidEntry { mid: "461", alpha2: "OM", alpha3: "OMN", reserved: None, country: "Oman" },
    MidEntry { mid: "463", alpha2: "PK", alpha3: "PAK", reserved: None, country: "Pakistan" },
    MidEntry { mid: "466", alpha2: "QA", alpha3: "QAT", reserved: None, country: "Qatar" },
    MidEntry { mid: "468", alpha2: "SY", alpha3: "SYR", reserved: None, country: "Syria" },
    MidEntry { mid: "470", alpha2: "AE", alpha3: "ARE", reserved: None, country: "United Arab Emirates" },
    MidEntry { mid: "471", alpha2: "AE", alpha3: "ARE", reserved: None, country: "United Arab Emirates" },
    MidEntry { mid: "472", alpha2: "TJ", alpha3: "TJK", reserved: None, country: "Tajikistan" },
    MidEntry { mid: "473", alpha2: "YE", alpha3: "YEM", reserved: None, country: "Yemen" },
    MidEntry { mid: "475", alpha2: "YE", alpha3: "YEM", reserved: None, country: "Yemen" },
    MidEntry { mid: "477", alpha2: "HK", alpha3: "HKG", reserved: None, country: "Hong Kong (China)" },
    MidEntry { mid: "478", alpha2: "BA", alpha3: "BIH", reserved: None, country: "Bosnia and Herzegovina" },

    // =========================================================================
    // OCEANIA
    // =========================================================================
    MidEntry { mid: "501", alpha2: "TF", alpha3: "ATF", reserved: None, country: "Adelie Land (France)" },
    MidEntry { mid: "503", alpha2: "AU", alpha3: "AUS", reserved: None, country: "Australia" },
    MidEntry { mid: "506", alpha2: "MM", alpha3: "MMR", reserved: None, country: "Myanmar" },
    MidEntry { mid: "508", alpha2: "BN", alpha3: "BRN", reserved: None, country: "Brunei Darussalam" },
    MidEntry { mid: "510", alpha2: "FM", alpha3: "FSM", reserved: None, country: "Micronesia" },
    MidEntry { mid: "511", alpha2: "PW", alpha3: "PLW", reserved: None, country: "Palau" },
    MidEntry { mid: "512", alpha2: "NZ", alpha3: "NZL", reserved: None, country: "New Zealand" },
    MidEntry { mid: "514", alpha2: "KH", alpha3: "KHM", reserved: None, country: "Cambodia" },
    MidEntry { mid: "515", alpha2: "KH", alpha3: "KHM", reserved: None, country: "Cambodia" },
    MidEntry { mid: "516", alpha2: "CX", alpha3: "CXR", reserved: None, country: "Christmas Island (Australia)" },
    MidEntry { mid: "518", alpha2: "CK", alpha3: "COK", reserved: None, country: "Cook Islands" },
    MidEntry { mid: "520", alpha2: "FJ", alpha3: "FJI", reserved: None, country: "Fiji" },
    MidEntry { mid: "523", alpha2: "CC", alpha3: "CCK", reserved: None, country: "Cocos (Keeling) Islands (Australia)" },
    MidEntry { mid: "525", alpha2: "ID", alpha3: "IDN", reserved: None, country: "Indonesia" },
    MidEntry { mid: "529", alpha2: "KI", alpha3: "KIR", reserved: None, country: "Kiribati" },
    MidEntry { mid: "531", alpha2: "LA", alpha3: "LAO", reserved: None, country: "Lao People's Democratic Republic" },
    MidEntry { mid: "533", alpha2: "MY", alpha3: "MYS", reserved: None, country: "Malaysia" },
    MidEntry { mid: "536", alpha2: "MP", alpha3: "MNP", reserved: None, country: "Northern Mariana Islands (USA)" },
    MidEntry { mid: "538", alpha2: "MH", alpha3: "MHL", reserved: None, country: "Marshall Islands" },
    MidEntry { mid: "540", alpha2: "NC", alpha3: "NCL", reserved: None, country: "New Caledonia (France)" },
    MidEntry { mid: "542", alpha2: "NU", alpha3: "NIU", reserved: None, country: "Niue" },
    MidEntry { mid: "544", alpha2: "NR", alpha3: "NRU", reserved: None, country: "Nauru" },
    MidEntry { mid: "546", alpha2: "PF", alpha3: "PYF", reserved: None, country: "French Polynesia" },
    MidEntry { mid: "548", alpha2: "PH", alpha3: "PHL", reserved: None, country: "Philippines" },
    MidEntry { mid: "550", alpha2: "TL", alpha3: "TLS", reserved: None, country: "Timor-Leste" },
    MidEntry { mid: "553", alpha2: "PG", alpha3: "PNG", reserved: None, country: "Papua New Guinea" },
    MidEntry { mid: "555", alpha2: "PN", alpha3: "PCN", reserved: None, country: "Pitcairn Island (UK)" },
    MidEntry { mid: "557", alpha2: "SB", alpha3: "SLB", reserved: None, country: "Solomon Islands" },
    MidEntry { mid: "559", alpha2: "AS", alpha3: "ASM", reserved: None, country: "American Samoa (USA)" },
    MidEntry { mid: "561", alpha2: "WS", alpha3: "WSM", reserved: None, country: "Samoa" },
    MidEntry { mid: "563", alpha2: "SG", alpha3: "SGP", reserved: None, country: "Singapore" },
    MidEntry { mid: "564", alpha2: "SG", alpha3: "SGP", reserved: None, country: "Singapore" },
    MidEntry { mid: "565", alpha2: "SG", alpha3: "SGP", reserved: None, country: "Singapore" },
    MidEntry { mid: "566", alpha2: "SG", alpha3: "SGP", reserved: None, country: "Singapore" },
    MidEntry { mid: "567", alpha2: "TH", alpha3: "THA", reserved: None, country: "Thailand" },
    MidEntry { mid: "570", alpha2: "TO", alpha3: "TON", reserved: None, country: "Tonga" },
    MidEntry { mid: "572", alpha2: "TV", alpha3: "TUV", reserved: None, country: "Tuvalu" },
    MidEntry { mid: "574", alpha2: "VN", alpha3: "VNM", reserved: None, country: "Viet Nam" },
    MidEntry { mid: "576", alpha2: "VU", alpha3: "VUT", reserved: None, country: "Vanuatu" },
    MidEntry { mid: "577", alpha2: "VU", alpha3: "VUT", reserved: None, country: "Vanuatu" },
    MidEntry { mid: "578", alpha2: "WF", alpha3: "WLF", reserved: None, country: "Wallis and Futuna Islands (France)" },

    // =========================================================================
    // AFRICA
    // =========================================================================
    MidEntry { mid: "601", alpha2: "ZA", alpha3: "ZAF", reserved: None, country: "South Africa" },
    MidEntry { mid: "603", alpha2: "AO", alpha3: "AGO", reserved: None, country: "Angola" },
    MidEntry { mid: "605", alpha2: "DZ", alpha3: "DZA", reserved: None, country: "Algeria" },
    MidEntry { mid: "607", alpha2: "TF", alpha3: "ATF", reserved: None, country: "Saint Paul and Amsterdam Islands (France)" },
    MidEntry { mid: "608", alpha2: "SH", alpha3: "SHN", reserved: None, country: "Ascension Island (UK)" },
    MidEntry { mid: "609", alpha2: "BI", alpha3: "BDI", reserved: None, country: "Burundi" },
    MidEntry { mid: "610", alpha2: "BJ", alpha3: "BEN", reserved: None, country: "Benin" },
    MidEntry { mid: "611", alpha2: "BW", alpha3: "BWA", reserved: None, country: "Botswana" },
    MidEntry { mid: "612", alpha2: "CF", alpha3: "CAF", reserved: None, country: "Central African Republic" },
    MidEntry { mid: "613", alpha2: "CM", alpha3: "CMR", reserved: None, country: "Cameroon" },
    MidEntry { mid: "615", alpha2: "CG", alpha3: "COG", reserved: None, country: "Congo" },
    MidEntry { mid: "616", alpha2: "KM", alpha3: "COM", reserved: None, country: "Comoros" },
    MidEntry { mid: "617", alpha2: "CV", alpha3: "CPV", reserved: None, country: "Cabo Verde" },
    MidEntry { mid: "618", alpha2: "TF", alpha3: "ATF", reserved: None, country: "Crozet Archipelago (France)" },
    MidEntry { mid: "619", alpha2: "CI", alpha3: "CIV", reserved: None, country: "Cote d'Ivoire" },
    MidEntry { mid: "620", alpha2: "KM", alpha3: "COM", reserved: None, country: "Comoros" },
    MidEntry { mid: "621", alpha2: "DJ", alpha3: "DJI", reserved: None, country: "Djibouti" },
    MidEntry { mid: "622", alpha2: "EG", alpha3: "EGY", reserved: None, country: "Egypt" },
    MidEntry { mid: "624", alpha2: "ET", alpha3: "ETH", reserved: None, country: "Ethiopia" },
    MidEntry { mid: "625", alpha2: "ER", alpha3: "ERI", reserved: None, country: "Eritrea" },
    MidEntry { mid: "626", alpha2: "GA", alpha3: "GAB", reserved: None, country: "Gabon" },
    MidEntry { mid: "627", alpha2: "GH", alpha3: "GHA", reserved: None, country: "Ghana" },
    MidEntry { mid: "629", alpha2: "GM", alpha3: "GMB", reserved: None, country: "Gambia" },
    MidEntry { mid: "630", alpha2: "GW", alpha3: "GNB", reserved: None, country: "Guinea-Bissau" },
    MidEntry { mid: "631", alpha2: "GQ", alpha3: "GNQ", reserved: None, country: "Equatorial Guinea" },
    MidEntry { mid: "632", alpha2: "GN", alpha3: "GIN", reserved: None, country: "Guinea" },
    MidEntry { mid: "633", alpha2: "BF", alpha3: "BFA", reserved: None, country: "Burkina Faso" },
    MidEntry { mid: "634", alpha2: "KE", alpha3: "KEN", reserved: None, country: "Kenya" },
    MidEntry { mid: "635", alpha2: "TF", alpha3: "ATF", reserved: None, country: "Kerguelen Islands (France)" },
    MidEntry { mid: "636", alpha2: "LR", alpha3: "LBR", reserved: None, country: "Liberia" },
    MidEntry { mid: "637", alpha2: "LR", alpha3: "LBR", reserved: None, country: "Liberia" },
    MidEntry { mid: "638", alpha2: "SS", alpha3: "SSD", reserved: None, country: "South Sudan" },
    MidEntry { mid: "642", alpha2: "LY", alpha3: "LBY", reserved: None, country: "Libya" },
    MidEntry { mid: "644", alpha2: "LS", alpha3: "LSO", reserved: None, country: "Lesotho" },
    MidEntry { mid: "645", alpha2: "MU", alpha3: "MUS", reserved: None, country: "Mauritius" },
    MidEntry { mid: "647", alpha2: "MG", alpha3: "MDG", reserved: None, country: "Madagascar" },
    MidEntry { mid: "649", alpha2: "ML", alpha3: "MLI", reserved: None, country: "Mali" },
    MidEntry { mid: "650", alpha2: "MZ", alpha3: "MOZ", reserved: None, country: "Mozambique" },
    MidEntry { mid: "654", alpha2: "MR", alpha3: "MRT", reserved: None, country: "Mauritania" },
    MidEntry { mid: "655", alpha2: "MW", alpha3: "MWI", reserved: None, country: "Malawi" },
    MidEntry { mid: "656", alpha2: "NE", alpha3: "NER", reserved: None, country: "Niger" },
    MidEntry { mid: "657", alpha2: "NG", alpha3: "NGA", reserved: None, country: "Nigeria" },
    MidEntry { mid: "659", alpha2: "NA", alpha3: "NAM", reserved: None, country: "Namibia" },
    MidEntry { mid: "660", alpha2: "RE", alpha3: "REU", reserved: None, country: "Reunion (France)" },
    MidEntry { mid: "661", alpha2: "RW", alpha3: "RWA", reserved: None, country: "Rwanda" },
    MidEntry { mid: "662", alpha2: "SD", alpha3: "SDN", reserved: None, country: "Sudan" },
    MidEntry { mid: "663", alpha2: "SN", alpha3: "SEN", reserved: None, country: "Senegal" },
    MidEntry { mid: "664", alpha2: "SC", alpha3: "SYC", reserved: None, country: "Seychelles" },
    MidEntry { mid: "665", alpha2: "SH", alpha3: "SHN", reserved: None, country: "Saint Helena (UK)" },
    MidEntry { mid: "666", alpha2: "SO", alpha3: "SOM", reserved: None, country: "Somalia" },
    MidEntry { mid: "667", alpha2: "SL", alpha3: "SLE", reserved: None, country: "Sierra Leone" },
    MidEntry { mid: "668", alpha2: "ST", alpha3: "STP", reserved: None, country: "Sao Tome and Principe" },
    MidEntry { mid: "669", alpha2: "SZ", alpha3: "SWZ", reserved: None, country: "Eswatini" },
    MidEntry { mid: "670", alpha2: "TD", alpha3: "TCD", reserved: None, country: "Chad" },
    MidEntry { mid: "671", alpha2: "TG", alpha3: "TGO", reserved: None, country: "Togo" },
    MidEntry { mid: "672", alpha2: "TN", alpha3: "TUN", reserved: None, country: "Tunisia" },
    MidEntry { mid: "674", alpha2: "TZ", alpha3: "TZA", reserved: None, country: "Tanzania" },
    MidEntry { mid: "675", alpha2: "UG", alpha3: "UGA", reserved: None, country: "Uganda" },
    MidEntry { mid: "676", alpha2: "CD", alpha3: "COD", reserved: None, country: "Democratic Republic of the Congo" },
    MidEntry { mid: "677", alpha2: "TZ", alpha3: "TZA", reserved: None, country: "Tanzania" },
    MidEntry { mid: "678", alpha2: "ZM", alpha3: "ZMB", reserved: None, country: "Zambia" },
    MidEntry { mid: "679", alpha2: "ZW", alpha3: "ZWE", reserved: None, country: "Zimbabwe" },

    // =========================================================================
    // SOUTH AMERICA
    // =========================================================================
    MidEntry { mid: "701", alpha2: "AR", alpha3: "ARG", reserved: None, country: "Argentina" },
    MidEntry { mid: "710", alpha2: "BR", alpha3: "BRA", reserved: None, country: "Brazil" },
    MidEntry { mid: "720", alpha2: "BO", alpha3: "BOL", reserved: None, country: "Bolivia" },
    MidEntry { mid: "725", alpha2: "CL", alpha3: "CHL", reserved: None, country: "Chile" },
    MidEntry { mid: "730", alpha2: "CO", alpha3: "COL", reserved: None, country: "Colombia" },
    MidEntry { mid: "735", alpha2: "EC", alpha3: "ECU", reserved: None, country: "Ecuador" },
    MidEntry { mid: "740", alpha2: "FK", alpha3: "FLK", reserved: None, country: "Falkland Islands (UK)" },
    MidEntry { mid: "745", alpha2: "GF", alpha3: "GUF", reserved: None, country: "French Guiana" },
    MidEntry { mid: "750", alpha2: "GY", alpha3: "GUY", reserved: None, country: "Guyana" },
    MidEntry { mid: "755", alpha2: "PY", alpha3: "PRY", reserved: None, country: "Paraguay" },
    MidEntry { mid: "760", alpha2: "PE", alpha3: "PER", reserved: None, country: "Peru" },
    MidEntry { mid: "765", alpha2: "SR", alpha3: "SUR", reserved: None, country: "Suriname" },
    MidEntry { mid: "770", alpha2: "UY", alpha3: "URY", reserved: None, country: "Uruguay" },
    MidEntry { mid: "775", alpha2: "VE", alpha3: "VEN", reserved: None, country: "Venezuela" },
];

/// Get a MID entry by linear scan (prefer `reference::lookup_mid`)
pub fn get_entry(mid: &str) -> Option<&'static MidEntry> {
    MID_ENTRIES.iter().find(|e| e.mid == mid)
}

/// Get the first MID entry for a country name (case-insensitive)
pub fn get_entry_by_country(name: &str) -> Option<&'static MidEntry> {
    let name_lower = name.to_lowercase();
    MID_ENTRIES.iter().find(|e| e.country.to_lowercase() == name_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_has_major_administrations() {
        assert_eq!(get_entry("366").map(|e| e.alpha2), Some("US"));
        assert_eq!(get_entry("232").map(|e| e.alpha3), Some("GBR"));
        assert_eq!(get_entry("431").map(|e| e.country), Some("Japan"));
        assert_eq!(get_entry("636").map(|e| e.country), Some("Liberia"));
    }

    #[test]
    fn test_entry_by_country() {
        assert_eq!(get_entry_by_country("Panama").map(|e| e.alpha3), Some("PAN"));
        assert!(get_entry_by_country("panama").is_some()); // case insensitive
        assert!(get_entry_by_country("Atlantis").is_none());
    }

    #[test]
    fn test_keys_are_unique_maritime_mids() {
        let mut seen = HashSet::new();
        for entry in MID_ENTRIES {
            assert!(seen.insert(entry.mid), "duplicate MID {}", entry.mid);
            assert_eq!(entry.mid.len(), 3, "bad MID {}", entry.mid);
            assert!(entry.mid.bytes().all(|b| b.is_ascii_digit()), "bad MID {}", entry.mid);
            assert!(matches!(entry.mid.as_bytes()[0], b'2'..=b'7'), "bad region {}", entry.mid);
        }
        assert!(seen.len() > 250, "Expected at least 250 MIDs, got {}", seen.len());
    }

    #[test]
    fn test_iso_codes_are_well_formed() {
        for entry in MID_ENTRIES {
            assert_eq!(entry.alpha2.len(), 2, "{}", entry.mid);
            assert_eq!(entry.alpha3.len(), 3, "{}", entry.mid);
            assert!(entry.alpha2.bytes().all(|b| b.is_ascii_uppercase()), "{}", entry.mid);
            assert!(entry.alpha3.bytes().all(|b| b.is_ascii_uppercase()), "{}", entry.mid);
        }
    }

    #[test]
    fn test_record_shape() {
        let record = get_entry("201").map(|e| e.as_record());
        assert_eq!(record, Some([Some("AL"), Some("ALB"), None, Some("Albania")]));
    }
}
