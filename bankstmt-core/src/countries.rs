//! Country/territory reference data used to filter location noise out of
//! assembled description text.

use std::collections::HashSet;
use std::sync::LazyLock;

/// (alpha-2, alpha-3, name) per ISO 3166-1.
const COUNTRIES: &[(&str, &str, &str)] = &[
    ("AF", "AFG", "AFGHANISTAN"),
    ("AX", "ALA", "ALAND ISLANDS"),
    ("AL", "ALB", "ALBANIA"),
    ("DZ", "DZA", "ALGERIA"),
    ("AS", "ASM", "AMERICAN SAMOA"),
    ("AD", "AND", "ANDORRA"),
    ("AO", "AGO", "ANGOLA"),
    ("AI", "AIA", "ANGUILLA"),
    ("AQ", "ATA", "ANTARCTICA"),
    ("AG", "ATG", "ANTIGUA AND BARBUDA"),
    ("AR", "ARG", "ARGENTINA"),
    ("AM", "ARM", "ARMENIA"),
    ("AW", "ABW", "ARUBA"),
    ("AU", "AUS", "AUSTRALIA"),
    ("AT", "AUT", "AUSTRIA"),
    ("AZ", "AZE", "AZERBAIJAN"),
    ("BS", "BHS", "BAHAMAS"),
    ("BH", "BHR", "BAHRAIN"),
    ("BD", "BGD", "BANGLADESH"),
    ("BB", "BRB", "BARBADOS"),
    ("BY", "BLR", "BELARUS"),
    ("BE", "BEL", "BELGIUM"),
    ("BZ", "BLZ", "BELIZE"),
    ("BJ", "BEN", "BENIN"),
    ("BM", "BMU", "BERMUDA"),
    ("BT", "BTN", "BHUTAN"),
    ("BO", "BOL", "BOLIVIA"),
    ("BQ", "BES", "BONAIRE"),
    ("BA", "BIH", "BOSNIA AND HERZEGOVINA"),
    ("BW", "BWA", "BOTSWANA"),
    ("BV", "BVT", "BOUVET ISLAND"),
    ("BR", "BRA", "BRAZIL"),
    ("IO", "IOT", "BRITISH INDIAN OCEAN TERRITORY"),
    ("BN", "BRN", "BRUNEI DARUSSALAM"),
    ("BG", "BGR", "BULGARIA"),
    ("BF", "BFA", "BURKINA FASO"),
    ("BI", "BDI", "BURUNDI"),
    ("CV", "CPV", "CABO VERDE"),
    ("KH", "KHM", "CAMBODIA"),
    ("CM", "CMR", "CAMEROON"),
    ("CA", "CAN", "CANADA"),
    ("KY", "CYM", "CAYMAN ISLANDS"),
    ("CF", "CAF", "CENTRAL AFRICAN REPUBLIC"),
    ("TD", "TCD", "CHAD"),
    ("CL", "CHL", "CHILE"),
    ("CN", "CHN", "CHINA"),
    ("CX", "CXR", "CHRISTMAS ISLAND"),
    ("CC", "CCK", "COCOS ISLANDS"),
    ("CO", "COL", "COLOMBIA"),
    ("KM", "COM", "COMOROS"),
    ("CG", "COG", "CONGO"),
    ("CD", "COD", "CONGO, DEMOCRATIC REPUBLIC OF THE"),
    ("CK", "COK", "COOK ISLANDS"),
    ("CR", "CRI", "COSTA RICA"),
    ("CI", "CIV", "COTE D'IVOIRE"),
    ("HR", "HRV", "CROATIA"),
    ("CU", "CUB", "CUBA"),
    ("CW", "CUW", "CURACAO"),
    ("CY", "CYP", "CYPRUS"),
    ("CZ", "CZE", "CZECHIA"),
    ("DK", "DNK", "DENMARK"),
    ("DJ", "DJI", "DJIBOUTI"),
    ("DM", "DMA", "DOMINICA"),
    ("DO", "DOM", "DOMINICAN REPUBLIC"),
    ("EC", "ECU", "ECUADOR"),
    ("EG", "EGY", "EGYPT"),
    ("SV", "SLV", "EL SALVADOR"),
    ("GQ", "GNQ", "EQUATORIAL GUINEA"),
    ("ER", "ERI", "ERITREA"),
    ("EE", "EST", "ESTONIA"),
    ("SZ", "SWZ", "ESWATINI"),
    ("ET", "ETH", "ETHIOPIA"),
    ("FK", "FLK", "FALKLAND ISLANDS"),
    ("FO", "FRO", "FAROE ISLANDS"),
    ("FJ", "FJI", "FIJI"),
    ("FI", "FIN", "FINLAND"),
    ("FR", "FRA", "FRANCE"),
    ("GF", "GUF", "FRENCH GUIANA"),
    ("PF", "PYF", "FRENCH POLYNESIA"),
    ("TF", "ATF", "FRENCH SOUTHERN TERRITORIES"),
    ("GA", "GAB", "GABON"),
    ("GM", "GMB", "GAMBIA"),
    ("GE", "GEO", "GEORGIA"),
    ("DE", "DEU", "GERMANY"),
    ("GH", "GHA", "GHANA"),
    ("GI", "GIB", "GIBRALTAR"),
    ("GR", "GRC", "GREECE"),
    ("GL", "GRL", "GREENLAND"),
    ("GD", "GRD", "GRENADA"),
    ("GP", "GLP", "GUADELOUPE"),
    ("GU", "GUM", "GUAM"),
    ("GT", "GTM", "GUATEMALA"),
    ("GG", "GGY", "GUERNSEY"),
    ("GN", "GIN", "GUINEA"),
    ("GW", "GNB", "GUINEA-BISSAU"),
    ("GY", "GUY", "GUYANA"),
    ("HT", "HTI", "HAITI"),
    ("HM", "HMD", "HEARD ISLAND AND MCDONALD ISLANDS"),
    ("VA", "VAT", "HOLY SEE"),
    ("HN", "HND", "HONDURAS"),
    ("HK", "HKG", "HONG KONG"),
    ("HU", "HUN", "HUNGARY"),
    ("IS", "ISL", "ICELAND"),
    ("IN", "IND", "INDIA"),
    ("ID", "IDN", "INDONESIA"),
    ("IR", "IRN", "IRAN"),
    ("IQ", "IRQ", "IRAQ"),
    ("IE", "IRL", "IRELAND"),
    ("IM", "IMN", "ISLE OF MAN"),
    ("IL", "ISR", "ISRAEL"),
    ("IT", "ITA", "ITALY"),
    ("JM", "JAM", "JAMAICA"),
    ("JP", "JPN", "JAPAN"),
    ("JE", "JEY", "JERSEY"),
    ("JO", "JOR", "JORDAN"),
    ("KZ", "KAZ", "KAZAKHSTAN"),
    ("KE", "KEN", "KENYA"),
    ("KI", "KIR", "KIRIBATI"),
    ("KP", "PRK", "NORTH KOREA"),
    ("KR", "KOR", "SOUTH KOREA"),
    ("KW", "KWT", "KUWAIT"),
    ("KG", "KGZ", "KYRGYZSTAN"),
    ("LA", "LAO", "LAOS"),
    ("LV", "LVA", "LATVIA"),
    ("LB", "LBN", "LEBANON"),
    ("LS", "LSO", "LESOTHO"),
    ("LR", "LBR", "LIBERIA"),
    ("LY", "LBY", "LIBYA"),
    ("LI", "LIE", "LIECHTENSTEIN"),
    ("LT", "LTU", "LITHUANIA"),
    ("LU", "LUX", "LUXEMBOURG"),
    ("MO", "MAC", "MACAO"),
    ("MG", "MDG", "MADAGASCAR"),
    ("MW", "MWI", "MALAWI"),
    ("MY", "MYS", "MALAYSIA"),
    ("MV", "MDV", "MALDIVES"),
    ("ML", "MLI", "MALI"),
    ("MT", "MLT", "MALTA"),
    ("MH", "MHL", "MARSHALL ISLANDS"),
    ("MQ", "MTQ", "MARTINIQUE"),
    ("MR", "MRT", "MAURITANIA"),
    ("MU", "MUS", "MAURITIUS"),
    ("YT", "MYT", "MAYOTTE"),
    ("MX", "MEX", "MEXICO"),
    ("FM", "FSM", "MICRONESIA"),
    ("MD", "MDA", "MOLDOVA"),
    ("MC", "MCO", "MONACO"),
    ("MN", "MNG", "MONGOLIA"),
    ("ME", "MNE", "MONTENEGRO"),
    ("MS", "MSR", "MONTSERRAT"),
    ("MA", "MAR", "MOROCCO"),
    ("MZ", "MOZ", "MOZAMBIQUE"),
    ("MM", "MMR", "MYANMAR"),
    ("NA", "NAM", "NAMIBIA"),
    ("NR", "NRU", "NAURU"),
    ("NP", "NPL", "NEPAL"),
    ("NL", "NLD", "NETHERLANDS"),
    ("NC", "NCL", "NEW CALEDONIA"),
    ("NZ", "NZL", "NEW ZEALAND"),
    ("NI", "NIC", "NICARAGUA"),
    ("NE", "NER", "NIGER"),
    ("NG", "NGA", "NIGERIA"),
    ("NU", "NIU", "NIUE"),
    ("NF", "NFK", "NORFOLK ISLAND"),
    ("MK", "MKD", "NORTH MACEDONIA"),
    ("MP", "MNP", "NORTHERN MARIANA ISLANDS"),
    ("NO", "NOR", "NORWAY"),
    ("OM", "OMN", "OMAN"),
    ("PK", "PAK", "PAKISTAN"),
    ("PW", "PLW", "PALAU"),
    ("PS", "PSE", "PALESTINE"),
    ("PA", "PAN", "PANAMA"),
    ("PG", "PNG", "PAPUA NEW GUINEA"),
    ("PY", "PRY", "PARAGUAY"),
    ("PE", "PER", "PERU"),
    ("PH", "PHL", "PHILIPPINES"),
    ("PN", "PCN", "PITCAIRN"),
    ("PL", "POL", "POLAND"),
    ("PT", "PRT", "PORTUGAL"),
    ("PR", "PRI", "PUERTO RICO"),
    ("QA", "QAT", "QATAR"),
    ("RE", "REU", "REUNION"),
    ("RO", "ROU", "ROMANIA"),
    ("RU", "RUS", "RUSSIAN FEDERATION"),
    ("RW", "RWA", "RWANDA"),
    ("BL", "BLM", "SAINT BARTHELEMY"),
    ("SH", "SHN", "SAINT HELENA"),
    ("KN", "KNA", "SAINT KITTS AND NEVIS"),
    ("LC", "LCA", "SAINT LUCIA"),
    ("MF", "MAF", "SAINT MARTIN"),
    ("PM", "SPM", "SAINT PIERRE AND MIQUELON"),
    ("VC", "VCT", "SAINT VINCENT AND THE GRENADINES"),
    ("WS", "WSM", "SAMOA"),
    ("SM", "SMR", "SAN MARINO"),
    ("ST", "STP", "SAO TOME AND PRINCIPE"),
    ("SA", "SAU", "SAUDI ARABIA"),
    ("SN", "SEN", "SENEGAL"),
    ("RS", "SRB", "SERBIA"),
    ("SC", "SYC", "SEYCHELLES"),
    ("SL", "SLE", "SIERRA LEONE"),
    ("SG", "SGP", "SINGAPORE"),
    ("SX", "SXM", "SINT MAARTEN"),
    ("SK", "SVK", "SLOVAKIA"),
    ("SI", "SVN", "SLOVENIA"),
    ("SB", "SLB", "SOLOMON ISLANDS"),
    ("SO", "SOM", "SOMALIA"),
    ("ZA", "ZAF", "SOUTH AFRICA"),
    ("GS", "SGS", "SOUTH GEORGIA"),
    ("SS", "SSD", "SOUTH SUDAN"),
    ("ES", "ESP", "SPAIN"),
    ("LK", "LKA", "SRI LANKA"),
    ("SD", "SDN", "SUDAN"),
    ("SR", "SUR", "SURINAME"),
    ("SJ", "SJM", "SVALBARD AND JAN MAYEN"),
    ("SE", "SWE", "SWEDEN"),
    ("CH", "CHE", "SWITZERLAND"),
    ("SY", "SYR", "SYRIA"),
    ("TW", "TWN", "TAIWAN"),
    ("TJ", "TJK", "TAJIKISTAN"),
    ("TZ", "TZA", "TANZANIA"),
    ("TH", "THA", "THAILAND"),
    ("TL", "TLS", "TIMOR-LESTE"),
    ("TG", "TGO", "TOGO"),
    ("TK", "TKL", "TOKELAU"),
    ("TO", "TON", "TONGA"),
    ("TT", "TTO", "TRINIDAD AND TOBAGO"),
    ("TN", "TUN", "TUNISIA"),
    ("TR", "TUR", "TURKEY"),
    ("TM", "TKM", "TURKMENISTAN"),
    ("TC", "TCA", "TURKS AND CAICOS ISLANDS"),
    ("TV", "TUV", "TUVALU"),
    ("UG", "UGA", "UGANDA"),
    ("UA", "UKR", "UKRAINE"),
    ("AE", "ARE", "UNITED ARAB EMIRATES"),
    ("GB", "GBR", "UNITED KINGDOM"),
    ("US", "USA", "UNITED STATES"),
    ("UM", "UMI", "UNITED STATES MINOR OUTLYING ISLANDS"),
    ("UY", "URY", "URUGUAY"),
    ("UZ", "UZB", "UZBEKISTAN"),
    ("VU", "VUT", "VANUATU"),
    ("VE", "VEN", "VENEZUELA"),
    ("VN", "VNM", "VIET NAM"),
    ("VG", "VGB", "VIRGIN ISLANDS, BRITISH"),
    ("VI", "VIR", "VIRGIN ISLANDS, U.S."),
    ("WF", "WLF", "WALLIS AND FUTUNA"),
    ("EH", "ESH", "WESTERN SAHARA"),
    ("YE", "YEM", "YEMEN"),
    ("ZM", "ZMB", "ZAMBIA"),
    ("ZW", "ZWE", "ZIMBABWE"),
];

static GLOBAL: LazyLock<CountryIndex> = LazyLock::new(CountryIndex::new);

/// Immutable lookup over alpha-2 codes, alpha-3 codes and upper-cased
/// country names.
#[derive(Debug, Clone)]
pub struct CountryIndex {
    keywords: HashSet<&'static str>,
}

impl CountryIndex {
    pub fn new() -> Self {
        let mut keywords = HashSet::with_capacity(COUNTRIES.len() * 3);
        for (alpha2, alpha3, name) in COUNTRIES {
            keywords.insert(*alpha2);
            keywords.insert(*alpha3);
            keywords.insert(*name);
        }
        Self { keywords }
    }

    /// The process-wide index, built on first use.
    pub fn global() -> &'static CountryIndex {
        &GLOBAL
    }

    /// True iff the upper-cased token exactly equals a known code or name.
    pub fn is_location(&self, value: &str) -> bool {
        self.keywords.contains(value.to_uppercase().as_str())
    }
}

impl Default for CountryIndex {
    fn default() -> Self {
        Self::new()
    }
}
