//! ISO 4217 currency catalog.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::error::{MoneyError, MoneyResult};
use crate::registry::Iso4217Registry;

/// A currency identified by its ISO 4217 alphabetic and numeric codes.
///
/// Struct equality compares every field. Use [`Currency`](crate::Currency)
/// to compare by currency identity.
///
/// Deserialization applies the same code checks as [`Iso4217Currency::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIso4217Currency")]
pub struct Iso4217Currency {
    alphabetic_code: Cow<'static, str>,
    numeric_code: Cow<'static, str>,
    minor_units: u32,
    name: Cow<'static, str>,
}

/// Unvalidated wire form of [`Iso4217Currency`].
#[derive(Deserialize)]
struct RawIso4217Currency {
    alphabetic_code: String,
    numeric_code: String,
    minor_units: u32,
    name: String,
}

impl TryFrom<RawIso4217Currency> for Iso4217Currency {
    type Error = MoneyError;

    fn try_from(raw: RawIso4217Currency) -> MoneyResult<Self> {
        Self::new(raw.alphabetic_code, raw.numeric_code, raw.minor_units, raw.name)
    }
}

impl Iso4217Currency {
    /// Create a currency from its codes, minor units and name.
    ///
    /// Both codes must be exactly three characters long.
    pub fn new(
        alphabetic_code: impl Into<String>,
        numeric_code: impl Into<String>,
        minor_units: u32,
        name: impl Into<String>,
    ) -> MoneyResult<Self> {
        let alphabetic_code = alphabetic_code.into();
        let numeric_code = numeric_code.into();

        if alphabetic_code.chars().count() != 3 {
            return Err(MoneyError::InvalidCurrencyCode {
                kind: "alphabetic",
                code: alphabetic_code,
            });
        }
        if numeric_code.chars().count() != 3 {
            return Err(MoneyError::InvalidCurrencyCode {
                kind: "numeric",
                code: numeric_code,
            });
        }

        Ok(Self {
            alphabetic_code: Cow::Owned(alphabetic_code),
            numeric_code: Cow::Owned(numeric_code),
            minor_units,
            name: Cow::Owned(name.into()),
        })
    }

    const fn predefined(
        alphabetic_code: &'static str,
        numeric_code: &'static str,
        minor_units: u32,
        name: &'static str,
    ) -> Self {
        Self {
            alphabetic_code: Cow::Borrowed(alphabetic_code),
            numeric_code: Cow::Borrowed(numeric_code),
            minor_units,
            name: Cow::Borrowed(name),
        }
    }

    /// The three letter code, e.g. `"EUR"`.
    pub fn alphabetic_code(&self) -> &str {
        &self.alphabetic_code
    }

    /// The three digit code, e.g. `"978"`.
    pub fn numeric_code(&self) -> &str {
        &self.numeric_code
    }

    /// Number of decimal places used to express minor units.
    pub fn minor_units(&self) -> u32 {
        self.minor_units
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every currency of the built-in catalog.
    pub fn predefined_currencies() -> &'static [Iso4217Currency] {
        PREDEFINED
    }

    /// Look up a currency by alphabetic code in the global registry.
    ///
    /// Codes are matched case-sensitively.
    pub fn from_alphabetic_code(code: &str) -> Option<Self> {
        Self::from_alphabetic_code_in(code, Iso4217Registry::global())
    }

    /// Look up a currency by alphabetic code in the given registry.
    pub fn from_alphabetic_code_in(code: &str, registry: &Iso4217Registry) -> Option<Self> {
        registry.by_alphabetic_code(code)
    }

    /// Look up a currency by numeric code in the global registry.
    pub fn from_numeric_code(code: &str) -> Option<Self> {
        Self::from_numeric_code_in(code, Iso4217Registry::global())
    }

    /// Look up a currency by numeric code in the given registry.
    pub fn from_numeric_code_in(code: &str, registry: &Iso4217Registry) -> Option<Self> {
        registry.by_numeric_code(code)
    }
}

impl fmt::Display for Iso4217Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alphabetic_code)
    }
}

impl Iso4217Currency {
    /// UAE Dirham (AED, 784).
    pub const AED: Self = Self::predefined("AED", "784", 2, "UAE Dirham");

    /// Afghani (AFN, 971).
    pub const AFN: Self = Self::predefined("AFN", "971", 2, "Afghani");

    /// Lek (ALL, 008).
    pub const ALL: Self = Self::predefined("ALL", "008", 2, "Lek");

    /// Armenian Dram (AMD, 051).
    pub const AMD: Self = Self::predefined("AMD", "051", 2, "Armenian Dram");

    /// Kwanza (AOA, 973).
    pub const AOA: Self = Self::predefined("AOA", "973", 2, "Kwanza");

    /// Argentine Peso (ARS, 032).
    pub const ARS: Self = Self::predefined("ARS", "032", 2, "Argentine Peso");

    /// Australian Dollar (AUD, 036).
    pub const AUD: Self = Self::predefined("AUD", "036", 2, "Australian Dollar");

    /// Aruban Florin (AWG, 533).
    pub const AWG: Self = Self::predefined("AWG", "533", 2, "Aruban Florin");

    /// Azerbaijan Manat (AZN, 944).
    pub const AZN: Self = Self::predefined("AZN", "944", 2, "Azerbaijan Manat");

    /// Convertible Mark (BAM, 977).
    pub const BAM: Self = Self::predefined("BAM", "977", 2, "Convertible Mark");

    /// Barbados Dollar (BBD, 052).
    pub const BBD: Self = Self::predefined("BBD", "052", 2, "Barbados Dollar");

    /// Taka (BDT, 050).
    pub const BDT: Self = Self::predefined("BDT", "050", 2, "Taka");

    /// Bulgarian Lev (BGN, 975).
    pub const BGN: Self = Self::predefined("BGN", "975", 2, "Bulgarian Lev");

    /// Bahraini Dinar (BHD, 048).
    pub const BHD: Self = Self::predefined("BHD", "048", 3, "Bahraini Dinar");

    /// Burundi Franc (BIF, 108).
    pub const BIF: Self = Self::predefined("BIF", "108", 0, "Burundi Franc");

    /// Bermudian Dollar (BMD, 060).
    pub const BMD: Self = Self::predefined("BMD", "060", 2, "Bermudian Dollar");

    /// Brunei Dollar (BND, 096).
    pub const BND: Self = Self::predefined("BND", "096", 2, "Brunei Dollar");

    /// Boliviano (BOB, 068).
    pub const BOB: Self = Self::predefined("BOB", "068", 2, "Boliviano");

    /// Brazilian Real (BRL, 986).
    pub const BRL: Self = Self::predefined("BRL", "986", 2, "Brazilian Real");

    /// Bahamian Dollar (BSD, 044).
    pub const BSD: Self = Self::predefined("BSD", "044", 2, "Bahamian Dollar");

    /// Ngultrum (BTN, 064).
    pub const BTN: Self = Self::predefined("BTN", "064", 2, "Ngultrum");

    /// Pula (BWP, 072).
    pub const BWP: Self = Self::predefined("BWP", "072", 2, "Pula");

    /// Belarusian Ruble (BYN, 933).
    pub const BYN: Self = Self::predefined("BYN", "933", 2, "Belarusian Ruble");

    /// Belize Dollar (BZD, 084).
    pub const BZD: Self = Self::predefined("BZD", "084", 2, "Belize Dollar");

    /// Canadian Dollar (CAD, 124).
    pub const CAD: Self = Self::predefined("CAD", "124", 2, "Canadian Dollar");

    /// Congolese Franc (CDF, 976).
    pub const CDF: Self = Self::predefined("CDF", "976", 2, "Congolese Franc");

    /// Swiss Franc (CHF, 756).
    pub const CHF: Self = Self::predefined("CHF", "756", 2, "Swiss Franc");

    /// Chilean Peso (CLP, 152).
    pub const CLP: Self = Self::predefined("CLP", "152", 0, "Chilean Peso");

    /// Yuan Renminbi (CNY, 156).
    pub const CNY: Self = Self::predefined("CNY", "156", 2, "Yuan Renminbi");

    /// Colombian Peso (COP, 170).
    pub const COP: Self = Self::predefined("COP", "170", 2, "Colombian Peso");

    /// Costa Rican Colon (CRC, 188).
    pub const CRC: Self = Self::predefined("CRC", "188", 2, "Costa Rican Colon");

    /// Cuban Peso (CUP, 192).
    pub const CUP: Self = Self::predefined("CUP", "192", 2, "Cuban Peso");

    /// Cabo Verde Escudo (CVE, 132).
    pub const CVE: Self = Self::predefined("CVE", "132", 2, "Cabo Verde Escudo");

    /// Czech Koruna (CZK, 203).
    pub const CZK: Self = Self::predefined("CZK", "203", 2, "Czech Koruna");

    /// Djibouti Franc (DJF, 262).
    pub const DJF: Self = Self::predefined("DJF", "262", 0, "Djibouti Franc");

    /// Danish Krone (DKK, 208).
    pub const DKK: Self = Self::predefined("DKK", "208", 2, "Danish Krone");

    /// Dominican Peso (DOP, 214).
    pub const DOP: Self = Self::predefined("DOP", "214", 2, "Dominican Peso");

    /// Algerian Dinar (DZD, 012).
    pub const DZD: Self = Self::predefined("DZD", "012", 2, "Algerian Dinar");

    /// Egyptian Pound (EGP, 818).
    pub const EGP: Self = Self::predefined("EGP", "818", 2, "Egyptian Pound");

    /// Nakfa (ERN, 232).
    pub const ERN: Self = Self::predefined("ERN", "232", 2, "Nakfa");

    /// Ethiopian Birr (ETB, 230).
    pub const ETB: Self = Self::predefined("ETB", "230", 2, "Ethiopian Birr");

    /// Euro (EUR, 978).
    pub const EUR: Self = Self::predefined("EUR", "978", 2, "Euro");

    /// Fiji Dollar (FJD, 242).
    pub const FJD: Self = Self::predefined("FJD", "242", 2, "Fiji Dollar");

    /// Falkland Islands Pound (FKP, 238).
    pub const FKP: Self = Self::predefined("FKP", "238", 2, "Falkland Islands Pound");

    /// Pound Sterling (GBP, 826).
    pub const GBP: Self = Self::predefined("GBP", "826", 2, "Pound Sterling");

    /// Lari (GEL, 981).
    pub const GEL: Self = Self::predefined("GEL", "981", 2, "Lari");

    /// Ghana Cedi (GHS, 936).
    pub const GHS: Self = Self::predefined("GHS", "936", 2, "Ghana Cedi");

    /// Gibraltar Pound (GIP, 292).
    pub const GIP: Self = Self::predefined("GIP", "292", 2, "Gibraltar Pound");

    /// Dalasi (GMD, 270).
    pub const GMD: Self = Self::predefined("GMD", "270", 2, "Dalasi");

    /// Guinean Franc (GNF, 324).
    pub const GNF: Self = Self::predefined("GNF", "324", 0, "Guinean Franc");

    /// Quetzal (GTQ, 320).
    pub const GTQ: Self = Self::predefined("GTQ", "320", 2, "Quetzal");

    /// Guyana Dollar (GYD, 328).
    pub const GYD: Self = Self::predefined("GYD", "328", 2, "Guyana Dollar");

    /// Hong Kong Dollar (HKD, 344).
    pub const HKD: Self = Self::predefined("HKD", "344", 2, "Hong Kong Dollar");

    /// Lempira (HNL, 340).
    pub const HNL: Self = Self::predefined("HNL", "340", 2, "Lempira");

    /// Gourde (HTG, 332).
    pub const HTG: Self = Self::predefined("HTG", "332", 2, "Gourde");

    /// Forint (HUF, 348).
    pub const HUF: Self = Self::predefined("HUF", "348", 2, "Forint");

    /// Rupiah (IDR, 360).
    pub const IDR: Self = Self::predefined("IDR", "360", 2, "Rupiah");

    /// New Israeli Sheqel (ILS, 376).
    pub const ILS: Self = Self::predefined("ILS", "376", 2, "New Israeli Sheqel");

    /// Indian Rupee (INR, 356).
    pub const INR: Self = Self::predefined("INR", "356", 2, "Indian Rupee");

    /// Iraqi Dinar (IQD, 368).
    pub const IQD: Self = Self::predefined("IQD", "368", 3, "Iraqi Dinar");

    /// Iranian Rial (IRR, 364).
    pub const IRR: Self = Self::predefined("IRR", "364", 2, "Iranian Rial");

    /// Iceland Krona (ISK, 352).
    pub const ISK: Self = Self::predefined("ISK", "352", 0, "Iceland Krona");

    /// Jamaican Dollar (JMD, 388).
    pub const JMD: Self = Self::predefined("JMD", "388", 2, "Jamaican Dollar");

    /// Jordanian Dinar (JOD, 400).
    pub const JOD: Self = Self::predefined("JOD", "400", 3, "Jordanian Dinar");

    /// Yen (JPY, 392).
    pub const JPY: Self = Self::predefined("JPY", "392", 0, "Yen");

    /// Kenyan Shilling (KES, 404).
    pub const KES: Self = Self::predefined("KES", "404", 2, "Kenyan Shilling");

    /// Som (KGS, 417).
    pub const KGS: Self = Self::predefined("KGS", "417", 2, "Som");

    /// Riel (KHR, 116).
    pub const KHR: Self = Self::predefined("KHR", "116", 2, "Riel");

    /// Comorian Franc (KMF, 174).
    pub const KMF: Self = Self::predefined("KMF", "174", 0, "Comorian Franc");

    /// North Korean Won (KPW, 408).
    pub const KPW: Self = Self::predefined("KPW", "408", 2, "North Korean Won");

    /// Won (KRW, 410).
    pub const KRW: Self = Self::predefined("KRW", "410", 0, "Won");

    /// Kuwaiti Dinar (KWD, 414).
    pub const KWD: Self = Self::predefined("KWD", "414", 3, "Kuwaiti Dinar");

    /// Cayman Islands Dollar (KYD, 136).
    pub const KYD: Self = Self::predefined("KYD", "136", 2, "Cayman Islands Dollar");

    /// Tenge (KZT, 398).
    pub const KZT: Self = Self::predefined("KZT", "398", 2, "Tenge");

    /// Lao Kip (LAK, 418).
    pub const LAK: Self = Self::predefined("LAK", "418", 2, "Lao Kip");

    /// Lebanese Pound (LBP, 422).
    pub const LBP: Self = Self::predefined("LBP", "422", 2, "Lebanese Pound");

    /// Sri Lanka Rupee (LKR, 144).
    pub const LKR: Self = Self::predefined("LKR", "144", 2, "Sri Lanka Rupee");

    /// Liberian Dollar (LRD, 430).
    pub const LRD: Self = Self::predefined("LRD", "430", 2, "Liberian Dollar");

    /// Loti (LSL, 426).
    pub const LSL: Self = Self::predefined("LSL", "426", 2, "Loti");

    /// Libyan Dinar (LYD, 434).
    pub const LYD: Self = Self::predefined("LYD", "434", 3, "Libyan Dinar");

    /// Moroccan Dirham (MAD, 504).
    pub const MAD: Self = Self::predefined("MAD", "504", 2, "Moroccan Dirham");

    /// Moldovan Leu (MDL, 498).
    pub const MDL: Self = Self::predefined("MDL", "498", 2, "Moldovan Leu");

    /// Malagasy Ariary (MGA, 969).
    pub const MGA: Self = Self::predefined("MGA", "969", 2, "Malagasy Ariary");

    /// Denar (MKD, 807).
    pub const MKD: Self = Self::predefined("MKD", "807", 2, "Denar");

    /// Kyat (MMK, 104).
    pub const MMK: Self = Self::predefined("MMK", "104", 2, "Kyat");

    /// Tugrik (MNT, 496).
    pub const MNT: Self = Self::predefined("MNT", "496", 2, "Tugrik");

    /// Pataca (MOP, 446).
    pub const MOP: Self = Self::predefined("MOP", "446", 2, "Pataca");

    /// Ouguiya (MRU, 929).
    pub const MRU: Self = Self::predefined("MRU", "929", 2, "Ouguiya");

    /// Mauritius Rupee (MUR, 480).
    pub const MUR: Self = Self::predefined("MUR", "480", 2, "Mauritius Rupee");

    /// Rufiyaa (MVR, 462).
    pub const MVR: Self = Self::predefined("MVR", "462", 2, "Rufiyaa");

    /// Malawi Kwacha (MWK, 454).
    pub const MWK: Self = Self::predefined("MWK", "454", 2, "Malawi Kwacha");

    /// Mexican Peso (MXN, 484).
    pub const MXN: Self = Self::predefined("MXN", "484", 2, "Mexican Peso");

    /// Malaysian Ringgit (MYR, 458).
    pub const MYR: Self = Self::predefined("MYR", "458", 2, "Malaysian Ringgit");

    /// Mozambique Metical (MZN, 943).
    pub const MZN: Self = Self::predefined("MZN", "943", 2, "Mozambique Metical");

    /// Namibia Dollar (NAD, 516).
    pub const NAD: Self = Self::predefined("NAD", "516", 2, "Namibia Dollar");

    /// Naira (NGN, 566).
    pub const NGN: Self = Self::predefined("NGN", "566", 2, "Naira");

    /// Cordoba Oro (NIO, 558).
    pub const NIO: Self = Self::predefined("NIO", "558", 2, "Cordoba Oro");

    /// Norwegian Krone (NOK, 578).
    pub const NOK: Self = Self::predefined("NOK", "578", 2, "Norwegian Krone");

    /// Nepalese Rupee (NPR, 524).
    pub const NPR: Self = Self::predefined("NPR", "524", 2, "Nepalese Rupee");

    /// New Zealand Dollar (NZD, 554).
    pub const NZD: Self = Self::predefined("NZD", "554", 2, "New Zealand Dollar");

    /// Rial Omani (OMR, 512).
    pub const OMR: Self = Self::predefined("OMR", "512", 3, "Rial Omani");

    /// Balboa (PAB, 590).
    pub const PAB: Self = Self::predefined("PAB", "590", 2, "Balboa");

    /// Sol (PEN, 604).
    pub const PEN: Self = Self::predefined("PEN", "604", 2, "Sol");

    /// Kina (PGK, 598).
    pub const PGK: Self = Self::predefined("PGK", "598", 2, "Kina");

    /// Philippine Peso (PHP, 608).
    pub const PHP: Self = Self::predefined("PHP", "608", 2, "Philippine Peso");

    /// Pakistan Rupee (PKR, 586).
    pub const PKR: Self = Self::predefined("PKR", "586", 2, "Pakistan Rupee");

    /// Zloty (PLN, 985).
    pub const PLN: Self = Self::predefined("PLN", "985", 2, "Zloty");

    /// Guarani (PYG, 600).
    pub const PYG: Self = Self::predefined("PYG", "600", 0, "Guarani");

    /// Qatari Rial (QAR, 634).
    pub const QAR: Self = Self::predefined("QAR", "634", 2, "Qatari Rial");

    /// Romanian Leu (RON, 946).
    pub const RON: Self = Self::predefined("RON", "946", 2, "Romanian Leu");

    /// Serbian Dinar (RSD, 941).
    pub const RSD: Self = Self::predefined("RSD", "941", 2, "Serbian Dinar");

    /// Russian Ruble (RUB, 643).
    pub const RUB: Self = Self::predefined("RUB", "643", 2, "Russian Ruble");

    /// Rwanda Franc (RWF, 646).
    pub const RWF: Self = Self::predefined("RWF", "646", 0, "Rwanda Franc");

    /// Saudi Riyal (SAR, 682).
    pub const SAR: Self = Self::predefined("SAR", "682", 2, "Saudi Riyal");

    /// Solomon Islands Dollar (SBD, 090).
    pub const SBD: Self = Self::predefined("SBD", "090", 2, "Solomon Islands Dollar");

    /// Seychelles Rupee (SCR, 690).
    pub const SCR: Self = Self::predefined("SCR", "690", 2, "Seychelles Rupee");

    /// Sudanese Pound (SDG, 938).
    pub const SDG: Self = Self::predefined("SDG", "938", 2, "Sudanese Pound");

    /// Swedish Krona (SEK, 752).
    pub const SEK: Self = Self::predefined("SEK", "752", 2, "Swedish Krona");

    /// Singapore Dollar (SGD, 702).
    pub const SGD: Self = Self::predefined("SGD", "702", 2, "Singapore Dollar");

    /// Saint Helena Pound (SHP, 654).
    pub const SHP: Self = Self::predefined("SHP", "654", 2, "Saint Helena Pound");

    /// Leone (SLE, 925).
    pub const SLE: Self = Self::predefined("SLE", "925", 2, "Leone");

    /// Somali Shilling (SOS, 706).
    pub const SOS: Self = Self::predefined("SOS", "706", 2, "Somali Shilling");

    /// Surinam Dollar (SRD, 968).
    pub const SRD: Self = Self::predefined("SRD", "968", 2, "Surinam Dollar");

    /// South Sudanese Pound (SSP, 728).
    pub const SSP: Self = Self::predefined("SSP", "728", 2, "South Sudanese Pound");

    /// Dobra (STN, 930).
    pub const STN: Self = Self::predefined("STN", "930", 2, "Dobra");

    /// El Salvador Colon (SVC, 222).
    pub const SVC: Self = Self::predefined("SVC", "222", 2, "El Salvador Colon");

    /// Syrian Pound (SYP, 760).
    pub const SYP: Self = Self::predefined("SYP", "760", 2, "Syrian Pound");

    /// Lilangeni (SZL, 748).
    pub const SZL: Self = Self::predefined("SZL", "748", 2, "Lilangeni");

    /// Baht (THB, 764).
    pub const THB: Self = Self::predefined("THB", "764", 2, "Baht");

    /// Somoni (TJS, 972).
    pub const TJS: Self = Self::predefined("TJS", "972", 2, "Somoni");

    /// Turkmenistan New Manat (TMT, 934).
    pub const TMT: Self = Self::predefined("TMT", "934", 2, "Turkmenistan New Manat");

    /// Tunisian Dinar (TND, 788).
    pub const TND: Self = Self::predefined("TND", "788", 3, "Tunisian Dinar");

    /// Pa’anga (TOP, 776).
    pub const TOP: Self = Self::predefined("TOP", "776", 2, "Pa’anga");

    /// Turkish Lira (TRY, 949).
    pub const TRY: Self = Self::predefined("TRY", "949", 2, "Turkish Lira");

    /// Trinidad and Tobago Dollar (TTD, 780).
    pub const TTD: Self = Self::predefined("TTD", "780", 2, "Trinidad and Tobago Dollar");

    /// New Taiwan Dollar (TWD, 901).
    pub const TWD: Self = Self::predefined("TWD", "901", 2, "New Taiwan Dollar");

    /// Tanzanian Shilling (TZS, 834).
    pub const TZS: Self = Self::predefined("TZS", "834", 2, "Tanzanian Shilling");

    /// Hryvnia (UAH, 980).
    pub const UAH: Self = Self::predefined("UAH", "980", 2, "Hryvnia");

    /// Uganda Shilling (UGX, 800).
    pub const UGX: Self = Self::predefined("UGX", "800", 0, "Uganda Shilling");

    /// US Dollar (USD, 840).
    pub const USD: Self = Self::predefined("USD", "840", 2, "US Dollar");

    /// Peso Uruguayo (UYU, 858).
    pub const UYU: Self = Self::predefined("UYU", "858", 2, "Peso Uruguayo");

    /// Uzbekistan Sum (UZS, 860).
    pub const UZS: Self = Self::predefined("UZS", "860", 2, "Uzbekistan Sum");

    /// Bolívar Soberano (VED, 926).
    pub const VED: Self = Self::predefined("VED", "926", 2, "Bolívar Soberano");

    /// Bolívar Soberano (VES, 928).
    pub const VES: Self = Self::predefined("VES", "928", 2, "Bolívar Soberano");

    /// Dong (VND, 704).
    pub const VND: Self = Self::predefined("VND", "704", 0, "Dong");

    /// Vatu (VUV, 548).
    pub const VUV: Self = Self::predefined("VUV", "548", 0, "Vatu");

    /// Tala (WST, 882).
    pub const WST: Self = Self::predefined("WST", "882", 2, "Tala");

    /// CFA Franc BEAC (XAF, 950).
    pub const XAF: Self = Self::predefined("XAF", "950", 0, "CFA Franc BEAC");

    /// East Caribbean Dollar (XCD, 951).
    pub const XCD: Self = Self::predefined("XCD", "951", 2, "East Caribbean Dollar");

    /// Caribbean Guilder (XCG, 532).
    pub const XCG: Self = Self::predefined("XCG", "532", 2, "Caribbean Guilder");

    /// CFA Franc BCEAO (XOF, 952).
    pub const XOF: Self = Self::predefined("XOF", "952", 0, "CFA Franc BCEAO");

    /// CFP Franc (XPF, 953).
    pub const XPF: Self = Self::predefined("XPF", "953", 0, "CFP Franc");

    /// Yemeni Rial (YER, 886).
    pub const YER: Self = Self::predefined("YER", "886", 2, "Yemeni Rial");

    /// Rand (ZAR, 710).
    pub const ZAR: Self = Self::predefined("ZAR", "710", 2, "Rand");

    /// Zambian Kwacha (ZMW, 967).
    pub const ZMW: Self = Self::predefined("ZMW", "967", 2, "Zambian Kwacha");

    /// Zimbabwe Gold (ZWG, 924).
    pub const ZWG: Self = Self::predefined("ZWG", "924", 2, "Zimbabwe Gold");
}

static PREDEFINED: &[Iso4217Currency] = &[
    Iso4217Currency::AED,
    Iso4217Currency::AFN,
    Iso4217Currency::ALL,
    Iso4217Currency::AMD,
    Iso4217Currency::AOA,
    Iso4217Currency::ARS,
    Iso4217Currency::AUD,
    Iso4217Currency::AWG,
    Iso4217Currency::AZN,
    Iso4217Currency::BAM,
    Iso4217Currency::BBD,
    Iso4217Currency::BDT,
    Iso4217Currency::BGN,
    Iso4217Currency::BHD,
    Iso4217Currency::BIF,
    Iso4217Currency::BMD,
    Iso4217Currency::BND,
    Iso4217Currency::BOB,
    Iso4217Currency::BRL,
    Iso4217Currency::BSD,
    Iso4217Currency::BTN,
    Iso4217Currency::BWP,
    Iso4217Currency::BYN,
    Iso4217Currency::BZD,
    Iso4217Currency::CAD,
    Iso4217Currency::CDF,
    Iso4217Currency::CHF,
    Iso4217Currency::CLP,
    Iso4217Currency::CNY,
    Iso4217Currency::COP,
    Iso4217Currency::CRC,
    Iso4217Currency::CUP,
    Iso4217Currency::CVE,
    Iso4217Currency::CZK,
    Iso4217Currency::DJF,
    Iso4217Currency::DKK,
    Iso4217Currency::DOP,
    Iso4217Currency::DZD,
    Iso4217Currency::EGP,
    Iso4217Currency::ERN,
    Iso4217Currency::ETB,
    Iso4217Currency::EUR,
    Iso4217Currency::FJD,
    Iso4217Currency::FKP,
    Iso4217Currency::GBP,
    Iso4217Currency::GEL,
    Iso4217Currency::GHS,
    Iso4217Currency::GIP,
    Iso4217Currency::GMD,
    Iso4217Currency::GNF,
    Iso4217Currency::GTQ,
    Iso4217Currency::GYD,
    Iso4217Currency::HKD,
    Iso4217Currency::HNL,
    Iso4217Currency::HTG,
    Iso4217Currency::HUF,
    Iso4217Currency::IDR,
    Iso4217Currency::ILS,
    Iso4217Currency::INR,
    Iso4217Currency::IQD,
    Iso4217Currency::IRR,
    Iso4217Currency::ISK,
    Iso4217Currency::JMD,
    Iso4217Currency::JOD,
    Iso4217Currency::JPY,
    Iso4217Currency::KES,
    Iso4217Currency::KGS,
    Iso4217Currency::KHR,
    Iso4217Currency::KMF,
    Iso4217Currency::KPW,
    Iso4217Currency::KRW,
    Iso4217Currency::KWD,
    Iso4217Currency::KYD,
    Iso4217Currency::KZT,
    Iso4217Currency::LAK,
    Iso4217Currency::LBP,
    Iso4217Currency::LKR,
    Iso4217Currency::LRD,
    Iso4217Currency::LSL,
    Iso4217Currency::LYD,
    Iso4217Currency::MAD,
    Iso4217Currency::MDL,
    Iso4217Currency::MGA,
    Iso4217Currency::MKD,
    Iso4217Currency::MMK,
    Iso4217Currency::MNT,
    Iso4217Currency::MOP,
    Iso4217Currency::MRU,
    Iso4217Currency::MUR,
    Iso4217Currency::MVR,
    Iso4217Currency::MWK,
    Iso4217Currency::MXN,
    Iso4217Currency::MYR,
    Iso4217Currency::MZN,
    Iso4217Currency::NAD,
    Iso4217Currency::NGN,
    Iso4217Currency::NIO,
    Iso4217Currency::NOK,
    Iso4217Currency::NPR,
    Iso4217Currency::NZD,
    Iso4217Currency::OMR,
    Iso4217Currency::PAB,
    Iso4217Currency::PEN,
    Iso4217Currency::PGK,
    Iso4217Currency::PHP,
    Iso4217Currency::PKR,
    Iso4217Currency::PLN,
    Iso4217Currency::PYG,
    Iso4217Currency::QAR,
    Iso4217Currency::RON,
    Iso4217Currency::RSD,
    Iso4217Currency::RUB,
    Iso4217Currency::RWF,
    Iso4217Currency::SAR,
    Iso4217Currency::SBD,
    Iso4217Currency::SCR,
    Iso4217Currency::SDG,
    Iso4217Currency::SEK,
    Iso4217Currency::SGD,
    Iso4217Currency::SHP,
    Iso4217Currency::SLE,
    Iso4217Currency::SOS,
    Iso4217Currency::SRD,
    Iso4217Currency::SSP,
    Iso4217Currency::STN,
    Iso4217Currency::SVC,
    Iso4217Currency::SYP,
    Iso4217Currency::SZL,
    Iso4217Currency::THB,
    Iso4217Currency::TJS,
    Iso4217Currency::TMT,
    Iso4217Currency::TND,
    Iso4217Currency::TOP,
    Iso4217Currency::TRY,
    Iso4217Currency::TTD,
    Iso4217Currency::TWD,
    Iso4217Currency::TZS,
    Iso4217Currency::UAH,
    Iso4217Currency::UGX,
    Iso4217Currency::USD,
    Iso4217Currency::UYU,
    Iso4217Currency::UZS,
    Iso4217Currency::VED,
    Iso4217Currency::VES,
    Iso4217Currency::VND,
    Iso4217Currency::VUV,
    Iso4217Currency::WST,
    Iso4217Currency::XAF,
    Iso4217Currency::XCD,
    Iso4217Currency::XCG,
    Iso4217Currency::XOF,
    Iso4217Currency::XPF,
    Iso4217Currency::YER,
    Iso4217Currency::ZAR,
    Iso4217Currency::ZMW,
    Iso4217Currency::ZWG,
];
