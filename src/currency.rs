//! Currencies the ECB publishes euro reference rates for

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency enumeration (ISO 4217 codes)
///
/// Covers the symbols the ECB reports euro rates against. The enumeration is
/// a convenience for callers; rate lookups accept any symbol string found in
/// the published document, including ones not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar
    USD,
    /// Japanese Yen
    JPY,
    /// Bulgarian Lev
    BGN,
    /// Czech Koruna
    CZK,
    /// Danish Krone
    DKK,
    /// British Pound Sterling
    GBP,
    /// Hungarian Forint
    HUF,
    /// Polish Zloty
    PLN,
    /// Romanian Leu
    RON,
    /// Swedish Krona
    SEK,
    /// Swiss Franc
    CHF,
    /// Icelandic Krona
    ISK,
    /// Norwegian Krone
    NOK,
    /// Croatian Kuna
    HRK,
    /// Russian Ruble
    RUB,
    /// Turkish Lira
    TRY,
    /// Australian Dollar
    AUD,
    /// Brazilian Real
    BRL,
    /// Canadian Dollar
    CAD,
    /// Chinese Yuan
    CNY,
    /// Hong Kong Dollar
    HKD,
    /// Indonesian Rupiah
    IDR,
    /// Israeli Shekel
    ILS,
    /// Indian Rupee
    INR,
    /// South Korean Won
    KRW,
    /// Mexican Peso
    MXN,
    /// Malaysian Ringgit
    MYR,
    /// New Zealand Dollar
    NZD,
    /// Philippine Peso
    PHP,
    /// Singapore Dollar
    SGD,
    /// Thai Baht
    THB,
    /// South African Rand
    ZAR,
}

impl Currency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::JPY => "JPY",
            Currency::BGN => "BGN",
            Currency::CZK => "CZK",
            Currency::DKK => "DKK",
            Currency::GBP => "GBP",
            Currency::HUF => "HUF",
            Currency::PLN => "PLN",
            Currency::RON => "RON",
            Currency::SEK => "SEK",
            Currency::CHF => "CHF",
            Currency::ISK => "ISK",
            Currency::NOK => "NOK",
            Currency::HRK => "HRK",
            Currency::RUB => "RUB",
            Currency::TRY => "TRY",
            Currency::AUD => "AUD",
            Currency::BRL => "BRL",
            Currency::CAD => "CAD",
            Currency::CNY => "CNY",
            Currency::HKD => "HKD",
            Currency::IDR => "IDR",
            Currency::ILS => "ILS",
            Currency::INR => "INR",
            Currency::KRW => "KRW",
            Currency::MXN => "MXN",
            Currency::MYR => "MYR",
            Currency::NZD => "NZD",
            Currency::PHP => "PHP",
            Currency::SGD => "SGD",
            Currency::THB => "THB",
            Currency::ZAR => "ZAR",
        }
    }

    /// Parse from ISO code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "JPY" => Some(Currency::JPY),
            "BGN" => Some(Currency::BGN),
            "CZK" => Some(Currency::CZK),
            "DKK" => Some(Currency::DKK),
            "GBP" => Some(Currency::GBP),
            "HUF" => Some(Currency::HUF),
            "PLN" => Some(Currency::PLN),
            "RON" => Some(Currency::RON),
            "SEK" => Some(Currency::SEK),
            "CHF" => Some(Currency::CHF),
            "ISK" => Some(Currency::ISK),
            "NOK" => Some(Currency::NOK),
            "HRK" => Some(Currency::HRK),
            "RUB" => Some(Currency::RUB),
            "TRY" => Some(Currency::TRY),
            "AUD" => Some(Currency::AUD),
            "BRL" => Some(Currency::BRL),
            "CAD" => Some(Currency::CAD),
            "CNY" => Some(Currency::CNY),
            "HKD" => Some(Currency::HKD),
            "IDR" => Some(Currency::IDR),
            "ILS" => Some(Currency::ILS),
            "INR" => Some(Currency::INR),
            "KRW" => Some(Currency::KRW),
            "MXN" => Some(Currency::MXN),
            "MYR" => Some(Currency::MYR),
            "NZD" => Some(Currency::NZD),
            "PHP" => Some(Currency::PHP),
            "SGD" => Some(Currency::SGD),
            "THB" => Some(Currency::THB),
            "ZAR" => Some(Currency::ZAR),
            _ => None,
        }
    }

    /// Get all currencies the ECB reports against the euro
    pub fn all() -> Vec<Currency> {
        vec![
            Currency::USD,
            Currency::JPY,
            Currency::BGN,
            Currency::CZK,
            Currency::DKK,
            Currency::GBP,
            Currency::HUF,
            Currency::PLN,
            Currency::RON,
            Currency::SEK,
            Currency::CHF,
            Currency::ISK,
            Currency::NOK,
            Currency::HRK,
            Currency::RUB,
            Currency::TRY,
            Currency::AUD,
            Currency::BRL,
            Currency::CAD,
            Currency::CNY,
            Currency::HKD,
            Currency::IDR,
            Currency::ILS,
            Currency::INR,
            Currency::KRW,
            Currency::MXN,
            Currency::MYR,
            Currency::NZD,
            Currency::PHP,
            Currency::SGD,
            Currency::THB,
            Currency::ZAR,
        ]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
