use serde::{Deserialize, Serialize};

/// ISO 4217 codes the trip planner accepts. Settlement never nets across
/// currencies, so each code forms its own settlement universe.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CurrencyCode {
    EUR,
    USD,
    GBP,
    CZK,
    PLN,
    CHF,
    SEK,
    AUD,
    CAD,
    JPY,
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CurrencyCode::EUR => "EUR",
            CurrencyCode::USD => "USD",
            CurrencyCode::GBP => "GBP",
            CurrencyCode::CZK => "CZK",
            CurrencyCode::PLN => "PLN",
            CurrencyCode::CHF => "CHF",
            CurrencyCode::SEK => "SEK",
            CurrencyCode::AUD => "AUD",
            CurrencyCode::CAD => "CAD",
            CurrencyCode::JPY => "JPY",
        };
        write!(f, "{}", s)
    }
}
