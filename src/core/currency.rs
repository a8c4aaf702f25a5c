use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the platform settles in.
///
/// `KZ` is the legacy tag the order history uses for the Angolan Kwanza
/// (ISO would be AOA); it is kept as-is because every stored row uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Angolan Kwanza (platform reference currency)
    KZ,
    /// Euro
    EUR,
    /// Mozambican Metical
    MZN,
    /// British Pound
    GBP,
    /// US Dollar
    USD,
    /// Brazilian Real
    BRL,
}

impl Currency {
    /// Parse a stored currency tag. Case-insensitive, whitespace-tolerant.
    ///
    /// Returns `None` for codes outside the closed set; callers fall back
    /// to identity-rate behavior instead of erroring.
    pub fn parse(code: &str) -> Option<Currency> {
        match code.trim().to_uppercase().as_str() {
            "KZ" => Some(Currency::KZ),
            "EUR" => Some(Currency::EUR),
            "MZN" => Some(Currency::MZN),
            "GBP" => Some(Currency::GBP),
            "USD" => Some(Currency::USD),
            "BRL" => Some(Currency::BRL),
            _ => None,
        }
    }

    /// The stored tag for this currency
    pub fn code(&self) -> &'static str {
        match self {
            Currency::KZ => "KZ",
            Currency::EUR => "EUR",
            Currency::MZN => "MZN",
            Currency::GBP => "GBP",
            Currency::USD => "USD",
            Currency::BRL => "BRL",
        }
    }

    /// Display symbol used by the dashboard
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::KZ => "Kz",
            Currency::EUR => "€",
            Currency::MZN => "MT",
            Currency::GBP => "£",
            Currency::USD => "$",
            Currency::BRL => "R$",
        }
    }

    /// Display label for a stored currency tag.
    ///
    /// Unrecognized tags are shown as "Internacional" rather than rejected.
    pub fn label_for(code: &str) -> &'static str {
        match Currency::parse(code) {
            Some(Currency::KZ) => "Kwanza",
            Some(Currency::EUR) => "Euro",
            Some(Currency::MZN) => "Metical",
            Some(Currency::GBP) => "Libra",
            Some(Currency::USD) => "Dólar",
            Some(Currency::BRL) => "Real",
            None => "Internacional",
        }
    }

    /// Fixed approximate exchange rate into Kwanza.
    ///
    /// These are reference rates for dashboard conversions, not settlement
    /// rates. EUR→KZ 1053 is also the rate the historical-data patch in
    /// `modules::orders` re-converts with, so it must not drift.
    pub fn kz_rate(&self) -> Decimal {
        match self {
            Currency::KZ => Decimal::ONE,
            Currency::EUR => Decimal::new(1053, 0),
            Currency::MZN => Decimal::new(14, 0),
            Currency::GBP => Decimal::new(1180, 0),
            Currency::USD => Decimal::new(900, 0),
            Currency::BRL => Decimal::new(160, 0),
        }
    }

    /// Rate into Kwanza for a raw stored tag; unknown tags convert at 1.
    pub fn kz_rate_for(code: &str) -> Decimal {
        Currency::parse(code)
            .map(|c| c.kz_rate())
            .unwrap_or(Decimal::ONE)
    }

    /// Convert an amount between two stored currency tags through the
    /// Kwanza cross rate. Unknown tags behave as rate 1; never panics.
    pub fn convert(amount: Decimal, from: &str, to: &str) -> Decimal {
        let from_rate = Currency::kz_rate_for(from);
        let to_rate = Currency::kz_rate_for(to);
        if from_rate == to_rate {
            return amount;
        }
        amount * from_rate / to_rate
    }

    /// Decimal places used when formatting amounts for display.
    /// Calculation paths keep full precision and never round.
    pub fn scale(&self) -> u32 {
        2
    }

    /// Rounds an amount to display precision
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Formats an amount with the currency symbol for display
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!(
            "{:.width$} {}",
            amount,
            self.symbol(),
            width = self.scale() as usize
        )
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::parse(s).ok_or_else(|| format!("Invalid currency: {}", s))
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
