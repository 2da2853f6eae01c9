//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., quetzales, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display with two decimal places (e.g., `Q8500.00`).
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}{:.2}",
            self.currency_code.symbol(),
            self.amount.round_dp(2)
        )
    }
}

/// ISO 4217 currency codes.
///
/// Catalog prices are quoted in Guatemalan quetzales unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    GTQ,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Currency symbol used in rendered prices.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::GTQ => "Q",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::GTQ => "GTQ",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}
