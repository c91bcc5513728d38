use serde::{Deserialize, Serialize};

/// One row of the bundled reference dataset (`assets/used_bikes.csv`).
///
/// Only the categorical columns feed the choice lists; the pricing core
/// takes plain scalars and never looks rows up by key.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BikeRecord {
    pub bike_name: String,
    pub price: f64,
    pub city: String,
    pub kms_driven: f64,
    pub owner: String,
    pub age: u32,
    pub power: f64,
    pub brand: String,
}

/// The bike being quoted, as collected by the estimator form.
///
/// `brand` and `model` are display-only: the pricing formula never reads
/// them. They stay on the listing anyway so the summary panel can echo
/// what the user picked.
#[derive(Clone, Debug, PartialEq)]
pub struct BikeListing {
    pub brand: String,
    pub model: String,
    pub city: String,
    /// Raw owner label as selected; parsed into a tier at pricing time.
    pub owner: String,
    pub kms_driven: f64,
    pub age_years: u32,
    pub power_cc: f64,
}

/// Transaction parameters supplied alongside the listing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransactionContext {
    pub purchase_price: f64,
    /// Broker's cut of the predicted price, in percent (0-100).
    pub brokerage_pct: f64,
}

/// Result of one estimator run. Derived, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceEstimate {
    pub predicted_price: f64,
    pub buyer_profit: f64,
    pub broker_profit: f64,
    pub deal: super::pricing::DealStatus,
}

/// One row of the EMI breakdown table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstallmentPlan {
    pub months: u32,
    pub monthly_payment: f64,
}

/// Loan parameters used when the EMI breakdown is requested.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancingParams {
    /// Nominal annual interest rate in percent.
    pub annual_rate_pct: f64,
}

impl Default for FinancingParams {
    fn default() -> Self {
        Self {
            annual_rate_pct: super::finance::DEFAULT_ANNUAL_RATE_PCT,
        }
    }
}

/// Optional broker card shown next to the quote.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

impl BrokerContact {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}
