//! Domain logic for bike resale pricing lives here.

pub mod app_state;
pub mod catalog;
pub mod entities;
pub mod finance;
pub mod pricing;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState};
#[allow(unused_imports)]
pub use catalog::BikeCatalog;
#[allow(unused_imports)]
pub use entities::{
    BikeListing, BikeRecord, BrokerContact, FinancingParams, InstallmentPlan, PriceEstimate,
    TransactionContext,
};
#[allow(unused_imports)]
pub use finance::{
    installment_plans, monthly_payment, EmiError, DEFAULT_ANNUAL_RATE_PCT, STANDARD_TERMS,
};
#[allow(unused_imports)]
pub use pricing::{
    city_multiplier, estimate_resale_price, quote, DealStatus, OwnerTier, HIGH_VALUE_CITIES,
    PRICE_FLOOR,
};
