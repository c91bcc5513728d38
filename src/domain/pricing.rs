//! Deterministic resale pricing for used bikes.
//!
//! The estimator is a fixed linear combination of multipliers and
//! penalties. It is total over all finite numeric inputs: range checks
//! (non-negative kms, bounded age, positive purchase price) belong to the
//! form layer, not here.

use super::entities::{BikeListing, PriceEstimate, TransactionContext};

/// Predicted prices never drop below this, no matter how worn the bike is.
pub const PRICE_FLOOR: f64 = 5_000.0;

/// Straight-line depreciation per year of age, as a fraction of the
/// original purchase price.
pub const DEPRECIATION_RATE_PER_YEAR: f64 = 0.08;

/// Flat penalty applied per 10,000 km on the odometer.
pub const USAGE_PENALTY_PER_10K_KM: f64 = 3_000.0;

/// Premium per cc of engine displacement.
pub const POWER_BONUS_PER_CC: f64 = 50.0;

/// Cities with a hotter resale market. Membership is an exact,
/// case-sensitive match; "mumbai" is not "Mumbai".
pub const HIGH_VALUE_CITIES: [&str; 5] =
    ["Mumbai", "Delhi", "Bangalore", "Hyderabad", "Chennai"];

const HIGH_VALUE_CITY_MULTIPLIER: f64 = 1.05;

const EXCELLENT_PROFIT_THRESHOLD: f64 = 15_000.0;
const FAIR_PROFIT_THRESHOLD: f64 = 5_000.0;

/// How many hands the bike has passed through, used as a trust/condition
/// proxy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OwnerTier {
    First,
    Second,
    Third,
    /// Anything we do not recognise. Deliberately gets the lowest-trust
    /// multiplier instead of an error so pricing stays total over
    /// arbitrary dataset labels.
    #[default]
    Other,
}

impl OwnerTier {
    /// Total parse: known words match case-insensitively, everything else
    /// (including "Fourth & Above" style dataset labels) is `Other`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "first" => OwnerTier::First,
            "second" => OwnerTier::Second,
            "third" => OwnerTier::Third,
            _ => OwnerTier::Other,
        }
    }

    /// Explicit total mapping, one arm per tier, so the
    /// unknown-defaults-to-lowest behaviour stays visible.
    pub fn multiplier(self) -> f64 {
        match self {
            OwnerTier::First => 1.00,
            OwnerTier::Second => 0.95,
            OwnerTier::Third => 0.90,
            OwnerTier::Other => 0.85,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OwnerTier::First => "First",
            OwnerTier::Second => "Second",
            OwnerTier::Third => "Third",
            OwnerTier::Other => "Other",
        }
    }
}

pub fn city_multiplier(city: &str) -> f64 {
    if HIGH_VALUE_CITIES.contains(&city) {
        HIGH_VALUE_CITY_MULTIPLIER
    } else {
        1.0
    }
}

/// Core pricing formula.
///
/// raw = price * owner_mult * city_mult
///       - price * 0.08 * age
///       - (kms / 10000) * 3000
///       + cc * 50
///
/// floored at [`PRICE_FLOOR`]. No validation and no clamping: negative
/// kms or age are computed literally.
pub fn estimate_resale_price(
    purchase_price: f64,
    city: &str,
    owner: OwnerTier,
    kms_driven: f64,
    age_years: f64,
    power_cc: f64,
) -> f64 {
    let depreciation = purchase_price * DEPRECIATION_RATE_PER_YEAR * age_years;
    let usage_penalty = (kms_driven / 10_000.0) * USAGE_PENALTY_PER_10K_KM;
    let power_bonus = power_cc * POWER_BONUS_PER_CC;

    let raw = purchase_price * owner.multiplier() * city_multiplier(city)
        - depreciation
        - usage_penalty
        + power_bonus;

    raw.max(PRICE_FLOOR)
}

/// Three-way qualitative label derived from the buyer's profit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealStatus {
    Excellent,
    Fair,
    Overpriced,
}

impl DealStatus {
    /// Thresholds are strict: a profit of exactly 15000 is Fair and
    /// exactly 5000 is Overpriced.
    pub fn from_profit(profit: f64) -> Self {
        if profit > EXCELLENT_PROFIT_THRESHOLD {
            DealStatus::Excellent
        } else if profit > FAIR_PROFIT_THRESHOLD {
            DealStatus::Fair
        } else {
            DealStatus::Overpriced
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DealStatus::Excellent => "Excellent Deal",
            DealStatus::Fair => "Fair Deal",
            DealStatus::Overpriced => "Overpriced",
        }
    }
}

/// Runs the estimator and derives the transaction-level figures the
/// result panels need: buyer profit, broker cut and the deal label.
pub fn quote(listing: &BikeListing, ctx: &TransactionContext) -> PriceEstimate {
    let predicted_price = estimate_resale_price(
        ctx.purchase_price,
        &listing.city,
        OwnerTier::parse(&listing.owner),
        listing.kms_driven,
        listing.age_years as f64,
        listing.power_cc,
    );
    let buyer_profit = predicted_price - ctx.purchase_price;
    let broker_profit = predicted_price * (ctx.brokerage_pct / 100.0);

    PriceEstimate {
        predicted_price,
        buyer_profit,
        broker_profit,
        deal: DealStatus::from_profit(buyer_profit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(city: &str, owner: &str, kms: f64, age: u32, power: f64) -> BikeListing {
        BikeListing {
            brand: "Royal Enfield".to_string(),
            model: "Classic 350".to_string(),
            city: city.to_string(),
            owner: owner.to_string(),
            kms_driven: kms,
            age_years: age,
            power_cc: power,
        }
    }

    #[test]
    fn reference_scenario_matches_hand_computation() {
        // 40000 * 1.0 * 1.05 - 9600 - 3000 + 7500 = 36900
        let estimate = quote(
            &listing("Mumbai", "First", 10_000.0, 3, 150.0),
            &TransactionContext {
                purchase_price: 40_000.0,
                brokerage_pct: 5.0,
            },
        );
        assert!((estimate.predicted_price - 36_900.0).abs() < 1e-9);
        assert!((estimate.buyer_profit - (-3_100.0)).abs() < 1e-9);
        assert!((estimate.broker_profit - 1_845.0).abs() < 1e-9);
        assert_eq!(estimate.deal, DealStatus::Overpriced);
    }

    #[test]
    fn known_owner_labels_match_case_insensitively() {
        assert_eq!(OwnerTier::parse("first"), OwnerTier::First);
        assert_eq!(OwnerTier::parse("FIRST"), OwnerTier::First);
        assert_eq!(OwnerTier::parse(" Second "), OwnerTier::Second);
        assert_eq!(OwnerTier::parse("tHiRd"), OwnerTier::Third);
    }

    #[test]
    fn unknown_owner_labels_fall_back_to_lowest_multiplier() {
        for label in ["", "Fourth & Above", "unknown", "1st", "owner"] {
            assert_eq!(OwnerTier::parse(label), OwnerTier::Other, "{label:?}");
            assert!((OwnerTier::parse(label).multiplier() - 0.85).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn city_bonus_is_exact_match_only() {
        assert!((city_multiplier("Mumbai") - 1.05).abs() < f64::EPSILON);
        assert!((city_multiplier("mumbai") - 1.0).abs() < f64::EPSILON);
        assert!((city_multiplier("MUMBAI") - 1.0).abs() < f64::EPSILON);
        assert!((city_multiplier("Pune") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn predicted_price_never_drops_below_floor() {
        let worn = estimate_resale_price(
            20_000.0,
            "Pune",
            OwnerTier::Other,
            500_000.0,
            20.0,
            50.0,
        );
        assert!((worn - PRICE_FLOOR).abs() < f64::EPSILON);
    }

    #[test]
    fn estimate_is_monotone_in_power_age_and_kms() {
        let base = estimate_resale_price(80_000.0, "Delhi", OwnerTier::First, 8_000.0, 2.0, 200.0);
        let more_power =
            estimate_resale_price(80_000.0, "Delhi", OwnerTier::First, 8_000.0, 2.0, 350.0);
        let older = estimate_resale_price(80_000.0, "Delhi", OwnerTier::First, 8_000.0, 6.0, 200.0);
        let more_kms =
            estimate_resale_price(80_000.0, "Delhi", OwnerTier::First, 30_000.0, 2.0, 200.0);

        assert!(more_power >= base);
        assert!(older <= base);
        assert!(more_kms <= base);
    }

    #[test]
    fn negative_usage_inputs_are_computed_literally() {
        // Negative kms turn the penalty into a bonus; the formula does not
        // clamp, the form layer does.
        let negative_kms =
            estimate_resale_price(40_000.0, "Pune", OwnerTier::First, -10_000.0, 0.0, 100.0);
        assert!((negative_kms - (40_000.0 + 3_000.0 + 5_000.0)).abs() < 1e-9);
    }

    #[test]
    fn deal_thresholds_are_strict() {
        assert_eq!(DealStatus::from_profit(15_001.0), DealStatus::Excellent);
        assert_eq!(DealStatus::from_profit(15_000.0), DealStatus::Fair);
        assert_eq!(DealStatus::from_profit(5_001.0), DealStatus::Fair);
        assert_eq!(DealStatus::from_profit(5_000.0), DealStatus::Overpriced);
        assert_eq!(DealStatus::from_profit(-3_100.0), DealStatus::Overpriced);
    }
}
