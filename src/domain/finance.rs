//! EMI (equated monthly installment) math for the financing breakdown.

use thiserror::Error;

use super::entities::InstallmentPlan;

/// Nominal annual interest rate assumed when the user has not overridden
/// it in settings.
pub const DEFAULT_ANNUAL_RATE_PCT: f64 = 10.0;

/// Term lengths offered in the EMI breakdown table.
pub const STANDARD_TERMS: [u32; 4] = [6, 12, 18, 24];

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EmiError {
    #[error("loan term must be at least one month")]
    ZeroTerm,
}

/// Standard annuity formula: r = rate/1200, payment = P*r*(1+r)^n /
/// ((1+r)^n - 1).
///
/// A zero rate would make the denominator vanish, so that case returns
/// the exact zero-interest limit `principal / months` instead.
pub fn monthly_payment(
    principal: f64,
    months: u32,
    annual_rate_pct: f64,
) -> Result<f64, EmiError> {
    if months == 0 {
        return Err(EmiError::ZeroTerm);
    }

    let r = annual_rate_pct / 1_200.0;
    if r == 0.0 {
        return Ok(principal / months as f64);
    }

    let growth = (1.0 + r).powi(months as i32);
    Ok(principal * r * growth / (growth - 1.0))
}

/// Computes one [`InstallmentPlan`] per requested term.
pub fn installment_plans(
    principal: f64,
    terms: &[u32],
    annual_rate_pct: f64,
) -> Result<Vec<InstallmentPlan>, EmiError> {
    terms
        .iter()
        .map(|&months| {
            monthly_payment(principal, months, annual_rate_pct).map(|payment| InstallmentPlan {
                months,
                monthly_payment: payment,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_annuity_formula_reference_value() {
        // r = 10/1200, 12 periods: ~10549.91 per month on 120k.
        let payment = monthly_payment(120_000.0, 12, 10.0).unwrap();
        assert!((payment - 10_549.91).abs() < 0.5, "got {payment}");
    }

    #[test]
    fn zero_interest_degrades_to_straight_division() {
        assert_eq!(monthly_payment(120_000.0, 12, 0.0), Ok(10_000.0));
        assert_eq!(monthly_payment(36_900.0, 6, 0.0), Ok(6_150.0));
    }

    #[test]
    fn zero_term_is_rejected() {
        assert_eq!(monthly_payment(120_000.0, 0, 10.0), Err(EmiError::ZeroTerm));
        assert_eq!(monthly_payment(120_000.0, 0, 0.0), Err(EmiError::ZeroTerm));
    }

    #[test]
    fn payments_shrink_as_terms_stretch() {
        let plans = installment_plans(36_900.0, &STANDARD_TERMS, 10.0).unwrap();
        assert_eq!(
            plans.iter().map(|p| p.months).collect::<Vec<_>>(),
            vec![6, 12, 18, 24]
        );
        for pair in plans.windows(2) {
            assert!(pair[0].monthly_payment > pair[1].monthly_payment);
        }
    }

    #[test]
    fn one_month_term_repays_principal_plus_one_period_of_interest() {
        let payment = monthly_payment(10_000.0, 1, 12.0).unwrap();
        assert!((payment - 10_100.0).abs() < 1e-6);
    }
}
