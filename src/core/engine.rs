use super::catalog::tariffs_for;
use super::types::{
    AllocationEntry, EngineError, FeeBreakdown, PlanSummary, StrategyName, Tariff,
};

/// AGIO rate charged by SSW on its portion of the deposit.
pub const SSW_AGIO_RATE: f64 = 0.035;
/// One VIP increment of the Auvesta portion.
pub const VIP_STEP: f64 = 150_000.0;
/// Flat fee billed per VIP increment.
pub const VIP_UNIT_FEE: f64 = 2_400.0;
/// VIP increments are billed at most this many times.
pub const VIP_CAP: u32 = 6;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MAX_PROJECTION_YEARS: u32 = 30;

// Chart color tokens, carried through to the presentation layer untouched.
const GOLD: &str = "#FFD700";
const SILVER: &str = "#C0C0C0";
const PLATINUM: &str = "#E5E4E2";
const PALLADIUM: &str = "#B9F2FF";
const STRATEGIC: &str = "#4169E1";
const HAFNIUM: &str = "#A9A9A9";
const GALLIUM: &str = "#6495ED";
const INDIUM: &str = "#9370DB";
const GERMANIUM: &str = "#808080";
const TANTALUM: &str = "#708090";

fn entry(label: &'static str, percent: f64, total: f64, color: &'static str) -> AllocationEntry {
    AllocationEntry {
        label,
        percent,
        amount: total * percent / 100.0,
        color,
    }
}

fn ensure_positive(name: &str, amount: f64) -> Result<(), EngineError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(EngineError::InvalidArgument(format!(
            "{name} must be a positive number, got {amount}"
        )));
    }
    Ok(())
}

fn ensure_non_negative(name: &str, value: f64) -> Result<(), EngineError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::InvalidArgument(format!(
            "{name} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Splits `amount` across metals according to the fixed per-strategy table.
///
/// In PRESTIGE the five named strategic metals at 1% each are individually
/// held positions alongside the 40% "Strategic Metals" basket, so all ten
/// lines are disjoint and the percentages sum to exactly 100.
pub fn metal_allocation(
    strategy: StrategyName,
    amount: f64,
) -> Result<Vec<AllocationEntry>, EngineError> {
    ensure_positive("amount", amount)?;
    let split = match strategy {
        StrategyName::Start => vec![
            entry("Gold", 40.0, amount, GOLD),
            entry("Silver", 20.0, amount, SILVER),
            entry("Platinum", 20.0, amount, PLATINUM),
            entry("Palladium", 20.0, amount, PALLADIUM),
        ],
        StrategyName::Balance => vec![
            entry("Gold", 45.0, amount, GOLD),
            entry("Silver", 35.0, amount, SILVER),
            entry("Platinum", 10.0, amount, PLATINUM),
            entry("Palladium", 10.0, amount, PALLADIUM),
        ],
        StrategyName::Foundation | StrategyName::Optimal => vec![
            entry("Gold", 35.0, amount, GOLD),
            entry("Silver", 30.0, amount, SILVER),
            entry("Platinum", 5.0, amount, PLATINUM),
            entry("Palladium", 5.0, amount, PALLADIUM),
            entry("Hafnium", 5.0, amount, HAFNIUM),
            entry("Gallium", 5.0, amount, GALLIUM),
            entry("Indium", 5.0, amount, INDIUM),
            entry("Germanium", 5.0, amount, GERMANIUM),
            entry("Tantalum", 5.0, amount, TANTALUM),
        ],
        StrategyName::Prestige => vec![
            entry("Gold", 25.0, amount, GOLD),
            entry("Silver", 20.0, amount, SILVER),
            entry("Platinum", 5.0, amount, PLATINUM),
            entry("Palladium", 5.0, amount, PALLADIUM),
            entry("Strategic Metals", 40.0, amount, STRATEGIC),
            entry("Hafnium", 1.0, amount, HAFNIUM),
            entry("Gallium", 1.0, amount, GALLIUM),
            entry("Indium", 1.0, amount, INDIUM),
            entry("Germanium", 1.0, amount, GERMANIUM),
            entry("Tantalum", 1.0, amount, TANTALUM),
        ],
    };
    Ok(split)
}

/// Splits `amount` across the custodial components (provider sub-accounts).
pub fn component_allocation(
    strategy: StrategyName,
    amount: f64,
) -> Result<Vec<AllocationEntry>, EngineError> {
    ensure_positive("amount", amount)?;
    let split = match strategy {
        StrategyName::Start => vec![entry("GTS (SSW)", 100.0, amount, GOLD)],
        StrategyName::Balance => vec![
            entry("GTS (SSW)", 50.0, amount, GOLD),
            entry("GR (Auvesta)", 50.0, amount, SILVER),
        ],
        StrategyName::Foundation | StrategyName::Optimal => vec![
            entry("GT (SSW)", 50.0, amount, GOLD),
            entry("GR (Auvesta)", 50.0, amount, SILVER),
        ],
        StrategyName::Prestige => vec![
            entry("GTS (SSW)", 10.0, amount, GOLD),
            entry("GT (SSW)", 20.0, amount, PLATINUM),
            entry("GR (Auvesta)", 30.0, amount, SILVER),
            entry("SMH (SSW)", 40.0, amount, GALLIUM),
        ],
    };
    Ok(split)
}

/// Number of 150,000 EUR increments billed for a VIP-sized Auvesta portion,
/// capped at [`VIP_CAP`].
pub fn vip_multiple(portion: f64) -> u32 {
    ((portion / VIP_STEP).ceil() as u32).min(VIP_CAP)
}

/// Stepped Auvesta AGIO lookup: flat per tariff band below 150,000 EUR,
/// VIP increments above.
fn auvesta_agio(portion: f64) -> f64 {
    if portion < 15_000.0 {
        300.0
    } else if portion < 25_000.0 {
        600.0
    } else if portion < 50_000.0 {
        1_200.0
    } else if portion < 150_000.0 {
        2_400.0
    } else {
        f64::from(vip_multiple(portion)) * VIP_UNIT_FEE
    }
}

/// Computes the tiered AGIO fee. The Auvesta-side (GR) fee is refunded in
/// full as a metal bonus, so it appears both in `initial_fee` and in `bonus`.
pub fn compute_fee(strategy: StrategyName, amount: f64) -> Result<FeeBreakdown, EngineError> {
    ensure_positive("amount", amount)?;

    let (initial_fee, bonus) = match strategy {
        StrategyName::Start => (amount * SSW_AGIO_RATE, 0.0),
        StrategyName::Balance | StrategyName::Foundation | StrategyName::Optimal => {
            let ssw_fee = amount * 0.5 * SSW_AGIO_RATE;
            let auvesta_fee = auvesta_agio(amount * 0.5);
            (ssw_fee + auvesta_fee, auvesta_fee)
        }
        StrategyName::Prestige => {
            let gts_fee = amount * 0.1 * SSW_AGIO_RATE;
            let gt_fee = amount * 0.2 * SSW_AGIO_RATE;
            let gr_fee = f64::from(vip_multiple(amount * 0.3)) * VIP_UNIT_FEE;
            // The SMH component carries no AGIO.
            (gts_fee + gt_fee + gr_fee, gr_fee)
        }
    };

    let effective_fee = initial_fee - bonus;
    Ok(FeeBreakdown {
        initial_fee,
        bonus,
        effective_fee,
        initial_percent: initial_fee / amount * 100.0,
        effective_percent: effective_fee / amount * 100.0,
    })
}

/// Finds the single tariff whose inclusive range contains `amount`. Amounts
/// outside the strategy's own bounds yield `NoMatchingTariff` rather than a
/// fabricated match.
pub fn resolve_tariff(
    strategy: StrategyName,
    amount: f64,
) -> Result<&'static Tariff, EngineError> {
    tariffs_for(strategy)
        .iter()
        .find(|t| t.contains(amount))
        .ok_or(EngineError::NoMatchingTariff { strategy, amount })
}

/// Nominal future total: the initial amount plus weekly purchases over at
/// most [`MAX_PROJECTION_YEARS`] years. No interest or price appreciation.
pub fn project_future_value(
    amount: f64,
    weekly_purchase: f64,
    years: u32,
) -> Result<f64, EngineError> {
    ensure_non_negative("amount", amount)?;
    ensure_non_negative("weekly purchase", weekly_purchase)?;
    let clamped_years = years.min(MAX_PROJECTION_YEARS);
    Ok(amount + weekly_purchase * WEEKS_PER_YEAR * f64::from(clamped_years))
}

/// Runs every engine computation for one input set and bundles the results,
/// mirroring the full recompute the presentation layer does after any input
/// change. A missing tariff is reported as `None`, not an error.
pub fn plan(
    strategy: StrategyName,
    amount: f64,
    purchase: f64,
    years: u32,
) -> Result<PlanSummary, EngineError> {
    let metals = metal_allocation(strategy, amount)?;
    let components = component_allocation(strategy, amount)?;
    let fee = compute_fee(strategy, amount)?;
    let tariff = match resolve_tariff(strategy, amount) {
        Ok(tariff) => Some(tariff),
        Err(EngineError::NoMatchingTariff { .. }) => None,
        Err(err) => return Err(err),
    };
    let projected_total = project_future_value(amount, purchase, years)?;

    Ok(PlanSummary {
        strategy,
        amount,
        purchase,
        years,
        metals,
        components,
        fee,
        tariff,
        annual_purchase: purchase * WEEKS_PER_YEAR,
        activation_total: amount + fee.initial_fee,
        projected_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{strategies, tier};
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn percent_sum(entries: &[AllocationEntry]) -> f64 {
        entries.iter().map(|e| e.percent).sum()
    }

    fn amount_sum(entries: &[AllocationEntry]) -> f64 {
        entries.iter().map(|e| e.amount).sum()
    }

    fn amount_in_tier(name: StrategyName, frac: u32) -> f64 {
        let tier = tier(name);
        tier.min_value + (tier.max_value - tier.min_value) * f64::from(frac) / 10_000.0
    }

    #[test]
    fn start_metal_split_at_minimum_amount() {
        let metals = metal_allocation(StrategyName::Start, 5_000.0).unwrap();
        let expected = [
            ("Gold", 40.0, 2_000.0),
            ("Silver", 20.0, 1_000.0),
            ("Platinum", 20.0, 1_000.0),
            ("Palladium", 20.0, 1_000.0),
        ];
        assert_eq!(metals.len(), expected.len());
        for (entry, (label, percent, amount)) in metals.iter().zip(expected) {
            assert_eq!(entry.label, label);
            assert_approx(entry.percent, percent);
            assert_approx(entry.amount, amount);
        }
    }

    #[test]
    fn start_fee_is_flat_three_and_a_half_percent_with_no_bonus() {
        let fee = compute_fee(StrategyName::Start, 5_000.0).unwrap();
        assert_approx(fee.initial_fee, 175.0);
        assert_approx(fee.bonus, 0.0);
        assert_approx(fee.effective_fee, 175.0);
        assert_approx(fee.initial_percent, 3.5);
        assert_approx(fee.effective_percent, 3.5);
    }

    #[test]
    fn balance_fee_uses_flat_auvesta_band_below_fifteen_thousand() {
        let fee = compute_fee(StrategyName::Balance, 20_000.0).unwrap();
        // 10,000 Auvesta portion lands in the S-3 band.
        assert_approx(fee.initial_fee, 650.0);
        assert_approx(fee.bonus, 300.0);
        assert_approx(fee.effective_fee, 350.0);
    }

    #[test]
    fn balance_fee_steps_through_the_flat_bands() {
        // Band edges are on the Auvesta portion, i.e. half the amount.
        let cases = [
            (29_998.0, 300.0),
            (30_000.0, 600.0),
            (49_998.0, 600.0),
            (50_000.0, 1_200.0),
            (99_998.0, 1_200.0),
            (100_000.0, 2_400.0),
            (299_998.0, 2_400.0),
            (300_000.0, 2_400.0),
        ];
        for (amount, expected_bonus) in cases {
            let fee = compute_fee(StrategyName::Balance, amount).unwrap();
            assert_approx(fee.bonus, expected_bonus);
            assert_approx(fee.effective_fee, amount * 0.5 * SSW_AGIO_RATE);
        }
    }

    #[test]
    fn optimal_fee_bills_one_vip_increment_per_hundred_fifty_thousand() {
        let fee = compute_fee(StrategyName::Optimal, 900_000.0).unwrap();
        // Auvesta portion 450,000 -> 3 increments.
        assert_approx(fee.bonus, 7_200.0);
        assert_approx(fee.initial_fee, 22_950.0);
        assert_approx(fee.effective_fee, 15_750.0);
    }

    #[test]
    fn vip_increments_cap_at_six() {
        let fee = compute_fee(StrategyName::Optimal, 2_000_000.0).unwrap();
        // Auvesta portion 1,000,000 -> ceil = 7, capped to 6.
        assert_approx(fee.bonus, 14_400.0);

        // Stays capped no matter how large the portion grows.
        let fee = compute_fee(StrategyName::Optimal, 50_000_000.0).unwrap();
        assert_approx(fee.bonus, 14_400.0);
        assert_eq!(vip_multiple(50_000_000.0 * 0.5), 6);
    }

    #[test]
    fn prestige_fee_splits_across_four_providers_with_zero_fee_smh() {
        let amount = 3_000_000.0;
        let fee = compute_fee(StrategyName::Prestige, amount).unwrap();
        let gts = amount * 0.1 * SSW_AGIO_RATE;
        let gt = amount * 0.2 * SSW_AGIO_RATE;
        // GR portion 900,000 -> 6 increments.
        let gr = 14_400.0;
        assert_approx(fee.initial_fee, gts + gt + gr);
        assert_approx(fee.bonus, gr);
        assert_approx(fee.effective_fee, gts + gt);
    }

    #[test]
    fn prestige_split_counts_named_strategic_metals_separately_from_basket() {
        // The 40% "Strategic Metals" basket and the five named metals at 1%
        // each are disjoint positions, so all ten lines together account for
        // the full amount.
        let metals = metal_allocation(StrategyName::Prestige, 2_100_000.0).unwrap();
        assert_eq!(metals.len(), 10);
        assert_approx(percent_sum(&metals), 100.0);
        assert_approx(amount_sum(&metals), 2_100_000.0);
        let basket = metals.iter().find(|m| m.label == "Strategic Metals").unwrap();
        assert_approx(basket.percent, 40.0);
    }

    #[test]
    fn component_split_matches_strategy_structure() {
        let single = component_allocation(StrategyName::Start, 8_000.0).unwrap();
        assert_eq!(single.len(), 1);
        assert_approx(single[0].percent, 100.0);
        assert_approx(single[0].amount, 8_000.0);

        let halves = component_allocation(StrategyName::Foundation, 200_000.0).unwrap();
        assert_eq!(
            halves.iter().map(|c| c.label).collect::<Vec<_>>(),
            vec!["GT (SSW)", "GR (Auvesta)"]
        );
        assert_approx(halves[0].amount, 100_000.0);

        let quads = component_allocation(StrategyName::Prestige, 4_000_000.0).unwrap();
        assert_eq!(
            quads.iter().map(|c| c.percent).collect::<Vec<_>>(),
            vec![10.0, 20.0, 30.0, 40.0]
        );
        assert_approx(amount_sum(&quads), 4_000_000.0);
    }

    #[test]
    fn balance_components_use_gts_label_and_foundation_uses_gt() {
        let balance = component_allocation(StrategyName::Balance, 20_000.0).unwrap();
        assert_eq!(balance[0].label, "GTS (SSW)");
        let optimal = component_allocation(StrategyName::Optimal, 800_000.0).unwrap();
        assert_eq!(optimal[0].label, "GT (SSW)");
    }

    #[test]
    fn resolve_tariff_picks_the_containing_sub_range() {
        let tariff = resolve_tariff(StrategyName::Balance, 30_000.0).unwrap();
        assert_eq!(tariff.name, "GTS + GR M-6");
        assert_eq!(tariff.min_value, 30_000.0);

        let tariff = resolve_tariff(StrategyName::Balance, 29_999.0).unwrap();
        assert_eq!(tariff.name, "GTS + GR S-3");
    }

    #[test]
    fn resolve_tariff_rejects_amounts_outside_the_strategy_bounds() {
        let err = resolve_tariff(StrategyName::Balance, 100_000.0).unwrap_err();
        assert_eq!(
            err,
            EngineError::NoMatchingTariff {
                strategy: StrategyName::Balance,
                amount: 100_000.0
            }
        );
        assert!(resolve_tariff(StrategyName::Start, 4_999.0).is_err());
    }

    #[test]
    fn projection_is_a_nominal_sum_with_years_clamped_at_thirty() {
        let total = project_future_value(100_000.0, 2_000.0, 40).unwrap();
        assert_approx(total, 3_220_000.0);
        assert_approx(project_future_value(100_000.0, 2_000.0, 30).unwrap(), total);
        assert_approx(project_future_value(5_000.0, 0.0, 10).unwrap(), 5_000.0);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        assert!(matches!(
            metal_allocation(StrategyName::Start, 0.0),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            component_allocation(StrategyName::Balance, -1.0),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            compute_fee(StrategyName::Optimal, 0.0),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            compute_fee(StrategyName::Optimal, f64::NAN),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            project_future_value(-5.0, 100.0, 10),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            project_future_value(5.0, -100.0, 10),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn plan_bundles_the_individual_computations() {
        let summary = plan(StrategyName::Foundation, 400_000.0, 2_750.0, 20).unwrap();
        assert_eq!(summary.strategy, StrategyName::Foundation);
        assert_eq!(
            summary.metals,
            metal_allocation(StrategyName::Foundation, 400_000.0).unwrap()
        );
        assert_eq!(
            summary.components,
            component_allocation(StrategyName::Foundation, 400_000.0).unwrap()
        );
        let fee = compute_fee(StrategyName::Foundation, 400_000.0).unwrap();
        assert_approx(summary.fee.initial_fee, fee.initial_fee);
        assert_eq!(summary.tariff.unwrap().name, "GT + GR VIP");
        assert_approx(summary.annual_purchase, 2_750.0 * 52.0);
        assert_approx(summary.activation_total, 400_000.0 + fee.initial_fee);
        assert_approx(
            summary.projected_total,
            project_future_value(400_000.0, 2_750.0, 20).unwrap(),
        );
    }

    #[test]
    fn plan_reports_missing_tariff_as_none() {
        let summary = plan(StrategyName::Start, 12_000.0, 100.0, 10).unwrap();
        assert!(summary.tariff.is_none());
        // The rest of the plan is still computed.
        assert_approx(amount_sum(&summary.metals), 12_000.0);
    }

    #[test]
    fn every_tier_midpoint_has_a_plan() {
        for tier in strategies() {
            let amount = (tier.min_value + tier.max_value) / 2.0;
            let purchase = (tier.min_purchase + tier.max_purchase) / 2.0;
            let summary = plan(tier.name, amount, purchase, tier.min_years).unwrap();
            assert!(summary.tariff.is_some(), "{}", tier.name);
            assert!(summary.projected_total >= amount, "{}", tier.name);
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_metal_percentages_sum_to_one_hundred(
            strategy_idx in 0usize..5,
            frac in 0u32..=10_000,
        ) {
            let strategy = StrategyName::ALL[strategy_idx];
            let amount = amount_in_tier(strategy, frac);
            let metals = metal_allocation(strategy, amount).unwrap();
            prop_assert!((percent_sum(&metals) - 100.0).abs() <= EPS);
            prop_assert!((amount_sum(&metals) - amount).abs() <= 1e-4);
        }

        #[test]
        fn prop_component_percentages_sum_to_one_hundred(
            strategy_idx in 0usize..5,
            frac in 0u32..=10_000,
        ) {
            let strategy = StrategyName::ALL[strategy_idx];
            let amount = amount_in_tier(strategy, frac);
            let components = component_allocation(strategy, amount).unwrap();
            prop_assert!((percent_sum(&components) - 100.0).abs() <= EPS);
            prop_assert!((amount_sum(&components) - amount).abs() <= 1e-4);
        }

        #[test]
        fn prop_fee_bonus_never_exceeds_initial_fee(
            strategy_idx in 0usize..5,
            frac in 0u32..=10_000,
        ) {
            let strategy = StrategyName::ALL[strategy_idx];
            let amount = amount_in_tier(strategy, frac);
            let fee = compute_fee(strategy, amount).unwrap();
            prop_assert!(fee.bonus >= 0.0);
            prop_assert!(fee.bonus <= fee.initial_fee + EPS);
            prop_assert!(fee.effective_fee >= -EPS);
            prop_assert!((fee.effective_fee - (fee.initial_fee - fee.bonus)).abs() <= EPS);
            prop_assert!((fee.initial_percent - fee.initial_fee / amount * 100.0).abs() <= EPS);
        }

        #[test]
        fn prop_amounts_inside_a_tier_match_exactly_one_tariff(
            strategy_idx in 0usize..5,
            frac in 0u32..=10_000,
        ) {
            let strategy = StrategyName::ALL[strategy_idx];
            let amount = amount_in_tier(strategy, frac);
            let matches = tariffs_for(strategy)
                .iter()
                .filter(|t| t.contains(amount))
                .count();
            prop_assert_eq!(matches, 1);
            let tariff = resolve_tariff(strategy, amount).unwrap();
            prop_assert!(tariff.contains(amount));
        }

        #[test]
        fn prop_projection_is_monotone_in_every_input(
            amount in 0u32..5_000_000,
            purchase in 0u32..50_000,
            years in 0u32..60,
            amount_bump in 0u32..100_000,
            purchase_bump in 0u32..5_000,
            years_bump in 0u32..10,
        ) {
            let base = project_future_value(
                f64::from(amount), f64::from(purchase), years,
            ).unwrap();
            prop_assert!(
                project_future_value(
                    f64::from(amount + amount_bump), f64::from(purchase), years,
                ).unwrap() >= base
            );
            prop_assert!(
                project_future_value(
                    f64::from(amount), f64::from(purchase + purchase_bump), years,
                ).unwrap() >= base
            );
            prop_assert!(
                project_future_value(
                    f64::from(amount), f64::from(purchase), years + years_bump,
                ).unwrap() >= base
            );
        }

        #[test]
        fn prop_projection_is_constant_past_thirty_years(
            amount in 0u32..5_000_000,
            purchase in 0u32..50_000,
            extra_years in 30u32..120,
        ) {
            let at_thirty = project_future_value(
                f64::from(amount), f64::from(purchase), 30,
            ).unwrap();
            let later = project_future_value(
                f64::from(amount), f64::from(purchase), extra_years,
            ).unwrap();
            prop_assert!((later - at_thirty).abs() <= EPS);
        }

        #[test]
        fn prop_vip_multiple_never_exceeds_the_cap(portion in 1u32..u32::MAX) {
            let count = vip_multiple(f64::from(portion));
            prop_assert!(count >= 1);
            prop_assert!(count <= VIP_CAP);
        }
    }
}
