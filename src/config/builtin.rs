//! The compiled-in historical legal parameter table.
//!
//! Half-year snapshots of Turkish legal parameters from 2021 through 2025:
//! monthly gross minimum wage, severance ceiling, and the wage-income tax
//! bracket ladder of each fiscal year (duplicated across both halves, since
//! brackets change annually while wages and ceilings change twice a year).

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{DeductionRates, FinancialPeriod, TaxBracket, TaxBracketSchedule};

/// Builds a `Decimal` from an integer mantissa and scale.
fn money(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

/// Employee deduction rates, unchanged across the covered history:
/// SGK 14%, unemployment insurance 1%, stamp tax 7.59‰.
fn standard_deductions() -> DeductionRates {
    DeductionRates {
        social_security: money(14, 2),
        unemployment: money(1, 2),
        stamp_tax: money(759, 5),
    }
}

/// Wage-income bracket ladder for one fiscal year.
///
/// All covered years use the 15/20/27/35/40 % rate ladder; only the four
/// finite thresholds (in whole lira) change.
fn brackets(limits: [i64; 4]) -> TaxBracketSchedule {
    let rates = [
        money(15, 2),
        money(20, 2),
        money(27, 2),
        money(35, 2),
        money(40, 2),
    ];

    let mut out = Vec::with_capacity(5);
    for (limit, rate) in limits.iter().zip(rates.iter().copied()) {
        out.push(TaxBracket {
            upper_limit: Some(money(*limit, 0)),
            rate,
        });
    }
    out.push(TaxBracket {
        upper_limit: None,
        rate: rates[4],
    });

    TaxBracketSchedule { brackets: out }
}

/// One half-year period entry.
#[allow(clippy::too_many_arguments)]
fn period(
    name: &str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    minimum_gross_wage: Decimal,
    severance_ceiling: Decimal,
    tax_brackets: TaxBracketSchedule,
) -> FinancialPeriod {
    // The literals below are static and always valid calendar dates.
    let start_date = NaiveDate::from_ymd_opt(start.0, start.1, start.2)
        .unwrap_or(NaiveDate::MIN);
    let end_date = NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap_or(NaiveDate::MAX);

    FinancialPeriod {
        name: name.to_string(),
        start_date,
        end_date,
        minimum_gross_wage,
        severance_ceiling,
        tax_brackets,
        deductions: standard_deductions(),
    }
}

/// The builtin table, sorted ascending and contiguous.
pub(crate) fn builtin_periods() -> Vec<FinancialPeriod> {
    let brackets_2021 = brackets([24_000, 53_000, 190_000, 650_000]);
    let brackets_2022 = brackets([32_000, 70_000, 250_000, 880_000]);
    let brackets_2023 = brackets([70_000, 150_000, 550_000, 1_900_000]);
    let brackets_2024 = brackets([110_000, 230_000, 870_000, 3_000_000]);
    let brackets_2025 = brackets([158_000, 330_000, 1_200_000, 4_300_000]);

    vec![
        period(
            "2021-H1",
            (2021, 1, 1),
            (2021, 6, 30),
            money(357_750, 2),
            money(763_896, 2),
            brackets_2021.clone(),
        ),
        period(
            "2021-H2",
            (2021, 7, 1),
            (2021, 12, 31),
            money(357_750, 2),
            money(828_451, 2),
            brackets_2021,
        ),
        period(
            "2022-H1",
            (2022, 1, 1),
            (2022, 6, 30),
            money(500_400, 2),
            money(1_084_859, 2),
            brackets_2022.clone(),
        ),
        period(
            "2022-H2",
            (2022, 7, 1),
            (2022, 12, 31),
            money(647_100, 2),
            money(1_537_140, 2),
            brackets_2022,
        ),
        period(
            "2023-H1",
            (2023, 1, 1),
            (2023, 6, 30),
            money(1_000_800, 2),
            money(1_998_283, 2),
            brackets_2023.clone(),
        ),
        period(
            "2023-H2",
            (2023, 7, 1),
            (2023, 12, 31),
            money(1_341_450, 2),
            money(2_348_983, 2),
            brackets_2023,
        ),
        period(
            "2024-H1",
            (2024, 1, 1),
            (2024, 6, 30),
            money(2_000_250, 2),
            money(3_505_858, 2),
            brackets_2024.clone(),
        ),
        period(
            "2024-H2",
            (2024, 7, 1),
            (2024, 12, 31),
            money(2_000_250, 2),
            money(4_182_842, 2),
            brackets_2024,
        ),
        period(
            "2025-H1",
            (2025, 1, 1),
            (2025, 6, 30),
            money(2_600_550, 2),
            money(4_665_543, 2),
            brackets_2025.clone(),
        ),
        period(
            "2025-H2",
            (2025, 7, 1),
            (2025, 12, 31),
            money(2_600_550, 2),
            money(5_391_968, 2),
            brackets_2025,
        ),
    ]
}
