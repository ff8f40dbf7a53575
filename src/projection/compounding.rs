//! Appreciation and rent growth compounding over a multi-year horizon

use serde::{Deserialize, Serialize};

/// One year of the compounding projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearSnapshot {
    /// Year index; year 0 holds the unescalated starting values
    pub year: u32,
    pub property_value: f64,
    pub monthly_rent: f64,
    pub annual_rent: f64,
    /// Rent collected from year 1 through this year
    pub cumulative_rent: f64,
    /// Property value plus cumulative rent
    pub total_return: f64,
}

/// Year-indexed projection output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub snapshots: Vec<YearSnapshot>,
}

/// Headline figures for the whole horizon
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompoundingSummary {
    pub initial_value: f64,
    pub final_value: f64,
    pub total_appreciation: f64,
    pub appreciation_pct: f64,
    pub total_rent_collected: f64,
    pub final_monthly_rent: f64,
    pub rent_increase_pct: f64,
    pub total_return: f64,
    pub total_return_pct: f64,
}

impl ProjectionSeries {
    pub fn summary(&self) -> CompoundingSummary {
        let initial_value = self.snapshots.first().map(|s| s.property_value).unwrap_or(0.0);
        let initial_rent = self.snapshots.first().map(|s| s.monthly_rent).unwrap_or(0.0);
        let last = self.snapshots.last();

        let final_value = last.map(|s| s.property_value).unwrap_or(0.0);
        let final_monthly_rent = last.map(|s| s.monthly_rent).unwrap_or(0.0);
        let total_rent_collected = last.map(|s| s.cumulative_rent).unwrap_or(0.0);
        let total_return = last.map(|s| s.total_return).unwrap_or(0.0);

        let pct_of = |delta: f64, base: f64| if base > 0.0 { delta / base * 100.0 } else { 0.0 };

        CompoundingSummary {
            initial_value,
            final_value,
            total_appreciation: final_value - initial_value,
            appreciation_pct: pct_of(final_value - initial_value, initial_value),
            total_rent_collected,
            final_monthly_rent,
            rent_increase_pct: pct_of(final_monthly_rent - initial_rent, initial_rent),
            total_return,
            total_return_pct: pct_of(total_return - initial_value, initial_value),
        }
    }
}

/// Compound a starting value and rent at fixed annual growth rates.
///
/// Pure function of its inputs: a finite series that can be regenerated
/// at any time. Year 0 carries the starting values unescalated; each
/// later year applies both growth rates and banks twelve months of the
/// escalated rent.
pub fn project_compounding(
    initial_value: f64,
    initial_monthly_rent: f64,
    appreciation_rate_pct: f64,
    rent_increase_rate_pct: f64,
    years: u32,
) -> ProjectionSeries {
    let mut snapshots = Vec::with_capacity(years as usize + 1);

    let mut value = initial_value;
    let mut rent = initial_monthly_rent;
    let mut cumulative_rent = 0.0;

    for year in 0..=years {
        if year > 0 {
            value *= 1.0 + appreciation_rate_pct / 100.0;
            rent *= 1.0 + rent_increase_rate_pct / 100.0;
            cumulative_rent += rent * 12.0;
        }

        snapshots.push(YearSnapshot {
            year,
            property_value: value,
            monthly_rent: rent,
            annual_rent: rent * 12.0,
            cumulative_rent,
            total_return: value + cumulative_rent,
        });
    }

    ProjectionSeries { snapshots }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_year_zero_is_unescalated() {
        let series = project_compounding(200_000.0, 2_000.0, 3.0, 2.0, 30);

        let first = &series.snapshots[0];
        assert_eq!(first.year, 0);
        assert_eq!(first.property_value, 200_000.0);
        assert_eq!(first.monthly_rent, 2_000.0);
        assert_eq!(first.cumulative_rent, 0.0);
        assert_eq!(series.snapshots.len(), 31);
    }

    #[test]
    fn test_zero_growth_has_no_drift() {
        let series = project_compounding(200_000.0, 2_000.0, 0.0, 0.0, 25);

        for snapshot in &series.snapshots {
            assert_eq!(snapshot.property_value, 200_000.0);
            assert_eq!(snapshot.monthly_rent, 2_000.0);
        }
        // Rent still accumulates, it just never escalates
        assert_relative_eq!(
            series.snapshots.last().unwrap().cumulative_rent,
            2_000.0 * 12.0 * 25.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_growth_compounds_geometrically() {
        let series = project_compounding(100_000.0, 1_000.0, 3.0, 2.0, 10);

        let last = series.snapshots.last().unwrap();
        assert_relative_eq!(
            last.property_value,
            100_000.0 * 1.03_f64.powi(10),
            max_relative = 1e-10
        );
        assert_relative_eq!(
            last.monthly_rent,
            1_000.0 * 1.02_f64.powi(10),
            max_relative = 1e-10
        );
        assert_relative_eq!(
            last.total_return,
            last.property_value + last.cumulative_rent,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_summary_guards_zero_initial_value() {
        let series = project_compounding(0.0, 0.0, 3.0, 2.0, 10);
        let summary = series.summary();

        assert_eq!(summary.appreciation_pct, 0.0);
        assert_eq!(summary.rent_increase_pct, 0.0);
        assert_eq!(summary.total_return_pct, 0.0);
    }

    #[test]
    fn test_summary_headline_figures() {
        let series = project_compounding(200_000.0, 2_000.0, 3.0, 2.0, 30);
        let summary = series.summary();

        assert_eq!(summary.initial_value, 200_000.0);
        assert_relative_eq!(
            summary.final_value,
            200_000.0 * 1.03_f64.powi(30),
            max_relative = 1e-10
        );
        assert_relative_eq!(
            summary.total_appreciation,
            summary.final_value - 200_000.0,
            max_relative = 1e-12
        );
        assert!(summary.total_return_pct > 0.0);
    }
}
