//! Freedom number math: how many properties close the income gap, and when

use serde::{Deserialize, Serialize};

/// Display bound on the year-by-year timeline. A goal that takes longer
/// still reports its true `years_to_freedom`; only the timeline rows are
/// truncated. Callers wanting a different bound use
/// [`project_freedom_capped`].
pub const MAX_TIMELINE_YEARS: u32 = 20;

/// The income goal and acquisition pace
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FreedomGoal {
    pub desired_monthly_income: f64,
    pub avg_cash_flow_per_property: f64,
    pub current_properties: u32,
    /// Properties acquired per year; fractional rates are allowed
    pub acquisition_rate_per_year: f64,
}

/// One year on the road to the income goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreedomYear {
    pub year: u32,
    /// Portfolio size, capped at the properties needed
    pub properties: f64,
    pub monthly_income: f64,
    /// Share of the income goal reached, capped at 100
    pub progress_pct: f64,
}

/// The computed plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreedomPlan {
    pub properties_needed: u32,
    pub additional_properties_needed: u32,
    /// `f64::INFINITY` when nothing is being acquired
    pub years_to_freedom: f64,
    pub current_monthly_income: f64,
    pub income_gap: f64,
    pub progress_pct: f64,
    pub timeline: Vec<FreedomYear>,
}

/// Plan the portfolio needed to hit a monthly income goal.
///
/// Returns `None` when the average cash flow per property is not
/// positive: no portfolio size can ever satisfy the goal, and dividing by
/// it would be meaningless.
pub fn project_freedom(goal: &FreedomGoal) -> Option<FreedomPlan> {
    project_freedom_capped(goal, MAX_TIMELINE_YEARS)
}

/// Same as [`project_freedom`] with an explicit timeline bound
pub fn project_freedom_capped(goal: &FreedomGoal, max_timeline_years: u32) -> Option<FreedomPlan> {
    if goal.avg_cash_flow_per_property <= 0.0 {
        return None;
    }

    let properties_needed =
        (goal.desired_monthly_income / goal.avg_cash_flow_per_property).ceil() as u32;
    let additional_properties_needed = properties_needed.saturating_sub(goal.current_properties);

    let years_to_freedom = if additional_properties_needed == 0 {
        0.0
    } else if goal.acquisition_rate_per_year > 0.0 {
        (additional_properties_needed as f64 / goal.acquisition_rate_per_year).ceil()
    } else {
        f64::INFINITY
    };

    let current_monthly_income = goal.current_properties as f64 * goal.avg_cash_flow_per_property;
    let income_gap = goal.desired_monthly_income - current_monthly_income;

    let progress = |income: f64| {
        if goal.desired_monthly_income > 0.0 {
            (income / goal.desired_monthly_income * 100.0).min(100.0)
        } else {
            100.0
        }
    };

    let needed = properties_needed as f64;
    let mut timeline = Vec::new();
    let mut properties = goal.current_properties as f64;

    for year in 0..=max_timeline_years {
        let held = properties.min(needed);
        let income = held * goal.avg_cash_flow_per_property;
        timeline.push(FreedomYear {
            year,
            properties: held,
            monthly_income: income,
            progress_pct: progress(income),
        });

        if held >= needed {
            break;
        }
        properties += goal.acquisition_rate_per_year;
    }

    Some(FreedomPlan {
        properties_needed,
        additional_properties_needed,
        years_to_freedom,
        current_monthly_income,
        income_gap,
        progress_pct: progress(current_monthly_income),
        timeline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_example() {
        // 10k/mo at 500 per property, starting from zero, two per year
        let plan = project_freedom(&FreedomGoal {
            desired_monthly_income: 10_000.0,
            avg_cash_flow_per_property: 500.0,
            current_properties: 0,
            acquisition_rate_per_year: 2.0,
        })
        .unwrap();

        assert_eq!(plan.properties_needed, 20);
        assert_eq!(plan.additional_properties_needed, 20);
        assert_eq!(plan.years_to_freedom, 10.0);

        // Year 0 empty portfolio, year 10 at the goal
        assert_eq!(plan.timeline.len(), 11);
        assert_eq!(plan.timeline[0].properties, 0.0);
        let last = plan.timeline.last().unwrap();
        assert_eq!(last.properties, 20.0);
        assert_eq!(last.monthly_income, 10_000.0);
        assert_eq!(last.progress_pct, 100.0);
    }

    #[test]
    fn test_non_positive_cash_flow_is_none() {
        let goal = FreedomGoal {
            desired_monthly_income: 10_000.0,
            avg_cash_flow_per_property: 0.0,
            current_properties: 0,
            acquisition_rate_per_year: 2.0,
        };
        assert!(project_freedom(&goal).is_none());

        let negative = FreedomGoal {
            avg_cash_flow_per_property: -100.0,
            ..goal
        };
        assert!(project_freedom(&negative).is_none());
    }

    #[test]
    fn test_zero_acquisition_rate_sentinel() {
        let plan = project_freedom(&FreedomGoal {
            desired_monthly_income: 5_000.0,
            avg_cash_flow_per_property: 500.0,
            current_properties: 2,
            acquisition_rate_per_year: 0.0,
        })
        .unwrap();

        assert!(plan.years_to_freedom.is_infinite());
        // Timeline stays flat up to the display bound
        assert_eq!(plan.timeline.len(), (MAX_TIMELINE_YEARS + 1) as usize);
        assert!(plan.timeline.iter().all(|y| y.properties == 2.0));
    }

    #[test]
    fn test_already_at_goal() {
        let plan = project_freedom(&FreedomGoal {
            desired_monthly_income: 1_000.0,
            avg_cash_flow_per_property: 500.0,
            current_properties: 4,
            acquisition_rate_per_year: 1.0,
        })
        .unwrap();

        assert_eq!(plan.properties_needed, 2);
        assert_eq!(plan.additional_properties_needed, 0);
        assert_eq!(plan.years_to_freedom, 0.0);
        assert_eq!(plan.progress_pct, 100.0);
        assert_eq!(plan.timeline.len(), 1);
    }

    #[test]
    fn test_timeline_respects_display_bound() {
        // One property a year toward 40 needed: capped well short of goal
        let plan = project_freedom(&FreedomGoal {
            desired_monthly_income: 20_000.0,
            avg_cash_flow_per_property: 500.0,
            current_properties: 0,
            acquisition_rate_per_year: 1.0,
        })
        .unwrap();

        assert_eq!(plan.properties_needed, 40);
        assert_eq!(plan.years_to_freedom, 40.0);
        assert_eq!(plan.timeline.len(), (MAX_TIMELINE_YEARS + 1) as usize);

        // A wider bound shows the whole path
        let full = project_freedom_capped(
            &FreedomGoal {
                desired_monthly_income: 20_000.0,
                avg_cash_flow_per_property: 500.0,
                current_properties: 0,
                acquisition_rate_per_year: 1.0,
            },
            50,
        )
        .unwrap();
        assert_eq!(full.timeline.len(), 41);
        assert_eq!(full.timeline.last().unwrap().progress_pct, 100.0);
    }

    #[test]
    fn test_fractional_acquisition_rate() {
        let plan = project_freedom(&FreedomGoal {
            desired_monthly_income: 2_000.0,
            avg_cash_flow_per_property: 500.0,
            current_properties: 0,
            acquisition_rate_per_year: 1.5,
        })
        .unwrap();

        // 4 properties at 1.5/year: third year tips past the goal
        assert_eq!(plan.properties_needed, 4);
        assert_eq!(plan.years_to_freedom, 3.0);
    }
}
