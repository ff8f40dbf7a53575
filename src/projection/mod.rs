//! Long-horizon projections: compounding growth and the freedom number

mod compounding;
mod freedom;

pub use compounding::{project_compounding, CompoundingSummary, ProjectionSeries, YearSnapshot};
pub use freedom::{
    project_freedom, project_freedom_capped, FreedomGoal, FreedomPlan, FreedomYear,
    MAX_TIMELINE_YEARS,
};
