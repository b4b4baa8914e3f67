mod catalog;
mod engine;
mod types;

pub use catalog::{strategies, tariffs_for, tier};
pub use engine::{
    MAX_PROJECTION_YEARS, SSW_AGIO_RATE, VIP_CAP, VIP_STEP, VIP_UNIT_FEE, WEEKS_PER_YEAR,
    component_allocation, compute_fee, metal_allocation, plan, project_future_value,
    resolve_tariff, vip_multiple,
};
pub use types::{
    AllocationEntry, EngineError, FeeBreakdown, PlanSummary, StrategyName, StrategyTier, Tariff,
};
