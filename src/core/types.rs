use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The five deposit-size brackets, ascending by their amount range.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StrategyName {
    Start,
    Balance,
    Foundation,
    Optimal,
    Prestige,
}

impl StrategyName {
    pub const ALL: [StrategyName; 5] = [
        StrategyName::Start,
        StrategyName::Balance,
        StrategyName::Foundation,
        StrategyName::Optimal,
        StrategyName::Prestige,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyName::Start => "START",
            StrategyName::Balance => "BALANCE",
            StrategyName::Foundation => "FOUNDATION",
            StrategyName::Optimal => "OPTIMAL",
            StrategyName::Prestige => "PRESTIGE",
        }
    }
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyName {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "START" => Ok(StrategyName::Start),
            "BALANCE" => Ok(StrategyName::Balance),
            "FOUNDATION" => Ok(StrategyName::Foundation),
            "OPTIMAL" => Ok(StrategyName::Optimal),
            "PRESTIGE" => Ok(StrategyName::Prestige),
            other => Err(EngineError::InvalidArgument(format!(
                "unknown strategy name: {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyTier {
    pub name: StrategyName,
    pub min_value: f64,
    pub max_value: f64,
    pub min_purchase: f64,
    pub max_purchase: f64,
    pub min_years: u32,
    pub max_years: u32,
    pub step: f64,
    pub purchase_step: f64,
    pub description: &'static str,
    pub years_description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    pub name: &'static str,
    pub min_value: f64,
    pub max_value: f64,
    pub agio: &'static str,
    pub metals: &'static str,
    pub storage: &'static str,
    pub advantages: &'static [&'static str],
    pub details: &'static str,
}

impl Tariff {
    pub fn contains(&self, amount: f64) -> bool {
        self.min_value <= amount && amount <= self.max_value
    }
}

/// One line of a metal or component split. `amount` carries full `f64`
/// precision; rounding happens only at display time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub label: &'static str,
    pub percent: f64,
    pub amount: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub initial_fee: f64,
    pub bonus: f64,
    pub effective_fee: f64,
    pub initial_percent: f64,
    pub effective_percent: f64,
}

/// Everything the presentation layer needs for one input set, assembled by
/// `plan` from the individual engine calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub strategy: StrategyName,
    pub amount: f64,
    pub purchase: f64,
    pub years: u32,
    pub metals: Vec<AllocationEntry>,
    pub components: Vec<AllocationEntry>,
    pub fee: FeeBreakdown,
    pub tariff: Option<&'static Tariff>,
    pub annual_purchase: f64,
    pub activation_total: f64,
    pub projected_total: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("no {strategy} tariff covers an amount of {amount}")]
    NoMatchingTariff { strategy: StrategyName, amount: f64 },
}
