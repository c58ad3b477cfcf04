use serde::Serialize;
use thiserror::Error;

/// Seed for the sample history; fixed so every session sees the same numbers.
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_MONTHS: u32 = 12;
pub const STARTING_BALANCE: i64 = 1000;

pub const BIRTHDAY_GIFT: i64 = 100;
pub const TOY_COST: i64 = 50;
pub const BIKE_COST: i64 = 200;
pub const GAME_COST: i64 = 60;
pub const GAME_CAUTION_THRESHOLD: i64 = 20;

/// A month is treated as exactly four allowance weeks. Deliberately rough:
/// the whole tool rounds time off the same way the labels round months to
/// 30 days.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// One month of the generated cash-flow history, with its derived columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    pub month: String,
    pub operating_in: i64,
    pub operating_out: i64,
    pub investing_in: i64,
    pub investing_out: i64,
    pub financing_in: i64,
    pub financing_out: i64,
    pub total_in: i64,
    pub total_out: i64,
    pub net_cash_flow: i64,
    pub balance: i64,
}

/// Bounds for one forecaster slider.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SliderSpec {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default: i64,
}

impl SliderSpec {
    pub fn accepts(&self, value: i64) -> bool {
        value >= self.min && value <= self.max && (value - self.min) % self.step == 0
    }
}

/// The eight forecaster sliders, with the same ranges, steps, and defaults
/// the dashboard presents.
pub mod sliders {
    use super::SliderSpec;

    pub const ALLOWANCE: SliderSpec = SliderSpec { min: 0, max: 100, step: 5, default: 20 };
    pub const BIRTHDAY: SliderSpec = SliderSpec { min: 0, max: 200, step: 10, default: 0 };
    pub const CHORES: SliderSpec = SliderSpec { min: 0, max: 50, step: 5, default: 10 };
    pub const OTHER_IN: SliderSpec = SliderSpec { min: 0, max: 200, step: 10, default: 0 };
    pub const TOYS: SliderSpec = SliderSpec { min: 0, max: 100, step: 5, default: 15 };
    pub const SNACKS: SliderSpec = SliderSpec { min: 0, max: 50, step: 1, default: 10 };
    pub const SAVINGS: SliderSpec = SliderSpec { min: 0, max: 100, step: 1, default: 5 };
    pub const OTHER_OUT: SliderSpec = SliderSpec { min: 0, max: 100, step: 5, default: 0 };
}

/// One forecaster scenario: what might come in and go out next month.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScenarioInput {
    pub allowance: i64,
    pub birthday: i64,
    pub chores: i64,
    pub other_in: i64,
    pub toys: i64,
    pub snacks: i64,
    pub savings: i64,
    pub other_out: i64,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            allowance: sliders::ALLOWANCE.default,
            birthday: sliders::BIRTHDAY.default,
            chores: sliders::CHORES.default,
            other_in: sliders::OTHER_IN.default,
            toys: sliders::TOYS.default,
            snacks: sliders::SNACKS.default,
            savings: sliders::SAVINGS.default,
            other_out: sliders::OTHER_OUT.default,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceTrend {
    Grew,
    Shrank,
    Steady,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub total_in: i64,
    pub total_out: i64,
    pub new_balance: i64,
    pub trend: BalanceTrend,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum DomainError {
    #[error("non-positive rate: weekly savings must be greater than zero")]
    NonPositiveRate,
}
