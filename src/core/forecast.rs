use serde::Serialize;

use super::types::{
    BIKE_COST, BIRTHDAY_GIFT, BalanceTrend, DomainError, GAME_CAUTION_THRESHOLD, GAME_COST, ScenarioInput,
    ScenarioResult, TOY_COST, WEEKS_PER_MONTH,
};

/// Sums one hypothetical month of slider values against the starting balance.
/// The new balance is allowed to go negative; the dashboard uses that to warn,
/// not to clamp.
pub fn compute_scenario(inputs: &ScenarioInput, starting_balance: i64) -> ScenarioResult {
    let total_in = inputs.allowance + inputs.birthday + inputs.chores + inputs.other_in;
    let total_out = inputs.toys + inputs.snacks + inputs.savings + inputs.other_out;
    let new_balance = starting_balance + total_in - total_out;

    let trend = if new_balance > starting_balance {
        BalanceTrend::Grew
    } else if new_balance < starting_balance {
        BalanceTrend::Shrank
    } else {
        BalanceTrend::Steady
    };

    ScenarioResult {
        total_in,
        total_out,
        new_balance,
        trend,
    }
}

/// Whole weeks of saving `weekly_allowance` needed to reach `target_cost`.
///
/// A zero or negative rate would otherwise divide by zero (the allowance
/// slider sits at 0), so it is reported as a domain error and the caller
/// picks the message.
pub fn weeks_to_save(target_cost: f64, weekly_allowance: f64) -> Result<i64, DomainError> {
    if !weekly_allowance.is_finite() || weekly_allowance <= 0.0 {
        return Err(DomainError::NonPositiveRate);
    }
    Ok((target_cost / weekly_allowance).ceil() as i64)
}

/// The fixed menu of "special money situations".
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SpecialSituation {
    BirthdayWindfall,
    SaveForToy,
    SaveForBicycle,
    BuyVideoGame,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum SpecialOutcome {
    #[serde(rename = "birthday-windfall")]
    BirthdayWindfall { gift: i64, new_balance: i64 },
    #[serde(rename = "save-for-toy")]
    SaveForToy { cost: i64, weeks_to_save: i64 },
    #[serde(rename = "save-for-bicycle")]
    SaveForBicycle { cost: i64, weeks_to_save: i64 },
    #[serde(rename = "buy-video-game")]
    BuyVideoGame { cost: i64, remaining: i64, caution: bool },
}

/// Evaluates one canned situation. `allowance` is the monthly slider value;
/// the saving situations divide it by four to approximate a weekly rate,
/// deliberately ignoring real week counts.
pub fn evaluate_special(
    situation: SpecialSituation,
    starting_balance: i64,
    allowance: i64,
) -> Result<SpecialOutcome, DomainError> {
    let weekly_allowance = allowance as f64 / WEEKS_PER_MONTH;

    match situation {
        SpecialSituation::BirthdayWindfall => Ok(SpecialOutcome::BirthdayWindfall {
            gift: BIRTHDAY_GIFT,
            new_balance: starting_balance + BIRTHDAY_GIFT,
        }),
        SpecialSituation::SaveForToy => Ok(SpecialOutcome::SaveForToy {
            cost: TOY_COST,
            weeks_to_save: weeks_to_save(TOY_COST as f64, weekly_allowance)?,
        }),
        SpecialSituation::SaveForBicycle => Ok(SpecialOutcome::SaveForBicycle {
            cost: BIKE_COST,
            weeks_to_save: weeks_to_save(BIKE_COST as f64, weekly_allowance)?,
        }),
        SpecialSituation::BuyVideoGame => {
            let remaining = starting_balance - GAME_COST;
            Ok(SpecialOutcome::BuyVideoGame {
                cost: GAME_COST,
                remaining,
                caution: remaining < GAME_CAUTION_THRESHOLD,
            })
        }
    }
}
