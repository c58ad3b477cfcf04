mod forecast;
mod history;
mod learning;
mod types;

pub use forecast::{SpecialOutcome, SpecialSituation, compute_scenario, evaluate_special, weeks_to_save};
pub use history::{HistoryConfig, HistoryInsights, generate, insights, tail_window};
pub use learning::{GlossaryEntry, QuestionResult, QuizQuestion, QuizReport, glossary, grade_quiz, quiz_questions};
pub use types::{
    BIKE_COST, BIRTHDAY_GIFT, BalanceTrend, DEFAULT_MONTHS, DEFAULT_SEED, DomainError, GAME_CAUTION_THRESHOLD,
    GAME_COST, MonthlyRecord, STARTING_BALANCE, ScenarioInput, ScenarioResult, SliderSpec, TOY_COST,
    WEEKS_PER_MONTH, sliders,
};
