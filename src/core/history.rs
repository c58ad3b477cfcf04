use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::types::{DEFAULT_MONTHS, DEFAULT_SEED, MonthlyRecord, STARTING_BALANCE};

const OPERATING_IN: (i64, i64) = (800, 1200);
const OPERATING_OUT: (i64, i64) = (700, 1100);
const INVESTING_IN: (i64, i64) = (100, 300);
const INVESTING_OUT: (i64, i64) = (200, 500);
const FINANCING_IN: (i64, i64) = (100, 400);
const FINANCING_OUT: (i64, i64) = (200, 400);

/// Month labels step back exactly 30 days, not calendar months. The labels
/// drift against real calendars over a year; that approximation is part of
/// the tool's documented behaviour.
const DAYS_PER_MONTH: i64 = 30;

/// Everything the sample-history generator needs, built once at startup and
/// passed down by the caller.
#[derive(Debug, Clone, Copy)]
pub struct HistoryConfig {
    pub months: u32,
    pub seed: u64,
    pub starting_balance: i64,
    pub today: NaiveDate,
}

impl HistoryConfig {
    pub fn new(months: u32, seed: u64) -> Self {
        Self {
            months,
            seed,
            starting_balance: STARTING_BALANCE,
            today: Local::now().date_naive(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MONTHS, DEFAULT_SEED)
    }
}

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        // xorshift64* locks up on a zero state.
        let state = if seed == 0 { 0xA5A5_A5A5_A5A5_A5A5 } else { seed };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform draw from the half-open range [lo, hi).
    fn next_range(&mut self, range: (i64, i64)) -> i64 {
        let (lo, hi) = range;
        debug_assert!(lo < hi);
        lo + (self.next_u64() % (hi - lo) as u64) as i64
    }
}

/// Generates the seeded monthly history, oldest month first.
///
/// The running balance starts at `starting_balance` and the first month's net
/// flow is not applied to it; only months after the first move the balance.
/// That matches the published example outputs, so it stays.
pub fn generate(config: &HistoryConfig) -> Vec<MonthlyRecord> {
    let mut rng = Rng::new(config.seed);
    let mut records = Vec::with_capacity(config.months as usize);
    let mut balance = config.starting_balance;

    for i in 0..config.months {
        let months_back = (config.months - 1 - i) as i64;
        let date = config.today - chrono::Duration::days(DAYS_PER_MONTH * months_back);

        let operating_in = rng.next_range(OPERATING_IN);
        let operating_out = rng.next_range(OPERATING_OUT);
        let investing_in = rng.next_range(INVESTING_IN);
        let investing_out = rng.next_range(INVESTING_OUT);
        let financing_in = rng.next_range(FINANCING_IN);
        let financing_out = rng.next_range(FINANCING_OUT);

        let total_in = operating_in + investing_in + financing_in;
        let total_out = operating_out + investing_out + financing_out;
        let net_cash_flow = total_in - total_out;
        if i > 0 {
            balance += net_cash_flow;
        }

        records.push(MonthlyRecord {
            month: date.format("%b %Y").to_string(),
            operating_in,
            operating_out,
            investing_in,
            investing_out,
            financing_in,
            financing_out,
            total_in,
            total_out,
            net_cash_flow,
            balance,
        });
    }

    records
}

/// The last `months` records of the series; the whole series when the window
/// is at least as long as it.
pub fn tail_window(records: &[MonthlyRecord], months: u32) -> &[MonthlyRecord] {
    let keep = (months as usize).min(records.len());
    &records[records.len() - keep..]
}

/// Headline facts the dashboard's "money detective" panel shows about a
/// window of history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryInsights {
    pub positive_months: u32,
    pub negative_months: u32,
    pub best_month: Option<String>,
    pub worst_month: Option<String>,
}

/// Ties go to the earliest month, matching a first-index argmax/argmin.
pub fn insights(records: &[MonthlyRecord]) -> HistoryInsights {
    let mut positive_months = 0;
    let mut negative_months = 0;
    let mut best: Option<(i64, &str)> = None;
    let mut worst: Option<(i64, &str)> = None;

    for record in records {
        if record.net_cash_flow > 0 {
            positive_months += 1;
        } else if record.net_cash_flow < 0 {
            negative_months += 1;
        }

        if best.is_none_or(|(net, _)| record.net_cash_flow > net) {
            best = Some((record.net_cash_flow, &record.month));
        }
        if worst.is_none_or(|(net, _)| record.net_cash_flow < net) {
            worst = Some((record.net_cash_flow, &record.month));
        }
    }

    HistoryInsights {
        positive_months,
        negative_months,
        best_month: best.map(|(_, month)| month.to_string()),
        worst_month: worst.map(|(_, month)| month.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{any, prop_assert, prop_assert_eq, proptest};

    fn fixed_config(months: u32, seed: u64) -> HistoryConfig {
        HistoryConfig {
            months,
            seed,
            starting_balance: STARTING_BALANCE,
            today: NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date"),
        }
    }

    fn record(month: &str, net_cash_flow: i64) -> MonthlyRecord {
        MonthlyRecord {
            month: month.to_string(),
            operating_in: 0,
            operating_out: 0,
            investing_in: 0,
            investing_out: 0,
            financing_in: 0,
            financing_out: 0,
            total_in: net_cash_flow.max(0),
            total_out: (-net_cash_flow).max(0),
            net_cash_flow,
            balance: 0,
        }
    }

    #[test]
    fn zero_months_yields_empty_series() {
        assert!(generate(&fixed_config(0, DEFAULT_SEED)).is_empty());
    }

    #[test]
    fn same_seed_yields_identical_series() {
        let config = fixed_config(12, DEFAULT_SEED);
        assert_eq!(generate(&config), generate(&config));
    }

    #[test]
    fn labels_step_back_thirty_days_oldest_first() {
        let records = generate(&fixed_config(3, DEFAULT_SEED));
        let labels: Vec<&str> = records.iter().map(|r| r.month.as_str()).collect();
        // 2026-03-15 minus 60 and 30 days.
        assert_eq!(labels, ["Jan 2026", "Feb 2026", "Mar 2026"]);
    }

    #[test]
    fn first_month_balance_is_starting_balance() {
        let records = generate(&fixed_config(12, DEFAULT_SEED));
        assert_eq!(records[0].balance, STARTING_BALANCE);
    }

    #[test]
    fn tail_window_keeps_last_months() {
        let records = generate(&fixed_config(12, DEFAULT_SEED));
        let window = tail_window(&records, 6);
        assert_eq!(window.len(), 6);
        assert_eq!(window[5], records[11]);
        assert_eq!(tail_window(&records, 40).len(), 12);
        assert!(tail_window(&records, 0).is_empty());
    }

    #[test]
    fn insights_count_and_pick_extremes() {
        let records = vec![
            record("Jan 2026", 50),
            record("Feb 2026", -30),
            record("Mar 2026", 0),
            record("Apr 2026", 120),
            record("May 2026", -90),
        ];
        let facts = insights(&records);
        assert_eq!(facts.positive_months, 2);
        assert_eq!(facts.negative_months, 2);
        assert_eq!(facts.best_month.as_deref(), Some("Apr 2026"));
        assert_eq!(facts.worst_month.as_deref(), Some("May 2026"));
    }

    #[test]
    fn insights_ties_go_to_the_earliest_month() {
        let records = vec![record("Jan 2026", 10), record("Feb 2026", 10)];
        let facts = insights(&records);
        assert_eq!(facts.best_month.as_deref(), Some("Jan 2026"));
        assert_eq!(facts.worst_month.as_deref(), Some("Jan 2026"));
    }

    #[test]
    fn insights_of_empty_window_have_no_extremes() {
        let facts = insights(&[]);
        assert_eq!(facts.positive_months, 0);
        assert_eq!(facts.negative_months, 0);
        assert_eq!(facts.best_month, None);
        assert_eq!(facts.worst_month, None);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn series_has_requested_length(seed in any::<u64>(), months in 0u32..40) {
            let records = generate(&fixed_config(months, seed));
            prop_assert_eq!(records.len(), months as usize);
        }

        #[test]
        fn category_draws_stay_in_their_ranges(seed in any::<u64>()) {
            for record in generate(&fixed_config(24, seed)) {
                prop_assert!((800..1200).contains(&record.operating_in));
                prop_assert!((700..1100).contains(&record.operating_out));
                prop_assert!((100..300).contains(&record.investing_in));
                prop_assert!((200..500).contains(&record.investing_out));
                prop_assert!((100..400).contains(&record.financing_in));
                prop_assert!((200..400).contains(&record.financing_out));
            }
        }

        #[test]
        fn derived_columns_obey_their_formulas(seed in any::<u64>(), months in 1u32..40) {
            let records = generate(&fixed_config(months, seed));
            for record in &records {
                prop_assert_eq!(
                    record.total_in,
                    record.operating_in + record.investing_in + record.financing_in
                );
                prop_assert_eq!(
                    record.total_out,
                    record.operating_out + record.investing_out + record.financing_out
                );
                prop_assert_eq!(record.net_cash_flow, record.total_in - record.total_out);
            }
        }

        #[test]
        fn balance_is_a_prefix_sum_after_the_first_month(seed in any::<u64>(), months in 1u32..40) {
            let records = generate(&fixed_config(months, seed));
            prop_assert_eq!(records[0].balance, STARTING_BALANCE);
            for i in 1..records.len() {
                prop_assert_eq!(
                    records[i].balance,
                    records[i - 1].balance + records[i].net_cash_flow
                );
            }
        }

        #[test]
        fn insight_counts_partition_the_window(seed in any::<u64>(), months in 0u32..40) {
            let records = generate(&fixed_config(months, seed));
            let facts = insights(&records);
            let zero_months = records.iter().filter(|r| r.net_cash_flow == 0).count() as u32;
            prop_assert_eq!(facts.positive_months + facts.negative_months + zero_months, months);
        }
    }
}
