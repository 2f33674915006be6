use crate::duration::days_since_at;
use crate::models::Habit;
use chrono::{Local, NaiveDate};
use std::cmp::Reverse;

pub fn sort_habits(habits: &[Habit], sort_by: &str) -> Vec<Habit> {
    sort_habits_at(habits, sort_by, Local::now().date_naive())
}

/// Orders a copy of `habits` by the named criterion. An unrecognized
/// criterion keeps the input order. The result is always a permutation of
/// the input.
pub fn sort_habits_at(habits: &[Habit], sort_by: &str, today: NaiveDate) -> Vec<Habit> {
    let mut sorted = habits.to_vec();
    match sort_by {
        "most-days" => {
            sorted.sort_by_key(|habit| Reverse(days_since_at(&habit.start_date, today)));
        }
        "least-days" => {
            sorted.sort_by_key(|habit| days_since_at(&habit.start_date, today));
        }
        "newest" => {
            sorted.sort_by(|a, b| created_key(b).cmp(created_key(a)));
        }
        "alphabetical" => {
            sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        _ => {}
    }
    sorted
}

// ISO-8601 timestamps order lexicographically; a record that never got a
// creation stamp sorts as earliest.
fn created_key(habit: &Habit) -> &str {
    habit.created_at.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn habit(id: &str, name: &str, start_date: &str, created_at: Option<&str>) -> Habit {
        Habit {
            id: id.to_string(),
            name: name.to_string(),
            start_date: start_date.to_string(),
            created_at: created_at.map(str::to_string),
        }
    }

    fn sample() -> Vec<Habit> {
        vec![
            habit("a", "Yoga", "2025-06-01", Some("2025-06-01T10:00:00.000Z")),
            habit("b", "academia", "2024-01-01", Some("2025-01-01T10:00:00.000Z")),
            habit("c", "Meditação", "2025-01-15", None),
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    fn ids(habits: &[Habit]) -> Vec<&str> {
        habits.iter().map(|habit| habit.id.as_str()).collect()
    }

    #[test]
    fn every_criterion_returns_a_permutation() {
        let input = sample();
        let expected: BTreeSet<_> = input.iter().map(|habit| habit.id.clone()).collect();
        for criterion in ["most-days", "least-days", "newest", "alphabetical", "bogus"] {
            let sorted = sort_habits_at(&input, criterion, today());
            assert_eq!(sorted.len(), input.len(), "{criterion}");
            let actual: BTreeSet<_> = sorted.iter().map(|habit| habit.id.clone()).collect();
            assert_eq!(actual, expected, "{criterion}");
        }
    }

    #[test]
    fn most_days_puts_oldest_start_first() {
        let sorted = sort_habits_at(&sample(), "most-days", today());
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn least_days_puts_newest_start_first() {
        let sorted = sort_habits_at(&sample(), "least-days", today());
        assert_eq!(ids(&sorted), vec!["a", "c", "b"]);
    }

    #[test]
    fn newest_orders_by_creation_missing_stamp_last() {
        let sorted = sort_habits_at(&sample(), "newest", today());
        assert_eq!(ids(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn alphabetical_ignores_case() {
        let sorted = sort_habits_at(&sample(), "alphabetical", today());
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn unknown_criterion_keeps_input_order() {
        let input = sample();
        let sorted = sort_habits_at(&input, "shuffled", today());
        assert_eq!(ids(&sorted), ids(&input));
    }

    #[test]
    fn invalid_start_date_counts_as_zero_days() {
        let mut input = sample();
        input.push(habit("d", "Ler", "corrupted", None));
        let sorted = sort_habits_at(&input, "least-days", today());
        assert_eq!(sorted[0].id, "d");
    }

    #[test]
    fn input_is_not_mutated() {
        let input = sample();
        let before = ids(&input);
        let _ = sort_habits_at(&input, "alphabetical", today());
        assert_eq!(ids(&input), before);
    }
}
