//! Numerology life-path calculation.
//!
//! A birth date reduces to a life-path number by first adding year, month,
//! and day as whole values, then repeatedly replacing the sum with the sum
//! of its base-10 digits. Reduction stops at a single digit or at one of
//! the master numbers 11, 22, and 33, which are never reduced further,
//! even when they appear mid-reduction. Note the asymmetry: only the first
//! step adds whole multi-digit values; every later step works digit by
//! digit.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Whether a value is one of the non-reducible master numbers.
fn is_master(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

/// Sum of the base-10 digits of `n`.
fn digit_sum(n: u32) -> u32 {
    let mut n = n;
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// The digits of `n` in reading order.
fn digits(n: u32) -> Vec<u32> {
    let mut out = Vec::new();
    let mut n = n;
    if n == 0 {
        return vec![0];
    }
    while n > 0 {
        out.push(n % 10);
        n /= 10;
    }
    out.reverse();
    out
}

/// Compute the life-path number for a birth date.
///
/// Always returns a value in {1..9, 11, 22, 33}. Date validity is the
/// caller's responsibility; see [`validate_birth_date`].
pub fn life_path_number(date: NaiveDate) -> u32 {
    let mut sum = date.year().unsigned_abs() + date.month() + date.day();
    while sum > 9 && !is_master(sum) {
        sum = digit_sum(sum);
    }
    sum
}

/// The ordered reduction trace for a birth date, as display strings.
///
/// The first entry is the raw sum of the three date parts; each later
/// entry is one digit-splitting pass, e.g. for 1990-12-25:
/// `["1990 + 12 + 25 = 2027", "2 + 0 + 2 + 7 = 11"]`.
pub fn life_path_steps(year: i32, month: u32, day: u32) -> Vec<String> {
    let mut steps = Vec::new();
    let mut sum = year.unsigned_abs() + month + day;
    steps.push(format!("{} + {month} + {day} = {sum}", year.unsigned_abs()));

    while sum > 9 && !is_master(sum) {
        let parts = digits(sum);
        let next: u32 = parts.iter().sum();
        let joined = parts
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" + ");
        steps.push(format!("{joined} = {next}"));
        sum = next;
    }
    steps
}

/// Validate a birth date before it reaches the calculator.
///
/// Rejects impossible calendar dates, dates in the future relative to
/// `today`, and years older than `min_year`.
pub fn validate_birth_date(
    year: i32,
    month: u32,
    day: u32,
    today: NaiveDate,
    min_year: i32,
) -> EngineResult<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| EngineError::InvalidDate(format!("{year}-{month:02}-{day:02} does not exist")))?;
    if date > today {
        return Err(EngineError::InvalidDate(format!(
            "{date} is in the future"
        )));
    }
    if year < min_year {
        return Err(EngineError::InvalidDate(format!(
            "year {year} is before the accepted minimum {min_year}"
        )));
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn master_number_example() {
        // 1990 + 12 + 25 = 2027 -> 2+0+2+7 = 11, stop at the master number
        assert_eq!(life_path_number(date(1990, 12, 25)), 11);
    }

    #[test]
    fn single_digit_example() {
        // 2000 + 1 + 1 = 2002 -> 2+0+0+2 = 4
        assert_eq!(life_path_number(date(2000, 1, 1)), 4);
    }

    #[test]
    fn steps_match_reduction() {
        let steps = life_path_steps(1990, 12, 25);
        assert_eq!(
            steps,
            vec!["1990 + 12 + 25 = 2027", "2 + 0 + 2 + 7 = 11"]
        );
    }

    #[test]
    fn steps_for_single_pass() {
        let steps = life_path_steps(2000, 1, 1);
        assert_eq!(steps, vec!["2000 + 1 + 1 = 2002", "2 + 0 + 0 + 2 = 4"]);
    }

    #[test]
    fn first_step_adds_whole_values() {
        // The first pass must not digit-split: 1999+12+31 = 2042, not 1+9+9+9+1+2+3+1
        let steps = life_path_steps(1999, 12, 31);
        assert_eq!(steps[0], "1999 + 12 + 31 = 2042");
    }

    #[test]
    fn digit_sum_basics() {
        assert_eq!(digit_sum(2027), 11);
        assert_eq!(digit_sum(9), 9);
        assert_eq!(digit_sum(100), 1);
    }

    #[test]
    fn validate_rejects_impossible_date() {
        let today = date(2026, 8, 23);
        assert!(validate_birth_date(2001, 2, 30, today, 1900).is_err());
        assert!(validate_birth_date(2001, 13, 1, today, 1900).is_err());
    }

    #[test]
    fn validate_rejects_future_date() {
        let today = date(2026, 8, 23);
        assert!(validate_birth_date(2027, 1, 1, today, 1900).is_err());
    }

    #[test]
    fn validate_rejects_year_below_bound() {
        let today = date(2026, 8, 23);
        assert!(validate_birth_date(1899, 12, 31, today, 1900).is_err());
        assert!(validate_birth_date(1900, 1, 1, today, 1900).is_ok());
    }

    #[test]
    fn validate_accepts_today() {
        let today = date(2026, 8, 23);
        assert_eq!(
            validate_birth_date(2026, 8, 23, today, 1900).unwrap(),
            today
        );
    }

    proptest! {
        #[test]
        fn life_path_always_in_valid_set(
            year in 1900i32..=2100,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let n = life_path_number(date(year, month, day));
            prop_assert!(
                (1..=9).contains(&n) || n == 11 || n == 22 || n == 33,
                "life path {n} out of range"
            );
        }

        #[test]
        fn final_step_result_matches_number(
            year in 1900i32..=2100,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let n = life_path_number(date(year, month, day));
            let steps = life_path_steps(year, month, day);
            let last = steps.last().unwrap();
            let (_, result) = last.rsplit_once(" = ").unwrap();
            prop_assert_eq!(result.parse::<u32>().unwrap(), n);
        }
    }
}
