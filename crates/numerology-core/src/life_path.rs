//! Life path number: digit sum of a `year-month-day` birth date.
//!
//! There is no calendar validation. `1990-13-45` is summed like any other
//! date; callers wanting stricter checks must do them before calling in.

use serde::{Deserialize, Serialize};

use crate::reduce::reduce;

/// A birth date as three raw integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parse `year-month-day`. Components after the third are ignored; a
    /// missing, empty or non-numeric component yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().split('-').map(parse_component);
        let year = parts.next()??;
        let month = parts.next()??;
        let day = parts.next()??;
        Some(Self { year, month, day })
    }

    /// Sum of place-value digits over year, month and day, before reduction.
    ///
    /// The year is split into exactly four places; a five-digit year keeps
    /// its leading `year / 1000` as one multi-digit term.
    pub fn digit_sum(&self) -> u64 {
        let y = u64::from(self.year);
        let m = u64::from(self.month);
        let d = u64::from(self.day);
        let year_sum = y / 1000 + (y % 1000) / 100 + (y % 100) / 10 + y % 10;
        let month_sum = m / 10 + m % 10;
        let day_sum = d / 10 + d % 10;
        year_sum + month_sum + day_sum
    }

    pub fn life_path(&self) -> u32 {
        reduce(self.digit_sum())
    }
}

fn parse_component(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Life path number for a `year-month-day` string.
///
/// `None` for empty input or a string that does not split into three
/// integer components.
pub fn life_path_number(date: &str) -> Option<u32> {
    if date.trim().is_empty() {
        return None;
    }
    CalendarDate::parse(date).map(|d| d.life_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_33_date() {
        // 1+9+9+0 = 19, 0+7 = 7, 1+6 = 7 → 33
        assert_eq!(life_path_number("1990-07-16"), Some(33));
    }

    #[test]
    fn test_plain_date() {
        // 2+0+0+0 = 2, 0+1 = 1, 0+1 = 1 → 4
        assert_eq!(life_path_number("2000-01-01"), Some(4));
        // 1+9+8+5 = 23, 1+2 = 3, 2+5 = 7 → 33
        assert_eq!(life_path_number("1985-12-25"), Some(33));
        // 1+9+8+4 = 22, 0+3 = 3, 0+2 = 2 → 27 → 9
        assert_eq!(life_path_number("1984-03-02"), Some(9));
    }

    #[test]
    fn test_master_11_date() {
        // 2+0+0+0 = 2, 0+2 = 2, 0+7 = 7 → 11
        assert_eq!(life_path_number("2000-02-07"), Some(11));
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(life_path_number(""), None);
        assert_eq!(life_path_number("   "), None);
    }

    #[test]
    fn test_malformed_is_none() {
        assert_eq!(life_path_number("1990"), None);
        assert_eq!(life_path_number("1990-07"), None);
        assert_eq!(life_path_number("1990--16"), None);
        assert_eq!(life_path_number("abcd-ef-gh"), None);
        assert_eq!(life_path_number("1990/07/16"), None);
    }

    #[test]
    fn test_out_of_range_month_is_summed() {
        // 19 + (1+3) + (0+1) = 24 → 6
        assert_eq!(life_path_number("1990-13-01"), Some(6));
    }

    #[test]
    fn test_extra_components_ignored() {
        assert_eq!(life_path_number("1990-07-16-08"), Some(33));
    }

    #[test]
    fn test_five_digit_year_keeps_leading_term() {
        let date = CalendarDate::new(12345, 1, 1);
        // 12 + 3 + 4 + 5 = 24, plus 1 + 1
        assert_eq!(date.digit_sum(), 26);
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(
            CalendarDate::parse(" 1990-07-16 "),
            Some(CalendarDate::new(1990, 7, 16))
        );
    }
}
