use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, NaiveDate};

pub fn current_time_in_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Formats a date as "Month Day, Year", e.g. "March 4, 2024".
pub fn format_post_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn current_post_date() -> String {
    format_post_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn formats_month_day_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(format_post_date(date), "March 4, 2024");

        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(format_post_date(date), "December 25, 2023");
    }
}
