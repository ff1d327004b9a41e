// SPDX-License-Identifier: GPL-3.0-only

use chrono::NaiveDate;

/// Nights between check-in and check-out, zero when the range is inverted
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    u32::try_from((check_out - check_in).num_days()).unwrap_or_default()
}

/// Every night of the stay, check-out excluded
pub fn stay_dates(check_in: NaiveDate, check_out: NaiveDate) -> Vec<NaiveDate> {
    check_in
        .iter_days()
        .take_while(|d| *d < check_out)
        .collect()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn nights_and_stay_dates() {
        let check_in = date(2026, 7, 1);
        let check_out = date(2026, 7, 5);
        assert_eq!(nights_between(check_in, check_out), 4);
        assert_eq!(nights_between(check_out, check_in), 0);
        assert_eq!(stay_dates(check_in, check_out).len(), 4);
        assert_eq!(stay_dates(check_in, check_out).last(), Some(&date(2026, 7, 4)));
        assert_eq!(format_date(check_in), "01/07/2026");
    }
}
