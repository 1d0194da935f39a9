use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Short column header for the calendar grid, e.g. "Mon 03".
pub fn day_label(d: NaiveDate) -> String {
    d.format("%a %d").to_string()
}
