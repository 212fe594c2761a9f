use chrono::{DateTime, NaiveDate, Utc};

/// Timestamp layout used by the JSON DTOs and the chatbot prompt.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// `yyyy-MM-dd`, as used in spreadsheet date columns.
pub fn format_date(value: &NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// `dd/MM/yyyy`, as printed on receipts.
pub fn format_receipt_date(value: &NaiveDate) -> String {
    value.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_dates_and_timestamps() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-03-07 09:05:01");

        let date = ts.date_naive();
        assert_eq!(format_date(&date), "2025-03-07");
        assert_eq!(format_receipt_date(&date), "07/03/2025");
    }
}
