use crate::errors::report_error::*;

/* Labels drawn under the bars of the monthly chart */
pub const MONTH_SHORT_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/* Names used in chart titles */
pub const MONTH_FULL_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[doc = "Full month name for a 1-indexed month number"]
pub fn month_full_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_FULL_NAMES.get(idx as usize).copied())
}

#[doc = "Short label for a 1-indexed month number"]
pub fn month_short_label(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_SHORT_LABELS.get(idx as usize).copied())
}

#[doc = "Checks that a month number lies in 1..=12"]
pub fn validate_month(month: u32) -> Result<u32, ReportError> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(ReportError::InvalidParameter(format!(
            "month must be between 1 and 12, got {}",
            month
        )))
    }
}

#[doc = "Parses the `{month}` path segment of `/graph/month/{month}`"]
pub fn parse_month_param(raw_month: &str) -> Result<u32, ReportError> {
    let month: u32 = raw_month.trim().parse::<u32>().map_err(|_| {
        ReportError::InvalidParameter(format!("month must be a number, got '{}'", raw_month))
    })?;

    validate_month(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_one_indexed() {
        assert_eq!(month_full_name(1), Some("January"));
        assert_eq!(month_full_name(12), Some("December"));
        assert_eq!(month_full_name(0), None);
        assert_eq!(month_full_name(13), None);
        assert_eq!(month_short_label(9), Some("Sept"));
    }

    #[test]
    fn parses_valid_month_params() {
        assert_eq!(parse_month_param("3").unwrap(), 3);
        assert_eq!(parse_month_param(" 12 ").unwrap(), 12);
    }

    #[test]
    fn rejects_out_of_range_and_non_numeric_months() {
        for raw in ["0", "13", "-1", "march", ""] {
            assert!(
                matches!(parse_month_param(raw), Err(ReportError::InvalidParameter(_))),
                "expected rejection for '{}'",
                raw
            );
        }
    }
}
