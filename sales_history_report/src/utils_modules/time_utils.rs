use crate::common::*;

use crate::utils_modules::traits::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[doc = "Fixed offset east of UTC, given in minutes (345 => UTC+5:45)"]
pub fn fixed_offset_from_minutes(offset_minutes: i32) -> anyhow::Result<FixedOffset> {
    FixedOffset::east_opt(offset_minutes * 60).ok_or_else(|| {
        anyhow!(
            "[time_utils->fixed_offset_from_minutes] Offset out of range: {} minutes",
            offset_minutes
        )
    })
}

#[doc = "UTC 시각을 고정 오프셋 로컬 시각으로 변환"]
pub fn convert_fixed_local_from_utc(
    utc_time: DateTime<Utc>,
    offset: FixedOffset,
) -> DateTime<FixedOffset> {
    utc_time.with_timezone(&offset)
}

#[doc = r#"
    Calendar date of an ISO-8601 string taken from an upstream history record.

    Only the leading `YYYY-MM-DD` part is used. Anything after a `T` or a space
    (time of day, offset, fractional seconds) is ignored, so
    `2024-03-05T10:00:00.000Z` and `2024-03-05` give the same date.
"#]
pub fn parse_record_date(raw_date: &str) -> Option<NaiveDate> {
    let date_part: &str = raw_date
        .trim()
        .split(|c: char| c == 'T' || c == ' ')
        .next()?;

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[doc = "특정 날짜에서 days 일 이전 날짜를 반환하는 함수"]
pub fn minus_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_sub_days(chrono::Days::new(days))
}
