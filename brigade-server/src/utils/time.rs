//! 时间工具函数 - 服务日期与时段
//!
//! 服务日期 (`YYYY-MM-DD`) 仅作为分组键使用，不做时区换算。
//! 时段为 24 小时制 `HH:MM`。

use chrono::{NaiveDate, NaiveTime};

use super::{AppError, AppResult, ErrorCode};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    // chrono 接受 "2025-1-5"，这里要求补零后的固定宽度
    if date.len() != 10 {
        return Err(invalid_date(date));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid_date(date))
}

/// 解析时段字符串 (HH:MM, 24h)
pub fn parse_time(time: &str, field: &str) -> AppResult<NaiveTime> {
    let invalid = || {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} must be HH:MM (24h), got '{time}'"),
        )
        .with_detail("field", field)
    };
    if time.len() != 5 {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| invalid())
}

/// 班次时长 (小时) = shift_end - shift_start
///
/// 结束时间必须晚于开始时间，不支持跨午夜的班次。
pub fn shift_hours(shift_start: &str, shift_end: &str) -> AppResult<f64> {
    let start = parse_time(shift_start, "shift_start")?;
    let end = parse_time(shift_end, "shift_end")?;
    if end <= start {
        return Err(AppError::with_message(
            ErrorCode::InvalidShiftWindow,
            format!("shift_end ({shift_end}) must be after shift_start ({shift_start})"),
        )
        .with_detail("field", "shift_end"));
    }
    let minutes = (end - start).num_minutes();
    Ok(minutes as f64 / 60.0)
}

fn invalid_date(date: &str) -> AppError {
    AppError::with_message(
        ErrorCode::InvalidFormat,
        format!("Invalid date format: {date} (expected YYYY-MM-DD)"),
    )
    .with_detail("field", "service_date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2025-03-14").is_ok());
        assert!(parse_date("2025-3-14").is_err());
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("tonight").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert!(parse_time("17:30", "time").is_ok());
        assert!(parse_time("00:00", "time").is_ok());
        assert!(parse_time("7:30", "time").is_err());
        assert!(parse_time("24:00", "time").is_err());
        let err = parse_time("5pm", "time").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_shift_hours() {
        assert_eq!(shift_hours("16:00", "21:00").unwrap(), 5.0);
        assert_eq!(shift_hours("10:15", "18:45").unwrap(), 8.5);
    }

    #[test]
    fn test_shift_hours_rejects_empty_or_inverted_window() {
        let err = shift_hours("18:00", "18:00").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidShiftWindow);
        let err = shift_hours("22:00", "02:00").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidShiftWindow);
    }
}
