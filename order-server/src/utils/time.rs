//! 时间工具函数 — 服务器本地时区转换
//!
//! 所有时间戳统一为 `i64` Unix millis；repository 层只接收毫秒值，
//! 日期边界和序列化格式在这里转换。

use chrono::{Local, NaiveDate, SecondsFormat, TimeZone, Utc};

/// 当前时间，Unix millis
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Unix millis → ISO-8601 字符串 (服务器本地时区偏移)
pub fn millis_to_rfc3339(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt
            .with_timezone(&Local)
            .to_rfc3339_opts(SecondsFormat::Millis, false),
        _ => String::new(),
    }
}

/// 日期开始 (00:00:00) → Unix millis (本地时区)
///
/// DST gap fallback: 如果本地时间不存在 (夏令时跳跃)，fallback 到 UTC。
pub fn day_start_millis(date: NaiveDate) -> i64 {
    let naive = date.and_hms_opt(0, 0, 0).unwrap();
    naive
        .and_local_timezone(Local)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// 日期结束 → 次日 00:00:00 的 Unix millis (本地时区)
///
/// 返回次日零点时间戳，调用方使用 `< end` (不含) 语义。
pub fn day_end_millis(date: NaiveDate) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day)
}

/// 今天的 `[start, end)` 毫秒区间 (本地时区)
pub fn local_today_range_millis() -> (i64, i64) {
    let today = Local::now().date_naive();
    (day_start_millis(today), day_end_millis(today))
}
