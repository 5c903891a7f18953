/// Format seconds as `minutes:seconds` with no zero padding.
///
/// Minutes are floored and the remainder is rounded on its own, so a
/// remainder of 59.6 renders as `0:60` rather than carrying into the minute.
/// Negative input counts back from the floored minute (`-5.0` is `-1:55`).
/// Non-finite input renders as `0:0`.
pub fn format_time(t: f64) -> String {
    if !t.is_finite() {
        return "0:0".to_string();
    }
    let minutes = (t / 60.0).floor() as i64;
    let seconds = t.rem_euclid(60.0);
    format!("{}:{:.0}", minutes, seconds)
}
