use crate::layout::MetricKind;

/// Format a value according to its metric kind.
///
/// Continuous metrics get exactly three decimal places, counts are rounded to an
/// integer. Every list of one metric therefore has a uniform shape, which pgfplots
/// needs when coordinate lists are compared across plot lines.
///
/// Values that round to zero never print a sign.
pub fn format_value(value: f64, kind: MetricKind) -> String {
    let text = format!("{:.*}", kind.decimals(), value);
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}
