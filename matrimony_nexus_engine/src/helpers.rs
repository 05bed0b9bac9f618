//! Small helper functions for the engine.

const CM_PER_FOOT: f64 = 30.48;
const CM_PER_INCH: f64 = 2.54;

/// Converts a height in centimeters to the feet/inches string format biodatas store, e.g. `5'7"`.
///
/// Feet truncate, inches round. The rounding can push inches to
/// 12 without carrying into feet, so 152cm renders as `4'12"` rather than `5'0"`. Filters that go through
/// [`height_string_to_inches`] are unaffected, since `4'12"` and `5'0"` parse to the same total.
pub fn cm_to_height_string(cm: f64) -> String {
    let feet = (cm / CM_PER_FOOT).floor();
    let inches = ((cm % CM_PER_FOOT) / CM_PER_INCH).round();
    format!("{feet:.0}'{inches:.0}\"")
}

/// Parses a feet/inches string like `5'7"` into a total number of inches. Returns `None` for anything that does not
/// match the format; biodatas with unparseable heights never match a height-filtered query.
pub fn height_string_to_inches(height: &str) -> Option<i64> {
    let rest = height.trim();
    let (feet, rest) = rest.split_once('\'')?;
    let inches = rest.trim_end().strip_suffix('"').unwrap_or(rest);
    let feet = feet.trim().parse::<i64>().ok()?;
    let inches = inches.trim().parse::<i64>().ok()?;
    if feet < 0 || inches < 0 {
        return None;
    }
    Some(feet * 12 + inches)
}

/// Converts a height filter bound in centimeters to total inches, by way of the same string conversion used when
/// biodatas are stored. Going through the string keeps the filter bounds and the stored values on the same (slightly
/// lossy) scale.
pub fn cm_to_inches(cm: f64) -> Option<i64> {
    height_string_to_inches(&cm_to_height_string(cm))
}
