// Percent helpers shared by the model and the form fields

pub const PERCENT_MIN: f64 = 0.0;
pub const PERCENT_MAX: f64 = 100.0;
pub const PERCENT_CENTER: f64 = 50.0;

pub fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() {
        return PERCENT_CENTER;
    }
    // + 0.0 turns -0.0 into 0.0 so it never formats as "-0.00"
    v.clamp(PERCENT_MIN, PERCENT_MAX) + 0.0
}

/// Two fractional digits, the format the backend stores.
pub fn format_percent(v: f64) -> String {
    format!("{:.2}", clamp_percent(v))
}

/// Lenient parse of a stored field value. Empty or garbage yields `None`.
pub fn parse_percent(raw: &str) -> Option<f64> {
    let v = raw.trim().parse::<f64>().ok()?;
    if v.is_finite() { Some(clamp_percent(v)) } else { None }
}

/// Human-readable byte size for messages: "5MB", "2.5MB", "1KB", "500 bytes".
/// One fractional digit at most, dropped when it is zero.
pub fn format_size(bytes: &u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    let (value, unit) = match *bytes {
        b if b >= MIB => (b as f64 / MIB as f64, "MB"),
        b if b >= KIB => (b as f64 / KIB as f64, "KB"),
        b => return format!("{b} bytes"),
    };
    let s = format!("{value:.1}");
    format!("{}{unit}", s.strip_suffix(".0").unwrap_or(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_keeps_fractional_limits() {
        assert_eq!(format_size(&(5 * 1024 * 1024)), "5MB");
        assert_eq!(format_size(&2_621_440), "2.5MB");
        assert_eq!(format_size(&1024), "1KB");
        assert_eq!(format_size(&1536), "1.5KB");
        assert_eq!(format_size(&500), "500 bytes");
        assert_eq!(format_size(&(10 * 1024 * 1024)), "10MB");
    }

    #[test]
    fn format_always_has_two_decimals() {
        assert_eq!(format_percent(50.0), "50.00");
        assert_eq!(format_percent(55.0), "55.00");
        assert_eq!(format_percent(12.3456), "12.35");
        assert_eq!(format_percent(0.0), "0.00");
        assert_eq!(format_percent(100.0), "100.00");
    }

    #[test]
    fn format_clamps_out_of_range() {
        assert_eq!(format_percent(104.2), "100.00");
        assert_eq!(format_percent(-3.0), "0.00");
    }

    #[test]
    fn parse_accepts_stored_values() {
        assert_eq!(parse_percent("42.50"), Some(42.5));
        assert_eq!(parse_percent(" 7 "), Some(7.0));
        assert_eq!(parse_percent("150"), Some(100.0));
        assert_eq!(parse_percent("-1"), Some(0.0));
        assert_eq!(parse_percent("-0").map(format_percent).as_deref(), Some("0.00"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_percent(""), None);
        assert_eq!(parse_percent("abc"), None);
        assert_eq!(parse_percent("NaN"), None);
        assert_eq!(parse_percent("inf"), None);
    }
}
