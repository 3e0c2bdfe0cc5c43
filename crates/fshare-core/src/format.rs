//! Formatting utilities for file sizes.

/// SI units, powers of 1000.
const SIZE_UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

/// Format a byte count for the file list (e.g., "0 B", "1.5 kB", "2.35 MB").
///
/// Values are rounded to two decimals with trailing zeros dropped. Sizes
/// past the terabyte range stay in TB.
pub fn human_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    // Integer division keeps the unit choice exact at unit boundaries.
    let mut exponent = 0;
    let mut scaled = bytes;
    while scaled >= 1000 && exponent < SIZE_UNITS.len() - 1 {
        scaled /= 1000;
        exponent += 1;
    }

    let value = bytes as f64 / 1000f64.powi(exponent as i32);

    format!("{} {}", two_decimals(value), SIZE_UNITS[exponent])
}

/// Round to two decimals from the exact binary value, trailing zeros
/// trimmed. Exact ties round up, as `Number.prototype.toFixed` does.
fn two_decimals(value: f64) -> String {
    // An `x.xx5` tie is only exactly representable as an odd number of eighths.
    let eighths = value * 8.0;
    let fixed = if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        format!("{:.2}", (value * 100.0).ceil() / 100.0)
    } else {
        format!("{:.2}", value)
    };

    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_file_size() {
        assert_eq!(human_file_size(0), "0 B");
        assert_eq!(human_file_size(1), "1 B");
        assert_eq!(human_file_size(999), "999 B");
        assert_eq!(human_file_size(1000), "1 kB");
        assert_eq!(human_file_size(1500), "1.5 kB");
        assert_eq!(human_file_size(2_345_678), "2.35 MB");
        assert_eq!(human_file_size(1_000_000), "1 MB");
        assert_eq!(human_file_size(7_250_000_000), "7.25 GB");
    }

    #[test]
    fn test_human_file_size_rounds_binary_value() {
        // 1.045 and 1.295 are stored just below the half, 10.005 just above.
        assert_eq!(human_file_size(1_045), "1.04 kB");
        assert_eq!(human_file_size(1_295), "1.29 kB");
        assert_eq!(human_file_size(10_005), "10.01 kB");
        assert_eq!(human_file_size(999_995), "1000 kB");
    }

    #[test]
    fn test_human_file_size_exact_ties_round_up() {
        assert_eq!(human_file_size(1_125), "1.13 kB");
        assert_eq!(human_file_size(2_375), "2.38 kB");
        assert_eq!(human_file_size(1_005), "1 kB");
    }

    #[test]
    fn test_human_file_size_caps_at_terabytes() {
        assert_eq!(human_file_size(5_000_000_000_000_000), "5000 TB");
    }
}
