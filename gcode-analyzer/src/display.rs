use std::fmt::{self, Display};

/// Renders a second count the way a wall clock reads: `H:MM:SS`, a day count
/// in front when needed, microseconds behind only when non-zero.
pub struct FormattedDuration(pub f64);

impl Display for FormattedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_micros = (self.0 * 1e6).round() as u64;
        let micros = total_micros % 1_000_000;
        let total_seconds = total_micros / 1_000_000;
        let seconds = total_seconds % 60;
        let minutes = (total_seconds / 60) % 60;
        let hours = (total_seconds / 3600) % 24;
        let days = total_seconds / 86_400;
        if days == 1 {
            write!(f, "1 day, ")?;
        } else if days > 1 {
            write!(f, "{} days, ", days)?;
        }
        write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)?;
        if micros != 0 {
            write!(f, ".{:06}", micros)?;
        }
        Ok(())
    }
}

/// Filament length in the program's units (millimetres), printed in metres.
pub struct FilamentLength(pub f64);

impl Display for FilamentLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} meters", self.0 / 1000.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_whole_seconds() {
        assert_eq!(FormattedDuration(0.0).to_string(), "0:00:00");
        assert_eq!(FormattedDuration(3661.0).to_string(), "1:01:01");
        assert_eq!(FormattedDuration(59.0).to_string(), "0:00:59");
    }

    #[test]
    fn test_fractional_seconds() {
        assert_eq!(FormattedDuration(0.2).to_string(), "0:00:00.200000");
        assert_eq!(FormattedDuration(200.5).to_string(), "0:03:20.500000");
    }

    #[test]
    fn test_days() {
        assert_eq!(FormattedDuration(86_401.0).to_string(), "1 day, 0:00:01");
        assert_eq!(
            FormattedDuration(2.0 * 86_400.0 + 3661.5).to_string(),
            "2 days, 1:01:01.500000"
        );
    }

    #[test]
    fn test_filament_in_meters() {
        assert_eq!(FilamentLength(2345.6).to_string(), "2.35 meters");
        assert_eq!(FilamentLength(0.0).to_string(), "0.00 meters");
    }
}
