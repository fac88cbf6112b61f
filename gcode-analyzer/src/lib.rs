pub mod config;
pub mod display;
pub mod machine;
pub mod measure;
pub mod motion;
pub mod parse;

pub use config::AnalyzerConfiguration;
pub use measure::{measure_program, Estimate, MeasureError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let input = r"
            G90
            G1 X10 Y0 F6000
            G1 E5
        ";
        let estimate = measure_program(&AnalyzerConfiguration::standard(), input).unwrap();
        assert!(estimate.duration_seconds > 0.0);
        assert!((estimate.filament_used - 5.0).abs() < 1e-9);
    }
}
