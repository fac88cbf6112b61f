use std::{
    fmt::{self, Display},
    time::Duration,
};

use serde::Serialize;

use crate::{
    config::AnalyzerConfiguration,
    machine::MachineState,
    parse::{parse_line, BadWordValue},
};

/// Totals for one program: the wall-clock estimate and the net filament use
/// in the program's own length units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub duration_seconds: f64,
    pub filament_used: f64,
}

impl Estimate {
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_seconds)
    }
}

/// A command word that could not be read as a number, with the 1-based line
/// it came from. Ends the run; lines are never skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasureError {
    pub line_number: usize,
    pub error: BadWordValue,
}

impl Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.error)
    }
}
impl std::error::Error for MeasureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Walks a whole program through a fresh machine and reports the totals.
pub fn measure_program(
    config: &AnalyzerConfiguration,
    input: &str,
) -> Result<Estimate, MeasureError> {
    let mut state = MachineState::new(config);
    for (index, line) in input.lines().enumerate() {
        state.apply(&parse_line(line)).map_err(|error| MeasureError {
            line_number: index + 1,
            error,
        })?;
    }
    Ok(Estimate {
        duration_seconds: state.elapsed_seconds(),
        filament_used: state.filament_used(),
    })
}
