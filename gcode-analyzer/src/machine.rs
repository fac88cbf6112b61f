use crate::{
    config::{AnalyzerConfiguration, DEFAULT_PLANAR_ACCELERATION, DEFAULT_VELOCITY},
    motion::accelerated_move,
    parse::{BadWordValue, ParsedLine},
};

/// Logical tool position. E is the extrusion axis; its final value doubles
/// as the net filament consumption.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub e: f64,
}

/// Everything the interpreter carries between commands: position, coordinate
/// modes, speed, accelerations, and the accumulated duration. One instance
/// per analysis run, mutated in place one command at a time.
#[derive(Debug)]
pub struct MachineState {
    position: Position,
    relative: bool,
    relative_extrusion: bool,
    velocity: f64,
    acceleration: f64,
    feed_acceleration: f64,
    vertical_acceleration: f64,
    elapsed: f64,
}

impl MachineState {
    pub fn new(config: &AnalyzerConfiguration) -> Self {
        MachineState {
            position: Position::default(),
            relative: false,
            relative_extrusion: false,
            velocity: DEFAULT_VELOCITY,
            acceleration: DEFAULT_PLANAR_ACCELERATION,
            feed_acceleration: config.feed_acceleration,
            vertical_acceleration: config.vertical_acceleration,
            elapsed: 0.0,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Seconds accumulated so far. Only moves ever increase this.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    /// Net length of filament fed, i.e. the final E position. Retractions
    /// subtract from it.
    pub fn filament_used(&self) -> f64 {
        self.position.e
    }

    /// Applies one command. The steps run in this fixed order; time accrual
    /// reads the state as it stands before this command's own mode and
    /// position updates take effect.
    pub fn apply(&mut self, line: &ParsedLine) -> Result<(), BadWordValue> {
        self.update_velocity(line)?;
        self.accrue_time(line)?;
        self.update_coordinate_modes(line)?;
        self.update_position(line)?;
        self.update_acceleration(line)?;
        self.redefine_origin(line)?;
        self.home(line)?;
        Ok(())
    }

    /// G0 and G1 are the only commands that move the machine.
    fn is_move(&self, line: &ParsedLine) -> Result<bool, BadWordValue> {
        Ok(matches!(line.get_i64('G')?, Some(0) | Some(1)))
    }

    fn update_velocity(&mut self, line: &ParsedLine) -> Result<(), BadWordValue> {
        if let Some(feedrate) = line.get_f64('F')? {
            // F words carry units per minute.
            self.velocity = feedrate / 60.0;
        }
        Ok(())
    }

    /// Euclidean X-Y distance from the current position to this command's
    /// target. An axis missing from the command stays put (absolute) or
    /// contributes no displacement (relative).
    fn planar_distance(&self, line: &ParsedLine) -> Result<f64, BadWordValue> {
        let (target_x, target_y) = if self.relative {
            (
                self.position.x + line.get_f64_or('X', 0.0)?,
                self.position.y + line.get_f64_or('Y', 0.0)?,
            )
        } else {
            (
                line.get_f64('X')?.unwrap_or(self.position.x),
                line.get_f64('Y')?.unwrap_or(self.position.y),
            )
        };
        Ok(f64::hypot(
            target_x - self.position.x,
            target_y - self.position.y,
        ))
    }

    fn vertical_distance(&self, line: &ParsedLine) -> Result<f64, BadWordValue> {
        let target_z = if self.relative {
            self.position.z + line.get_f64_or('Z', 0.0)?
        } else {
            line.get_f64('Z')?.unwrap_or(self.position.z)
        };
        Ok((target_z - self.position.z).abs())
    }

    /// Feed displacement follows its own relative flag, not the linear one.
    fn feed_distance(&self, line: &ParsedLine) -> Result<f64, BadWordValue> {
        let target_e = if self.relative_extrusion {
            self.position.e + line.get_f64_or('E', 0.0)?
        } else {
            line.get_f64('E')?.unwrap_or(self.position.e)
        };
        Ok((target_e - self.position.e).abs())
    }

    /// Any X-Y travel dominates the move and is timed on the planar
    /// acceleration; otherwise the move is extrusion-only and timed on the
    /// feed acceleration. Vertical travel is charged on top either way.
    fn accrue_time(&mut self, line: &ParsedLine) -> Result<(), BadWordValue> {
        if !self.is_move(line)? {
            return Ok(());
        }
        let planar = self.planar_distance(line)?;
        if planar != 0.0 {
            self.elapsed += accelerated_move(planar, self.velocity, self.acceleration);
        } else {
            let feed = self.feed_distance(line)?;
            self.elapsed += accelerated_move(feed, self.velocity, self.feed_acceleration);
        }
        let vertical = self.vertical_distance(line)?;
        self.elapsed += accelerated_move(vertical, self.velocity, self.vertical_acceleration);
        Ok(())
    }

    /// G90/G91 switch both flags; M82/M83 switch the extrusion flag alone.
    fn update_coordinate_modes(&mut self, line: &ParsedLine) -> Result<(), BadWordValue> {
        match line.get_i64('G')? {
            Some(91) => {
                self.relative = true;
                self.relative_extrusion = true;
            }
            Some(90) => {
                self.relative = false;
                self.relative_extrusion = false;
            }
            _ => match line.get_i64('M')? {
                Some(83) => self.relative_extrusion = true,
                Some(82) => self.relative_extrusion = false,
                _ => {}
            },
        }
        Ok(())
    }

    fn update_position(&mut self, line: &ParsedLine) -> Result<(), BadWordValue> {
        if !self.is_move(line)? {
            return Ok(());
        }
        if self.relative {
            self.position.x += line.get_f64_or('X', 0.0)?;
            self.position.y += line.get_f64_or('Y', 0.0)?;
            self.position.z += line.get_f64_or('Z', 0.0)?;
        } else {
            if let Some(x) = line.get_f64('X')? {
                self.position.x = x;
            }
            if let Some(y) = line.get_f64('Y')? {
                self.position.y = y;
            }
            if let Some(z) = line.get_f64('Z')? {
                self.position.z = z;
            }
        }
        if self.relative_extrusion {
            self.position.e += line.get_f64_or('E', 0.0)?;
        } else if let Some(e) = line.get_f64('E')? {
            self.position.e = e;
        }
        Ok(())
    }

    /// M204 retunes the planar acceleration, S taking precedence over P.
    fn update_acceleration(&mut self, line: &ParsedLine) -> Result<(), BadWordValue> {
        if line.get_i64('M')? == Some(204) {
            if let Some(value) = line.get_f64('S')?.or(line.get_f64('P')?) {
                self.acceleration = value;
            }
        }
        Ok(())
    }

    /// G92 moves the logical origin: every present axis is overwritten with
    /// its literal value, without motion or elapsed time.
    fn redefine_origin(&mut self, line: &ParsedLine) -> Result<(), BadWordValue> {
        if line.get_i64('G')? != Some(92) {
            return Ok(());
        }
        if let Some(x) = line.get_f64('X')? {
            self.position.x = x;
        }
        if let Some(y) = line.get_f64('Y')? {
            self.position.y = y;
        }
        if let Some(z) = line.get_f64('Z')? {
            self.position.z = z;
        }
        if let Some(e) = line.get_f64('E')? {
            self.position.e = e;
        }
        Ok(())
    }

    /// G28 re-references the named linear axes to zero; a bare G28 homes all
    /// three. E is never touched.
    fn home(&mut self, line: &ParsedLine) -> Result<(), BadWordValue> {
        if line.get_i64('G')? != Some(28) {
            return Ok(());
        }
        let x = line.get('X').is_some();
        let y = line.get('Y').is_some();
        let z = line.get('Z').is_some();
        if !x && !y && !z {
            self.position.x = 0.0;
            self.position.y = 0.0;
            self.position.z = 0.0;
        } else {
            if x {
                self.position.x = 0.0;
            }
            if y {
                self.position.y = 0.0;
            }
            if z {
                self.position.z = 0.0;
            }
        }
        Ok(())
    }
}
