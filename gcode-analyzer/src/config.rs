/// Planar acceleration every run starts with; M204 changes it in-stream.
pub const DEFAULT_PLANAR_ACCELERATION: f64 = 1000.0;
pub const DEFAULT_FEED_ACCELERATION: f64 = 2000.0;
pub const DEFAULT_VERTICAL_ACCELERATION: f64 = 250.0;
/// Traversal speed assumed before the first F word, in units per second.
pub const DEFAULT_VELOCITY: f64 = 5000.0;

/// The accelerations a run may be configured with. The planar acceleration
/// and the start-up speed are not constructor-configurable; they only change
/// through in-stream commands.
#[derive(Debug, Clone)]
pub struct AnalyzerConfiguration {
    pub feed_acceleration: f64,
    pub vertical_acceleration: f64,
}

impl AnalyzerConfiguration {
    pub fn standard() -> Self {
        Self {
            feed_acceleration: DEFAULT_FEED_ACCELERATION,
            vertical_acceleration: DEFAULT_VERTICAL_ACCELERATION,
        }
    }
}
