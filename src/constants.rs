/// Constants shared by the trajectory integrator and marker sampler

/// Simulated-time step used by the stepwise path integrator, in seconds
pub const TIME_STEP_S: f64 = 0.02;

/// Hard ceiling on integration steps.
///
/// The flight loop normally terminates on the canvas bounds, but a
/// pathological configuration (zero wind with a purely vertical launch and
/// negligible gravity) never crosses the floor going down. The ceiling turns
/// that into a truncated path instead of an unbounded loop.
pub const MAX_INTEGRATION_STEPS: usize = 100_000;

/// Maximum number of elapsed-time markers placed along a trajectory
pub const MAX_TIME_MARKERS: usize = 6;

/// Upper bound of the normalized power scale
pub const MAX_POWER: f64 = 100.0;

/// Wind direction/magnitude control bound; valid values are
/// `-WIND_MAGNITUDE_LIMIT..=WIND_MAGNITUDE_LIMIT`
pub const WIND_MAGNITUDE_LIMIT: i32 = 10;
