pub const GRAVITY: f64 = 9.81; // m/s^2

/// Smallest vector length treated as a usable direction.
pub const MIN_VECTOR_LENGTH: f64 = 1e-9;

/// Local forward axis of the vehicle (nose points down -Z).
pub const LOCAL_FORWARD: [f64; 3] = [0.0, 0.0, -1.0];

pub const DEFAULT_MAX_SPEED: f64 = 220.0; // units/s
pub const DEFAULT_GROUND_CLEARANCE: f64 = 1.0; // units
pub const DEFAULT_LIFTOFF_SPEED: f64 = 18.0; // units/s
pub const DEFAULT_MAX_FRAME_DELTA: f64 = 0.06; // s
