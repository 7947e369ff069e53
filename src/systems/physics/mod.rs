mod forces;
mod ground;
mod integrator;

pub use forces::{accumulate_forces, ForceBreakdown};
pub use ground::{can_lift_off, resolve_ground_contact};
pub use integrator::{advance, flight_integrator_system};
