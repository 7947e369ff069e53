mod follow;

pub use follow::{camera_follow_system, chase_anchor, follow};
