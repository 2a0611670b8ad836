mod campus;
mod fallback;
mod registry;

pub use campus::Campus;
pub use fallback::fallback_campus_features;
pub use registry::CampusRegistry;
