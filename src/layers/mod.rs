mod feature;
mod kind;
mod layers;

pub use feature::Feature;
pub use kind::{LayerKind, TransitMode};
pub use layers::Layers;
