// Domain layer: core models and ports (interfaces). No external dependencies
// beyond serde and the crate error type.

pub mod model;
pub mod ports;
