// Domain layer: request/result models and the completion port. No HTTP types here.

pub mod model;
pub mod ports;
