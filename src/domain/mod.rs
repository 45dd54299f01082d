// Domain layer: animal records, fetch outcomes and the ports the pipeline depends on.

pub mod model;
pub mod ports;
