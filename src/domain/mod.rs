// Domain layer: plane model and the ports the airport depends on.

pub mod model;
pub mod ports;
