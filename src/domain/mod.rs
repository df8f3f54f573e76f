// Domain layer: seller applications, backend request shapes and the backend ports.

pub mod model;
pub mod ports;
