// Domain layer: value types, records and ports. No I/O.

pub mod model;
pub mod ports;
