// Domain layer: wire records, search ranges, request parameters and ports.

pub mod model;
pub mod params;
pub mod ports;
pub mod range;
