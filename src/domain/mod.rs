// Domain layer: course records and the ports the reports are written against.

pub mod model;
pub mod ports;
