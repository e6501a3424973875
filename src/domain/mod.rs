// Domain layer: entity records and the capabilities they expose. No registry logic here.

pub mod model;
pub mod ports;
