// Domain layer: the vehicle model and the traits every principle module plugs into.

pub mod model;
pub mod ports;
