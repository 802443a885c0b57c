// Domain layer: core models, ports (interfaces), and the annotation
// service that joins search results with impact factor data.

pub mod model;
pub mod ports;
pub mod services;
