// Domain layer: validation results and the ports the host page implements.
// No dependencies beyond std/serde/thiserror.

pub mod model;
pub mod ports;
