// Domain layer: plain value types shared by the operations in `core`.

pub mod model;
pub mod vehicle;
