// Domain layer: value types, rate-independent money helpers and ports. No I/O.

pub mod model;
pub mod money;
pub mod ports;
pub mod promo;
