// Aggregation over the parsed inputs

pub mod counts;
pub mod functions;

pub use counts::*;
pub use functions::*;
