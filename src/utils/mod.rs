pub mod id_generator;
pub mod ip_range;

pub use id_generator::*;
pub use ip_range::*;
