mod cases;
mod matrices;

pub use cases::*;
pub use matrices::*;
