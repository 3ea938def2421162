pub mod assessment;
pub mod enums;
pub mod health_input;

pub use assessment::*;
pub use enums::*;
pub use health_input::*;
