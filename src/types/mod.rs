mod enums;
mod flag;
mod notam;
mod window;

pub use enums::*;
pub use flag::*;
pub use notam::*;
pub use window::*;
