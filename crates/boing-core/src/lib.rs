pub mod clock;
pub mod constants;
pub mod curve;
pub mod emitter;
pub mod interaction;
pub mod layout;
pub mod report;
pub mod resist;
pub mod spring;
pub mod toy;

pub use clock::*;
pub use emitter::*;
pub use interaction::*;
pub use layout::*;
pub use report::*;
pub use spring::*;
pub use toy::*;
