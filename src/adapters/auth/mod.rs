//! Authentication support adapters: token generation and clocks.

mod clock;
mod uuid_generator;

pub use clock::{FixedClock, SystemClock};
pub use uuid_generator::UuidTokenGenerator;
