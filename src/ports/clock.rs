//! Clock port.
//!
//! Domain operations take `now` as an argument; handlers read it from here
//! so tests can pin time.

use crate::domain::foundation::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
