pub mod clock;
pub mod scheduler;

pub use clock::SessionClock;
pub use scheduler::{Fired, Scheduler, TimerHandle};
