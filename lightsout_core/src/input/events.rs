use lightsout_data::Millis;

/// The two logical player actions. Mapping keys or pointers onto them is up to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Arm,
    Respond,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    /// Session-clock time when the action happened
    pub timestamp: Millis,
    pub signal: Signal,
}

impl InputEvent {
    pub fn arm(timestamp: Millis) -> Self {
        Self {
            timestamp,
            signal: Signal::Arm,
        }
    }

    pub fn respond(timestamp: Millis) -> Self {
        Self {
            timestamp,
            signal: Signal::Respond,
        }
    }
}
