mod event;
mod participant;

pub use event::{Event, EventWithPlayers};
pub use participant::Participant;
