pub mod gate;
pub mod join;

pub use gate::{SequenceGate, Ticket};
pub use join::{join_both, JoinFailure, Side};
