//! Schedule board: time window, block geometry, grouping, status
//! colours and hover state.

pub mod board;
pub mod group;
pub mod hover;
pub mod layout;
pub mod status;
pub mod window;

pub use board::{board_rows, PlacedBlock};
pub use hover::HoverState;
pub use status::TaskStatus;
