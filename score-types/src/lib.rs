pub mod events;
pub mod game;
pub mod player;

// Re-export all types
pub use events::*;
pub use game::*;
pub use player::*;
