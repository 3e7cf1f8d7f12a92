pub mod ledger;
pub mod session;
pub mod win;

// Re-export main components
pub use ledger::*;
pub use session::*;
pub use win::*;
