//! # Command Implementations
//!
//! Prompt commands, the events they produce, and the registry that
//! dispatches a typed line to the right command.

pub mod directory;
pub mod events;
pub mod registry;

pub use directory::DirectoryCommand;
pub use events::CommandEvent;
pub use registry::CommandRegistry;
