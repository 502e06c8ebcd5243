/*!
## Rust Machine Module

This Rust module runs scripts: variables, labels, the return stack and
the command set that drives the automation backend.

*/

/// 0-based index of a line in the listing.
pub type Address = usize;

mod automation;
mod color;
mod command;
mod key;
mod link;
mod listing;
mod operation;
mod runtime;
mod settings;
mod stack;
mod val;
mod var;

pub use automation::{Action, Automation, Headless, Recorder};
pub use color::Color;
pub use command::Command;
pub use key::{Direction, Key, MouseButton};
pub use link::Link;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::{Event, Runtime};
pub use settings::Settings;
pub use stack::Stack;
pub use val::{Val, ValKind};
pub use var::Var;

#[cfg(test)]
mod tests;
