//! Undo/redo.
//!
//! A [`Command`] is a pair of closures over some target: one that applies
//! a change and one that reverts it. The [`CommandManager`] keeps two
//! stacks of them and never looks inside.
//!
//! ## Usage
//!
//! ```
//! use hexgarden::command::CommandManager;
//!
//! let mut total = 0i32;
//! let mut manager = CommandManager::new();
//!
//! manager.do_action(&mut total, |t: &mut i32| *t += 5, |t: &mut i32| *t -= 5);
//! assert_eq!(total, 5);
//!
//! assert!(manager.undo(&mut total));
//! assert_eq!(total, 0);
//! assert!(manager.redo(&mut total));
//! assert_eq!(total, 5);
//! ```
//!
//! Closures receive the target and nothing else, so a command cannot push
//! another command while it runs.

mod manager;

pub use manager::{Command, CommandManager};
