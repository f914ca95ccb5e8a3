#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::correctness)]
#![warn(clippy::complexity)]
#![warn(clippy::suspicious)]
#![warn(clippy::cargo)]

//! Undo/redo for reversible commands.
//!
//! ```
//! use command_engine::prelude::*;
//! use std::convert::Infallible;
//!
//! struct Light {
//!     on: bool,
//! }
//!
//! struct TurnOn;
//!
//! impl Command for TurnOn {
//!     type Context = Light;
//!     type Error = Infallible;
//!
//!     fn execute(&mut self, light: &mut Light) -> Result<(), Infallible> {
//!         light.on = true;
//!         Ok(())
//!     }
//!
//!     fn undo(&mut self, light: &mut Light) -> Result<(), Infallible> {
//!         light.on = false;
//!         Ok(())
//!     }
//! }
//!
//! let mut light = Light { on: false };
//! let mut engine = Engine::new();
//!
//! engine.submit(TurnOn, &mut light).unwrap();
//! assert!(light.on);
//!
//! assert_eq!(engine.undo(&mut light).unwrap(), UndoOutcome::Undone);
//! assert!(!light.on);
//! assert!(engine.can_redo());
//!
//! assert_eq!(engine.redo(&mut light).unwrap(), RedoOutcome::Redone);
//! assert!(light.on);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod shared_engine;
pub mod shared_receiver;
pub mod traits;

pub mod prelude {
	pub use crate::config::EngineConfig;
	pub use crate::engine::Engine;
	pub use crate::error::{CommandFailure, Phase, RedoOutcome, UndoOutcome};
	pub use crate::shared_engine::SharedEngine;
	pub use crate::shared_receiver::SharedReceiver;
	pub use crate::traits::command::Command;
	pub use crate::traits::command_history::CommandHistory;
}
