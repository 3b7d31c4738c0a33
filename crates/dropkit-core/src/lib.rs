//! Core services for Dropkit.
//!
//! This crate provides the foundational components the Dropkit widget crate
//! is built on:
//!
//! - **Signal/Slot System**: Type-safe widget-to-host notifications
//! - **Task Queue**: Deferred one-shot work drained after the render pass
//!
//! # Signal/Slot Example
//!
//! ```
//! use dropkit_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit("advanced-rust".to_string());
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Deferred Task Example
//!
//! ```
//! use dropkit_core::TaskQueue;
//!
//! let mut deferred = TaskQueue::new();
//!
//! // Inside an event handler: schedule follow-up work
//! deferred.post(|| println!("runs after the render pass"));
//!
//! // Host, after rendering a frame:
//! deferred.process_all();
//! ```

pub mod logging;
pub mod signal;
pub mod task;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use task::{TaskId, TaskQueue};
