//! # Event Emitter
//!
//! A small, typed, synchronous publish/subscribe primitive. Callers register
//! listeners against string event names, fire every listener registered for a
//! name with [`Emitter::emit`], and remove listeners individually, per event,
//! or globally.
//!
//! ## Core Features
//!
//! - **Typed payloads**: an [`Emitter<T>`] only ever delivers `&T`
//! - **Handle-based removal**: every registration returns a [`ListenerId`]
//! - **Once listeners**: fire on the next matching emit, then remove themselves
//! - **Global listeners**: receive every event after the event-specific ones
//! - **Re-entrant dispatch**: listeners may register, remove, or emit while a
//!   dispatch is running
//! - **Failure policy**: propagate the first listener error (default) or
//!   isolate failures and keep dispatching
//!
//! ## Quick Start
//!
//! ```rust
//! use event_emitter::{Emitter, ListenerError};
//! use std::sync::{Arc, Mutex};
//!
//! let emitter: Emitter<String> = Emitter::new();
//! let received = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = received.clone();
//! let id = emitter.on("greet", move |name| {
//!     sink.lock().unwrap().push(format!("hello {name}"));
//!     Ok(())
//! });
//!
//! emitter.once("greet", |name| {
//!     if name.is_empty() {
//!         return Err(ListenerError::failed("empty name"));
//!     }
//!     Ok(())
//! });
//!
//! emitter.emit("greet", &"world".to_string())?;
//! emitter.off("greet", id);
//! emitter.emit("greet", &"nobody".to_string())?;
//!
//! assert_eq!(*received.lock().unwrap(), vec!["hello world".to_string()]);
//! # Ok::<(), event_emitter::EmitterError>(())
//! ```

pub mod config;
pub mod emitter;
pub mod error;
pub mod types;
pub mod utils;

pub use config::{EmitterConfig, FailurePolicy};
pub use emitter::{DispatchReport, Emitter, EmitterStats};
pub use error::{EmitterError, ListenerError};
pub use types::{listener, Listener, ListenerId};
pub use utils::create_shared_emitter;
