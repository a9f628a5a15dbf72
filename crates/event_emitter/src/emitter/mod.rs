/// Emitter module - broken down into registration, emission and management
mod core;
mod emitters;
mod handlers;
mod management;
mod stats;

pub use self::core::Emitter;
pub use self::stats::{DispatchReport, EmitterStats};
