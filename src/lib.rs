pub mod record;
pub mod error;
pub mod diagnostics;
pub mod emitter;
pub mod env;
