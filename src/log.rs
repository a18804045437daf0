//! Logging shim for the resolver.
//!
//! With the `tracing` feature these are the `tracing` macros; without it they
//! expand to nothing, so fallback paths cost nothing in release builds.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __prstgeom_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __prstgeom_trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __prstgeom_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{
    __prstgeom_debug as debug, __prstgeom_trace as trace, __prstgeom_warn as warn,
};
