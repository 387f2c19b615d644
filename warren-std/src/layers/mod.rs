//! Dispatcher layers.
//!
//! Layers wrap another [`Dispatcher`](warren_core::Dispatcher) and are
//! themselves dispatchers, so they stack:
//!
//! ```rust,ignore
//! let dispatcher = Traced::new(Timeout::new(inner, Duration::from_secs(5)), "orders-consumer");
//! ```

pub mod traced;
#[cfg(feature = "timeout")]
pub mod timeout;

pub use traced::Traced;
#[cfg(feature = "timeout")]
pub use timeout::Timeout;
