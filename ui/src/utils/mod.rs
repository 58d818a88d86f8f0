//! Utility macros shared by the components
//!
//! - **console_macros**: timestamped browser console logging
//!
//! Pure logic under `features` and `services` logs through `tracing` instead,
//! so it stays usable off the browser (tests included).

pub mod console_macros;
