//! Browser glue shared by components.
//!
//! DESIGN
//! ======
//! Every helper compiles on the server too. Where the browser is required the
//! server build gets an inert fallback, so components can call these
//! unconditionally during SSR.

pub mod clipboard;
pub mod date;
#[cfg(feature = "hydrate")]
pub mod frame;
pub mod motion;
#[cfg(feature = "hydrate")]
pub mod pointer;
