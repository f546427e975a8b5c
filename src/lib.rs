//! Pace & Time Calculator (pacetime)
//!
//! Running arithmetic on timestamps and distances: add or subtract times,
//! and derive any one of pace, time and distance from the other two. Every
//! successful calculation is recorded in a newest-first log.
//!
//! Pure Core / Impure Shell: [`model`] and [`state`] are free of I/O,
//! [`view`], [`config`] and [`logging`] talk to the outside world.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
