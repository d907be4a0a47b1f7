//! TCP accept loop and per-connection task spawning.

pub mod listener;
