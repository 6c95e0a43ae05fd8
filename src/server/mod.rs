pub mod listener;
pub mod signal;
