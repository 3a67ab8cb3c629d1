pub mod classify;
pub mod column;
pub mod config;
pub mod rank;
pub mod stats;
pub mod suggest;
