#![cfg_attr(not(test), no_std)]

pub use math::Vector;

pub mod config;
pub use config::*;

pub mod gate;
pub use gate::*;

pub mod gravity_filter;
pub use gravity_filter::*;

pub mod session;
pub use session::*;
