#![cfg_attr(not(test), no_std)]

pub mod vector;
pub use vector::*;


/// Standard gravity in m/s^2.
pub const G_TO_MS2: f32 = 9.80665;
