//! Data module: index spaces, fields and incidence maps

pub mod dat;
pub mod map;
pub mod set;
pub mod storage;

pub use crate::debug_invariants::DebugInvariants;

pub use dat::{CoordinateDat, Dat};
pub use map::Map;
pub use set::Set;
pub use storage::{Storage, VecStorage};
