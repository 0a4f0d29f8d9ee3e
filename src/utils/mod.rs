// Utils compartidos

pub mod constants;
pub mod cookies;
pub mod navigation;
pub mod storage;

pub use constants::*;
