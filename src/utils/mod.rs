// Utils compartidos

pub mod storage;

pub use storage::*;
