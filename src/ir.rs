pub mod daikin;
pub mod format;
pub mod types;
