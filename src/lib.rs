// Reusable library API; the `findword` binary is a thin wrapper around it.
pub mod errors;
pub mod finder;
pub mod grid;
pub mod input;
pub mod log;
