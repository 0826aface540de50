/// Sink demo command.
pub mod add;
/// Animal array dispatch demo.
pub mod animals;
/// Single-object decode command.
pub mod decode;
/// Point array dispatch demo.
pub mod points;
/// File-backed data source and console sink.
pub mod service;
/// Shared output helpers.
pub mod util;
