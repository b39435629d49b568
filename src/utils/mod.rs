//! Purpose: Framework-independent helpers consumed by the web layer.
//! Exports: `format`, `collections`, `validation`, `timing`, `random`, `classes`.
//! Role: Leaf modules with no dependencies on each other.
//! Invariants: Pure functions except `timing` (owns timers) and `random` (reads the OS RNG).
pub mod classes;
pub mod collections;
pub mod format;
pub mod random;
pub mod timing;
pub mod validation;
