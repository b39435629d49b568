//! Purpose: Utility core behind the BunPlate web starter, shared by the `bunplate` CLI and tests.
//! Exports: `api` (stable surface), `core` (errors), `utils`, `locale`, `theme`, `viewport`, `config`.
//! Role: Framework-independent logic the web layer calls into; no rendering or routing here.
//! Invariants: Helpers are pure or own their resources explicitly (timers, OS RNG).
//! Invariants: Fallible operations return `core::error::Error`; sentinels are documented per helper.
pub mod api;
pub mod config;
pub mod core;
pub mod locale;
pub mod theme;
pub mod utils;
pub mod viewport;
