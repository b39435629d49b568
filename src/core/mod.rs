// Core modules shared by every helper.
pub mod error;
