//! Terminal and JSON presentation for the `st2make` binary

pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
