//! Terminal output for the binary: design tokens, primitives, widgets,
//! per-command views, NDJSON events and error rendering.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
