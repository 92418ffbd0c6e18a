//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Line-oriented answer input, quit-on-EOF
//! - `display.rs`: Colored output and staff diagrams

pub mod display;
pub mod input;

pub use input::Console;
