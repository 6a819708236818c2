//! UI components built with Leptos.
//!
//! - [`terminal`] - Terminal emulator interface: boot, output, prompt input

pub mod terminal;
