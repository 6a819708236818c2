//! Portfolio terminal in the browser.
//!
//! A virtual filesystem seeded from profile data and GitHub repositories,
//! explored through a small shell (`ls`, `cd`, `cat`, `tree`, ...).
//! [`core`] holds the interpreter and runs anywhere; the rest is the
//! Leptos front end.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
