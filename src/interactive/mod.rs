//! Interactive TUI interface
//!
//! Full-screen game built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{Alert, App, Message, MessageStyle, Statistics, run_tui};
