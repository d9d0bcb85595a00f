//! Event handler implementations for EventLoop.
//!
//! - `input`: Keyboard polling and key dispatch
//! - `action`: Running the dispatcher and updating the ViewModel
//! - `rendering`: Terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files.

mod action;
mod input;
mod rendering;
