//! Output side of a `rucat` run.
//!
//! # Components
//!
//! - **Sink**: the single output file that receives the concatenated text
//! - **Notice**: the completion line printed to the terminal after a run
//!
//! The sink is owned by one run at a time and is released when it is dropped,
//! so an aborted run never leaks the handle.

pub mod notice;
pub mod sink;

pub use notice::render as render_notice;
pub use sink::OutputSink;
