//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the viewer. It keeps runtime internals out of application code and hands
//! the app one consistent context per frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
