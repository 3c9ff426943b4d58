//! Use-case services over the metric model.
//!
//! # Responsibility
//! - Navigation arithmetic and the week strip.
//! - Session transitions for presentation layers.

pub mod navigation;
pub mod session;
pub mod week;
