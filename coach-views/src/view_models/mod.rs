//! Display-ready shapes produced by the adapters. Plain data, no behavior
//! beyond small lookups.

mod evaluation;
mod exercise;
mod form;
mod lesson;
mod practice_session;
mod team;

pub use evaluation::*;
pub use exercise::*;
pub use form::*;
pub use lesson::*;
pub use practice_session::*;
pub use team::*;
