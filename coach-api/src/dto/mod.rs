mod evaluation;
mod exercise;
mod lesson;
mod practice;
mod team;

pub use evaluation::*;
pub use exercise::*;
pub use lesson::*;
pub use practice::*;
pub use team::*;
