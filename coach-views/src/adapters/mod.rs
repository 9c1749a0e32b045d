//! DTO to view-model conversions.
//!
//! Each module takes one or more backend shapes, tagged by a `*Source` enum
//! where more than one exists, and produces exactly one view model.

pub mod evaluation;
pub mod exercise;
pub mod lesson;
pub mod practice_session;
pub mod team;
