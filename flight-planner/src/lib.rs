//! Flight route planner.
//!
//! A command-line tool that answers: "Which combinations of flights take
//! me and my bags from this airport to that one, and what do they cost?"

pub mod cli;
pub mod domain;
pub mod output;
pub mod planner;
pub mod timetable;
