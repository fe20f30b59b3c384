//! Terminal presentation

pub mod report;
