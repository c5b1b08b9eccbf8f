//! SEPTA Regional Rail slash-command server.
//!
//! A Slack webhook that answers `rr SOURCE-DEST` with the next three
//! trains between two stations, resolving abbreviated station names
//! against a fixed catalog first.

pub mod card;
pub mod command;
pub mod config;
pub mod domain;
pub mod septa;
pub mod stations;
pub mod web;
