//! CLI module graph.

pub mod check;
pub mod command;
pub mod dispatch;
pub mod operator;
pub mod output;
pub mod run;
pub mod status;
