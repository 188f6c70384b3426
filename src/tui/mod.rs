//! Terminal front end: deal hands at the keyboard and browse their results.

pub mod app;
pub mod controller;
pub mod ui;
