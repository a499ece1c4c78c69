//! HTTP handlers

pub mod actions;
pub mod api;
pub mod page;
pub mod static_files;
