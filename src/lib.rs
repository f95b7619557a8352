mod common;

pub mod app;
pub mod config;
pub mod form;
pub mod navigate;
pub mod runtime;
pub mod settings;
pub mod shorten_client;
pub mod submission;
pub mod ui;
