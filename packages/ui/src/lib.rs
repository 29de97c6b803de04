//! This crate contains all shared UI for the workspace.

mod client;
pub use client::{use_api, ApiProvider, Client};

pub mod format;
pub use format::{format_date, format_time, format_timestamp, generate_uuid, parse_and_format_date};

mod layout;
pub use layout::PageLayout;

pub mod views;
