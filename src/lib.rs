#![forbid(unsafe_code)]

pub mod cli;
pub mod client;
pub mod codes;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formats;
pub mod jst;
pub mod logging;
pub mod params;
pub mod query;
pub mod r18;
pub mod range;
pub mod response;
pub mod site;
pub mod values;

pub use client::Client;
pub use error::{Error, Result};
pub use fetch::FetchRequest;
pub use query::SearchQuery;
