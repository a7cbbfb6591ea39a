pub mod config;
pub mod logging;

pub mod builder;
pub mod error;
pub mod history;
pub mod request;
pub mod session;
pub mod shortener;
pub mod validate;
