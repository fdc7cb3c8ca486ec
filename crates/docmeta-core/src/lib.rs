pub mod config;
pub mod logging;

pub mod error;
pub mod meta;
pub mod page_id;
pub mod render;
pub mod resolver;
pub mod switcher;
