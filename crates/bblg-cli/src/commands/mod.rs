pub mod add;
pub mod common;
pub mod completions;
pub mod config;
pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod init;
pub mod kinds;
pub mod list;
pub mod versions;
