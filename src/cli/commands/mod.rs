pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod parse;
pub mod pivot;
