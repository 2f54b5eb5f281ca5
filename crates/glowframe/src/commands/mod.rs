pub mod config;
pub mod demo;
#[cfg(windows)]
mod demo_host;
pub mod init;
