pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod kiosk;
pub mod log;
pub mod rate;
pub mod share;
pub mod stats;
