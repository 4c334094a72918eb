//! Command implementations

pub mod asset;
pub mod cert;
pub mod completions;
pub mod contract;
pub mod facility;
pub mod import;
pub mod init;
pub mod report;
pub mod seed;
pub mod validate;
pub mod wo;
