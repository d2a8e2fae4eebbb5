pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod install;
pub mod inward;
pub mod list;
pub mod log;
pub mod settings;
pub mod stock;
pub mod survey;
pub mod worker;
