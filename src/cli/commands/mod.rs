pub mod assign;
pub mod backup;
pub mod booking;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod db;
pub mod edit;
pub mod export;
pub mod init;
pub mod log;
pub mod session;
pub mod set_end;
pub mod split;
