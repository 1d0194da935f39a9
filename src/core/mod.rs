pub mod assign;
pub mod backup;
pub mod calendar;
pub mod chain;
pub mod log;
