pub mod colors;
pub mod currency;
pub mod date;
pub mod path;
