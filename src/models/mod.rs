pub mod booking;
pub mod city;
pub mod guide;
pub mod hotel;
pub mod segment;
