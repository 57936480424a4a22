pub mod dashboard;
pub mod devices;
pub mod pages;
pub mod readings;
