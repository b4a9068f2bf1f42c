pub mod controllers;
pub mod resources;
pub mod views;
