pub mod config;
pub mod group_lookup;
pub mod shared;
