pub mod directory_facade;
