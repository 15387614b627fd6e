pub mod args;
pub mod drivers;
pub mod menu;
