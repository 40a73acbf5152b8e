pub mod admin;
pub mod regions;
pub mod system;
