mod system_handler;

pub use system_handler::*;
