pub mod handler;
pub mod start;
pub mod worker;

pub use start::init_bot;
