mod core;
mod input;

pub use self::core::DemoCore;
