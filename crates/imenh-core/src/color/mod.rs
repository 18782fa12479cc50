pub mod adjust;
pub mod gray;
pub mod lab;
