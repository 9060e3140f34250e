pub mod config;
pub mod dispatch;
pub mod error;
pub mod normalize;
pub mod render;
pub mod status;
pub mod sync;
pub mod wire;
