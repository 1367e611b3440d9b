mod buffer;
mod engine;
mod frame_driver;

pub use buffer::CellView;
pub use engine::Engine;
pub use frame_driver::FrameDriver;
