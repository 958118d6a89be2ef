mod frame;
mod viewport;

pub use frame::FrameLoop;
pub use viewport::{ViewTransform, Viewport};
