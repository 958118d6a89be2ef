// Domain layer - simulation core
pub mod domain;

// Application layer - viewport and frame orchestration
pub mod application;

// Infrastructure layer - rendering, input, configuration
pub mod config;
pub mod error;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::{FrameLoop, ViewTransform, Viewport};
pub use config::Config;
pub use domain::{Cell, GridState};
pub use error::Error;
pub use input::{Command, InputController, InputEvent};
pub use rendering::BatchMesh;
