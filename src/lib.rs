//! pixfn: parallel, in-place per-pixel transforms over packed ARGB buffers.
//!
//! ```
//! use pixfn::{color, combine, map};
//!
//! let mut pixels = vec![0u32; 320 * 200];
//! map(4, combine(color::invert, color::blue), &mut pixels).unwrap();
//! assert!(pixels.iter().all(|&p| p == 0xFF0000FF));
//! ```

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod partition;
pub mod transform;

pub use color::Argb;
pub use config::{Config, EngineConfig, PipelineConfig, Step};
pub use engine::{available_workers, map, map_rows, ParallelMap};
pub use error::MapError;
pub use partition::{divide, divide_len, divide_rows, Partition};
pub use transform::{chain, combine, combine3, constant, identity, BoxedTransform, Transform};
