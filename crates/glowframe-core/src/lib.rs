pub mod bitmap;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod glow;
pub mod hit_test;
pub mod log;
pub mod rect;
pub mod registry;
pub mod side;

pub use bitmap::GlowBitmap;
pub use color::{ALPHA_RAMP, Color, ColorRamps};
pub use error::{GlowError, GlowResult};
pub use event::{IntentSubscribers, ResizeIntent};
pub use geometry::{THICKNESS, overlay_origin, overlay_size};
pub use glow::GlowState;
pub use hit_test::{CORNER_AREA, CursorShape, HitRegion};
pub use rect::{Point, Rect};
pub use registry::{ClassKey, ClassRegistry, Registration};
pub use side::Side;
