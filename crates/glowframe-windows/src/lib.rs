#![cfg(windows)]

/// Per-monitor DPI awareness.
pub mod dpi;

/// Scoped GDI resources and layered-window presentation.
mod gdi;

/// Window procedure: cursor feedback and resize-intent reporting.
mod input;

/// The per-edge glow overlay window.
pub mod overlay;

pub use overlay::GlowOverlay;
