//! Status LED Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die Helligkeits-Logik, den Controller
//! und die Effekt-Zustandsmaschine.

#![no_std]

pub mod controller;
pub mod effect;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::{LedController, StatusLed};
pub use effect::{Effect, EffectState, Frame};
pub use logic::{clamp_channel, clamped_rgb, scale_channel, scale_color};
pub use traits::{LedError, SmartLedWriter};
pub use types::{BlinkParams, Brightness, LedCommand, LedConfig, PulseParams, colors};
