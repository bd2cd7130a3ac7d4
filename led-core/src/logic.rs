//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::Brightness;

/// Clampt einen Kanalwert auf 0–255
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Baut eine Farbe aus beliebigen Kanalwerten, außerhalb 0–255 wird geclampt
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use status_led_core::clamped_rgb;
/// assert_eq!(clamped_rgb(300, -5, 128), RGB8 { r: 255, g: 0, b: 128 });
/// ```
pub fn clamped_rgb(r: i32, g: i32, b: i32) -> RGB8 {
    RGB8 {
        r: clamp_channel(r),
        g: clamp_channel(g),
        b: clamp_channel(b),
    }
}

/// Skaliert einen Kanal linear mit der Helligkeit
///
/// Abgeschnitten Richtung 0, keine Gamma-Korrektur.
pub fn scale_channel(value: u8, brightness: Brightness) -> u8 {
    (value as f32 * brightness.factor()) as u8
}

/// Skaliert alle drei Kanäle unabhängig voneinander
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use status_led_core::{Brightness, scale_color};
/// let white = RGB8 { r: 255, g: 255, b: 255 };
/// let dimmed = scale_color(white, Brightness::from_percent(20.0));
/// assert_eq!(dimmed, RGB8 { r: 51, g: 51, b: 51 });
/// ```
pub fn scale_color(color: RGB8, brightness: Brightness) -> RGB8 {
    RGB8 {
        r: scale_channel(color.r, brightness),
        g: scale_channel(color.g, brightness),
        b: scale_channel(color.b, brightness),
    }
}
