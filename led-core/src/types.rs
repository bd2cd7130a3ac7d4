//! Core Types für LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::time::Duration;

use rgb::RGB8;

/// Benannte Farben in voller Intensität
///
/// Die Helligkeit wird erst beim Senden angewendet.
pub mod colors {
    use rgb::RGB8;

    pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
    pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
    pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
    pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
    pub const YELLOW: RGB8 = RGB8 { r: 255, g: 255, b: 0 };
    pub const MAGENTA: RGB8 = RGB8 { r: 255, g: 0, b: 255 };
    pub const CYAN: RGB8 = RGB8 { r: 0, g: 255, b: 255 };
    pub const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };

    /// Sucht eine benannte Farbe (Kleinschreibung, englisch)
    pub fn by_name(name: &str) -> Option<(RGB8, &'static str)> {
        let found = match name {
            "off" => (OFF, "off"),
            "red" => (RED, "red"),
            "green" => (GREEN, "green"),
            "blue" => (BLUE, "blue"),
            "yellow" => (YELLOW, "yellow"),
            "magenta" => (MAGENTA, "magenta"),
            "cyan" => (CYAN, "cyan"),
            "white" => (WHITE, "white"),
            _ => return None,
        };
        Some(found)
    }
}

/// Globaler Helligkeitsfaktor, immer im Bereich 0.0..=1.0
///
/// Alle Konstruktoren clampen. NaN wird als 0.0 behandelt.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Brightness(f32);

impl Brightness {
    pub const OFF: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);

    /// Helligkeit aus Prozent (0–100), Werte außerhalb werden geclampt
    ///
    /// ```
    /// # use status_led_core::Brightness;
    /// assert_eq!(Brightness::from_percent(150.0).factor(), 1.0);
    /// assert_eq!(Brightness::from_percent(-10.0).factor(), 0.0);
    /// ```
    pub fn from_percent(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::OFF;
        }
        Self(percent.clamp(0.0, 100.0) / 100.0)
    }

    /// Helligkeit direkt als Faktor (0.0–1.0)
    pub fn from_factor(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::OFF;
        }
        Self(factor.clamp(0.0, 1.0))
    }

    pub fn factor(self) -> f32 {
        self.0
    }

    /// Gerundeter Prozentwert (0–100)
    pub fn percent(self) -> u8 {
        (self.0 * 100.0 + 0.5) as u8
    }

    /// Obergrenze für die Pulse-Rampe
    ///
    /// Eine konfigurierte Helligkeit von 0 würde die Rampe komplett dunkel
    /// lassen, daher läuft der Effekt dann mit voller Skala.
    pub fn ramp_ceiling(self) -> Self {
        if self.0 > 0.0 { self } else { Self::FULL }
    }

    /// Stufe `step` von `steps` unterhalb dieser Obergrenze
    ///
    /// `steps` muss > 0 sein, das prüft der Aufrufer.
    pub fn ramp_level(self, step: u16, steps: u16) -> Self {
        Self::from_factor(self.0 * (step as f32 / steps as f32))
    }
}

/// Konstruktions-Parameter für den Controller
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LedConfig {
    /// GPIO für die Datenleitung (ESP32-C3-DevKitM-1: GPIO8)
    pub pin: u8,
    /// Anzahl der LEDs in der Kette
    pub pixel_count: usize,
    /// Start-Helligkeit in Prozent
    pub brightness_percent: f32,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            pin: 8,
            pixel_count: 1,
            brightness_percent: 20.0,
        }
    }
}

/// Parameter für den Blink-Effekt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkParams {
    /// Pause zwischen An und Aus
    pub delay: Duration,
    /// Anzahl der An/Aus-Zyklen
    pub count: u32,
}

impl Default for BlinkParams {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(200),
            count: 5,
        }
    }
}

/// Parameter für den Pulse-Effekt ("Atmen")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseParams {
    /// Auflösung der Rampe, muss >= 1 sein
    pub steps: u16,
    /// Pause pro Stufe
    pub delay: Duration,
}

impl Default for PulseParams {
    fn default() -> Self {
        Self {
            steps: 20,
            delay: Duration::from_millis(50),
        }
    }
}

/// LED Command für die Steuerung
///
/// Wird an den LED-Task gesendet oder direkt per
/// `LedController::apply()` ausgeführt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LedCommand {
    /// LED ausschalten
    Off,
    /// Setze LED auf eine Farbe (volle Intensität, Helligkeit wird angewendet)
    SetColor { color: RGB8, name: &'static str },
    /// Globale Helligkeit in Prozent
    SetBrightness(u8),
    Blink { color: RGB8, params: BlinkParams },
    Pulse { color: RGB8, params: PulseParams },
}

impl LedCommand {
    /// Gesamte Wartezeit des Kommandos (0 für sofortige Kommandos)
    ///
    /// Blink: `2 * count * delay`, Pulse: `2 * (steps + 1) * delay`
    pub fn duration(&self) -> Duration {
        match self {
            LedCommand::Blink { params, .. } => {
                params.delay.saturating_mul(params.count.saturating_mul(2))
            }
            LedCommand::Pulse { params, .. } => {
                params.delay.saturating_mul(2 * (params.steps as u32 + 1))
            }
            _ => Duration::ZERO,
        }
    }
}

impl core::convert::TryFrom<&str> for LedCommand {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match colors::by_name(name) {
            Some((_, "off")) => Ok(Self::Off),
            Some((color, name)) => Ok(Self::SetColor { color, name }),
            None => Err(()),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Brightness {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}%", self.percent())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedCommand::Off => defmt::write!(fmt, "Off"),
            LedCommand::SetColor { color, name } => {
                defmt::write!(
                    fmt,
                    "SetColor {{ name: {}, rgb: ({}, {}, {}) }}",
                    name,
                    color.r,
                    color.g,
                    color.b
                )
            }
            LedCommand::SetBrightness(percent) => {
                defmt::write!(fmt, "SetBrightness({}%)", percent)
            }
            LedCommand::Blink { color, params } => {
                defmt::write!(
                    fmt,
                    "Blink {{ rgb: ({}, {}, {}), delay_ms: {}, count: {} }}",
                    color.r,
                    color.g,
                    color.b,
                    params.delay.as_millis() as u32,
                    params.count
                )
            }
            LedCommand::Pulse { color, params } => {
                defmt::write!(
                    fmt,
                    "Pulse {{ rgb: ({}, {}, {}), steps: {}, delay_ms: {} }}",
                    color.r,
                    color.g,
                    color.b,
                    params.steps,
                    params.delay.as_millis() as u32
                )
            }
        }
    }
}
