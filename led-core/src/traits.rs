//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung. Das Timing kommt über
//! [`embedded_hal::delay::DelayNs`] und braucht hier keinen eigenen Trait.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
///
/// Bereichsverletzungen (Helligkeit, Kanalwerte) sind keine Fehler,
/// sie werden lokal geclampt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Der Writer konnte den Puffer nicht auf den Bus schreiben.
    /// Der physikalische Zustand der LED ist danach unbekannt.
    TransmitFailed,
    /// `pulse()` mit `steps == 0` (Rampe ohne Auflösung)
    InvalidSteps,
    /// `LedConfig::pixel_count` passt nicht zur Puffergröße des Controllers
    PixelCountMismatch { expected: usize, actual: usize },
}

impl core::fmt::Display for LedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedError::TransmitFailed => write!(f, "transmit to LED failed"),
            LedError::InvalidSteps => write!(f, "pulse steps must be at least 1"),
            LedError::PixelCountMismatch { expected, actual } => write!(
                f,
                "pixel count mismatch: controller has {} slots, config asks for {}",
                expected, actual
            ),
        }
    }
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel). Der Writer
/// bekommt den kompletten Pixel-Puffer in Ketten-Reihenfolge und
/// überträgt ihn in einem Rutsch.
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt alle Pixel auf die LED-Kette
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::TransmitFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError>;
}
