//! LED Controller
//!
//! Helligkeit, feste Farben und blockierende Effekte über einem
//! [`SmartLedWriter`]. Jede Farb-Operation läuft über genau einen Pfad:
//! Kanäle clampen, skalieren, in Slot 0 schreiben, Puffer senden.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use rgb::RGB8;

use crate::effect::{Effect, Frame};
use crate::logic::{clamped_rgb, scale_color};
use crate::traits::{LedError, SmartLedWriter};
use crate::types::{BlinkParams, Brightness, LedCommand, LedConfig, PulseParams, colors};

/// Controller für eine einzelne Status-LED (Slot 0 einer Kette mit `N` Pixeln)
///
/// Besitzt Writer und Delay exklusiv. Alle Operationen sind synchron:
/// Farben kehren nach dem Senden zurück, Effekte blockieren für ihre
/// gesamte Dauer.
pub struct LedController<W, D, const N: usize = 1> {
    writer: W,
    delay: D,
    pixels: [RGB8; N],
    brightness: Brightness,
}

/// Der Normalfall: eine einzelne onboard LED
pub type StatusLed<W, D> = LedController<W, D, 1>;

impl<W: SmartLedWriter, D: DelayNs, const N: usize> LedController<W, D, N> {
    /// Erstellt den Controller, setzt die Helligkeit und schaltet die LED aus
    ///
    /// # Fehlerbehandlung
    /// `LedError::TransmitFailed` wenn das initiale Ausschalten fehlschlägt
    pub fn new(writer: W, delay: D, brightness_percent: f32) -> Result<Self, LedError> {
        const { assert!(N > 0, "LED chain needs at least one pixel") };

        let mut led = Self {
            writer,
            delay,
            pixels: [colors::OFF; N],
            brightness: Brightness::OFF,
        };
        led.set_brightness(brightness_percent);
        led.off()?;
        Ok(led)
    }

    /// Wie [`LedController::new`], Parameter aus einer [`LedConfig`]
    ///
    /// Der Pin wird vom Writer verwendet und ist hier nur Information.
    pub fn from_config(writer: W, delay: D, config: &LedConfig) -> Result<Self, LedError> {
        if config.pixel_count != N {
            return Err(LedError::PixelCountMismatch {
                expected: N,
                actual: config.pixel_count,
            });
        }
        Self::new(writer, delay, config.brightness_percent)
    }

    /// Gibt Writer und Delay wieder frei
    pub fn into_parts(self) -> (W, D) {
        (self.writer, self.delay)
    }

    // ------------------------------------------------------------------------
    // Helligkeit
    // ------------------------------------------------------------------------

    /// Setzt die globale Helligkeit in Prozent (0–100), ohne neu zu senden
    pub fn set_brightness(&mut self, percent: f32) {
        self.brightness = Brightness::from_percent(percent);
    }

    /// Helligkeitsfaktor 0.0–1.0
    pub fn brightness(&self) -> f32 {
        self.brightness.factor()
    }

    pub fn brightness_percent(&self) -> u8 {
        self.brightness.percent()
    }

    pub fn brightness_level(&self) -> Brightness {
        self.brightness
    }

    /// Zuletzt gesendete (skalierte) Farbe
    pub fn pixel(&self) -> RGB8 {
        self.pixels[0]
    }

    // ------------------------------------------------------------------------
    // Senden
    // ------------------------------------------------------------------------

    /// Skaliert `color` mit `level`, schreibt Slot 0 und sendet den Puffer
    fn transmit_at(&mut self, color: RGB8, level: Brightness) -> Result<(), LedError> {
        self.pixels[0] = scale_color(color, level);
        self.writer.write(&self.pixels)
    }

    /// Beliebige Farbe mit der konfigurierten Helligkeit
    ///
    /// Kanäle außerhalb 0–255 werden geclampt.
    pub fn set_rgb(&mut self, r: i32, g: i32, b: i32) -> Result<(), LedError> {
        self.set_color(clamped_rgb(r, g, b))
    }

    pub fn set_color(&mut self, color: RGB8) -> Result<(), LedError> {
        self.transmit_at(color, self.brightness)
    }

    /// Sendet einen einzelnen Effekt-Frame (ohne zu warten)
    pub fn render(&mut self, frame: &Frame) -> Result<(), LedError> {
        self.transmit_at(frame.color, frame.level)
    }

    // ------------------------------------------------------------------------
    // Feste Farben
    // ------------------------------------------------------------------------

    pub fn off(&mut self) -> Result<(), LedError> {
        self.set_color(colors::OFF)
    }

    pub fn red(&mut self) -> Result<(), LedError> {
        self.set_color(colors::RED)
    }

    pub fn green(&mut self) -> Result<(), LedError> {
        self.set_color(colors::GREEN)
    }

    pub fn blue(&mut self) -> Result<(), LedError> {
        self.set_color(colors::BLUE)
    }

    pub fn yellow(&mut self) -> Result<(), LedError> {
        self.set_color(colors::YELLOW)
    }

    pub fn magenta(&mut self) -> Result<(), LedError> {
        self.set_color(colors::MAGENTA)
    }

    pub fn cyan(&mut self) -> Result<(), LedError> {
        self.set_color(colors::CYAN)
    }

    /// Weiß (R+G+B)
    pub fn white(&mut self) -> Result<(), LedError> {
        self.set_color(colors::WHITE)
    }

    // ------------------------------------------------------------------------
    // Effekte (blockierend)
    // ------------------------------------------------------------------------

    /// Blinkt `count` mal: Farbe an, `delay` warten, aus, `delay` warten
    ///
    /// Blockiert für `2 * count * delay`.
    pub fn blink(
        &mut self,
        r: i32,
        g: i32,
        b: i32,
        delay: Duration,
        count: u32,
    ) -> Result<(), LedError> {
        let params = BlinkParams { delay, count };
        let effect = Effect::blink(clamped_rgb(r, g, b), params, self.brightness);
        self.run(effect)
    }

    /// "Atmen": Rampe hoch und runter bis zur aktuellen Helligkeit, danach aus
    ///
    /// Bei Helligkeit 0 läuft die Rampe mit voller Skala. Die konfigurierte
    /// Helligkeit bleibt unverändert.
    ///
    /// # Fehlerbehandlung
    /// `LedError::InvalidSteps` bei `steps == 0`, es wird dann nichts gesendet
    pub fn pulse(
        &mut self,
        r: i32,
        g: i32,
        b: i32,
        steps: u16,
        delay: Duration,
    ) -> Result<(), LedError> {
        let params = PulseParams { steps, delay };
        let effect = Effect::pulse(clamped_rgb(r, g, b), params, self.brightness)?;
        self.run(effect)
    }

    /// Arbeitet einen Effekt komplett ab und wartet nach jedem Frame
    ///
    /// Bricht beim ersten fehlgeschlagenen Senden ab.
    pub fn run(&mut self, effect: Effect) -> Result<(), LedError> {
        for frame in effect {
            self.render(&frame)?;
            self.wait(frame.hold);
        }
        Ok(())
    }

    /// Wartet die volle Dauer, auch jenseits von `u32::MAX` Mikrosekunden
    ///
    /// `DelayNs` nimmt nur `u32`, daher in Stücken. Der Rest unter einer
    /// Mikrosekunde geht über `delay_ns`.
    fn wait(&mut self, duration: Duration) {
        let mut remaining_us = duration.as_micros();
        while remaining_us > 0 {
            let chunk = duration_to_us(remaining_us);
            self.delay.delay_us(chunk);
            remaining_us -= u128::from(chunk);
        }

        let sub_us_ns = duration.subsec_nanos() % 1_000;
        if sub_us_ns > 0 {
            self.delay.delay_ns(sub_us_ns);
        }
    }

    /// Führt ein Kommando aus (Effekte blockierend)
    pub fn apply(&mut self, command: &LedCommand) -> Result<(), LedError> {
        match *command {
            LedCommand::Off => self.off(),
            LedCommand::SetColor { color, .. } => self.set_color(color),
            LedCommand::SetBrightness(percent) => {
                self.set_brightness(percent as f32);
                Ok(())
            }
            LedCommand::Blink { color, params } => {
                self.run(Effect::blink(color, params, self.brightness))
            }
            LedCommand::Pulse { color, params } => {
                let effect = Effect::pulse(color, params, self.brightness)?;
                self.run(effect)
            }
        }
    }
}

/// Ein Warte-Stück für `DelayNs`, höchstens `u32::MAX` µs (~71 Minuten)
fn duration_to_us(remaining_us: u128) -> u32 {
    u32::try_from(remaining_us).unwrap_or(u32::MAX)
}
