// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use core::time::Duration;

use status_led_core::{BlinkParams, LedConfig, PulseParams};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812 auf dem ESP32-C3-DevKitM-1)
pub const LED_GPIO_PIN: u8 = 8;

/// Anzahl der LEDs im Strip (nur die onboard LED)
pub const LED_COUNT: usize = 1;

/// Standard-Helligkeit in Prozent (0-100)
/// Wert ist gedimmt für Augenschonung
pub const DEFAULT_BRIGHTNESS_PERCENT: u8 = 20;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// RMT Puffer-Größe: 24 Bit pro LED + 1 Reset-Puls
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Kapazität des Command-Channels (main → LED-Task)
pub const COMMAND_QUEUE_SIZE: usize = 4;

/// Start-Helligkeit in Prozent
///
/// Wird zur Build-Zeit aus der Environment Variable LED_BRIGHTNESS_PERCENT
/// geladen (siehe .env.example). Fehlt sie oder ist ungültig, gilt
/// DEFAULT_BRIGHTNESS_PERCENT.
pub fn initial_brightness_percent() -> u8 {
    option_env!("LED_BRIGHTNESS_PERCENT")
        .and_then(|value| value.trim().parse::<u8>().ok())
        .map(|percent| percent.min(100))
        .unwrap_or(DEFAULT_BRIGHTNESS_PERCENT)
}

/// Controller-Konfiguration aus den Konstanten oben
pub fn led_config() -> LedConfig {
    LedConfig {
        pin: LED_GPIO_PIN,
        pixel_count: LED_COUNT,
        brightness_percent: initial_brightness_percent() as f32,
    }
}

// ============================================================================
// Demo-Ablauf
// ============================================================================

/// Farben, die der Demo-Ablauf nacheinander zeigt
pub const DEMO_COLORS: [&str; 7] = ["red", "green", "blue", "yellow", "magenta", "cyan", "white"];

/// Anzeigedauer pro Farbe im Demo-Ablauf
pub const DEMO_HOLD_MS: u64 = 1000;

/// Blink-Parameter im Demo-Ablauf (3x rot, 100 ms)
pub const DEMO_BLINK: BlinkParams = BlinkParams {
    delay: Duration::from_millis(100),
    count: 3,
};

/// Pulse-Parameter im Demo-Ablauf (20 Stufen à 50 ms)
pub const DEMO_PULSE: PulseParams = PulseParams {
    steps: 20,
    delay: Duration::from_millis(50),
};

/// Pause am Ende eines Demo-Durchlaufs in Sekunden
pub const DEMO_PAUSE_SECS: u64 = 3;
