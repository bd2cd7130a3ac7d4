// Status LED Task - Steuert die RGB LED über RMT Peripheral
use defmt::{error, info, warn};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Timer};
use embedded_hal::delay::DelayNs;
use esp_hal::delay::Delay;
use esp_hal_smartled::smart_led_buffer;
use status_led_core::{Effect, LedCommand, SmartLedWriter, StatusLed};

use crate::LedCommandReceiver;
use crate::config::{LED_COUNT, LED_GPIO_PIN, RMT_CLOCK_MHZ, led_config};
use crate::hal::RmtLedWriter;

/// Status LED Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Wartet auf Kommandos und führt sie aus:
/// - Farben und Helligkeit sofort über den Controller
/// - Blink/Pulse Frame für Frame, mit async Warten zwischen den Frames
///
/// Ein neues Kommando während eines Effekts bricht den Effekt zwischen zwei
/// Frames ab. Die LED wird dann ausgeschaltet und das neue Kommando
/// ausgeführt.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `L: SmartLedWriter` ermöglicht:
/// - Real Hardware (RmtLedWriter) im Production-Code
/// - Mock Implementation (MockLedWriter) in Tests
///
/// # Parameter
/// - `led`: fertig initialisierter Controller
/// - `command_receiver`: Channel Receiver für Kommandos
pub async fn status_led_logic<L: SmartLedWriter, D: DelayNs>(
    mut led: StatusLed<L, D>,
    command_receiver: LedCommandReceiver,
) -> ! {
    let mut pending: Option<LedCommand> = None;

    loop {
        let command = match pending.take() {
            Some(command) => command,
            None => command_receiver.receive().await,
        };
        info!("Command received: {}", command);

        pending = execute(&mut led, command, &command_receiver).await;
    }
}

/// Führt ein Kommando aus, gibt ein unterbrechendes Folge-Kommando zurück
async fn execute<L: SmartLedWriter, D: DelayNs>(
    led: &mut StatusLed<L, D>,
    command: LedCommand,
    command_receiver: &LedCommandReceiver,
) -> Option<LedCommand> {
    let effect = match command {
        LedCommand::Blink { color, params } => Effect::blink(color, params, led.brightness_level()),
        LedCommand::Pulse { color, params } => {
            match Effect::pulse(color, params, led.brightness_level()) {
                Ok(effect) => effect,
                Err(e) => {
                    warn!("Pulse rejected: {}", e);
                    return None;
                }
            }
        }
        immediate => {
            if let Err(e) = led.apply(&immediate) {
                error!("Failed to write to LED: {}", e);
            }
            return None;
        }
    };

    run_effect(led, effect, command_receiver).await
}

/// Arbeitet einen Effekt ab, async statt blockierend
async fn run_effect<L: SmartLedWriter, D: DelayNs>(
    led: &mut StatusLed<L, D>,
    mut effect: Effect,
    command_receiver: &LedCommandReceiver,
) -> Option<LedCommand> {
    while let Some(frame) = effect.next_frame() {
        if let Err(e) = led.render(&frame) {
            error!("Failed to write to LED, effect aborted: {}", e);
            return None;
        }
        if frame.hold.is_zero() {
            continue;
        }

        let hold = Duration::from_micros(u64::try_from(frame.hold.as_micros()).unwrap_or(u64::MAX));
        match select(Timer::after(hold), command_receiver.receive()).await {
            Either::First(()) => {}
            Either::Second(next) => {
                info!("Effect interrupted at {}", effect.state());
                if let Err(e) = led.off() {
                    error!("Failed to write to LED: {}", e);
                }
                return Some(next);
            }
        }
    }

    None
}

/// Status LED Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `status_led_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `command_receiver`: Channel Receiver für Kommandos
#[embassy_executor::task]
pub async fn status_led_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    command_receiver: LedCommandReceiver,
) {
    // Buffer für SmartLED Daten erstellen
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    // Hardware initialisieren: RmtLedWriter kapselt RMT + SmartLED
    let writer = match RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(writer) => writer,
        Err(e) => {
            error!("RMT initialization failed: {}", e);
            return;
        }
    };

    // Controller: Helligkeit setzen, LED aus
    let led = match StatusLed::from_config(writer, Delay::new(), &led_config()) {
        Ok(led) => led,
        Err(e) => {
            error!("Status LED initialization failed: {}", e);
            return;
        }
    };
    info!(
        "Status LED ready on GPIO{} at {}%",
        LED_GPIO_PIN,
        led.brightness_percent()
    );

    // Business Logic aufrufen
    status_led_logic(led, command_receiver).await
}
