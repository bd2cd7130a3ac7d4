// Demo-Ablauf: schickt dem LED-Task eine feste Folge von Kommandos
//
// Zeigt alle Funktionen einmal durch: alle Farben, weiß mit 50 %, aus,
// 3x rot blinken, blau pulsieren.

use defmt::{info, warn};
use embassy_time::{Duration, Timer};
use status_led_core::{LedCommand, colors};

use crate::LedCommandSender;
use crate::config::{
    DEMO_BLINK, DEMO_COLORS, DEMO_HOLD_MS, DEMO_PAUSE_SECS, DEMO_PULSE,
    initial_brightness_percent,
};

/// Schickt ein Kommando und wartet, bis es abgelaufen ist
///
/// Effekte werden im LED-Task durch das nächste Kommando unterbrochen,
/// daher wartet der Demo-Ablauf mindestens die Effekt-Dauer.
async fn send_and_hold(sender: &LedCommandSender, command: LedCommand, hold: Duration) {
    sender.send(command).await;
    let effect_us = u64::try_from(command.duration().as_micros()).unwrap_or(u64::MAX);
    let effect = Duration::from_micros(effect_us);
    Timer::after(effect + hold).await;
}

/// Demo Task - läuft endlos
#[embassy_executor::task]
pub async fn demo_task(sender: LedCommandSender) {
    let hold = Duration::from_millis(DEMO_HOLD_MS);
    let mut round: u32 = 0;

    loop {
        round = round.wrapping_add(1);
        info!("Demo round {}", round);

        sender
            .send(LedCommand::SetBrightness(initial_brightness_percent()))
            .await;

        for name in DEMO_COLORS {
            match LedCommand::try_from(name) {
                Ok(command) => send_and_hold(&sender, command, hold).await,
                Err(()) => warn!("Unknown demo color: {}", name),
            }
        }

        // weiß mit 50 %
        sender.send(LedCommand::SetBrightness(50)).await;
        let white = LedCommand::SetColor {
            color: colors::WHITE,
            name: "white",
        };
        send_and_hold(&sender, white, hold).await;
        send_and_hold(&sender, LedCommand::Off, hold).await;

        let blink = LedCommand::Blink {
            color: colors::RED,
            params: DEMO_BLINK,
        };
        send_and_hold(&sender, blink, hold).await;

        let pulse = LedCommand::Pulse {
            color: colors::BLUE,
            params: DEMO_PULSE,
        };
        send_and_hold(&sender, pulse, Duration::from_secs(DEMO_PAUSE_SECS)).await;
    }
}
