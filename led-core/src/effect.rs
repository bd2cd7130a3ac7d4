//! Zeitbasierte Effekte als Zustandsmaschine
//!
//! Ein [`Effect`] liefert Frame für Frame, was gesendet werden soll und wie
//! lange danach gewartet wird. Wer die Frames abarbeitet, entscheidet selbst
//! über das Warten: `LedController::run()` blockiert mit `DelayNs`, der
//! Firmware-Task wartet async und kann zwischen zwei Frames abbrechen.

use core::time::Duration;

use rgb::RGB8;

use crate::traits::LedError;
use crate::types::{BlinkParams, Brightness, PulseParams, colors};

/// Ein einzelner Sende-Schritt eines Effekts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Farbe in voller Intensität
    pub color: RGB8,
    /// Helligkeit, mit der genau dieser Frame skaliert wird
    pub level: Brightness,
    /// Wartezeit nach dem Senden (`Duration::ZERO` = nicht warten)
    pub hold: Duration,
}

/// Position innerhalb eines Effekts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EffectState {
    /// Kein Effekt geladen
    Idle,
    /// Als nächstes: An-Phase von Zyklus `i`
    BlinkOn(u32),
    /// Als nächstes: Aus-Phase von Zyklus `i`
    BlinkOff(u32),
    /// Als nächstes: Stufe `i` der aufsteigenden Rampe
    RampUp(u16),
    /// Als nächstes: Stufe `i` der absteigenden Rampe
    RampDown(u16),
    /// Als nächstes: abschließendes Ausschalten
    Settle,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    None,
    Blink {
        color: RGB8,
        level: Brightness,
        params: BlinkParams,
    },
    Pulse {
        color: RGB8,
        ceiling: Brightness,
        configured: Brightness,
        params: PulseParams,
    },
}

/// Blink- oder Pulse-Effekt, getrieben von außen (ein Frame pro Tick)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    kind: Kind,
    state: EffectState,
}

impl Effect {
    pub fn idle() -> Self {
        Self {
            kind: Kind::None,
            state: EffectState::Idle,
        }
    }

    /// Blinken: `count` mal Farbe an, warten, aus, warten
    ///
    /// `level` ist die konfigurierte Helligkeit des Controllers.
    /// Mit `count == 0` ist der Effekt sofort fertig.
    pub fn blink(color: RGB8, params: BlinkParams, level: Brightness) -> Self {
        let state = if params.count == 0 {
            EffectState::Done
        } else {
            EffectState::BlinkOn(0)
        };
        Self {
            kind: Kind::Blink {
                color,
                level,
                params,
            },
            state,
        }
    }

    /// Pulsieren: Rampe 0..=steps hoch, steps..=0 runter, danach aus
    ///
    /// Die Rampe läuft bis `configured.ramp_ceiling()`. Das abschließende
    /// Ausschalten nutzt wieder `configured`.
    ///
    /// # Fehlerbehandlung
    /// `LedError::InvalidSteps` bei `params.steps == 0`
    pub fn pulse(
        color: RGB8,
        params: PulseParams,
        configured: Brightness,
    ) -> Result<Self, LedError> {
        if params.steps == 0 {
            return Err(LedError::InvalidSteps);
        }
        Ok(Self {
            kind: Kind::Pulse {
                color,
                ceiling: configured.ramp_ceiling(),
                configured,
                params,
            },
            state: EffectState::RampUp(0),
        })
    }

    pub fn state(&self) -> EffectState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, EffectState::Idle | EffectState::Done)
    }

    /// Nächster Frame, `None` wenn der Effekt fertig (oder leer) ist
    pub fn next_frame(&mut self) -> Option<Frame> {
        match (self.kind, self.state) {
            (_, EffectState::Idle | EffectState::Done) | (Kind::None, _) => None,

            (Kind::Blink { color, level, params }, EffectState::BlinkOn(i)) => {
                self.state = EffectState::BlinkOff(i);
                Some(Frame {
                    color,
                    level,
                    hold: params.delay,
                })
            }
            (Kind::Blink { level, params, .. }, EffectState::BlinkOff(i)) => {
                self.state = if i + 1 < params.count {
                    EffectState::BlinkOn(i + 1)
                } else {
                    EffectState::Done
                };
                Some(Frame {
                    color: colors::OFF,
                    level,
                    hold: params.delay,
                })
            }

            (Kind::Pulse { color, ceiling, params, .. }, EffectState::RampUp(i)) => {
                self.state = if i < params.steps {
                    EffectState::RampUp(i + 1)
                } else {
                    EffectState::RampDown(params.steps)
                };
                Some(Frame {
                    color,
                    level: ceiling.ramp_level(i, params.steps),
                    hold: params.delay,
                })
            }
            (Kind::Pulse { color, ceiling, params, .. }, EffectState::RampDown(i)) => {
                self.state = match i.checked_sub(1) {
                    Some(next) => EffectState::RampDown(next),
                    None => EffectState::Settle,
                };
                Some(Frame {
                    color,
                    level: ceiling.ramp_level(i, params.steps),
                    hold: params.delay,
                })
            }
            (Kind::Pulse { configured, .. }, EffectState::Settle) => {
                self.state = EffectState::Done;
                Some(Frame {
                    color: colors::OFF,
                    level: configured,
                    hold: Duration::ZERO,
                })
            }

            // Zustände, die zur jeweils anderen Effekt-Art gehören
            (Kind::Blink { .. }, _) | (Kind::Pulse { .. }, _) => {
                self.state = EffectState::Done;
                None
            }
        }
    }
}

impl Default for Effect {
    fn default() -> Self {
        Self::idle()
    }
}

impl Iterator for Effect {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Frame {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Frame {{ rgb: ({}, {}, {}), level: {}, hold_ms: {} }}",
            self.color.r,
            self.color.g,
            self.color.b,
            self.level,
            self.hold.as_millis() as u32
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Effect {
    fn format(&self, fmt: defmt::Formatter) {
        let kind = match self.kind {
            Kind::None => "None",
            Kind::Blink { .. } => "Blink",
            Kind::Pulse { .. } => "Pulse",
        };
        defmt::write!(fmt, "Effect {{ kind: {}, state: {} }}", kind, self.state)
    }
}
