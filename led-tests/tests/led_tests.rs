//! Integration Tests für den LED Controller
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockLedWriter + MockDelay

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use rgb::RGB8;
use status_led_core::{
    BlinkParams, Brightness, Effect, LedCommand, LedError, PulseParams, SmartLedWriter, StatusLed,
    colors, scale_color,
};

// ============================================================================
// Mocks
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    pub frames: Vec<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
    /// Schlägt ab dem n-ten erfolgreichen write() dauerhaft fehl
    pub fail_after: Option<usize>,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_color(&self) -> Option<RGB8> {
        self.frames.last().copied()
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::TransmitFailed);
        }
        if self.fail_after.is_some_and(|n| self.write_count >= n) {
            return Err(LedError::TransmitFailed);
        }

        self.frames.push(pixels[0]);
        self.write_count += 1;
        Ok(())
    }
}

/// Zeichnet alle Wartezeiten in Mikrosekunden auf
#[derive(Default)]
pub struct MockDelay {
    pub waits_us: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_us.push(ns / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.waits_us.push(us);
    }
}

fn controller(brightness_percent: f32) -> StatusLed<MockLedWriter, MockDelay> {
    StatusLed::new(MockLedWriter::new(), MockDelay::default(), brightness_percent).unwrap()
}

/// Writer und Delay herausholen, Konstruktions-Frame (aus) entfernen
fn parts(led: StatusLed<MockLedWriter, MockDelay>) -> (MockLedWriter, MockDelay) {
    let (mut writer, delay) = led.into_parts();
    assert_eq!(writer.frames.remove(0), colors::OFF);
    (writer, delay)
}

// ============================================================================
// Tests: Konstruktion
// ============================================================================

#[test]
fn test_new_transmits_single_off_frame() {
    let led = controller(20.0);
    let (writer, delay) = led.into_parts();
    assert_eq!(writer.frames, vec![colors::OFF]);
    assert!(delay.waits_us.is_empty());
}

#[test]
fn test_new_propagates_transmit_failure() {
    let mut writer = MockLedWriter::new();
    writer.fail_next_write = true;
    let result = StatusLed::new(writer, MockDelay::default(), 20.0);
    assert!(matches!(result, Err(LedError::TransmitFailed)));
}

// ============================================================================
// Tests: Helligkeit
// ============================================================================

#[test]
fn test_set_brightness_clamps() {
    let mut led = controller(20.0);

    led.set_brightness(150.0);
    assert_eq!(led.brightness(), 1.0);

    led.set_brightness(-10.0);
    assert_eq!(led.brightness(), 0.0);

    led.set_brightness(55.0);
    assert_eq!(led.brightness(), 55.0 / 100.0);
    assert_eq!(led.brightness_percent(), 55);
}

#[test]
fn test_set_brightness_does_not_transmit() {
    let mut led = controller(20.0);
    led.set_brightness(80.0);
    let (writer, _) = parts(led);
    assert!(writer.frames.is_empty());
}

#[test]
fn test_set_brightness_independent_of_prior_state() {
    for start in [0.0, 20.0, 100.0] {
        let mut led = controller(start);
        led.set_brightness(35.0);
        assert_eq!(led.brightness(), 35.0 / 100.0);
    }
}

// ============================================================================
// Tests: Feste Farben
// ============================================================================

#[test]
fn test_white_at_20_percent() {
    let mut led = controller(20.0);
    led.white().unwrap();
    assert_eq!(led.pixel(), RGB8 { r: 51, g: 51, b: 51 });
}

#[test]
fn test_fixed_colors_at_full_brightness() {
    let mut led = controller(100.0);
    led.red().unwrap();
    led.green().unwrap();
    led.blue().unwrap();
    led.yellow().unwrap();
    led.magenta().unwrap();
    led.cyan().unwrap();
    led.white().unwrap();
    led.off().unwrap();

    let (writer, _) = parts(led);
    assert_eq!(
        writer.frames,
        vec![
            colors::RED,
            colors::GREEN,
            colors::BLUE,
            colors::YELLOW,
            colors::MAGENTA,
            colors::CYAN,
            colors::WHITE,
            colors::OFF,
        ]
    );
}

#[test]
fn test_off_twice_is_idempotent() {
    let mut led = controller(40.0);
    led.off().unwrap();
    led.off().unwrap();
    assert_eq!(led.brightness(), 0.4);

    let (writer, _) = parts(led);
    assert_eq!(writer.frames, vec![colors::OFF, colors::OFF]);
}

#[test]
fn test_set_rgb_matches_scaling_formula() {
    let cases = [(255, 128, 7), (-30, 400, 200), (1, 2, 3)];
    for percent in [0.0, 13.0, 50.0, 99.0, 100.0] {
        for (r, g, b) in cases {
            let mut led = controller(percent);
            led.set_rgb(r, g, b).unwrap();

            let factor = percent / 100.0;
            let expected = RGB8 {
                r: (r.clamp(0, 255) as f32 * factor) as u8,
                g: (g.clamp(0, 255) as f32 * factor) as u8,
                b: (b.clamp(0, 255) as f32 * factor) as u8,
            };
            assert_eq!(led.pixel(), expected, "rgb ({r}, {g}, {b}) at {percent}%");
        }
    }
}

#[test]
fn test_color_op_propagates_transmit_failure() {
    let mut writer = MockLedWriter::new();
    writer.fail_after = Some(1); // nur der Konstruktor kommt durch
    let mut led = StatusLed::new(writer, MockDelay::default(), 20.0).unwrap();

    assert_eq!(led.red(), Err(LedError::TransmitFailed));
    assert_eq!(led.white(), Err(LedError::TransmitFailed));
    assert_eq!(led.set_rgb(1, 2, 3), Err(LedError::TransmitFailed));
}

#[test]
fn test_mock_led_writer_recovers_after_fail() {
    let mut mock = MockLedWriter::new();
    mock.fail_next_write = true;

    // First write fails
    let result1 = mock.write(&[colors::RED]);
    assert!(result1.is_err());

    // Second write succeeds
    let result2 = mock.write(&[colors::GREEN]);
    assert!(result2.is_ok());
    assert_eq!(mock.write_count, 1);
    assert_eq!(mock.last_color(), Some(colors::GREEN));
}

// ============================================================================
// Tests: Blink
// ============================================================================

#[test]
fn test_blink_phases_and_waits() {
    let mut led = controller(100.0);
    led.blink(255, 0, 0, Duration::from_millis(100), 3).unwrap();

    let (writer, delay) = parts(led);
    assert_eq!(
        writer.frames,
        vec![
            colors::RED,
            colors::OFF,
            colors::RED,
            colors::OFF,
            colors::RED,
            colors::OFF,
        ]
    );
    assert_eq!(delay.waits_us, vec![100_000; 6]);
}

#[test]
fn test_blink_zero_count_does_nothing() {
    let mut led = controller(50.0);
    led.blink(0, 255, 0, Duration::from_millis(100), 0).unwrap();

    let (writer, delay) = parts(led);
    assert!(writer.frames.is_empty());
    assert!(delay.waits_us.is_empty());
}

#[test]
fn test_blink_zero_delay_is_instant() {
    let mut led = controller(100.0);
    led.blink(0, 0, 255, Duration::ZERO, 2).unwrap();

    let (writer, delay) = parts(led);
    assert_eq!(writer.frames.len(), 4);
    assert!(delay.waits_us.is_empty());
}

#[test]
fn test_blink_uses_configured_brightness() {
    let mut led = controller(20.0);
    led.blink(255, 255, 255, Duration::from_millis(1), 1).unwrap();

    let (writer, _) = parts(led);
    assert_eq!(writer.frames, vec![RGB8 { r: 51, g: 51, b: 51 }, colors::OFF]);
}

#[test]
fn test_blink_aborts_on_transmit_failure() {
    let mut writer = MockLedWriter::new();
    writer.fail_after = Some(2); // Konstruktor + erstes An
    let mut led = StatusLed::new(writer, MockDelay::default(), 100.0).unwrap();

    let result = led.blink(255, 0, 0, Duration::from_millis(10), 5);
    assert_eq!(result, Err(LedError::TransmitFailed));

    let (writer, delay) = led.into_parts();
    assert_eq!(writer.frames, vec![colors::OFF, colors::RED]);
    assert_eq!(delay.waits_us, vec![10_000]);
}

#[test]
fn test_blink_long_delay_waits_full_duration() {
    // 2 h pro Phase, mehr als u32::MAX Mikrosekunden
    let mut led = controller(100.0);
    led.blink(255, 0, 0, Duration::from_secs(7_200), 1).unwrap();

    let (writer, delay) = parts(led);
    assert_eq!(writer.frames, vec![colors::RED, colors::OFF]);
    assert_eq!(
        delay.waits_us,
        vec![u32::MAX, 2_905_032_705, u32::MAX, 2_905_032_705]
    );
    let total: u64 = delay.waits_us.iter().map(|&us| u64::from(us)).sum();
    assert_eq!(total, 2 * 7_200_000_000);
}

// ============================================================================
// Tests: Pulse
// ============================================================================

#[test]
fn test_pulse_zero_brightness_uses_full_scale() {
    let mut led = controller(0.0);
    led.pulse(0, 0, 255, 4, Duration::ZERO).unwrap();
    assert_eq!(led.brightness(), 0.0);
    assert_eq!(led.pixel(), colors::OFF);

    let (writer, delay) = parts(led);
    let blues: Vec<u8> = writer.frames.iter().map(|c| c.b).collect();
    assert_eq!(blues, vec![0, 63, 127, 191, 255, 255, 191, 127, 63, 0, 0]);
    assert!(delay.waits_us.is_empty());
}

#[test]
fn test_pulse_keeps_configured_brightness() {
    for percent in [1.0, 20.0, 73.0, 100.0] {
        let mut led = controller(percent);
        let before = led.brightness();
        led.pulse(255, 100, 0, 5, Duration::from_millis(1)).unwrap();
        assert_eq!(led.brightness(), before);
    }
}

#[test]
fn test_pulse_ramp_peaks_at_configured_brightness() {
    let mut led = controller(20.0);
    led.pulse(255, 255, 255, 2, Duration::from_millis(50)).unwrap();

    let (writer, delay) = parts(led);
    let peak = scale_color(colors::WHITE, Brightness::from_percent(20.0));
    let half = scale_color(colors::WHITE, Brightness::from_percent(20.0).ramp_level(1, 2));
    assert_eq!(
        writer.frames,
        vec![colors::OFF, half, peak, peak, half, colors::OFF, colors::OFF]
    );
    // 2 * (steps + 1) Pausen, das Ausschalten am Ende wartet nicht
    assert_eq!(delay.waits_us, vec![50_000; 6]);
}

#[test]
fn test_pulse_aborts_on_transmit_failure() {
    let mut writer = MockLedWriter::new();
    writer.fail_after = Some(3); // Konstruktor + zwei Rampen-Frames
    let mut led = StatusLed::new(writer, MockDelay::default(), 100.0).unwrap();

    let result = led.pulse(0, 0, 255, 4, Duration::from_millis(10));
    assert_eq!(result, Err(LedError::TransmitFailed));
    assert_eq!(led.brightness(), 1.0);

    let (writer, delay) = led.into_parts();
    assert_eq!(
        writer.frames,
        vec![colors::OFF, colors::OFF, RGB8 { r: 0, g: 0, b: 63 }]
    );
    // keine Pause nach dem fehlgeschlagenen Frame
    assert_eq!(delay.waits_us, vec![10_000, 10_000]);
}

#[test]
fn test_pulse_rejects_zero_steps() {
    let mut led = controller(20.0);
    let result = led.pulse(0, 0, 255, 0, Duration::from_millis(10));
    assert_eq!(result, Err(LedError::InvalidSteps));

    let (writer, delay) = parts(led);
    assert!(writer.frames.is_empty());
    assert!(delay.waits_us.is_empty());
}

// ============================================================================
// Tests: Effekt-Zustandsmaschine über den Controller
// ============================================================================

#[test]
fn test_render_frames_manually() {
    let mut led = controller(100.0);
    let params = BlinkParams {
        delay: Duration::from_millis(5),
        count: 1,
    };
    let mut effect = Effect::blink(colors::GREEN, params, led.brightness_level());
    while let Some(frame) = effect.next_frame() {
        led.render(&frame).unwrap();
    }

    let (writer, delay) = parts(led);
    assert_eq!(writer.frames, vec![colors::GREEN, colors::OFF]);
    assert!(delay.waits_us.is_empty());
}

// ============================================================================
// Tests: LedCommand
// ============================================================================

#[test]
fn test_led_command_try_from_red() {
    let cmd = LedCommand::try_from("red");
    assert_eq!(
        cmd,
        Ok(LedCommand::SetColor {
            color: colors::RED,
            name: "red",
        })
    );
}

#[test]
fn test_led_command_try_from_off() {
    assert_eq!(LedCommand::try_from("off"), Ok(LedCommand::Off));
}

#[test]
fn test_led_command_try_from_invalid() {
    assert!(LedCommand::try_from("orange").is_err());
    assert!(LedCommand::try_from("Red").is_err());
}

#[test]
fn test_apply_commands() {
    let mut led = controller(100.0);
    led.apply(&LedCommand::SetBrightness(50)).unwrap();
    led.apply(&LedCommand::try_from("cyan").unwrap()).unwrap();
    led.apply(&LedCommand::Blink {
        color: colors::RED,
        params: BlinkParams {
            delay: Duration::from_millis(2),
            count: 1,
        },
    })
    .unwrap();
    led.apply(&LedCommand::Off).unwrap();

    let (writer, delay) = parts(led);
    assert_eq!(
        writer.frames,
        vec![
            RGB8 { r: 0, g: 127, b: 127 },
            RGB8 { r: 127, g: 0, b: 0 },
            colors::OFF,
            colors::OFF,
        ]
    );
    assert_eq!(delay.waits_us, vec![2_000, 2_000]);
}

#[test]
fn test_apply_pulse_with_zero_steps_fails() {
    let mut led = controller(100.0);
    let cmd = LedCommand::Pulse {
        color: colors::BLUE,
        params: PulseParams {
            steps: 0,
            delay: Duration::ZERO,
        },
    };
    assert_eq!(led.apply(&cmd), Err(LedError::InvalidSteps));
}
