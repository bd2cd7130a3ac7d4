// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod demo;
pub mod hal;
pub mod tasks;

// Re-exports von status-led-core
pub use status_led_core::{
    Effect, LedCommand, LedController, LedError, SmartLedWriter, StatusLed, colors,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::COMMAND_QUEUE_SIZE;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Receiver<'static, NoopRawMutex, LedCommand, COMMAND_QUEUE_SIZE>
// Nutze:  LedCommandReceiver

/// Channel für LED-Kommandos (main → LED Task)
/// - COMMAND_QUEUE_SIZE: Nachrichten-Kapazität
pub type LedCommandChannel = Channel<NoopRawMutex, LedCommand, COMMAND_QUEUE_SIZE>;

/// Sender für LED-Kommandos
/// Erzeugt aus LedCommandChannel
pub type LedCommandSender = Sender<'static, NoopRawMutex, LedCommand, COMMAND_QUEUE_SIZE>;

/// Receiver für LED-Kommandos (LED Task empfängt)
/// Empfängt Commands von LedCommandSender
pub type LedCommandReceiver = Receiver<'static, NoopRawMutex, LedCommand, COMMAND_QUEUE_SIZE>;
