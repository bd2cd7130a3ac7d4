// Task-Modul: Enthält alle Embassy Tasks
//
// Der LED-Task besitzt den Controller exklusiv.
// Andere Tasks (hier: main) schicken ihm Kommandos über einen Channel.

pub mod status_led;

// Re-export Tasks für einfachen Import
pub use status_led::status_led_task;
