// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus
// status-led-core, damit die Logik auf dem Host testbar bleibt.

pub mod led_writer;

pub use led_writer::RmtLedWriter;
