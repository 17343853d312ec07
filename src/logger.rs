//! # Módulo de Logging
//!
//! Backend mínimo para la fachada `log`: escribe cada registro en stderr con
//! el formato `[NIVEL] mensaje`, de modo que los reportes en stdout no se
//! mezclen con la traza.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

struct SimulatorLogger;

impl log::Log for SimulatorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimulatorLogger = SimulatorLogger;

/// Instala el logger con el nivel máximo indicado.
///
/// Solo puede instalarse un logger por proceso; una segunda llamada
/// devuelve `SetLoggerError`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Traduce la cantidad de `-v` y la bandera de silencio a un nivel.
///
/// ```rust
/// use log::LevelFilter;
/// use round_robin_simulator::logger::level_for;
///
/// assert_eq!(level_for(0, false), LevelFilter::Info);
/// assert_eq!(level_for(1, false), LevelFilter::Debug);
/// assert_eq!(level_for(3, true), LevelFilter::Warn);
/// ```
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
