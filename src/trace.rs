//! # Módulo de Trazas
//!
//! Eventos que el planificador emite en cada transición de estado y los
//! destinos (`TraceSink`) que los reciben. Las trazas son solo informativas:
//! el planificador nunca las consulta para tomar decisiones.

use std::fmt;

use serde::Serialize;

use crate::process::Time;

/// Tipo de transición registrada en la traza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EventKind {
    /// El proceso entra a la cola de listos
    Arrival,
    /// El proceso obtiene la CPU
    DispatchStart {
        /// Ráfaga restante antes del quantum
        remaining: Time,
    },
    /// El proceso libera la CPU
    DispatchEnd {
        /// Ráfaga restante después del quantum
        remaining: Time,
    },
    /// El proceso fue interrumpido y vuelve al final de la cola
    Requeue,
    /// El proceso terminó su ráfaga
    Completion,
}

/// Entrada de la traza de planificación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEvent {
    /// Tiempo lógico de la simulación
    pub time: Time,
    /// Nombre del proceso involucrado
    pub process: String,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl TraceEvent {
    /// Crea un evento de `process` en el instante `time`.
    pub fn new(time: Time, process: impl Into<String>, kind: EventKind) -> Self {
        Self {
            time,
            process: process.into(),
            kind,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tiempo {}: {} ", self.time, self.process)?;
        match self.kind {
            EventKind::Arrival => write!(f, "llega al sistema"),
            EventKind::DispatchStart { remaining } => {
                write!(f, "comienza ejecución (tiempo restante: {})", remaining)
            }
            EventKind::DispatchEnd { remaining } => {
                write!(f, "termina ejecución (tiempo restante: {})", remaining)
            }
            EventKind::Requeue => write!(f, "vuelve a la cola"),
            EventKind::Completion => write!(f, "COMPLETADO"),
        }
    }
}

/// Destino de los eventos de traza.
///
/// El planificador llama a `emit` en orden estricto de tiempo lógico y
/// nunca espera nada del destino.
pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn emit(&mut self, event: TraceEvent) {
        (**self).emit(event);
    }
}

/// Destino silencioso.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

/// Registro en memoria, de solo agregado.
///
/// # Examples
///
/// ```rust
/// use round_robin_simulator::{EventKind, TraceEvent, TraceLog, TraceSink};
///
/// let mut log = TraceLog::new();
/// log.emit(TraceEvent::new(0, "P1", EventKind::Arrival));
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.events()[0].to_string(), "Tiempo 0: P1 llega al sistema");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    /// Crea un registro vacío.
    pub fn new() -> Self {
        Self::default()
    }

    /// Obtiene los eventos registrados.
    ///
    /// # Returns
    ///
    /// Todos los eventos en el orden en que se emitieron
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Número de eventos registrados.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Verifica si no se ha emitido ningún evento.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use round_robin_simulator::{schedule_with_trace, Process, TraceLog};
    ///
    /// let mut log = TraceLog::new();
    /// assert!(log.is_empty());
    ///
    /// // Una configuración inválida no deja rastro
    /// let result = schedule_with_trace(&[Process::new("P1", 0, 3)], 0, &mut log);
    /// assert!(result.is_err());
    /// assert!(log.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Eventos de un proceso concreto, en orden.
    pub fn for_process<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TraceEvent> + 'a {
        self.events.iter().filter(move |event| event.process == name)
    }

    /// Consume el registro y devuelve sus eventos.
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Reenvía cada evento al sistema de logging (`log::info!`).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn emit(&mut self, event: TraceEvent) {
        log::info!("{}", event);
    }
}

/// Duplica cada evento en dos destinos.
pub struct Tee<A, B>(pub A, pub B);

impl<A: TraceSink, B: TraceSink> TraceSink for Tee<A, B> {
    fn emit(&mut self, event: TraceEvent) {
        self.0.emit(event.clone());
        self.1.emit(event);
    }
}
