//! # Simulador de Planificación Round Robin
//!
//! Esta biblioteca simula la planificación de CPU con el algoritmo Round Robin:
//! dada una lista de procesos con tiempo de llegada y ráfaga, y un quantum fijo,
//! calcula para cada proceso su tiempo de finalización, espera, turnaround y
//! respuesta, y produce una traza paso a paso de las decisiones tomadas.
//!
//! ## Características principales
//!
//! - **Reloj lógico**: la simulación es un ciclo de eventos discretos; no hay
//!   esperas reales ni hilos.
//! - **Determinismo**: el planificador trabaja sobre copias de la entrada, así
//!   que la misma lista produce siempre el mismo resultado.
//! - **Trazas desacopladas**: los eventos se emiten a un `TraceSink`
//!   (memoria, log o silencio) en lugar de imprimirse directamente.
//! - **Reportes**: tabla de texto, CSV y JSON.
//!
//! ## Estructura del proyecto
//!
//! - `process`: registro de un proceso y sus métricas
//! - `trace`: eventos de traza y sus destinos
//! - `scheduler`: algoritmos de planificación (Round Robin y FCFS)
//! - `metrics`: cálculo de promedios y generación de reportes
//! - `simulation`: orquestador de una ejecución completa
//! - `error`: errores de configuración y de entrada
//! - `logger`: backend de `log` para la línea de comandos

pub mod error;
pub mod logger;
pub mod metrics;
pub mod process;
pub mod scheduler;
pub mod simulation;
pub mod trace;

// Re-exportar las estructuras principales para facilitar su uso
pub use error::SimulationError;
pub use metrics::{summarize, MetricsReporter, ProcessMetrics, SimulationSummary};
pub use process::{Process, Time};
pub use scheduler::{schedule, schedule_with_trace, Scheduler, SchedulingAlgorithm};
pub use simulation::{Simulation, SimulationOutcome};
pub use trace::{EventKind, LogSink, NullSink, Tee, TraceEvent, TraceLog, TraceSink};

/// Configuración por defecto del simulador
pub mod config {
    use super::{Process, Time};

    /// Quantum por defecto para Round Robin
    pub const DEFAULT_QUANTUM: Time = 4;

    /// Un conjunto de procesos con su quantum, listo para simular.
    #[derive(Debug, Clone)]
    pub struct Scenario {
        pub title: &'static str,
        pub processes: Vec<Process>,
        pub quantum: Time,
    }

    /// Procesos con llegadas escalonadas y ráfagas distintas.
    pub fn default_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
            Process::new("P4", 3, 6),
        ]
    }

    /// Procesos que llegan todos al mismo tiempo.
    pub fn simultaneous_processes() -> Vec<Process> {
        vec![
            Process::new("A", 0, 10),
            Process::new("B", 0, 5),
            Process::new("C", 0, 8),
        ]
    }

    /// Escenarios de demostración que ejecuta el binario sin argumentos.
    pub fn default_scenarios() -> Vec<Scenario> {
        vec![
            Scenario {
                title: "EJEMPLO 1: Procesos con diferentes características",
                processes: default_processes(),
                quantum: DEFAULT_QUANTUM,
            },
            Scenario {
                title: "EJEMPLO 2: Todos los procesos llegan al mismo tiempo",
                processes: simultaneous_processes(),
                quantum: 3,
            },
        ]
    }
}
