//! # Módulo de Simulación Principal
//!
//! Coordina una ejecución completa: planifica los procesos, recolecta la
//! traza y calcula las métricas finales.

use crate::config;
use crate::error::SimulationError;
use crate::metrics::{MetricsReporter, SimulationSummary};
use crate::process::Process;
use crate::scheduler::{Scheduler, SchedulingAlgorithm};
use crate::trace::{LogSink, Tee, TraceEvent, TraceLog};

/// Resultado de una simulación.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// Procesos completados en orden de finalización
    pub completed: Vec<Process>,
    /// Traza completa de la ejecución
    pub trace: Vec<TraceEvent>,
    /// Métricas agregadas
    pub summary: SimulationSummary,
}

/// Orquestador de la simulación.
///
/// Guarda la lista de procesos de entrada y el algoritmo; `run` puede
/// llamarse varias veces y siempre produce el mismo resultado.
pub struct Simulation {
    /// Procesos de entrada, en el orden dado por el usuario
    processes: Vec<Process>,
    /// Algoritmo de planificación
    algorithm: SchedulingAlgorithm,
    /// Calculadora de métricas para generar reportes
    reporter: MetricsReporter,
}

impl Simulation {
    /// Crea una simulación sobre los procesos por defecto.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use round_robin_simulator::{Simulation, SchedulingAlgorithm};
    ///
    /// let simulation = Simulation::new(SchedulingAlgorithm::round_robin(4));
    /// let outcome = simulation.run().unwrap();
    /// assert_eq!(outcome.completed.len(), 4);
    /// ```
    pub fn new(algorithm: SchedulingAlgorithm) -> Self {
        Self::with_processes(config::default_processes(), algorithm)
    }

    /// Crea una simulación con procesos personalizados.
    pub fn with_processes(processes: Vec<Process>, algorithm: SchedulingAlgorithm) -> Self {
        Self {
            processes,
            algorithm,
            reporter: MetricsReporter::new(),
        }
    }

    /// Obtiene los procesos de entrada.
    ///
    /// # Returns
    ///
    /// Los procesos tal como se recibieron; `run` nunca los modifica
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Obtiene el algoritmo de planificación configurado.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use round_robin_simulator::{Simulation, SchedulingAlgorithm};
    ///
    /// let simulation = Simulation::new(SchedulingAlgorithm::fcfs());
    /// assert!(!simulation.algorithm().is_preemptive());
    /// ```
    pub fn algorithm(&self) -> SchedulingAlgorithm {
        self.algorithm
    }

    /// Ejecuta la simulación completa.
    ///
    /// Cada evento de la traza se reenvía al log (`info`) además de
    /// guardarse en el resultado.
    ///
    /// # Errors
    ///
    /// Los errores de configuración del planificador, o `EmptyInput` si no
    /// hay procesos que resumir.
    pub fn run(&self) -> Result<SimulationOutcome, SimulationError> {
        log::info!("=== Simulación {} ===", self.algorithm);
        log::info!("{}", self.algorithm.description());
        for process in &self.processes {
            log::debug!(
                "  {} (llegada: {}, ráfaga: {})",
                process.name(),
                process.arrival_time(),
                process.burst_time()
            );
        }

        let mut trace = TraceLog::new();
        let mut sink = Tee(&mut trace, LogSink);
        let completed = Scheduler::new(self.algorithm).run(&self.processes, &mut sink)?;
        drop(sink);
        let summary = self.reporter.summarize(&completed)?;

        log::info!(
            "Simulación completada en t={} ({} procesos)",
            summary.makespan,
            completed.len()
        );

        Ok(SimulationOutcome {
            completed,
            trace: trace.into_events(),
            summary,
        })
    }

    /// Genera un reporte detallado de los resultados.
    pub fn generate_report(&self, summary: &SimulationSummary) -> String {
        self.reporter.generate_report(summary)
    }

    /// Genera un reporte en formato CSV.
    pub fn generate_csv_report(&self, summary: &SimulationSummary) -> String {
        self.reporter.generate_csv_report(summary)
    }

    /// Genera un reporte en formato JSON.
    pub fn generate_json_report(&self, summary: &SimulationSummary) -> serde_json::Result<String> {
        self.reporter.generate_json_report(summary)
    }
}
