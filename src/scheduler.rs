//! # Módulo de Algoritmos de Planificación
//!
//! Este módulo implementa el planificador de CPU: una simulación de eventos
//! discretos guiada por un reloj lógico. Round Robin es el algoritmo
//! principal; FCFS se obtiene con el mismo ciclo usando un quantum igual a la
//! ráfaga restante, lo que sirve de referencia para comparar.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::error::SimulationError;
use crate::process::{Process, Time};
use crate::trace::{EventKind, NullSink, TraceEvent, TraceSink};

/// Algoritmos de planificación disponibles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulingAlgorithm {
    /// First-Come First-Served: cada proceso corre hasta terminar, en orden
    /// de llegada.
    Fcfs,

    /// Round Robin: cada proceso recibe como máximo `quantum` unidades antes
    /// de ser interrumpido y volver al final de la cola.
    RoundRobin {
        /// Tiempo máximo de ejecución continua por ronda
        quantum: Time,
    },
}

impl SchedulingAlgorithm {
    /// Crea un nuevo algoritmo FCFS.
    pub fn fcfs() -> Self {
        Self::Fcfs
    }

    /// Crea un nuevo algoritmo Round Robin con el quantum especificado.
    ///
    /// El quantum se valida al ejecutar, no aquí.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use round_robin_simulator::SchedulingAlgorithm;
    ///
    /// let algorithm = SchedulingAlgorithm::round_robin(4);
    /// assert_eq!(algorithm.get_quantum(), Some(4));
    /// ```
    pub fn round_robin(quantum: Time) -> Self {
        Self::RoundRobin { quantum }
    }

    /// Determina si el algoritmo es preemptivo.
    pub fn is_preemptive(&self) -> bool {
        match self {
            Self::Fcfs => false,
            Self::RoundRobin { .. } => true,
        }
    }

    /// Calcula cuánto corre un proceso en esta ronda.
    ///
    /// # Arguments
    ///
    /// * `remaining_time` - Ráfaga restante del proceso
    ///
    /// # Examples
    ///
    /// ```rust
    /// use round_robin_simulator::SchedulingAlgorithm;
    ///
    /// assert_eq!(SchedulingAlgorithm::fcfs().calculate_quantum(7), 7);
    /// assert_eq!(SchedulingAlgorithm::round_robin(4).calculate_quantum(7), 4);
    /// assert_eq!(SchedulingAlgorithm::round_robin(4).calculate_quantum(1), 1);
    /// ```
    pub fn calculate_quantum(&self, remaining_time: Time) -> Time {
        match self {
            Self::Fcfs => remaining_time,
            Self::RoundRobin { quantum } => remaining_time.min(*quantum),
        }
    }

    /// `Some(quantum)` si es Round Robin, `None` si es FCFS.
    pub fn get_quantum(&self) -> Option<Time> {
        match self {
            Self::Fcfs => None,
            Self::RoundRobin { quantum } => Some(*quantum),
        }
    }

    /// Descripción textual del algoritmo y sus parámetros.
    pub fn description(&self) -> String {
        match self {
            Self::Fcfs => "First-Come First-Served (no preemptivo)".to_string(),
            Self::RoundRobin { quantum } => {
                format!("Round Robin preemptivo (quantum: {} unidades)", quantum)
            }
        }
    }

    fn validate(&self) -> Result<(), SimulationError> {
        match self {
            Self::RoundRobin { quantum } if *quantum < 1 => {
                Err(SimulationError::InvalidQuantum(*quantum))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (quantum {})", quantum),
        }
    }
}

/// Planificador de CPU sobre una lista fija de procesos.
#[derive(Clone, Copy, Debug)]
pub struct Scheduler {
    algorithm: SchedulingAlgorithm,
}

impl Scheduler {
    /// Crea un planificador para el algoritmo dado.
    ///
    /// # Arguments
    ///
    /// * `algorithm` - Política que decide la duración de cada turno
    pub fn new(algorithm: SchedulingAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Algoritmo con el que fue creado el planificador.
    pub fn algorithm(&self) -> SchedulingAlgorithm {
        self.algorithm
    }

    /// Ejecuta la simulación completa y devuelve los procesos en orden de
    /// finalización.
    ///
    /// Trabaja sobre copias limpias de `processes`, por lo que la lista del
    /// llamador nunca se modifica y dos ejecuciones con la misma entrada
    /// producen el mismo resultado. Una lista vacía devuelve un resultado
    /// vacío.
    ///
    /// # Errors
    ///
    /// Devuelve un error de configuración, sin emitir ningún evento, si el
    /// quantum es menor a 1, si algún proceso tiene ráfaga menor a 1 o
    /// llegada negativa, si hay nombres repetidos, o si la llegada más tardía
    /// más la ráfaga total no cabe en `Time` (`TimeOverflow`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use round_robin_simulator::{Process, Scheduler, SchedulingAlgorithm, TraceLog};
    ///
    /// let processes = vec![Process::new("A", 0, 5), Process::new("B", 0, 2)];
    /// let mut trace = TraceLog::new();
    /// let completed = Scheduler::new(SchedulingAlgorithm::round_robin(2))
    ///     .run(&processes, &mut trace)
    ///     .unwrap();
    ///
    /// let order: Vec<&str> = completed.iter().map(|p| p.name()).collect();
    /// assert_eq!(order, ["B", "A"]);
    /// assert_eq!(completed[1].completion_time(), Some(7));
    /// assert!(!trace.is_empty());
    /// ```
    pub fn run<S>(&self, processes: &[Process], sink: &mut S) -> Result<Vec<Process>, SimulationError>
    where
        S: TraceSink + ?Sized,
    {
        self.algorithm.validate()?;
        validate_processes(processes)?;

        let mut pending: Vec<Process> = processes.iter().map(Process::fresh_copy).collect();
        // Estable: las llegadas simultáneas conservan el orden de entrada.
        pending.sort_by_key(Process::arrival_time);
        let mut pending = pending.into_iter().peekable();

        let mut ready: VecDeque<Process> = VecDeque::with_capacity(processes.len());
        let mut completed: Vec<Process> = Vec::with_capacity(processes.len());
        let mut current_time: Time = 0;

        loop {
            while let Some(mut process) = pending.next_if(|p| p.arrival_time() <= current_time) {
                // Llegó durante el quantum anterior: ya estaba listo desde entonces.
                process.accrue_wait(current_time - process.arrival_time());
                sink.emit(TraceEvent::new(current_time, process.name(), EventKind::Arrival));
                ready.push_back(process);
            }

            let Some(mut running) = ready.pop_front() else {
                match pending.peek() {
                    Some(next) => {
                        log::debug!(
                            "CPU ociosa de t={} a t={} (siguiente llegada: {})",
                            current_time,
                            next.arrival_time(),
                            next.name()
                        );
                        current_time = next.arrival_time();
                        continue;
                    }
                    None => break,
                }
            };

            if !running.has_started() {
                log::debug!(
                    "{} recibe la CPU por primera vez en t={}",
                    running.name(),
                    current_time
                );
            }
            running.record_dispatch(current_time);
            let slice = self.algorithm.calculate_quantum(running.remaining_time());
            sink.emit(TraceEvent::new(
                current_time,
                running.name(),
                EventKind::DispatchStart { remaining: running.remaining_time() },
            ));

            current_time += slice;
            running.run_for(slice);
            for waiting in ready.iter_mut() {
                waiting.accrue_wait(slice);
            }

            sink.emit(TraceEvent::new(
                current_time,
                running.name(),
                EventKind::DispatchEnd { remaining: running.remaining_time() },
            ));

            if running.remaining_time() == 0 {
                running.complete(current_time);
                sink.emit(TraceEvent::new(current_time, running.name(), EventKind::Completion));
                completed.push(running);
            } else {
                debug_assert!(self.algorithm.is_preemptive());
                log::debug!("{}", running.status_summary());
                sink.emit(TraceEvent::new(current_time, running.name(), EventKind::Requeue));
                ready.push_back(running);
            }
        }

        Ok(completed)
    }
}

/// Planifica con Round Robin sin traza.
///
/// # Examples
///
/// ```rust
/// use round_robin_simulator::{schedule, Process};
///
/// let completed = schedule(&[Process::new("P1", 0, 5)], 2).unwrap();
/// assert_eq!(completed[0].completion_time(), Some(5));
/// assert_eq!(completed[0].waiting_time(), 0);
/// ```
pub fn schedule(processes: &[Process], quantum: Time) -> Result<Vec<Process>, SimulationError> {
    schedule_with_trace(processes, quantum, &mut NullSink)
}

/// Planifica con Round Robin emitiendo cada transición en `sink`.
pub fn schedule_with_trace<S>(
    processes: &[Process],
    quantum: Time,
    sink: &mut S,
) -> Result<Vec<Process>, SimulationError>
where
    S: TraceSink + ?Sized,
{
    Scheduler::new(SchedulingAlgorithm::round_robin(quantum)).run(processes, sink)
}

fn validate_processes(processes: &[Process]) -> Result<(), SimulationError> {
    let mut names = HashSet::with_capacity(processes.len());
    for process in processes {
        if process.burst_time() < 1 {
            return Err(SimulationError::InvalidBurst {
                name: process.name().to_string(),
                burst: process.burst_time(),
            });
        }
        if process.arrival_time() < 0 {
            return Err(SimulationError::InvalidArrival {
                name: process.name().to_string(),
                arrival: process.arrival_time(),
            });
        }
        if !names.insert(process.name()) {
            return Err(SimulationError::DuplicateProcess(process.name().to_string()));
        }
    }
    horizon(processes)?;
    Ok(())
}

/// Último instante que puede alcanzar el reloj: la llegada más tardía más
/// toda la ráfaga. Ningún tiempo de la simulación lo supera.
fn horizon(processes: &[Process]) -> Result<Time, SimulationError> {
    let latest_arrival = processes.iter().map(Process::arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time()))
        .ok_or(SimulationError::TimeOverflow)
}
