//! # Módulo de Procesos
//!
//! Este módulo define el registro de un proceso simulado: su identidad,
//! los datos de entrada (llegada y ráfaga) y las métricas que el planificador
//! calcula durante la simulación.

use std::str::FromStr;

use serde::Serialize;

use crate::error::SimulationError;

/// Unidad de tiempo lógica de la simulación.
pub type Time = i64;

/// Representa un proceso que compite por la CPU.
///
/// Los campos de entrada (`name`, `arrival_time`, `burst_time`) son inmutables.
/// Los campos derivados solo los modifica el planificador; desde fuera del
/// crate únicamente pueden leerse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    name: String,
    arrival_time: Time,
    burst_time: Time,
    remaining_time: Time,
    waiting_time: Time,
    response_time: Option<Time>,
    completion_time: Option<Time>,
    turnaround_time: Option<Time>,
}

impl Process {
    /// Crea un nuevo proceso sin métricas calculadas.
    ///
    /// # Arguments
    ///
    /// * `name` - Identificador único del proceso
    /// * `arrival_time` - Momento en que el proceso llega al sistema
    /// * `burst_time` - Tiempo total de CPU que necesita el proceso
    ///
    /// # Examples
    ///
    /// ```rust
    /// use round_robin_simulator::Process;
    ///
    /// let process = Process::new("P1", 0, 5);
    /// assert_eq!(process.remaining_time(), 5);
    /// assert_eq!(process.response_time(), None);
    /// assert!(!process.is_completed());
    /// ```
    pub fn new(name: impl Into<String>, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            waiting_time: 0,
            response_time: None,
            completion_time: None,
            turnaround_time: None,
        }
    }

    /// Copia limpia del proceso: conserva los datos de entrada y descarta
    /// cualquier métrica acumulada.
    pub fn fresh_copy(&self) -> Self {
        Self::new(self.name.clone(), self.arrival_time, self.burst_time)
    }

    /// Obtiene el nombre del proceso.
    ///
    /// # Returns
    ///
    /// El identificador único del proceso dentro de una simulación
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instante en que el proceso entra al sistema.
    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    /// Tiempo total de CPU que el proceso necesita.
    pub fn burst_time(&self) -> Time {
        self.burst_time
    }

    /// Obtiene el tiempo de CPU que aún le falta al proceso.
    ///
    /// # Returns
    ///
    /// La ráfaga pendiente; `0` cuando el proceso ya terminó
    ///
    /// # Examples
    ///
    /// ```rust
    /// use round_robin_simulator::{schedule, Process};
    ///
    /// let process = Process::new("P1", 0, 5);
    /// assert_eq!(process.remaining_time(), 5);
    ///
    /// let completed = schedule(&[process], 2).unwrap();
    /// assert_eq!(completed[0].remaining_time(), 0);
    /// ```
    pub fn remaining_time(&self) -> Time {
        self.remaining_time
    }

    /// Tiempo total que el proceso pasó listo pero sin ejecutarse.
    pub fn waiting_time(&self) -> Time {
        self.waiting_time
    }

    /// Tiempo desde la llegada hasta el primer despacho, `None` si nunca se ejecutó.
    pub fn response_time(&self) -> Option<Time> {
        self.response_time
    }

    /// Obtiene el instante en que el proceso terminó.
    ///
    /// # Returns
    ///
    /// `Some(t)` para un proceso completado, `None` en otro caso
    ///
    /// # Examples
    ///
    /// ```rust
    /// use round_robin_simulator::{schedule, Process};
    ///
    /// let process = Process::new("P1", 2, 3);
    /// assert_eq!(process.completion_time(), None);
    ///
    /// let completed = schedule(&[process], 4).unwrap();
    /// assert_eq!(completed[0].completion_time(), Some(5));
    /// ```
    pub fn completion_time(&self) -> Option<Time> {
        self.completion_time
    }

    /// Tiempo de retorno: finalización menos llegada.
    ///
    /// # Returns
    ///
    /// `None` mientras el proceso no haya completado
    pub fn turnaround_time(&self) -> Option<Time> {
        self.turnaround_time
    }

    /// Verifica si el proceso ya recibió CPU al menos una vez.
    pub fn has_started(&self) -> bool {
        self.response_time.is_some()
    }

    /// Verifica si el proceso terminó su ráfaga completa.
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Registra un despacho en `now`. Solo el primero fija el tiempo de respuesta.
    pub(crate) fn record_dispatch(&mut self, now: Time) {
        if self.response_time.is_none() {
            self.response_time = Some(now - self.arrival_time);
        }
    }

    /// Consume `slice` unidades de ráfaga.
    pub(crate) fn run_for(&mut self, slice: Time) {
        debug_assert!(slice > 0 && slice <= self.remaining_time);
        self.remaining_time -= slice;
    }

    pub(crate) fn accrue_wait(&mut self, amount: Time) {
        self.waiting_time += amount;
    }

    /// Marca el proceso como completado en `now`.
    pub(crate) fn complete(&mut self, now: Time) {
        debug_assert_eq!(self.remaining_time, 0);
        if self.completion_time.is_none() {
            self.completion_time = Some(now);
            self.turnaround_time = Some(now - self.arrival_time);
        }
    }

    /// Representación corta del estado actual, útil para logs.
    pub fn status_summary(&self) -> String {
        match self.completion_time {
            Some(done) => format!("{}: completado en t={}", self.name, done),
            None => format!(
                "{}: {}/{} unidades restantes",
                self.name, self.remaining_time, self.burst_time
            ),
        }
    }
}

/// Interpreta el formato `NOMBRE:LLEGADA:RAFAGA`, por ejemplo `P1:0:5`.
///
/// Solo valida la forma del texto; los rangos de llegada y ráfaga los
/// valida el planificador.
impl FromStr for Process {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SimulationError::InvalidProcessSpec(s.to_string());

        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [name, arrival, burst] = parts.as_slice() else {
            return Err(invalid());
        };
        if name.is_empty() {
            return Err(invalid());
        }

        let arrival: Time = arrival.parse().map_err(|_| invalid())?;
        let burst: Time = burst.parse().map_err(|_| invalid())?;

        Ok(Self::new(*name, arrival, burst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process_defaults() {
        let process = Process::new("P1", 2, 7);
        assert_eq!(process.name(), "P1");
        assert_eq!(process.arrival_time(), 2);
        assert_eq!(process.burst_time(), 7);
        assert_eq!(process.remaining_time(), 7);
        assert_eq!(process.waiting_time(), 0);
        assert_eq!(process.completion_time(), None);
        assert_eq!(process.turnaround_time(), None);
        assert!(!process.has_started());
    }

    #[test]
    fn test_response_time_set_once() {
        let mut process = Process::new("P1", 1, 6);
        process.record_dispatch(4);
        process.record_dispatch(10);
        assert_eq!(process.response_time(), Some(3));
    }

    #[test]
    fn test_completion_sets_turnaround() {
        let mut process = Process::new("P1", 3, 2);
        process.record_dispatch(3);
        process.run_for(2);
        process.complete(5);
        assert!(process.is_completed());
        assert_eq!(process.completion_time(), Some(5));
        assert_eq!(process.turnaround_time(), Some(2));
        assert_eq!(process.status_summary(), "P1: completado en t=5");
    }

    #[test]
    fn test_fresh_copy_discards_metrics() {
        let mut process = Process::new("P1", 0, 4);
        process.record_dispatch(0);
        process.run_for(3);
        process.accrue_wait(2);

        let copy = process.fresh_copy();
        assert_eq!(copy, Process::new("P1", 0, 4));
    }

    #[test]
    fn test_parse_process_spec() {
        let process: Process = "P3:2:8".parse().unwrap();
        assert_eq!(process, Process::new("P3", 2, 8));

        let spaced: Process = " A : 0 : 10 ".parse().unwrap();
        assert_eq!(spaced.name(), "A");
    }

    #[test]
    fn test_parse_invalid_process_spec() {
        for spec in ["P1", "P1:0", ":0:5", "P1:x:5", "P1:0:5:1", "P1:0:"] {
            let err = spec.parse::<Process>().unwrap_err();
            assert_eq!(err, SimulationError::InvalidProcessSpec(spec.to_string()));
        }
    }

    #[test]
    fn test_parse_leaves_range_checks_to_scheduler() {
        let process: Process = "P1:-1:0".parse().unwrap();
        assert_eq!(process.arrival_time(), -1);
        assert_eq!(process.burst_time(), 0);
    }
}
