//! # Módulo de Métricas y Reportes
//!
//! Este módulo se encarga de calcular las métricas de los procesos
//! completados y de generar los reportes (texto, CSV y JSON) de la
//! simulación.

use serde::Serialize;

use crate::error::SimulationError;
use crate::process::{Process, Time};

/// Métricas individuales de un proceso completado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessMetrics {
    /// Nombre del proceso
    pub name: String,
    /// Tiempo de llegada
    pub arrival_time: Time,
    /// Ráfaga total de CPU
    pub burst_time: Time,
    /// Momento de finalización
    pub completion_time: Time,
    /// Tiempo total en la cola de listos
    pub waiting_time: Time,
    /// Tiempo desde la llegada hasta la finalización
    pub turnaround_time: Time,
    /// Tiempo desde la llegada hasta el primer despacho
    pub response_time: Time,
}

impl ProcessMetrics {
    /// Extrae las métricas de un proceso, que debe estar completado.
    pub fn from_process(process: &Process) -> Result<Self, SimulationError> {
        let incomplete = || SimulationError::IncompleteProcess(process.name().to_string());

        Ok(Self {
            name: process.name().to_string(),
            arrival_time: process.arrival_time(),
            burst_time: process.burst_time(),
            completion_time: process.completion_time().ok_or_else(incomplete)?,
            waiting_time: process.waiting_time(),
            turnaround_time: process.turnaround_time().ok_or_else(incomplete)?,
            response_time: process.response_time().ok_or_else(incomplete)?,
        })
    }
}

/// Métricas agregadas de una simulación.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    /// Métricas de cada proceso, en orden de finalización
    pub processes: Vec<ProcessMetrics>,
    /// Tiempo promedio de espera
    pub average_waiting_time: f64,
    /// Tiempo promedio de turnaround
    pub average_turnaround_time: f64,
    /// Tiempo promedio de respuesta
    pub average_response_time: f64,
    /// Orden de finalización de los procesos
    pub completion_order: Vec<String>,
    /// Momento en que terminó el último proceso
    pub makespan: Time,
    /// Procesos completados por unidad de tiempo
    pub throughput: f64,
}

/// Calculadora de métricas y generador de reportes.
pub struct MetricsReporter;

impl MetricsReporter {
    /// Crea un nuevo generador de reportes.
    pub fn new() -> Self {
        Self
    }

    /// Calcula las métricas agregadas a partir de los procesos completados.
    ///
    /// # Arguments
    ///
    /// * `completed` - Procesos en orden de finalización
    ///
    /// # Errors
    ///
    /// `EmptyInput` si no hay procesos (el promedio de cero elementos no está
    /// definido) e `IncompleteProcess` si alguno no terminó.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use round_robin_simulator::{schedule, MetricsReporter, Process};
    ///
    /// let completed = schedule(&[Process::new("A", 0, 3), Process::new("B", 0, 3)], 3).unwrap();
    /// let summary = MetricsReporter::new().summarize(&completed).unwrap();
    /// assert_eq!(summary.average_waiting_time, 1.5);
    /// assert_eq!(summary.completion_order, ["A", "B"]);
    /// ```
    pub fn summarize(&self, completed: &[Process]) -> Result<SimulationSummary, SimulationError> {
        if completed.is_empty() {
            return Err(SimulationError::EmptyInput);
        }

        let processes = completed
            .iter()
            .map(ProcessMetrics::from_process)
            .collect::<Result<Vec<_>, _>>()?;

        let count = processes.len() as f64;
        let average = |field: fn(&ProcessMetrics) -> Time| {
            processes.iter().map(|m| field(m) as f64).sum::<f64>() / count
        };

        let average_waiting_time = average(|m: &ProcessMetrics| m.waiting_time);
        let average_turnaround_time = average(|m: &ProcessMetrics| m.turnaround_time);
        let average_response_time = average(|m: &ProcessMetrics| m.response_time);

        let makespan = processes
            .iter()
            .map(|m| m.completion_time)
            .max()
            .unwrap_or_default();
        let throughput = if makespan > 0 {
            count / makespan as f64
        } else {
            0.0
        };

        let completion_order = processes.iter().map(|m| m.name.clone()).collect();

        Ok(SimulationSummary {
            processes,
            average_waiting_time,
            average_turnaround_time,
            average_response_time,
            completion_order,
            makespan,
            throughput,
        })
    }

    /// Genera la tabla de métricas con los promedios al final.
    pub fn generate_report(&self, summary: &SimulationSummary) -> String {
        let mut report = String::new();
        let rule = "=".repeat(80);

        report.push_str(&format!("\n{}\n", rule));
        report.push_str("MÉTRICAS DE LOS PROCESOS\n");
        report.push_str(&format!("{}\n", rule));
        report.push_str(&format!(
            "{:<10} {:<10} {:<10} {:<15} {:<10} {:<12} {:<10}\n",
            "Proceso", "Llegada", "Ráfaga", "Finalización", "Espera", "Turnaround", "Respuesta"
        ));
        report.push_str(&format!("{}\n", "-".repeat(80)));

        for m in &summary.processes {
            report.push_str(&format!(
                "{:<10} {:<10} {:<10} {:<15} {:<10} {:<12} {:<10}\n",
                m.name,
                m.arrival_time,
                m.burst_time,
                m.completion_time,
                m.waiting_time,
                m.turnaround_time,
                m.response_time,
            ));
        }

        report.push_str(&format!("{}\n", "-".repeat(80)));
        report.push_str("\nMÉTRICAS PROMEDIO:\n");
        report.push_str(&format!(
            "  Tiempo de espera promedio: {}\n",
            Self::format_average(summary.average_waiting_time)
        ));
        report.push_str(&format!(
            "  Tiempo de turnaround promedio: {}\n",
            Self::format_average(summary.average_turnaround_time)
        ));
        report.push_str(&format!(
            "  Tiempo de respuesta promedio: {}\n",
            Self::format_average(summary.average_response_time)
        ));
        report.push_str(&format!(
            "  Throughput: {:.3} procesos/unidad\n",
            summary.throughput
        ));
        report.push_str(&format!(
            "  Orden de finalización: {}\n",
            summary.completion_order.join(", ")
        ));
        report.push_str(&format!("{}\n", rule));

        report
    }

    /// Genera un reporte en formato CSV, una fila por proceso.
    pub fn generate_csv_report(&self, summary: &SimulationSummary) -> String {
        let mut csv = String::from(
            "Process,ArrivalTime,BurstTime,CompletionTime,WaitingTime,TurnaroundTime,ResponseTime\n",
        );

        for m in &summary.processes {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                m.name,
                m.arrival_time,
                m.burst_time,
                m.completion_time,
                m.waiting_time,
                m.turnaround_time,
                m.response_time
            ));
        }

        csv
    }

    /// Serializa el resumen completo a JSON.
    pub fn generate_json_report(&self, summary: &SimulationSummary) -> serde_json::Result<String> {
        serde_json::to_string_pretty(summary)
    }

    /// Formatea un promedio con dos decimales.
    pub fn format_average(value: f64) -> String {
        format!("{:.2}", value)
    }
}

impl Default for MetricsReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Atajo para `MetricsReporter::new().summarize(completed)`.
pub fn summarize(completed: &[Process]) -> Result<SimulationSummary, SimulationError> {
    MetricsReporter::new().summarize(completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::schedule;

    fn scenario_b() -> Vec<Process> {
        let input = vec![
            Process::new("A", 0, 10),
            Process::new("B", 0, 5),
            Process::new("C", 0, 8),
        ];
        schedule(&input, 3).unwrap()
    }

    #[test]
    fn test_format_average() {
        assert_eq!(MetricsReporter::format_average(12.0), "12.00");
        assert_eq!(MetricsReporter::format_average(59.0 / 3.0), "19.67");
        assert_eq!(MetricsReporter::format_average(3.0), "3.00");
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = MetricsReporter::new().summarize(&[]).unwrap_err();
        assert_eq!(err, SimulationError::EmptyInput);
    }

    #[test]
    fn test_incomplete_process_rejected() {
        let err = summarize(&[Process::new("P1", 0, 3)]).unwrap_err();
        assert_eq!(err, SimulationError::IncompleteProcess("P1".into()));
    }

    #[test]
    fn test_summary_averages() {
        let summary = summarize(&scenario_b()).unwrap();

        assert_eq!(summary.completion_order, ["B", "C", "A"]);
        assert_eq!(summary.average_waiting_time, 12.0);
        assert_eq!(summary.average_response_time, 3.0);
        assert!((summary.average_turnaround_time - 59.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.makespan, 23);
        assert!((summary.throughput - 3.0 / 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_generation() {
        let reporter = MetricsReporter::default();
        let summary = reporter.summarize(&scenario_b()).unwrap();

        let text = reporter.generate_report(&summary);
        assert!(text.contains("MÉTRICAS DE LOS PROCESOS"));
        assert!(text.contains("Tiempo de espera promedio: 12.00"));
        assert!(text.contains("Tiempo de turnaround promedio: 19.67"));
        assert!(text.contains("Orden de finalización: B, C, A"));

        let csv = reporter.generate_csv_report(&summary);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Process,ArrivalTime"));
        assert_eq!(lines[1], "B,0,5,14,9,14,3");
    }

    #[test]
    fn test_json_report() {
        let reporter = MetricsReporter::new();
        let summary = reporter.summarize(&scenario_b()).unwrap();
        let json = reporter.generate_json_report(&summary).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["processes"][2]["name"], "A");
        assert_eq!(value["processes"][2]["completion_time"], 23);
        assert_eq!(value["average_waiting_time"], 12.0);
    }
}
