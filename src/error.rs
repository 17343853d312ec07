//! # Módulo de Errores
//!
//! Errores que puede producir la simulación. Todos son violaciones de
//! precondiciones detectadas antes de simular (o al resumir), nunca fallos
//! transitorios.

use std::error::Error;
use std::fmt;

use crate::process::Time;

/// Errores del simulador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// El quantum debe ser al menos 1
    InvalidQuantum(Time),
    /// Un proceso con ráfaga menor a 1
    InvalidBurst {
        /// Nombre del proceso
        name: String,
        /// Ráfaga recibida
        burst: Time,
    },
    /// Un proceso con tiempo de llegada negativo
    InvalidArrival {
        /// Nombre del proceso
        name: String,
        /// Llegada recibida
        arrival: Time,
    },
    /// Dos procesos comparten el mismo nombre
    DuplicateProcess(String),
    /// La llegada más tardía más la ráfaga total no cabe en `Time`
    TimeOverflow,
    /// Texto de proceso que no sigue el formato `NOMBRE:LLEGADA:RAFAGA`
    InvalidProcessSpec(String),
    /// No hay procesos completados que resumir
    EmptyInput,
    /// Se pidió resumir un proceso que no ha terminado
    IncompleteProcess(String),
}

impl SimulationError {
    /// Indica si el error corresponde a una configuración de entrada inválida.
    ///
    /// ```rust
    /// use round_robin_simulator::SimulationError;
    ///
    /// assert!(SimulationError::InvalidQuantum(0).is_invalid_configuration());
    /// assert!(!SimulationError::EmptyInput.is_invalid_configuration());
    /// ```
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuantum(_)
                | Self::InvalidBurst { .. }
                | Self::InvalidArrival { .. }
                | Self::DuplicateProcess(_)
                | Self::TimeOverflow
                | Self::InvalidProcessSpec(_)
        )
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuantum(quantum) => {
                write!(f, "Quantum inválido: {} (debe ser >= 1)", quantum)
            }
            Self::InvalidBurst { name, burst } => {
                write!(f, "Ráfaga inválida para {}: {} (debe ser >= 1)", name, burst)
            }
            Self::InvalidArrival { name, arrival } => {
                write!(f, "Llegada inválida para {}: {} (debe ser >= 0)", name, arrival)
            }
            Self::DuplicateProcess(name) => write!(f, "Proceso duplicado: {}", name),
            Self::TimeOverflow => write!(
                f,
                "Los tiempos de llegada y ráfaga exceden el rango del reloj de simulación"
            ),
            Self::InvalidProcessSpec(spec) => write!(
                f,
                "Proceso inválido '{}': se esperaba NOMBRE:LLEGADA:RAFAGA",
                spec
            ),
            Self::EmptyInput => write!(f, "No hay procesos completados para resumir"),
            Self::IncompleteProcess(name) => {
                write!(f, "El proceso {} no ha completado su ejecución", name)
            }
        }
    }
}

impl Error for SimulationError {}
