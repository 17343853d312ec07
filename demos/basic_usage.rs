//! Ejemplo básico de uso del simulador Round Robin

use round_robin_simulator::{config, MetricsReporter, SchedulingAlgorithm, Simulation};

fn main() {
    println!("=== Ejemplo: Uso Básico del Simulador ===\n");

    let processes = config::default_processes();

    // Ejecutar simulación con FCFS
    println!("1. Ejecutando simulación con FCFS...");
    let fcfs_simulation = Simulation::with_processes(processes.clone(), SchedulingAlgorithm::fcfs());
    let fcfs = fcfs_simulation.run().expect("La simulación FCFS falló");
    println!("{}", fcfs_simulation.generate_report(&fcfs.summary));

    // Ejecutar simulación con Round Robin
    println!("2. Ejecutando simulación con Round Robin (quantum {})...", config::DEFAULT_QUANTUM);
    let rr_simulation = Simulation::with_processes(
        processes,
        SchedulingAlgorithm::round_robin(config::DEFAULT_QUANTUM),
    );
    let rr = rr_simulation.run().expect("La simulación Round Robin falló");

    println!("Traza:");
    for event in &rr.trace {
        println!("  {}", event);
    }
    println!("{}", rr_simulation.generate_report(&rr.summary));

    // Comparación de resultados
    println!("=== Comparación de Algoritmos ===");
    println!("| Métrica                    | FCFS      | Round Robin |");
    println!("|----------------------------|-----------|-------------|");
    let rows = [
        ("Tiempo promedio de espera ", fcfs.summary.average_waiting_time, rr.summary.average_waiting_time),
        ("Tiempo promedio turnaround", fcfs.summary.average_turnaround_time, rr.summary.average_turnaround_time),
        ("Tiempo promedio respuesta ", fcfs.summary.average_response_time, rr.summary.average_response_time),
    ];
    for (label, fcfs_value, rr_value) in rows {
        println!(
            "| {} | {:>9} | {:>11} |",
            label,
            MetricsReporter::format_average(fcfs_value),
            MetricsReporter::format_average(rr_value)
        );
    }

    // Generar CSV para análisis posterior
    let rr_csv = rr_simulation.generate_csv_report(&rr.summary);
    std::fs::write("rr_results.csv", rr_csv).expect("No se pudo escribir archivo RR CSV");

    println!("\n📁 Archivo CSV generado: rr_results.csv");
}
