use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use round_robin_simulator::config::{self, Scenario};
use round_robin_simulator::{logger, Process, SchedulingAlgorithm, Simulation, Time};

/// Formato del reporte final.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Csv,
    Json,
}

/// Simulador de planificación de CPU con Round Robin.
///
/// Sin procesos (`-p`) ejecuta los dos escenarios de demostración.
#[derive(Parser, Debug)]
#[command(name = "round-robin-simulator", version, about)]
struct Cli {
    /// Quantum en unidades de tiempo (por defecto el del escenario)
    #[arg(short, long)]
    quantum: Option<Time>,

    /// Proceso en formato NOMBRE:LLEGADA:RAFAGA (repetible)
    #[arg(short = 'p', long = "process", value_name = "NOMBRE:LLEGADA:RAFAGA")]
    processes: Vec<Process>,

    /// Planificar con FCFS en lugar de Round Robin
    #[arg(long, conflicts_with = "quantum")]
    fcfs: bool,

    /// Formato del reporte
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// No mostrar la traza de planificación
    #[arg(long)]
    quiet: bool,

    /// Más detalle en el log (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn scenarios(&self) -> Vec<Scenario> {
        if self.processes.is_empty() {
            return config::default_scenarios();
        }
        vec![Scenario {
            title: "Procesos definidos por el usuario",
            processes: self.processes.clone(),
            quantum: config::DEFAULT_QUANTUM,
        }]
    }

    fn algorithm_for(&self, scenario: &Scenario) -> SchedulingAlgorithm {
        if self.fcfs {
            SchedulingAlgorithm::fcfs()
        } else {
            SchedulingAlgorithm::round_robin(self.quantum.unwrap_or(scenario.quantum))
        }
    }
}

fn run_scenario(cli: &Cli, scenario: Scenario) -> Result<()> {
    let algorithm = cli.algorithm_for(&scenario);
    let simulation = Simulation::with_processes(scenario.processes, algorithm);

    if cli.format == ReportFormat::Text {
        println!("\n{}", "=".repeat(80));
        println!("{}", scenario.title);
        println!("Algoritmo: {}", simulation.algorithm().description());
        println!("{}", "=".repeat(80));
    }

    let outcome = simulation
        .run()
        .with_context(|| format!("falló la simulación '{}'", scenario.title))?;

    match cli.format {
        ReportFormat::Text => print!("{}", simulation.generate_report(&outcome.summary)),
        ReportFormat::Csv => print!("{}", simulation.generate_csv_report(&outcome.summary)),
        ReportFormat::Json => println!(
            "{}",
            simulation
                .generate_json_report(&outcome.summary)
                .context("no se pudo serializar el reporte")?
        ),
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.verbose, cli.quiet))
        .context("no se pudo iniciar el logger")?;

    for scenario in cli.scenarios() {
        run_scenario(&cli, scenario)?;
    }

    Ok(())
}
