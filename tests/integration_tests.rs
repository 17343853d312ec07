//! Tests de integración para el simulador Round Robin

use round_robin_simulator::{
    config, schedule, schedule_with_trace, summarize, EventKind, Process, Scheduler,
    SchedulingAlgorithm, Simulation, SimulationError, TraceLog,
};

fn completion_times(completed: &[Process]) -> Vec<(&str, i64)> {
    completed
        .iter()
        .map(|p| (p.name(), p.completion_time().unwrap()))
        .collect()
}

/// Conjuntos de prueba variados: llegadas tardías, huecos ociosos y empates.
fn workloads() -> Vec<Vec<Process>> {
    let mut sets = vec![
        config::default_processes(),
        config::simultaneous_processes(),
        vec![Process::new("solo", 7, 9)],
        vec![
            Process::new("A", 0, 2),
            Process::new("B", 20, 7),
            Process::new("C", 21, 1),
            Process::new("D", 21, 4),
        ],
    ];

    // Generador lineal congruente fijo para que la prueba sea reproducible.
    let mut seed: i64 = 17;
    let mut next = |modulo: i64| {
        seed = (seed * 1_103_515_245 + 12_345) % 2_147_483_648;
        seed % modulo
    };
    for set in 0..6 {
        let processes = (0..8)
            .map(|i| Process::new(format!("G{}-{}", set, i), next(30), next(12) + 1))
            .collect();
        sets.push(processes);
    }

    sets
}

#[test]
fn test_scenario_staggered_arrivals() {
    let completed = schedule(&config::default_processes(), 4).unwrap();

    assert_eq!(
        completion_times(&completed),
        vec![("P1", 5), ("P2", 8), ("P3", 20), ("P4", 22)]
    );

    let waits: Vec<i64> = completed.iter().map(Process::waiting_time).collect();
    assert_eq!(waits, vec![0, 4, 10, 13]);

    let responses: Vec<i64> = completed.iter().map(|p| p.response_time().unwrap()).collect();
    assert_eq!(responses, vec![0, 4, 6, 9]);
}

#[test]
fn test_scenario_simultaneous_arrivals() {
    let completed = schedule(&config::simultaneous_processes(), 3).unwrap();
    assert_eq!(
        completion_times(&completed),
        vec![("B", 14), ("C", 22), ("A", 23)]
    );

    let summary = summarize(&completed).unwrap();
    assert_eq!(summary.average_waiting_time, 12.0);
    for metrics in &summary.processes {
        assert!(metrics.waiting_time >= 0);
        assert!(metrics.response_time >= 0);
    }
}

#[test]
fn test_conservation_and_response_bound() {
    for quantum in [1, 2, 3, 5, 13] {
        for processes in workloads() {
            let completed = schedule(&processes, quantum).unwrap();
            assert_eq!(completed.len(), processes.len());

            for p in &completed {
                let completion = p.completion_time().unwrap();
                assert_eq!(
                    completion,
                    p.arrival_time() + p.waiting_time() + p.burst_time(),
                    "conservación para {} con quantum {}",
                    p.name(),
                    quantum
                );
                assert_eq!(p.turnaround_time(), Some(completion - p.arrival_time()));
                assert_eq!(p.remaining_time(), 0);

                let response = p.response_time().unwrap();
                assert!(response >= 0);
                assert!(response <= p.waiting_time());
            }
        }
    }
}

#[test]
fn test_input_is_not_mutated() {
    for processes in workloads() {
        let before = processes.clone();
        schedule(&processes, 2).unwrap();
        assert_eq!(processes, before);
    }
}

#[test]
fn test_schedule_is_idempotent() {
    for processes in workloads() {
        let mut first_trace = TraceLog::new();
        let mut second_trace = TraceLog::new();
        let first = schedule_with_trace(&processes, 3, &mut first_trace).unwrap();
        let second = schedule_with_trace(&processes, 3, &mut second_trace).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_trace, second_trace);
    }
}

#[test]
fn test_completed_records_can_be_rescheduled() {
    let completed = schedule(&config::default_processes(), 4).unwrap();
    let again = schedule(&completed, 4).unwrap();
    assert_eq!(completed, again);
}

#[test]
fn test_large_quantum_degenerates_to_fcfs() {
    for processes in workloads() {
        let max_burst = processes.iter().map(Process::burst_time).max().unwrap();
        let fcfs = Scheduler::new(SchedulingAlgorithm::fcfs())
            .run(&processes, &mut TraceLog::new())
            .unwrap();

        for quantum in [max_burst, max_burst + 10] {
            let rr = schedule(&processes, quantum).unwrap();
            assert_eq!(completion_times(&rr), completion_times(&fcfs));
        }
    }
}

#[test]
fn test_trace_is_time_ordered_and_complete() {
    let processes = workloads().pop().unwrap();
    let mut trace = TraceLog::new();
    schedule_with_trace(&processes, 2, &mut trace).unwrap();

    let times: Vec<i64> = trace.events().iter().map(|e| e.time).collect();
    assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));

    for p in &processes {
        let events: Vec<_> = trace.for_process(p.name()).collect();
        assert_eq!(events.first().unwrap().kind, EventKind::Arrival);
        assert_eq!(events.last().unwrap().kind, EventKind::Completion);

        let arrivals = events.iter().filter(|e| e.kind == EventKind::Arrival).count();
        let starts = events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::DispatchStart { .. }))
            .count();
        let requeues = events.iter().filter(|e| e.kind == EventKind::Requeue).count();
        assert_eq!(arrivals, 1);
        assert_eq!(starts, requeues + 1);
    }
}

#[test]
fn test_invalid_configuration_produces_no_trace() {
    let cases = vec![
        (vec![Process::new("P1", 0, 3)], 0),
        (vec![Process::new("P1", 0, 3), Process::new("P2", 0, 0)], 2),
        (vec![Process::new("P1", -1, 3)], 2),
        (vec![Process::new("P1", 0, 3), Process::new("P1", 4, 3)], 2),
    ];

    for (processes, quantum) in cases {
        let mut trace = TraceLog::new();
        let err = schedule_with_trace(&processes, quantum, &mut trace).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(trace.is_empty());
    }
}

#[test]
fn test_arrival_at_clock_limit_is_rejected() {
    let process: Process = format!("A:{}:1", i64::MAX).parse().unwrap();
    let simulation = Simulation::with_processes(vec![process], SchedulingAlgorithm::round_robin(1));
    assert_eq!(simulation.run().unwrap_err(), SimulationError::TimeOverflow);
}

#[test]
fn test_reporter_rejects_empty_input() {
    let completed = schedule(&[], 4).unwrap();
    assert!(completed.is_empty());
    assert_eq!(summarize(&completed).unwrap_err(), SimulationError::EmptyInput);
}

#[test]
fn test_report_generation() {
    let simulation = Simulation::new(SchedulingAlgorithm::round_robin(config::DEFAULT_QUANTUM));
    let outcome = simulation.run().unwrap();

    let text_report = simulation.generate_report(&outcome.summary);
    assert!(text_report.contains("MÉTRICAS DE LOS PROCESOS"));
    assert!(text_report.contains("MÉTRICAS PROMEDIO"));

    let csv_report = simulation.generate_csv_report(&outcome.summary);
    let lines: Vec<&str> = csv_report.lines().collect();
    assert_eq!(lines.len(), 5); // 1 encabezado + 4 procesos
    assert_eq!(lines[4], "P4,3,6,22,13,19,9");

    let json_report = simulation.generate_json_report(&outcome.summary).unwrap();
    assert!(json_report.contains("\"completion_order\""));
}

#[test]
fn test_fcfs_vs_round_robin_response() {
    let processes = config::simultaneous_processes();
    let fcfs = Simulation::with_processes(processes.clone(), SchedulingAlgorithm::fcfs())
        .run()
        .unwrap();
    let rr = Simulation::with_processes(processes, SchedulingAlgorithm::round_robin(3))
        .run()
        .unwrap();

    // Round Robin reparte la CPU antes: mejor respuesta promedio.
    assert!(rr.summary.average_response_time < fcfs.summary.average_response_time);
    assert_eq!(rr.summary.makespan, fcfs.summary.makespan);
}
