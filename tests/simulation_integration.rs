use std::time::{Duration, Instant};
use visual_selection::config::EvolutionConfig;
use visual_selection::engine::{RunOutcome, SimulationEvent, Simulation, SimulationRunner};
use visual_selection::SelectionError;

const RUN_LIMIT: Duration = Duration::from_secs(60);

/// Gather events until `Finished` arrives or the run ends.
fn collect_events(simulation: &Simulation, limit: Duration) -> Vec<SimulationEvent> {
    let deadline = Instant::now() + limit;
    let mut events = Vec::new();
    while Instant::now() < deadline {
        match simulation.wait_event(Duration::from_millis(100)) {
            Some(event) => {
                let finished = matches!(event, SimulationEvent::Finished { .. });
                events.push(event);
                if finished {
                    break;
                }
            }
            None if !simulation.is_running() => {
                while let Some(event) = simulation.poll_event() {
                    events.push(event);
                }
                break;
            }
            None => {}
        }
    }
    events
}

fn snapshot_generations(events: &[SimulationEvent]) -> Vec<u64> {
    events
        .iter()
        .filter_map(|e| match e {
            SimulationEvent::Snapshot(s) => Some(s.generation),
            SimulationEvent::Finished { .. } => None,
        })
        .collect()
}

#[test]
fn test_four_symbol_target_converges() {
    let config = EvolutionConfig::new("AAAA", 1)
        .with_seed(42)
        .with_snapshot_interval(100);

    let mut simulation = Simulation::new();
    simulation.start(&config).unwrap();
    let events = collect_events(&simulation, RUN_LIMIT);

    let total = match events.last() {
        Some(SimulationEvent::Finished { total_generations }) => *total_generations,
        other => panic!("expected completion event, got {:?}", other),
    };
    assert!(total >= 1);

    // The convergent snapshot immediately precedes completion
    match &events[events.len() - 2] {
        SimulationEvent::Snapshot(s) => {
            assert_eq!(s.generation, total);
            assert_eq!(s.best_string(), "AAAA");
            assert_eq!(s.match_percentage, 100.0);
        }
        other => panic!("expected snapshot, got {:?}", other),
    }

    let generations = snapshot_generations(&events);
    assert_eq!(generations.first(), Some(&0));
    assert!(generations.windows(2).all(|w| w[0] < w[1]));
    for g in &generations[..generations.len() - 1] {
        assert_eq!(g % 100, 0);
    }

    assert_eq!(simulation.stop().unwrap(), Some(RunOutcome::Converged { generations: total }));
}

#[test]
fn test_single_symbol_converges_quickly() {
    let config = EvolutionConfig::new("Z", 1).with_seed(7);
    let runner = SimulationRunner::start(&config).unwrap();
    let outcome = runner.join().unwrap();

    match outcome {
        RunOutcome::Converged { generations } => assert!(generations < 100_000),
        RunOutcome::Cancelled { .. } => panic!("run was never cancelled"),
    }
}

#[test]
fn test_cancellation_suppresses_completion() {
    let target = "The quick brown fox jumps over the lazy dog. ".repeat(5);
    let config = EvolutionConfig::new(target, 3);

    let runner = SimulationRunner::start(&config).unwrap();
    runner.cancel();
    assert!(runner.is_cancelled());

    let mut events = Vec::new();
    while let Some(event) = runner.wait_event(Duration::from_millis(200)) {
        events.push(event);
    }
    assert!(events
        .iter()
        .all(|e| matches!(e, SimulationEvent::Snapshot(_))));

    match runner.join().unwrap() {
        RunOutcome::Cancelled { .. } => {}
        other => panic!("expected cancellation, got {:?}", other),
    }
}

#[test]
fn test_start_replaces_previous_run() {
    let mut simulation = Simulation::new();
    let long_target = "x".repeat(300);
    simulation.start(&EvolutionConfig::new(long_target, 5)).unwrap();
    assert!(simulation.is_running());

    simulation.start(&EvolutionConfig::new("Z", 1).with_seed(3)).unwrap();
    let events = collect_events(&simulation, RUN_LIMIT);

    // Only the new run's events are visible
    for event in &events {
        if let SimulationEvent::Snapshot(s) = event {
            assert_eq!(s.target_string(), "Z");
        }
    }
    assert!(matches!(events.last(), Some(SimulationEvent::Finished { .. })));
}

#[test]
fn test_cancel_then_stop() {
    let mut simulation = Simulation::new();
    simulation
        .start(&EvolutionConfig::new("y".repeat(200), 2))
        .unwrap();
    simulation.cancel();
    simulation.cancel();

    match simulation.stop().unwrap() {
        Some(RunOutcome::Cancelled { .. }) => {}
        other => panic!("expected cancelled run, got {:?}", other),
    }
    assert!(!simulation.is_running());
    assert_eq!(simulation.stop().unwrap(), None);
}

#[test]
fn test_invalid_start_is_synchronous() {
    let mut simulation = Simulation::new();
    let err = simulation.start(&EvolutionConfig::new("", 1)).unwrap_err();
    assert!(matches!(err, SelectionError::EmptyTarget));

    let err = SimulationRunner::start(&EvolutionConfig::new("abc", 1).with_snapshot_interval(0))
        .err()
        .unwrap();
    assert!(matches!(err, SelectionError::Configuration(_)));
}
