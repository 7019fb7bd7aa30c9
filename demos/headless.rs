use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use visual_selection::config::{ConfigSection, EvolutionConfig};
use visual_selection::engine::{
    drive, ConsoleProgressSink, Environment, JsonLinesProgressSink, RunOutcome,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Usage: headless [target] [mutations] [--json] [--timeout SECONDS] [--seed N]
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let timeout = flag_value(&args, "--timeout").map(Duration::from_secs);
    let seed = flag_value(&args, "--seed");
    let positional: Vec<&String> = positional_args(&args);

    let mut config = EvolutionConfig::default();
    if let Some(target) = positional.first() {
        config.target = target.to_string();
    }
    if let Some(mutations) = positional.get(1) {
        config.mutations = mutations.parse()?;
    }
    config.seed = seed;
    config.validate()?;

    if !json {
        println!("=== Visual Selection ===\n");
        println!("Configuration:");
        println!("  Target: {}", config.target);
        println!("  Mutations/generation: {}", config.mutations);
        println!("  Snapshot interval: {}", config.snapshot_interval);
        if let Some(timeout) = timeout {
            println!("  Timeout: {}s", timeout.as_secs());
        }
        println!();
    }

    let mut environment = Environment::from_config(&config)?;
    let cancel = Arc::new(AtomicBool::new(false));
    if let Some(timeout) = timeout {
        let cancel = Arc::clone(&cancel);
        std::thread::spawn(move || {
            std::thread::sleep(timeout);
            cancel.store(true, Ordering::Relaxed);
        });
    }

    let stdout = std::io::stdout();
    let outcome = if json {
        let mut sink = JsonLinesProgressSink::new(stdout.lock());
        let outcome = drive(&mut environment, config.snapshot_interval, &cancel, &mut sink);
        sink.into_inner().flush()?;
        outcome
    } else {
        let mut sink = ConsoleProgressSink::new(stdout.lock());
        let outcome = drive(&mut environment, config.snapshot_interval, &cancel, &mut sink);
        sink.into_inner().flush()?;
        outcome
    };

    if let RunOutcome::Cancelled { generations } = outcome {
        eprintln!("Stopped after {} generations without a full match", generations);
        std::process::exit(2);
    }
    Ok(())
}

fn flag_value(args: &[String], flag: &str) -> Option<u64> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

fn positional_args(args: &[String]) -> Vec<&String> {
    let mut positional = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
        } else if arg == "--timeout" || arg == "--seed" {
            skip_next = true;
        } else if !arg.starts_with("--") {
            positional.push(arg);
        }
    }
    positional
}
