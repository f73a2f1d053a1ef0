use airport::utils::logger;
use airport::{Airport, CliConfig, ControlTower, TowerReport};
use anyhow::Context;
use clap::Parser;

fn print_report(report: &TowerReport) {
    for step in &report.steps {
        match (&step.plane, &step.error) {
            (Some(plane), None) => println!("✅ #{} {}: {}", step.step, step.operation, plane),
            (_, Some(error)) => println!("❌ #{} {}: {}", step.step, step.operation, error),
            (None, None) => {}
        }
    }

    let snapshot = &report.airport;
    println!(
        "🛬 {}: {}/{} parked, weather {}",
        snapshot.name,
        snapshot.parked.len(),
        snapshot.capacity,
        if snapshot.stormy { "stormy" } else { "clear" }
    );
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting airport {}", config.airport.name);
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    let airport = Airport::from_config(&config).context("failed to build airport")?;
    let mut tower = ControlTower::new(airport);
    let report = tower.run(&cli.operations);

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    if report.refused() > 0 {
        std::process::exit(2);
    }

    Ok(())
}
