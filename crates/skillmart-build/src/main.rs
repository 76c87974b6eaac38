use anyhow::Result;

use skillmart_build::{BuildService, Config};

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    skillmart_logging::init_logging(&config.logging.level, config.logging.json)?;

    // Run the build and report per-skill outcomes
    let service = BuildService::new(config);
    let report = service.run()?;

    for id in &report.built {
        println!("✓ {}", id);
    }
    for skipped in &report.skipped {
        println!("✗ {} ({})", skipped.directory, skipped.reason);
    }
    println!(
        "Built {} skills ({} skipped), wrote {} artifacts",
        report.built.len(),
        report.skipped.len(),
        report.artifacts.len()
    );

    Ok(())
}
