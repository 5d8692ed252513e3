use log::*;
use sird::{
    config::Config,
    models::Compartment,
    prelude::*,
    sim::run_all,
    utils::{plot_hbars, plot_vbars, subsample},
};
use std::{env, path::Path};

pub fn main() -> Result<()> {
    use simple_logger::SimpleLogger;
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let path = env::args().nth(1).unwrap_or_else(|| "conf.toml".to_string());
    let cfg = Config::load_or_default(&path)?;
    if cfg.verbose {
        println!("{:#?}", cfg);
    }
    simulate(&cfg)
}

fn simulate(cfg: &Config) -> Result<()> {
    let results = run_all(&cfg.scenarios)?;

    for (scenario, series) in cfg.scenarios.iter().zip(&results) {
        let file = Path::new(&cfg.output_dir).join(format!("{}.csv", scenario.name()));
        series.save_csv(&file)?;
        info!("wrote {}", file.display());

        let (peak, value) = series.peak_infections();
        println!(
            "\n== {} (infection peak {:.4} at t={})",
            scenario.name(),
            value,
            peak
        );
        println!(
            "{}",
            plot_vbars(
                &subsample(&series.infected_curve(), cfg.plot_width),
                cfg.plot_height
            )
        );

        let last = series.final_state();
        let bars: Vec<(&str, Real)> = Compartment::ALL
            .iter()
            .map(|c| (c.name(), last[*c]))
            .collect();
        println!("{}", plot_hbars(&bars, cfg.plot_width));
    }

    if let Some((baseline, others)) = results.split_first() {
        for (scenario, series) in cfg.scenarios[1..].iter().zip(others) {
            let cmp = DeathComparison::new(baseline, series);
            println!(
                "\ndeaths averted by {}: {:.6} ({:.2}% of {})",
                scenario.name(),
                cmp.total_averted(),
                100.0 * cmp.relative_averted(),
                cfg.scenarios[0].name()
            );
        }
    }
    Ok(())
}
