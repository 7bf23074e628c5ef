use anyhow::Context;
use clap::Parser;
use contract_desk::utils::{logger, validation::Validate};
use contract_desk::{ChartView, CliConfig, LoadOutcome, SegmentMode, Session, SvgBackend};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting contract-desk");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut session = Session::new();
    let outcome = match session.load(&config.input) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Load failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    match outcome {
        LoadOutcome::EmptyFile => {
            println!("{}: file is empty", config.input);
            return Ok(());
        }
        LoadOutcome::Loaded { loaded, skipped } => {
            for line in session.listing() {
                println!("{}", line);
            }
            println!("Contracts: {} (skipped {} rows)", loaded, skipped);
        }
    }

    if let Some(export) = &config.export {
        if session.is_empty() {
            println!("Nothing to save: the list is empty");
        } else {
            let written = session
                .export(export)
                .with_context(|| format!("failed to export to {}", export))?;
            println!("Saved {} contracts to {}", written, export);
        }
    }

    let backend = SvgBackend::new(config.chart.clone());
    let mut view = ChartView::new(backend, f64::from(config.width), f64::from(config.height));
    match config.segment {
        SegmentMode::Customers => {
            view.show(session.segment_by_customer(), "By customer (count)")
                .with_context(|| format!("failed to write {}", config.chart))?;
            println!("Chart written to {}", config.chart);
        }
        SegmentMode::Months => match session.segment_by_month() {
            Some(breakdown) => {
                let title = format!("By month ({})", breakdown.year);
                view.show(breakdown.segments, &title)
                    .with_context(|| format!("failed to write {}", config.chart))?;
                println!("Chart written to {}", config.chart);
            }
            None => println!("No data to chart"),
        },
    }

    Ok(())
}
