use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{arg, value_parser, ArgMatches, Command};

use serialplot::{
    run_headless, run_plotter, LineSource, LogCanvas, PlotterConfig, SampleSource, Session,
    WaveSource,
};

fn cli() -> Command {
    Command::new("serialplot")
        .about("Live three-channel plot of a serial device or sample file")
        .arg(
            arg!([SOURCE] "File or device node to read, '-' for stdin")
                .default_value("./testLog.txt"),
        )
        .arg(arg!(--demo "Plot synthetic sine waves instead of reading SOURCE"))
        .arg(
            arg!(--samples <N> "Stop the demo source after N samples")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(arg!(--headless "Run without a window, logging each redraw"))
        .arg(
            arg!(-c --config <FILE> "YAML or JSON configuration file")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"sample-interval-ms" <MS> "Delay between forwarded samples")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(--"tick-interval-ms" <MS> "Redraw cadence")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<PlotterConfig> {
    let mut cfg = match matches.get_one::<PathBuf>("config") {
        Some(path) => PlotterConfig::load(path)?,
        None => PlotterConfig::default(),
    };
    if let Some(ms) = matches.get_one::<u64>("sample-interval-ms") {
        cfg.sample_interval_ms = *ms;
    }
    if let Some(ms) = matches.get_one::<u64>("tick-interval-ms") {
        cfg.tick_interval_ms = *ms;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn open_source(
    matches: &ArgMatches,
    cfg: &PlotterConfig,
) -> anyhow::Result<Box<dyn SampleSource + Send>> {
    if matches.get_flag("demo") {
        let [lo, hi] = cfg.y_range;
        let mut wave = WaveSource::new((lo + hi) / 2.0, (hi - lo) * 0.4, 200.0);
        if let Some(n) = matches.get_one::<u64>("samples") {
            wave = wave.with_limit(*n);
        }
        return Ok(Box::new(wave));
    }
    let path = matches
        .get_one::<String>("SOURCE")
        .map(String::as_str)
        .unwrap_or("./testLog.txt");
    if path == "-" {
        return Ok(Box::new(LineSource::stdin()));
    }
    let source =
        LineSource::open(path).with_context(|| format!("failed to open sample source {}", path))?;
    Ok(Box::new(source))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();
    let cfg = load_config(&matches)?;
    let source = open_source(&matches, &cfg)?;

    let Session {
        producer,
        mut renderer,
        mut controls,
    } = Session::new(source, &cfg);
    let producer = producer.spawn().context("failed to spawn producer thread")?;

    if matches.get_flag("headless") {
        let canvas = run_headless(&mut renderer, &mut controls, LogCanvas::default())?;
        drop(controls);
        let summary = producer
            .join()
            .map_err(|_| anyhow!("producer thread panicked"))?;
        log::info!(
            "done: {} redraws, {} samples plotted, {} skipped, {:?}",
            canvas.redraws,
            renderer.series().len(),
            summary.skipped,
            summary.exit
        );
    } else {
        run_plotter(renderer, controls, cfg).map_err(|e| anyhow!("window error: {}", e))?;
        // The producer may be stuck in a device read; it is not joined.
        drop(producer);
    }
    Ok(())
}
