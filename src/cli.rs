//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::bar::DailyBar;
use crate::domain::error::SigscanError;
use crate::domain::indicator::IndicatorTable;
use crate::domain::report::ScanReport;
use crate::domain::returns::DEFAULT_HORIZONS;
use crate::domain::scanner;
use crate::domain::series::Series;
use crate::domain::signal::ScanParams;
use crate::domain::stats::VolatilityStats;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;

pub const DEFAULT_MARKET: &str = "KRW-BTC";
pub const DEFAULT_DAYS: usize = 2000;

#[derive(Parser, Debug)]
#[command(name = "sigscan", about = "Daily-candle signal scanner and win-rate evaluator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch or load a candle series, scan it, report win rates
    Scan {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        market: Option<String>,
        #[arg(long)]
        days: Option<usize>,
        /// Load the series from a CSV file instead of the remote API
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Download a candle series and store it as CSV
    Fetch {
        #[arg(long, default_value = DEFAULT_MARKET)]
        market: String,
        #[arg(long, default_value_t = DEFAULT_DAYS)]
        days: usize,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Compare daily volatility of two stored series
    Compare {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        reference: PathBuf,
    },
    /// Show date range and bar count of a stored series
    Info {
        #[arg(long)]
        csv: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Scan {
            config,
            market,
            days,
            csv,
            output,
        } => run_scan(
            config.as_ref(),
            market.as_deref(),
            days,
            csv.as_ref(),
            output.as_ref(),
        ),
        Command::Fetch {
            market,
            days,
            output,
        } => run_fetch(&market, days, &output),
        Command::Compare { csv, reference } => run_compare(&csv, &reference),
        Command::Info { csv } => run_info(&csv),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = SigscanError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Read scan thresholds from the `[scan]` section, falling back to the
/// study defaults, and reject values that cannot be meant.
pub fn build_scan_params(adapter: &dyn ConfigPort) -> Result<ScanParams, SigscanError> {
    let defaults = ScanParams::default();
    let params = ScanParams {
        ftd_gain_ratio: adapter.get_double("scan", "ftd_gain_ratio", defaults.ftd_gain_ratio),
        correction_ratio: adapter.get_double(
            "scan",
            "correction_ratio",
            defaults.correction_ratio,
        ),
        volume_spike_2x: adapter.get_double("scan", "volume_spike_2x", defaults.volume_spike_2x),
        volume_spike_3x: adapter.get_double("scan", "volume_spike_3x", defaults.volume_spike_3x),
    };

    if params.ftd_gain_ratio < 1.0 {
        return Err(SigscanError::ConfigInvalid {
            section: "scan".into(),
            key: "ftd_gain_ratio".into(),
            reason: "must be at least 1.0 (a gain over the open)".into(),
        });
    }
    if params.correction_ratio <= 0.0 || params.correction_ratio > 1.0 {
        return Err(SigscanError::ConfigInvalid {
            section: "scan".into(),
            key: "correction_ratio".into(),
            reason: "must be within (0, 1]".into(),
        });
    }
    if params.volume_spike_2x <= 0.0 || params.volume_spike_3x <= 0.0 {
        return Err(SigscanError::ConfigInvalid {
            section: "scan".into(),
            key: "volume_spike".into(),
            reason: "multiples must be positive".into(),
        });
    }

    Ok(params)
}

fn acquire_series(
    market: &str,
    days: usize,
    csv: Option<&PathBuf>,
) -> Result<Vec<DailyBar>, SigscanError> {
    if let Some(path) = csv {
        eprintln!("Loading {} from {}", market, path.display());
        return CsvAdapter::load_file(path);
    }

    #[cfg(feature = "remote")]
    {
        use crate::adapters::upbit_adapter::UpbitAdapter;
        use crate::ports::data_port::DataPort;

        eprintln!("Fetching {} day candles for {}...", days, market);
        UpbitAdapter::new().fetch_daily(market, days)
    }

    #[cfg(not(feature = "remote"))]
    {
        let _ = days;
        Err(SigscanError::DataFetch {
            reason: "built without the remote feature; pass --csv".into(),
        })
    }
}

fn run_scan(
    config_path: Option<&PathBuf>,
    market_override: Option<&str>,
    days_override: Option<usize>,
    csv: Option<&PathBuf>,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    // Stage 1: config (optional; defaults apply without one).
    let adapter = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match load_config(path) {
                Ok(a) => a,
                Err(code) => return code,
            }
        }
        None => match FileConfigAdapter::from_string("") {
            Ok(a) => a,
            Err(reason) => {
                eprintln!("error: {reason}");
                return ExitCode::from(2);
            }
        },
    };

    // Stage 2: scan parameters.
    let params = match build_scan_params(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: resolve market and depth, then acquire the series.
    let market = market_override
        .map(str::to_string)
        .or_else(|| adapter.get_string("data", "market"))
        .unwrap_or_else(|| DEFAULT_MARKET.to_string());
    let days = days_override
        .unwrap_or_else(|| adapter.get_int("data", "days", DEFAULT_DAYS as i64) as usize);

    let bars = match acquire_series(&market, days, csv) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let series = match Series::new(bars) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    if series.is_empty() {
        let e = SigscanError::InsufficientData {
            market,
            bars: 0,
            minimum: 1,
        };
        eprintln!("error: {e}");
        return (&e).into();
    }
    eprintln!("Loaded {} bars", series.len());

    // Stage 4: indicators, scan, forward returns.
    let indicators = IndicatorTable::compute(&series);
    let result = scanner::scan(&series, &indicators, &params);
    eprintln!("Found {} matches across all conditions", result.total_matches());

    let report = ScanReport::build(&market, &series, &result, &DEFAULT_HORIZONS);

    // Stage 5: report.
    let reporter = TextReportAdapter;
    match output_path {
        Some(path) => {
            if let Err(e) = reporter.write(&report, path) {
                eprintln!("error: {e}");
                return (&e).into();
            }
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{}", reporter.render(&report)),
    }

    ExitCode::SUCCESS
}

fn run_fetch(market: &str, days: usize, output: &PathBuf) -> ExitCode {
    let bars = match acquire_series(market, days, None) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if let Err(e) = CsvAdapter::write_file(output, &bars) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    eprintln!("Wrote {} bars to {}", bars.len(), output.display());
    ExitCode::SUCCESS
}

fn load_series(path: &PathBuf) -> Result<Series, SigscanError> {
    Series::new(CsvAdapter::load_file(path)?)
}

fn run_compare(primary_path: &PathBuf, reference_path: &PathBuf) -> ExitCode {
    let primary = match load_series(primary_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let reference = match load_series(reference_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let primary_stats = VolatilityStats::compute(&primary);
    let reference_stats = VolatilityStats::compute(&reference);

    println!(
        "primary   ({} bars): mean {:.4}%/day, volatility {:.4}%/day",
        primary_stats.bars, primary_stats.mean_daily_return, primary_stats.daily_volatility
    );
    println!(
        "reference ({} bars): mean {:.4}%/day, volatility {:.4}%/day",
        reference_stats.bars,
        reference_stats.mean_daily_return,
        reference_stats.daily_volatility
    );

    ExitCode::SUCCESS
}

fn run_info(path: &PathBuf) -> ExitCode {
    let series = match load_series(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match series.date_range() {
        Some((first, last)) => {
            println!("{}: {} bars, {} to {}", path.display(), series.len(), first, last)
        }
        None => println!("{}: empty series", path.display()),
    }

    ExitCode::SUCCESS
}
