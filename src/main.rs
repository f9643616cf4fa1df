use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use phone_input::config::{FormatterConfig, DEFAULT_COUNTRY_ENV};
use phone_input::error::Result;
use phone_input::formatter::{FormatterSession, PhoneFormatter};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Reformat stored phone values, or replay a keystroke log, per country rules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one phone value (or one keystroke snapshot in --replay) per line
    #[arg(index = 1)]
    file_path: PathBuf,

    /// Country used for values without a calling code
    #[arg(short, long, env = DEFAULT_COUNTRY_ENV, default_value = "US")]
    country: String,

    /// Process only first N lines (optional)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Treat each line as the full field content after one keystroke
    #[arg(short, long)]
    replay: bool,

    /// Verbose output with digits and verdicts
    #[arg(short, long)]
    verbose: bool,

    /// Write statistics instead of per-line output
    #[arg(short, long)]
    stats: bool,

    /// Statistics output path
    #[arg(short, long, default_value = "outputstats.json")]
    output: PathBuf,
}

#[derive(Default)]
struct Tally {
    lines: usize,
    counts: HashMap<String, HashMap<String, usize>>,
}

impl Tally {
    fn bump(&mut self, group: &str, key: &str) {
        *self
            .counts
            .entry(group.to_string())
            .or_default()
            .entry(key.to_string())
            .or_insert(0) += 1;
    }

    fn to_json(&self, source: &str) -> Value {
        let mut groups = serde_json::Map::new();

        for (group, counts) in &self.counts {
            let total: usize = counts.values().sum();
            let mut sorted: Vec<_> = counts.iter().collect();
            sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            let rows: Vec<Value> = sorted
                .into_iter()
                .map(|(key, count)| {
                    let percentage = if total > 0 {
                        ((*count as f64) / (total as f64) * 100.0).round()
                    } else {
                        0.0
                    };
                    json!({ "key": key, "count": count, "percentage": percentage })
                })
                .collect();
            groups.insert(group.clone(), Value::Array(rows));
        }

        json!({
            "summary": {
                "total_lines_processed": self.lines,
                "file_path": source
            },
            "groups": groups
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = FormatterConfig::with_default_country(&args.country);
    if let Err(err) = config.validate() {
        warn!("{}", err);
    }
    let formatter = PhoneFormatter::new(&config);

    let reader = BufReader::with_capacity(1_000_000, File::open(&args.file_path)?);
    let limit = args.limit.unwrap_or(usize::MAX);
    let lines: Vec<String> = reader
        .lines()
        .take(limit)
        .collect::<std::io::Result<_>>()?;

    let progress_bar = if args.stats {
        let pb = ProgressBar::new(lines.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        Some(pb)
    } else {
        println!("Processing file: {}", args.file_path.display());
        None
    };

    let start = Instant::now();
    let mut tally = Tally::default();
    let mut session = formatter.initialize("", None);

    for (index, line) in lines.iter().enumerate() {
        tally.lines += 1;
        if let Some(pb) = &progress_bar {
            if index % 1000 == 0 {
                pb.set_position(index as u64);
            }
        }

        if args.replay {
            let outcome = formatter.apply_input(&session, line);
            tally.bump("keystrokes", if outcome.accepted { "accepted" } else { "rejected" });

            if !args.stats {
                let status = if outcome.accepted { "accepted" } else { "rejected" };
                println!("  step {}: \"{}\" => {} [{}]", index + 1, line, outcome.display, status);
                if args.verbose {
                    print_details(&outcome.session);
                }
            }
            session = outcome.session;
        } else {
            let parsed = formatter.initialize_with_selection(line, None, Some(formatter.default_iso_code()));
            let verdict = parsed.verdict();
            tally.bump("verdicts", verdict.as_str());
            tally.bump("countries", parsed.iso_code());

            if !args.stats {
                println!("  \"{}\" => {} [{}]", line, parsed.committed_value(), verdict);
                if args.verbose {
                    print_details(&parsed);
                }
            }
        }
    }

    if let Some(pb) = progress_bar {
        pb.finish_with_message("done");
    }
    debug!("Processed {} lines in {:?}", tally.lines, start.elapsed());

    if args.replay && !args.stats {
        println!("Final value: {}", session.committed_value());
    }

    if args.stats {
        let stats_json = tally.to_json(&args.file_path.to_string_lossy());
        fs::write(&args.output, serde_json::to_string_pretty(&stats_json)?)?;
        info!("Statistics written to {}", args.output.display());
        println!("Statistics written to {}", args.output.display());
    }

    Ok(())
}

fn print_details(session: &FormatterSession) {
    println!(
        "    country={} digits={} verdict={}",
        session.iso_code(),
        session.digits(),
        session.verdict()
    );
}
