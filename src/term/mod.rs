use ansi_term::Style;
use clap::Parser;
use log::{warn, LevelFilter};
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use macrolang::mach::{Color, Event, Headless, Listing, Runtime, Settings};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

/// Run a macro script against the headless automation backend.
#[derive(Parser, Debug)]
#[command(name = "macrolang", version, about)]
pub struct Args {
    /// Script file to run.
    script: PathBuf,
    /// Settle delay around press and release, in milliseconds.
    #[arg(long, default_value_t = 40)]
    press_settle: u64,
    /// Settle delay around autopress, in milliseconds.
    #[arg(long, default_value_t = 80)]
    autopress_settle: u64,
    /// Settle delay around tap, in milliseconds.
    #[arg(long, default_value_t = 40)]
    tap_settle: u64,
    /// Leave keys held when the script stops.
    #[arg(long)]
    keep_held_keys: bool,
    /// Color reported for every pixel read.
    #[arg(long, default_value = "000000")]
    pixel_color: String,
    /// off, error, warn, info, debug or trace.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            press_settle_ms: self.press_settle,
            autopress_settle_ms: self.autopress_settle,
            tap_settle_ms: self.tap_settle,
            release_on_exit: !self.keep_held_keys,
            ..Settings::default()
        }
    }
}

pub fn main() -> i32 {
    let args = Args::parse();
    let level = match args.log_level.parse::<LevelFilter>() {
        Ok(level) => level,
        Err(_) => {
            eprintln!("unknown log level {}, using warn", args.log_level);
            LevelFilter::Warn
        }
    };
    init_log(level);
    match main_loop(&args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            1
        }
    }
}

fn main_loop(args: &Args) -> std::io::Result<i32> {
    let pixel = match Color::parse(&args.pixel_color) {
        Ok(color) => color,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return Ok(2);
        }
    };
    let mut runtime = Runtime::new(Box::new(Headless::new(pixel)), args.settings());
    let listing = load(&args.script)?;
    if listing.is_empty() {
        warn!("{} is empty", args.script.display());
    }
    runtime.set_listing(listing);

    let interrupted = runtime.interrupt_handle();
    if let Err(error) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        warn!("quit key unavailable: {}", error);
    }

    let stdout = std::io::stdout();
    loop {
        match runtime.execute(5000) {
            Event::Print(s) => {
                let mut out = stdout.lock();
                out.write_all(s.as_bytes())?;
                out.flush()?;
            }
            Event::Error(error) => {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                return Ok(1);
            }
            Event::Interrupted(error) => {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                return Ok(130);
            }
            Event::Running => {}
            Event::Stopped => return Ok(0),
        }
    }
}

fn load(path: &Path) -> std::io::Result<Listing> {
    let reader = BufReader::new(File::open(path)?);
    let mut listing = Listing::default();
    for line in reader.lines() {
        listing.load_str(&line?);
    }
    Ok(listing)
}

fn init_log(level: LevelFilter) {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("stderr", Box::new(stderr)),
        )
        .build(Root::builder().appender("stderr").build(level));
    match config {
        Ok(config) => {
            if let Err(error) = log4rs::init_config(config) {
                eprintln!("logging disabled: {}", error);
            }
        }
        Err(error) => eprintln!("logging disabled: {}", error),
    }
}
