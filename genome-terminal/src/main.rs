mod display;

use std::{
    fs,
    io::stdout,
    path::PathBuf,
    thread,
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};
use genome_lights_core::{
    clock::{Clock, StdClock},
    config::Config,
    fps::FpsTracker,
    genome::ScrollMapper,
    lights::{check_segment, segments},
    patterns::{Frame, Pattern, PatternCatalog},
};
use log::*;
use rand::{SeedableRng, rngs::SmallRng};
use smart_leds::colors::BLACK;

use crate::display::TerminalStrands;

const DEFAULT_GENOME: &str = "gagttttatcgcttccatgacgcagaagttaacactttcggatatttctgatgagtcgaaaaattatcttgataaagcaggaattactactgcttgtttacgaattaaatcgaagtggactgctggcgg";

/// Scroll a genome across a pair of led strands drawn in the terminal. Press q to quit.
#[derive(Parser, Debug)]
struct Args {
    /// the bases to show. anything other than acgt is drawn dark
    #[arg(long, default_value = DEFAULT_GENOME)]
    genome: String,

    /// read the bases from a plain text or fasta file instead
    #[arg(long)]
    file: Option<PathBuf>,

    #[arg(long)]
    leds_per_strand: Option<usize>,

    /// split each strand into this many segments, like one per output pin
    #[arg(long)]
    outputs: Option<usize>,

    #[arg(long)]
    fps: Option<u16>,

    /// show only this pattern. without this, the patterns take turns
    #[arg(long)]
    pattern: Option<String>,

    #[arg(long)]
    ms_per_pattern: Option<u64>,

    /// terminals are not as bright as leds, so this defaults to full
    #[arg(long, default_value_t = 255)]
    brightness: u8,

    /// seed the sparkles and base picks for a repeatable run
    #[arg(long)]
    seed: Option<u64>,

    /// stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// print the pattern names and exit
    #[arg(long)]
    list: bool,
}

/// Keep the letters and drop fasta headers, whitespace and digits.
fn parse_bases(text: &str) -> Vec<u8> {
    text.lines()
        .filter(|line| !line.starts_with('>'))
        .flat_map(|line| line.bytes())
        .filter(|x| x.is_ascii_alphabetic())
        .collect()
}

fn main() -> anyhow::Result<()> {
    // info lines on stderr would tear through the raw mode frame. RUST_LOG=info 2>log.txt to see them
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .format_timestamp_nanos()
        .parse_default_env()
        .init();

    let args = Args::parse();

    let mut catalog = PatternCatalog::new();

    if args.list {
        for name in catalog.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let defaults = Config::default();

    let config = Config {
        frames_per_second: args.fps.unwrap_or(defaults.frames_per_second).max(1),
        leds_per_strand: args.leds_per_strand.unwrap_or(defaults.leds_per_strand),
        ms_per_pattern: args.ms_per_pattern.unwrap_or(defaults.ms_per_pattern).max(1),
        outputs: args.outputs.unwrap_or(defaults.outputs),
        ..defaults
    };

    let bases = match &args.file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_bases(&text)
        }
        None => parse_bases(&args.genome),
    };

    let mut mapper = ScrollMapper::from_config(&bases, &config)?;

    let fixed_pattern = args
        .pattern
        .as_deref()
        .map(|name| catalog.position(name).with_context(|| format!("pattern {name:?}")))
        .transpose()?;

    let segments: Vec<_> = segments(config.leds_per_strand, config.outputs).collect();

    for segment in segments.iter() {
        check_segment(segment.start, segment.end, config.leds_per_strand)?;
    }

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut leds = vec![BLACK; config.leds_per_strand * 2];

    let strands = TerminalStrands::new(args.brightness);
    let clock = StdClock::new();
    let frame_time = Duration::from_millis(1_000 / config.frames_per_second as u64);

    let mut fps = FpsTracker::new();
    let mut out = stdout();
    let mut active = None;
    let mut frames = 0;

    info!(
        "{} bases. {} leds per strand in {} segments",
        mapper.genome().len(),
        config.leds_per_strand,
        segments.len()
    );

    terminal::enable_raw_mode()?;
    execute!(out, Hide, Clear(ClearType::All))?;

    let result = (|| -> anyhow::Result<()> {
        loop {
            let now_ms = clock.now_ms();

            mapper.update(now_ms);

            let index = fixed_pattern.unwrap_or_else(|| {
                (now_ms / config.ms_per_pattern) as usize % catalog.len()
            });

            let pattern = catalog
                .get_mut(index)
                .context("pattern index out of range")?;

            if active != Some(index) {
                info!("switching to {}", pattern.name());
                active = Some(index);
            }

            {
                let mut frame = Frame::new(&mapper, &mut leds, now_ms, &mut rng);

                for segment in segments.iter() {
                    pattern.render(&mut frame, segment.start, segment.end);
                }
            }

            let window: String = (0..config.leds_per_strand)
                .map(|i| mapper.base_at(i).as_ascii() as char)
                .collect();

            let status = format!("{} @ {:.2}", pattern.name(), mapper.offset());

            strands.draw(&mut out, &leds, &window, &status)?;

            fps.tick(now_ms);

            frames += 1;
            if args.frames.is_some_and(|x| frames >= x) {
                return Ok(());
            }

            if event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);

                    if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(());
                    }
                }
            }

            let elapsed = Duration::from_millis(clock.now_ms() - now_ms);

            thread::sleep(frame_time.saturating_sub(elapsed));
        }
    })();

    execute!(out, Show)?;
    terminal::disable_raw_mode()?;

    println!();

    result
}
