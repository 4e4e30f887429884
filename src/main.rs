//! vpal — compile Vocal Percussion Assembly Language files to MIDI.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use vpal::dsl::{self, Score};
use vpal::event::{self, RenderSpec, TimedEvent, DEFAULT_RESOLUTION};
use vpal::rhythm;
use vpal::{Sequence, VpalConfig};

/// Vocal Percussion Assembly Language compiler
#[derive(Parser)]
#[command(name = "vpal")]
#[command(about = "Turn lines of vocal percussion notation into MIDI drum tracks")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Configuration file (defaults to ~/.vpal/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a VPAL file to a MIDI file
    Render {
        /// VPAL notation file
        input: PathBuf,
        /// Tempo in beats per minute
        tempo: u32,
        /// Number of times to play the score
        repeat: u32,
        /// MIDI file to write
        output: PathBuf,
    },
    /// Compile a randomly assembled canned rhythm
    Random {
        /// MIDI file to write
        output: PathBuf,
        /// Tempo in beats per minute
        #[arg(long)]
        tempo: Option<u32>,
        /// Number of times to play the rhythm
        #[arg(long)]
        repeat: Option<u32>,
        /// Seed for a reproducible rhythm
        #[arg(long)]
        seed: Option<u64>,
        /// Print the generated notation
        #[arg(long)]
        print: bool,
    },
    /// Print the parsed beats and timed events of a VPAL file as YAML
    Inspect {
        /// VPAL notation file
        input: PathBuf,
        /// Number of times to play the score
        #[arg(long, default_value_t = 1)]
        repeat: u32,
        /// Timing resolution in ticks per beat
        #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
        ticks_per_beat: NonZeroU32,
    },
    /// List every sound name and its MIDI drum key
    Sounds,
    /// Show the effective configuration
    ShowConfig,
}

#[derive(Serialize)]
struct Inspection<'a> {
    ticks_per_beat: u32,
    beats: &'a Score,
    events: &'a [TimedEvent],
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> vpal::Result<()> {
    let config = match &cli.config {
        Some(path) => VpalConfig::load_from(path)?,
        None => VpalConfig::load().unwrap_or_default(),
    };
    let quiet = cli.quiet;

    match cli.command {
        Commands::Render {
            input,
            tempo,
            repeat,
            output,
        } => {
            if !quiet {
                println!("compiling {}...", input.display());
            }
            let sequence =
                vpal::compile_file(&input, tempo, repeat, &output, &config.encoder_options())?;
            report(&sequence, &output, quiet);
        }
        Commands::Random {
            output,
            tempo,
            repeat,
            seed,
            print,
        } => {
            let text = match seed {
                Some(seed) => rhythm::random_rhythm_seeded(seed),
                None => rhythm::random_rhythm(&mut rand::thread_rng()),
            };
            if print {
                print!("{text}");
            }
            let sequence = vpal::compile_to_file(
                &text,
                tempo.unwrap_or(config.tempo),
                repeat.unwrap_or(config.repeat),
                &output,
                &config.encoder_options(),
            )?;
            report(&sequence, &output, quiet);
        }
        Commands::Inspect {
            input,
            repeat,
            ticks_per_beat,
        } => {
            let text = std::fs::read_to_string(&input)?;
            let score = dsl::parse(&text)?;
            let spec = RenderSpec::new(&score, config.tempo, repeat)
                .with_ticks_per_beat(ticks_per_beat);
            let sequence = event::render(&spec)?;
            let yaml = serde_yaml::to_string(&Inspection {
                ticks_per_beat: sequence.ticks_per_beat(),
                beats: &score,
                events: sequence.events(),
            })?;
            print!("{yaml}");
        }
        Commands::Sounds => {
            for (name, sound) in dsl::sound::all_sounds() {
                println!("{name:<6} {}", sound.key());
            }
        }
        Commands::ShowConfig => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
    }

    Ok(())
}

fn report(sequence: &Sequence, output: &Path, quiet: bool) {
    if quiet {
        return;
    }
    println!(
        "wrote {} events ({:.1}s at {} BPM) to {}",
        sequence.len(),
        sequence.duration_secs(),
        sequence.tempo_bpm(),
        output.display()
    );
}
