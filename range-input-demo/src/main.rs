use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use parking_lot::Mutex;
use range_input::{PointerDispatcher, RangeSlider, SliderConfig};
use tracing::info;

mod render;
mod script;

use render::{TextSink, TextTrack};
use script::Step;

#[derive(Parser)]
#[command(name = "range-input-demo")]
#[command(version, about = "Drive a range-input slider headlessly", long_about = None)]
struct Cli {
    #[command(flatten)]
    slider: SliderOptions,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct SliderOptions {
    /// Lower bound of the range
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    min: f64,
    /// Upper bound of the range
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    max: f64,
    /// Quantization step
    #[arg(long, default_value_t = 5.0)]
    step: f64,
    /// Initial value (defaults to the middle of the range)
    #[arg(long, allow_negative_numbers = true)]
    value: Option<f64>,
    /// Fractional digits in the labels
    #[arg(long, default_value_t = 0)]
    decimals: usize,
    /// Label prefix
    #[arg(long, default_value = "")]
    prefix: String,
    /// Label postfix
    #[arg(long, default_value = "")]
    postfix: String,
    /// Swap the inline label for a bubble when it gets too long
    #[arg(long)]
    toggle_bubble: bool,
    /// Longest label that still fits on the thumb
    #[arg(long, default_value_t = 3)]
    toggle_limit: usize,
    /// Inner track width in pixels
    #[arg(long, default_value_t = 400.0)]
    track_width: f64,
}

#[derive(Subcommand)]
enum Command {
    /// Click both buttons, drag to each end and resize the window
    Run,
    /// Replay a JSON array of steps
    Replay {
        /// Path to the script
        file: PathBuf,
    },
}

impl SliderOptions {
    fn config(&self) -> SliderConfig {
        SliderConfig::default()
            .min(self.min)
            .max(self.max)
            .step(self.step)
            .decimals(self.decimals)
            .prefix(self.prefix.clone())
            .postfix(self.postfix.clone())
            .toggle_bubble(self.toggle_bubble)
            .toggle_limit(self.toggle_limit)
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,range_input=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let steps = match cli.command.unwrap_or(Command::Run) {
        Command::Run => script::walkthrough(cli.slider.track_width),
        Command::Replay { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            serde_json::from_str::<Vec<Step>>(&raw)
                .with_context(|| format!("failed to parse {}", file.display()))?
        }
    };

    let track = TextTrack::new(cli.slider.track_width);
    let sink = TextSink::default();
    let slider = RangeSlider::new(
        cli.slider.config(),
        cli.slider.value,
        track.clone(),
        sink.clone(),
    )
    .context("invalid slider configuration")?;
    let slider = Arc::new(Mutex::new(slider));

    let dispatcher = PointerDispatcher::global();
    let key = dispatcher.register(&slider);
    info!(steps = steps.len(), "replaying");

    println!("{:<28} {}", "initial", sink.render(&track));
    for step in &steps {
        script::apply(step, &slider, &track, dispatcher);
        println!("{:<28} {}", step.to_string(), sink.render(&track));
    }

    dispatcher.unregister(key);
    println!("field value: {}", sink.field());
    Ok(())
}
