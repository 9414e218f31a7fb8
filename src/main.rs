use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use log::info;

use makespc::imgproc::{resize::ResizeFilter, DitheringMethod};
use makespc::options::{ConvertOptions, DEFAULT_GAMMA};
use makespc::upload::{allowed_file, ConversionPaths, ALLOWED_EXTENSIONS};

/// Convert images to Stop Press Canvas .SPC files (Amstrad PCW8256)
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an image to .spc, writing a preview alongside
    Convert(ConvertArgs),
    /// Render an existing .spc file to an image
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    input: PathBuf,

    /// Output .spc path [default: <input base>.spc]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Preview image path [default: <input base>.png]
    #[arg(short, long)]
    preview: Option<PathBuf>,

    /// Linearize sRGB intensities before dithering
    #[arg(long, default_value_t = false)]
    linear: bool,

    #[arg(long, default_value_t = DEFAULT_GAMMA)]
    gamma: f32,

    #[arg(short, long, value_enum, default_value = "floyd-steinberg")]
    dithering: DitheringMethod,

    #[arg(short, long, value_enum, default_value = "triangle")]
    filter: ResizeFilter,

    /// Do not double the preview height
    #[arg(long, default_value_t = false)]
    single_height: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    spc_file: PathBuf,
    image_file: PathBuf,

    #[arg(long, default_value_t = false)]
    single_height: bool,
}

fn convert(args: ConvertArgs) -> anyhow::Result<()> {
    let file_name = args.input.file_name().unwrap_or_default().to_string_lossy();
    if !allowed_file(&file_name) {
        bail!(
            "Unsupported input {}, expected one of: {}",
            args.input.display(),
            ALLOWED_EXTENSIONS.join(", ")
        );
    }
    if !(args.gamma.is_finite() && args.gamma > 0.0) {
        bail!("Invalid gamma {}", args.gamma);
    }

    let mut paths = ConversionPaths::beside_input(&args.input);
    if let Some(output) = args.output {
        paths.output = output;
    }
    if let Some(preview) = args.preview {
        paths.preview = preview;
    }

    let options = ConvertOptions {
        linear_correction: args.linear,
        gamma: args.gamma,
        dithering: args.dithering,
        filter: args.filter,
        preview_double_height: !args.single_height,
    };
    let report = makespc::convert_to_spc(&paths.input, &paths.preview, &paths.output, &options)
        .with_context(|| format!("Failed to convert {}", paths.input.display()))?;
    info!(
        "Done, {} pixels lit. Preview: {}, output: {}",
        report.lit_pixels,
        report.preview_path.display(),
        report.output_path.display()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert(args) => convert(args),
        Command::Render(args) => makespc::render_spc(&args.spc_file, &args.image_file, !args.single_height)
            .with_context(|| format!("Failed to render {}", args.spc_file.display())),
    }
}
