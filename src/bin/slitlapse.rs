use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Upper bound on `plan --frames`; each frame prints one line.
const MAX_PLAN_FRAMES: u64 = 10_000_000;

#[derive(Parser, Debug)]
#[command(name = "slitlapse", version)]
struct Cli {
    /// Log per-frame geometry (DEBUG level).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a timelapse image from stills, a video file or a video URL.
    Render(RenderArgs),
    /// Print the per-frame strip geometry as JSON lines without reading any pixels.
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Directory of numbered stills (frame_0000.png, frame_0001.png, ...).
    #[arg(long)]
    stills: Option<PathBuf>,

    /// Local video file (requires `ffmpeg`/`ffprobe` on PATH).
    #[arg(long)]
    video: Option<PathBuf>,

    /// Remote video URL (requires `yt-dlp`, `ffmpeg` and `ffprobe` on PATH).
    #[arg(long)]
    url: Option<String>,
}

#[derive(Args, Debug)]
struct SliceArgs {
    /// JSON file with processing options; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed horizontal strip origin as a fraction of frame width (0-1).
    #[arg(long = "slice")]
    slice_location: Option<f64>,

    /// Append a reversed copy of the result.
    #[arg(long, value_enum)]
    mirror: Option<MirrorChoice>,

    /// Strip width multiplier (> 0).
    #[arg(long)]
    stretch: Option<f64>,

    /// Keep the total output width close to the frame width.
    #[arg(long)]
    fixed_width: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    slice: SliceArgs,

    /// Directory the output image is written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Directory remote videos are downloaded into (and reused from).
    #[arg(long, default_value = ".")]
    download_dir: PathBuf,

    /// Refuse to replace an existing output image.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Total frame count (may be fractional, as video containers report it).
    #[arg(long)]
    frames: f64,

    /// Frame width in pixels.
    #[arg(long)]
    width: u32,

    #[command(flatten)]
    slice: SliceArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MirrorChoice {
    None,
    Half,
    Full,
}

impl From<MirrorChoice> for slitlapse::MirrorMode {
    fn from(c: MirrorChoice) -> Self {
        match c {
            MirrorChoice::None => Self::None,
            MirrorChoice::Half => Self::Half,
            MirrorChoice::Full => Self::Full,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn init_tracing(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(args: &SliceArgs) -> anyhow::Result<slitlapse::SliceConfig> {
    let mut cfg = match &args.config {
        Some(path) => slitlapse::SliceConfig::from_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => slitlapse::SliceConfig::default(),
    };
    if let Some(loc) = args.slice_location {
        cfg.slice_location = Some(loc);
    }
    if let Some(mirror) = args.mirror {
        cfg.mirror = mirror.into();
    }
    if let Some(stretch) = args.stretch {
        cfg.stretch = Some(stretch);
    }
    if args.fixed_width {
        cfg.fixed_width = true;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn open_source(
    input: &InputArgs,
    download_dir: &std::path::Path,
) -> anyhow::Result<Box<dyn slitlapse::FrameSource>> {
    if let Some(dir) = &input.stills {
        return Ok(Box::new(slitlapse::StillsSource::open(dir)?));
    }
    if let Some(path) = &input.video {
        return Ok(Box::new(slitlapse::VideoSource::open(path)?));
    }
    if let Some(url) = &input.url {
        let remote = slitlapse::RemoteVideo::new(url.clone(), download_dir);
        return Ok(Box::new(remote.open()?));
    }
    anyhow::bail!("one of --stills, --video or --url is required")
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args.slice)?;

    let mut opts = slitlapse::ImageFileSinkOpts::new(&args.out_dir);
    opts.overwrite = !args.no_overwrite;
    let mut sink = slitlapse::ImageFileSink::new(opts);

    let stats = {
        let mut source = open_source(&args.input, &args.download_dir)?;
        slitlapse::run(source.as_mut(), &cfg, &mut sink)?
    };

    let path = sink
        .written_path()
        .context("sink reported success without writing a file")?;
    eprintln!(
        "wrote {} ({}x{}, {} of {} frames)",
        path.display(),
        stats.width,
        stats.height,
        stats.frames_included,
        stats.frames_read
    );
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.frames <= MAX_PLAN_FRAMES as f64,
        "--frames {} exceeds the plan limit of {MAX_PLAN_FRAMES}",
        args.frames
    );
    let cfg = resolve_config(&args.slice)?;
    let count = slitlapse::FrameCount::estimated(args.frames);
    let base = slitlapse::baseline(count, args.width, &cfg)?;
    println!("{}", serde_json::to_string(&base)?);

    let mut total = 0u64;
    let frames = args.frames.ceil().max(0.0) as u64;
    for i in 0..frames {
        let decision = slitlapse::compute_slice(slitlapse::FrameIndex(i), count, args.width, &cfg)?;
        if let Some(spec) = decision.spec() {
            total = total.saturating_add(spec.width());
        }
        println!(
            "{}",
            serde_json::json!({ "i": i, "decision": decision })
        );
    }
    let total = if cfg.mirror.is_enabled() {
        total.saturating_mul(2)
    } else {
        total
    };
    eprintln!("planned width: {total}");
    Ok(())
}
