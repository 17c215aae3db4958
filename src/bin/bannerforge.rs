use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use bannerforge::{BannerConfig, BannerConfigPatch, FontBook, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "bannerforge", version, about = "Render promotional banners to PNG")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a banner as a PNG.
    Render(RenderArgs),
    /// List the built-in templates.
    Templates,
    /// List the built-in color palettes.
    Palettes,
    /// List the selectable font families.
    Fonts,
    /// Print a banner config as JSON.
    Config(PresetArgs),
}

#[derive(Parser, Debug, Default)]
struct PresetArgs {
    /// Template id applied over the base config.
    #[arg(long)]
    template: Option<String>,

    /// Palette id applied after the template.
    #[arg(long)]
    palette: Option<String>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input banner config JSON; editor defaults when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    #[command(flatten)]
    presets: PresetArgs,

    /// Field override `key=value` using config JSON keys (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    sets: Vec<String>,

    /// Seed for the `circles` pattern.
    #[arg(long)]
    seed: Option<u64>,

    /// Extra directory of .ttf/.otf/.ttc files (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Extra font file to load; the render fails if it has no faces (repeatable).
    #[arg(long = "font-file")]
    font_files: Vec<PathBuf>,

    /// Render out-of-range values as given instead of rejecting them.
    #[arg(long)]
    no_validate: bool,

    /// Output PNG path.
    #[arg(long, default_value = bannerforge::DEFAULT_EXPORT_FILE_NAME)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Templates => cmd_templates(),
        Command::Palettes => cmd_palettes(),
        Command::Fonts => cmd_fonts(),
        Command::Config(args) => cmd_config(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn apply_presets(mut config: BannerConfig, presets: &PresetArgs) -> anyhow::Result<BannerConfig> {
    if let Some(id) = &presets.template {
        config = bannerforge::apply_template(&config, id)?;
    }
    if let Some(id) = &presets.palette {
        config = bannerforge::apply_palette(&config, id)?;
    }
    Ok(config)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let base = match &args.in_path {
        Some(path) => BannerConfig::from_path(path)?,
        None => BannerConfig::default(),
    };
    let mut config = apply_presets(base, &args.presets)?;

    for assignment in &args.sets {
        let patch = BannerConfigPatch::from_assignment(assignment)
            .with_context(|| format!("apply --set '{assignment}'"))?;
        config.merge_in_place(&patch);
    }

    if !args.no_validate {
        config.validate()?;
    }

    let mut fonts = FontBook::with_dirs(&args.font_dirs);
    for path in &args.font_files {
        fonts.load_font_file(path)?;
    }
    let opts = RenderOptions { seed: args.seed };
    let frame = bannerforge::render_to_frame(&config, fonts, &opts)?;
    bannerforge::save_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_templates() -> anyhow::Result<()> {
    for t in &bannerforge::TEMPLATES {
        println!(
            "{:<14} {:<16} {} {} {} {}  name={} info={} contact={} {}px {}",
            t.id,
            t.name,
            t.primary_color,
            t.secondary_color,
            t.accent_color,
            t.background_color,
            t.name_position.as_str(),
            t.info_position.as_str(),
            t.contact_position.as_str(),
            t.font_size,
            t.font_family.name(),
        );
    }
    Ok(())
}

fn cmd_palettes() -> anyhow::Result<()> {
    for p in &bannerforge::PALETTES {
        println!(
            "{:<12} {:<18} {} {} {} {}",
            p.id, p.name, p.primary_color, p.secondary_color, p.accent_color, p.background_color,
        );
    }
    Ok(())
}

fn cmd_fonts() -> anyhow::Result<()> {
    for f in bannerforge::available_fonts() {
        println!("{}", f.name());
    }
    Ok(())
}

fn cmd_config(args: PresetArgs) -> anyhow::Result<()> {
    let config = apply_presets(BannerConfig::default(), &args)?;
    println!("{}", config.to_json_string_pretty()?);
    Ok(())
}
