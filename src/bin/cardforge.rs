use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing::Level;

use cardforge::{
    AppState, CastTier, CropTool, EditOp, EntityDocument, EntityKind, Language, PointerKind,
    RenderSettings, Renderer, assets::data_url::load_file_as_data_url,
    foundation::core::{Point, Size},
};

#[derive(Parser, Debug)]
#[command(name = "cardforge", version, about = "Edit, preview and export Wizards Ones cards")]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the initial record of a kind as a JSON document.
    Init(InitArgs),
    /// Print the editor panel for a document.
    Fields(FieldsArgs),
    /// Apply edits to a document and export its preview as PNG.
    Render(RenderArgs),
    /// Crop an image to the 600x900 card art format.
    Crop(CropArgs),
}

#[derive(Args, Debug)]
struct InitArgs {
    /// card, rune, artefact or structure.
    kind: EntityKind,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FieldsArgs {
    /// Input entity document.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long, default_value = "pt-BR")]
    ui_lang: Language,

    #[arg(long, default_value = "pt-BR")]
    card_lang: Language,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input entity document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    #[arg(long, default_value = "pt-BR")]
    card_lang: Language,

    #[arg(long, default_value_t = RenderSettings::DEFAULT_PIXEL_RATIO)]
    pixel_ratio: f32,

    /// Field edit as `path=value`, e.g. `castGood.damage=5`. Repeatable.
    #[arg(long = "set", value_name = "PATH=VALUE")]
    sets: Vec<String>,

    /// Append a status effect to a cast tier (WEAK, GOOD, PERFECT). Repeatable.
    #[arg(long = "add-effect", value_name = "TIER")]
    add_effects: Vec<CastTier>,

    /// Append a target to a cast tier. Repeatable.
    #[arg(long = "add-target", value_name = "TIER")]
    add_targets: Vec<CastTier>,

    /// Image file stored into `imageUrl` as a data URI.
    #[arg(long)]
    upload: Option<PathBuf>,

    /// Also write the composed SVG scene next to the PNG.
    #[arg(long)]
    svg: bool,

    /// Write the edited document back to this path.
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CropArgs {
    /// Source image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// On-screen container size as `WxH`.
    #[arg(long, default_value = "800x600")]
    container: String,

    /// Zoom slider value, 0 (largest selection) to 100 (smallest).
    #[arg(long)]
    zoom: Option<f64>,

    /// Drag the selection by `DX,DY` container pixels.
    #[arg(long, allow_hyphen_values = true)]
    drag: Option<String>,

    /// Drive the drag with touch events instead of the mouse.
    #[arg(long)]
    touch: bool,

    /// Output PNG path.
    #[arg(long, default_value = cardforge::CROP_FILE_NAME)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Init(args) => cmd_init(args),
        Command::Fields(args) => cmd_fields(args),
        Command::Render(args) => cmd_render(args),
        Command::Crop(args) => cmd_crop(args),
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let json = EntityDocument::initial(args.kind).to_json_pretty()?;
    match args.out {
        Some(out) => {
            write_output(&out, json.as_bytes())?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_fields(args: FieldsArgs) -> anyhow::Result<()> {
    let doc = EntityDocument::from_path(&args.in_path)?;
    let kind = doc.kind();
    let mut app = AppState::new();
    app.set_app_language(args.ui_lang);
    app.set_card_language(args.card_lang);
    app.load_document(doc);
    print!("{}", app.panel(kind));
    Ok(())
}

fn parse_set(arg: &str) -> anyhow::Result<EditOp> {
    let (path, value) = arg
        .split_once('=')
        .with_context(|| format!("--set expects PATH=VALUE, got '{arg}'"))?;
    Ok(EditOp::set(path.trim(), value)?)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = EntityDocument::from_path(&args.in_path)?;
    let kind = doc.kind();
    let mut app = AppState::new();
    app.set_card_language(args.card_lang);
    app.load_document(doc);

    let mut ops = Vec::new();
    if let Some(upload) = &args.upload {
        ops.push(EditOp::set("imageUrl", load_file_as_data_url(upload)?)?);
    }
    for arg in &args.sets {
        ops.push(parse_set(arg)?);
    }
    ops.extend(args.add_effects.iter().map(|&tier| EditOp::AddEffect { tier }));
    ops.extend(args.add_targets.iter().map(|&tier| EditOp::AddTarget { tier }));
    for op in &ops {
        app.edit(kind, op)?;
    }

    let settings = RenderSettings::for_document(&args.in_path).with_pixel_ratio(args.pixel_ratio);
    let renderer = Renderer::new(settings)?;
    let doc = app.document(kind);

    if let Some(save) = &args.save {
        write_output(save, doc.to_json_pretty()?.as_bytes())?;
        eprintln!("wrote {}", save.display());
    }

    let png = renderer.export_document(&doc, app.card_language())?;
    let path = png.write_to_dir(&args.out)?;
    eprintln!("wrote {}", path.display());

    if args.svg {
        let svg = renderer.document_svg(&doc, app.card_language())?;
        let svg_path = path.with_extension("svg");
        write_output(&svg_path, svg.as_bytes())?;
        eprintln!("wrote {}", svg_path.display());
    }
    Ok(())
}

fn parse_pair(s: &str, sep: char, what: &str) -> anyhow::Result<(f64, f64)> {
    let (a, b) = s
        .split_once(sep)
        .with_context(|| format!("{what} expects two numbers separated by '{sep}', got '{s}'"))?;
    let a: f64 = a.trim().parse().with_context(|| format!("{what}: bad number '{a}'"))?;
    let b: f64 = b.trim().parse().with_context(|| format!("{what}: bad number '{b}'"))?;
    Ok((a, b))
}

fn cmd_crop(args: CropArgs) -> anyhow::Result<()> {
    let source = image::open(&args.in_path)
        .with_context(|| format!("open image '{}'", args.in_path.display()))?
        .to_rgba8();
    let (cw, ch) = parse_pair(&args.container, 'x', "--container")?;

    let mut tool = CropTool::new();
    tool.load_image(
        Size::new(cw, ch),
        Size::new(f64::from(source.width()), f64::from(source.height())),
    )?;
    if let Some(zoom) = args.zoom {
        tool.set_zoom(zoom);
    }
    if let Some(drag) = &args.drag {
        let (dx, dy) = parse_pair(drag, ',', "--drag")?;
        let start = tool.rect().center();
        let kind = if args.touch { PointerKind::Touch } else { PointerKind::Mouse };
        tool.pointer_down(start);
        let resp = tool.pointer_move(Point::new(start.x + dx, start.y + dy), kind);
        tracing::debug!(?resp, "dragged selection");
        tool.pointer_up();
    }

    let png = tool.export(&source)?;
    write_output(&args.out, &png.png)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
