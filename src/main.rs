// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command line host: headless crop sessions and transform application.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use cropset::app::view::crop::{HitTarget, NullSource, PointerEvent, PointerKind};
use cropset::domain::document::CropBox;
use cropset::domain::document::operations::transform;
use cropset::{Anchor, EditorConfig, ImageEditor, Point, Size};

#[derive(Parser, Debug)]
#[command(name = "cropset", version, about = "Crop-region editor for image uploads")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file, instead of the platform default.
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an editor session and print the resulting transform list.
    Edit(EditArgs),
    /// Apply a transform list to an image file.
    #[cfg(feature = "image")]
    Apply(ApplyArgs),
}

#[derive(Args, Debug)]
struct EditArgs {
    /// Image size as WIDTHxHEIGHT.
    #[arg(long, value_parser = parse_size)]
    bounds: Size,

    /// Initial aspect ratio (width / height).
    #[arg(long)]
    ratio: Option<f64>,

    /// Lock the aspect ratio during resizes.
    #[arg(long)]
    fixed: bool,

    /// Starting crop as top,left,bottom,right fractions of the displayed image.
    #[arg(long, value_parser = parse_crop)]
    crop: Option<CropBox>,

    /// Counter-clockwise quarter turns applied before the crop.
    #[arg(long, default_value_t = 0)]
    rotate: u8,

    /// Move the region by dx,dy.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    drag: Option<Point>,

    /// Resize from a handle, as ANCHOR:dx,dy (e.g. se:20,10).
    #[arg(long, value_parser = parse_resize, allow_hyphen_values = true)]
    resize: Option<ResizeArg>,
}

#[cfg(feature = "image")]
#[derive(Args, Debug)]
struct ApplyArgs {
    input: PathBuf,

    /// JSON file holding the transform list.
    #[arg(short, long, value_name = "FILE")]
    transforms: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ResizeArg {
    anchor: Anchor,
    delta: Point,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = EditorConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Edit(args) => edit(config, &args),
        #[cfg(feature = "image")]
        Command::Apply(args) => apply(&args),
    }
}

// =============================================================================
// Edit
// =============================================================================

fn edit(mut config: EditorConfig, args: &EditArgs) -> anyhow::Result<()> {
    if args.ratio.is_some() {
        config.aspect_ratio = args.ratio;
    }
    config.fixed_aspect_ratio |= args.fixed;

    let mut editor = ImageEditor::new("cli", args.bounds, config, NullSource)?;
    editor.init(args.bounds);

    for _ in 0..args.rotate {
        editor.rotate();
    }
    if let Some(crop) = args.crop {
        editor.set(editor.orientation(), Some(crop.to_rect()));
    }
    if let Some(delta) = args.drag {
        let start = editor.crop().absolute_region().center();
        gesture(&mut editor, start, delta, HitTarget::Body)?;
    }
    if let Some(ResizeArg { anchor, delta }) = args.resize {
        let start = anchor.handle_point(&editor.crop().absolute_region());
        gesture(&mut editor, start, delta, HitTarget::Handle(anchor))?;
    }

    log::info!("Final region {:?} ({})", editor.region(), editor.orientation());
    println!("{}", transform::to_json(&editor.transforms())?);
    Ok(())
}

/// Press at `start`, move by `delta` and release.
fn gesture(
    editor: &mut ImageEditor<NullSource>,
    start: Point,
    delta: Point,
    expected: HitTarget,
) -> anyhow::Result<()> {
    let target = editor.interaction().hit_test(editor.crop(), start);
    anyhow::ensure!(
        target == expected,
        "press at {start:?} lands on {target:?} instead of {expected:?}, the region is too small"
    );

    editor.handle_pointer(PointerEvent::Down {
        position: start,
        kind: PointerKind::Mouse(0),
    });
    editor.handle_pointer(PointerEvent::Move {
        position: start + delta,
    });
    editor.handle_pointer(PointerEvent::Up);
    Ok(())
}

// =============================================================================
// Apply
// =============================================================================

#[cfg(feature = "image")]
fn apply(args: &ApplyArgs) -> anyhow::Result<()> {
    use anyhow::Context;
    use cropset::domain::document::types::raster::{RasterDocument, exif_orientation};

    let json = std::fs::read_to_string(&args.transforms)
        .with_context(|| format!("Failed to read {}", args.transforms.display()))?;
    let transforms = transform::from_json(&json)?;

    let mut document = RasterDocument::open(&args.input)?;
    // Transforms were made against the upright image a browser shows.
    if let Some(orientation) = exif_orientation(&args.input) {
        log::info!("Applying EXIF orientation {orientation}");
        document.rotate(orientation);
    }
    document.apply(&transforms)?;
    document.save(&args.output)?;

    let (width, height) = document.dimensions();
    log::info!("Wrote {} ({width}x{height})", args.output.display());
    Ok(())
}

// =============================================================================
// Argument parsing
// =============================================================================

fn parse_numbers<const N: usize>(s: &str, separator: char) -> anyhow::Result<[f64; N]> {
    let values = s
        .split(separator)
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|err| anyhow::anyhow!("invalid number '{part}': {err}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    values
        .try_into()
        .map_err(|values: Vec<f64>| anyhow::anyhow!("expected {N} values, got {}", values.len()))
}

fn parse_size(s: &str) -> anyhow::Result<Size> {
    let [width, height] = parse_numbers(s, 'x')?;
    let size = Size::new(width, height);
    anyhow::ensure!(!size.is_empty(), "size must be positive, got {s}");
    Ok(size)
}

fn parse_point(s: &str) -> anyhow::Result<Point> {
    let [x, y] = parse_numbers(s, ',')?;
    Ok(Point::new(x, y))
}

fn parse_crop(s: &str) -> anyhow::Result<CropBox> {
    let [top, left, bottom, right] = parse_numbers(s, ',')?;
    let crop = CropBox {
        top,
        left,
        bottom,
        right,
    };
    crop.validate()?;
    Ok(crop)
}

fn parse_resize(s: &str) -> anyhow::Result<ResizeArg> {
    let (anchor, delta) = s
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("expected ANCHOR:dx,dy, got '{s}'"))?;
    Ok(ResizeArg {
        anchor: anchor.parse()?,
        delta: parse_point(delta)?,
    })
}
