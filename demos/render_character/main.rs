//! Character rendering utility.
//!
//! Renders a humanoid character from an unpacked asset tree and a player
//! identity, or lists the colors a recolor picker would show for one part.
//!
//! # Settings
//!
//! Defaults can be kept in a TOML file and overridden with `SBSPRITE_*`
//! environment variables, then with command-line flags:
//!
//! ```toml
//! asset_root = "assets/unpacked"
//! state = "idle"
//! scale = 4
//! canvas_width = 0   # 0 fits the canvas to the character
//! canvas_height = 0
//! ```
//!
//! # Usage
//!
//! ```bash
//! # Render the idle pose of a character exported from a save file
//! cargo run --example render_character -- -a assets/unpacked render player.json -o nova.png
//!
//! # Render a walking frame with different hair and a 4x upscale
//! cargo run --example render_character -- render player.json -s walk.3 --scale 4 \
//!     --set "hair=?replace;735e3a=d9c189"
//!
//! # Show the recolored body palette
//! cargo run --example render_character -- palette player.json body
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::imageops::{self, FilterType};
use log::info;
use sbsprite_rs::prelude::*;
use serde::Deserialize;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let settings = RenderSettings::load(cli.config.as_deref(), &cli)?;

	match cli.command {
		Command::Render(args) => run_render(&settings, args),
		Command::Palette(args) => run_palette(&settings, args),
	}
}

#[derive(Parser)]
#[command(name = "render_character")]
#[command(author = "sbsprite-rs project")]
#[command(version)]
#[command(about = "Render and recolor Starbound-style humanoid characters", long_about = None)]
struct Cli {
	/// TOML settings file
	#[arg(short, long, value_name = "FILE", global = true)]
	config: Option<PathBuf>,

	/// Root of the unpacked asset tree
	#[arg(short, long, value_name = "DIR", global = true)]
	assets: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Render a character to a PNG
	Render(RenderArgs),
	/// Print the visible colors of one body part
	Palette(PaletteArgs),
}

#[derive(Args)]
struct RenderArgs {
	/// Player record or bare identity JSON
	#[arg(value_name = "IDENTITY")]
	identity: PathBuf,

	/// Output PNG path
	#[arg(short, long, value_name = "OUTPUT", default_value = "character.png")]
	output: PathBuf,

	/// Action state, e.g. `idle`, `walk.3`, `climb.1`
	#[arg(short, long, value_name = "STATE")]
	state: Option<String>,

	/// Integer upscale factor
	#[arg(long, value_name = "FACTOR")]
	scale: Option<u32>,

	/// Replace a part's directives, as `PART=DIRECTIVES`
	#[arg(long = "set", value_name = "PART=DIRECTIVES", value_parser = parse_override)]
	overrides: Vec<(BodyPart, String)>,
}

#[derive(Args)]
struct PaletteArgs {
	/// Player record or bare identity JSON
	#[arg(value_name = "IDENTITY")]
	identity: PathBuf,

	/// Body part: body, hair, facial-hair or mask
	#[arg(value_name = "PART")]
	part: BodyPart,

	/// Directives to apply to the part before listing its colors
	#[arg(short, long, value_name = "DIRECTIVES")]
	directives: Option<String>,
}

/// Settings shared by every subcommand.
#[derive(Debug, Deserialize)]
struct RenderSettings {
	/// Root of the unpacked asset tree
	asset_root: PathBuf,
	/// Default action state
	state: String,
	/// Default upscale factor
	scale: u32,
	/// Fixed canvas width, 0 to fit
	canvas_width: u32,
	/// Fixed canvas height, 0 to fit
	canvas_height: u32,
}

impl RenderSettings {
	/// Layers defaults, the settings file, `SBSPRITE_*` variables and flags.
	fn load(file: Option<&Path>, cli: &Cli) -> Result<Self> {
		let mut builder = config::Config::builder()
			.set_default("asset_root", "assets")?
			.set_default("state", "idle")?
			.set_default("scale", 1)?
			.set_default("canvas_width", 0)?
			.set_default("canvas_height", 0)?;

		if let Some(file) = file {
			builder = builder.add_source(config::File::from(file.to_path_buf()).required(true));
		}

		builder = builder.add_source(config::Environment::with_prefix("SBSPRITE"));

		if let Some(assets) = &cli.assets {
			builder = builder.set_override("asset_root", assets.to_string_lossy().into_owned())?;
		}

		let settings: Self = builder.build()?.try_deserialize().context("Invalid settings")?;
		if settings.scale == 0 {
			bail!("Scale must be at least 1");
		}
		Ok(settings)
	}

	fn loader(&self) -> Loader<DirectorySource> {
		Loader::new(DirectorySource::new(&self.asset_root))
	}
}

fn parse_override(value: &str) -> Result<(BodyPart, String), String> {
	let (part, directives) =
		value.split_once('=').ok_or_else(|| format!("expected PART=DIRECTIVES, got {value:?}"))?;
	Ok((part.parse()?, directives.to_string()))
}

/// Reads either a full player record (`content.identity`) or a bare identity.
fn read_identity(path: &Path) -> Result<Identity> {
	let json = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let value: serde_json::Value = serde_json::from_str(&json)?;

	let identity = if value.get("content").is_some() {
		let record: VersionedRecord = serde_json::from_value(value)?;
		info!("Read {} record (version {})", record.identifier, record.version);
		Identity::from_record(&record)?
	} else {
		serde_json::from_value(value)?
	};
	Ok(identity)
}

fn run_render(settings: &RenderSettings, args: RenderArgs) -> Result<()> {
	let identity = read_identity(&args.identity)?;
	let mut character = settings.loader().load_composite(identity)?;

	for (part, directives) in &args.overrides {
		info!("Applying {} directives: {}", part, directives);
		character.apply_directives(*part, directives)?;
	}

	character.set_state(args.state.as_deref().unwrap_or(&settings.state));

	let bounds = character.bounds()?;
	let (width, height) = match (settings.canvas_width, settings.canvas_height) {
		(0, _) | (_, 0) => (bounds.width(), bounds.height()),
		fixed => fixed,
	};

	// Fixed canvases keep the character centered on its bounds
	let origin_x = centered(width, bounds.width(), bounds.left);
	let origin_y = centered(height, bounds.height(), bounds.top);

	let mut canvas = Canvas::new(width, height)?;
	character.draw_at(&mut canvas, origin_x, origin_y)?;

	let scale = args.scale.unwrap_or(settings.scale).max(1);
	let mut image = canvas.into_image();
	if scale > 1 {
		let (scaled_w, scaled_h) = scaled_size(width, height, scale)?;
		image = imageops::resize(&image, scaled_w, scaled_h, FilterType::Nearest);
	}

	image.save(&args.output).with_context(|| format!("Failed to write {}", args.output.display()))?;
	info!(
		"Rendered {} ({}) to {} [{}x{}]",
		character.identity().name,
		character.state(),
		args.output.display(),
		image.width(),
		image.height()
	);

	Ok(())
}

/// Origin that centers a `span`-wide character starting at `start` on a
/// `canvas`-wide image.
fn centered(canvas: u32, span: u32, start: i32) -> i32 {
	let origin = (i64::from(canvas) - i64::from(span)) / 2 - i64::from(start);
	origin.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn scaled_size(width: u32, height: u32, scale: u32) -> Result<(u32, u32)> {
	let (Some(scaled_w), Some(scaled_h)) = (width.checked_mul(scale), height.checked_mul(scale)) else {
		bail!("Scale {scale} is too large for a {width}x{height} canvas");
	};
	Ok((scaled_w, scaled_h))
}

fn run_palette(settings: &RenderSettings, args: PaletteArgs) -> Result<()> {
	let identity = read_identity(&args.identity)?;
	let mut character = settings.loader().load_composite(identity)?;

	if let Some(directives) = &args.directives {
		character.apply_directives(args.part, directives)?;
	}

	let palette = character.part_palette(args.part);
	if palette.is_empty() {
		println!("{} has no visible colors (no sheet loaded)", args.part);
		return Ok(());
	}

	println!("{} colors of {} ({}):", palette.len(), args.part, character.directives(args.part));
	for color in palette.iter() {
		println!("  {color}");
	}

	Ok(())
}
