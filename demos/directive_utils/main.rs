//! Directive CLI utility
//!
//! Inspects directive strings and applies them to standalone sprite sheets.
//!
//! # Usage
//!
//! ```bash
//! # Show how a directive string is parsed and which replacements it makes
//! cargo run --example directive_utils -- parse "?replace;ffe2c5=ffc181?replace=ffc181=d39c6c"
//!
//! # Recolor a PNG and print the resulting color mapping
//! cargo run --example directive_utils -- apply malebody.png "?replace;ffe2c5=ffc181" -o out.png
//! ```

use clap::{Parser, Subcommand};
use log::info;
use sbsprite_rs::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "directive_utils")]
#[command(author = "sbsprite-rs project")]
#[command(version = "1.0")]
#[command(about = "Directive utility - parse directive strings and recolor sprite sheets", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Parse a directive string and print its structure
	Parse {
		/// Directive string, e.g. `?replace;aabbcc=112233`
		#[arg(value_name = "DIRECTIVES")]
		directives: String,

		/// Also print every color of the given hex list through the mutation
		#[arg(short, long, value_name = "COLOR", num_args = 1..)]
		probe: Vec<String>,
	},

	/// Apply a directive string to a PNG
	Apply {
		/// Input PNG path
		#[arg(value_name = "INPUT_PNG")]
		input: PathBuf,

		/// Directive string
		#[arg(value_name = "DIRECTIVES")]
		directives: String,

		/// Output PNG path (optional, defaults to `<input>_recolored.png`)
		#[arg(short, long, value_name = "OUTPUT")]
		output: Option<PathBuf>,

		/// Only print the color mapping, do not write an image
		#[arg(short = 'n', long)]
		dry_run: bool,
	},
}

/// Handle parse command
fn handle_parse(directives: &str, probe: &[String]) -> Result<(), Box<dyn std::error::Error>> {
	let parsed = parse_directives(directives)?;
	println!("{} directive(s):", parsed.len());
	for (index, directive) in parsed.iter().enumerate() {
		println!("  [{index}] {directive}");
		if directive.is_replace() {
			for (from, [r, g, b]) in ReplaceMap::from_args(directive.args())?.iter() {
				println!("        {from} -> {}", Color::rgb(r, g, b));
			}
		}
	}

	let mutation = Mutation::from_directives(&parsed)?;
	println!("Canonical: {}", to_directive_string(&parsed));
	println!("Replace tables composed: {}", mutation.depth());

	for value in probe {
		let color = Color::parse(value)?;
		println!("  {color} => {}", mutation.apply_color(color));
	}

	Ok(())
}

/// Handle apply command
fn handle_apply(
	input: PathBuf,
	directives: &str,
	output: Option<PathBuf>,
	dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let image = image::open(&input)?.to_rgba8();
	let (width, height) = image.dimensions();

	// A single frame covering the whole sheet
	let mut frames = FrameData::default();
	frames.push_rect("sheet", [0, 0, width, height]);

	let mut sheet = SpriteSheet::new(Bitmap::from(image), &frames)?;
	sheet.apply_directives(directives)?;

	if let Some(mapping) = sheet.color_mapping() {
		let changed: Vec<_> = mapping.iter().filter(|(from, to)| from != to).collect();
		println!("{} palette colors, {} recolored:", mapping.len(), changed.len());
		for (from, to) in changed {
			println!("  {from} -> {to}");
		}
	}

	if dry_run {
		return Ok(());
	}

	let output = output.unwrap_or_else(|| {
		let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
		input.with_file_name(format!("{stem}_recolored.png"))
	});

	sheet.bitmap().clone().into_image().save(&output)?;
	info!("Wrote {}", output.display());

	Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	match cli.command {
		Commands::Parse {
			directives,
			probe,
		} => handle_parse(&directives, &probe),

		Commands::Apply {
			input,
			directives,
			output,
			dry_run,
		} => handle_apply(input, &directives, output, dry_run),
	}
}
