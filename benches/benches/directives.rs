//! Benchmark suite for directive application
//!
//! Measures the hot paths of a recolor: parsing the directive string, running
//! the composed mutation over a sheet, deriving the color mapping and drawing
//! a frame.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sbsprite_benches::{generate_directives, generate_frames, generate_sheet, sizes};
use sbsprite_types::directive::{Mutation, parse_directives};
use sbsprite_types::sheet::{Canvas, ColorMapping, Palette, SpriteSheet};
use std::hint::black_box;

/// Benchmark parsing and composing directive strings of growing length
fn bench_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("directive_parse");

	for count in [1, 4, 16] {
		let directives = generate_directives(count);
		group.bench_with_input(BenchmarkId::new("parse", count), &directives, |b, directives| {
			b.iter(|| black_box(parse_directives(black_box(directives))));
		});
		group.bench_with_input(BenchmarkId::new("compose", count), &directives, |b, directives| {
			b.iter(|| black_box(Mutation::parse(black_box(directives))));
		});
	}

	group.finish();
}

/// Benchmark running a mutation over whole sheets
fn bench_apply(c: &mut Criterion) {
	let mut group = c.benchmark_group("mutation_apply");

	for (name, (columns, rows)) in [("single", sizes::SINGLE), ("head", sizes::HEAD), ("body", sizes::BODY)] {
		let sheet = generate_sheet(columns, rows);
		let pixels = u64::from(sheet.width()) * u64::from(sheet.height());
		group.throughput(Throughput::Elements(pixels));

		for count in [1, 4] {
			let Ok(mutation) = Mutation::parse(&generate_directives(count)) else {
				eprintln!("Warning: could not build mutation with {count} directives");
				continue;
			};
			group.bench_with_input(
				BenchmarkId::new(format!("{name}_x{count}"), pixels),
				&mutation,
				|b, mutation| {
					b.iter_batched_ref(
						|| sheet.pixels().to_vec(),
						|buffer| mutation.apply(black_box(buffer)),
						criterion::BatchSize::LargeInput,
					);
				},
			);
		}
	}

	group.finish();
}

/// Benchmark palette scan and mapping derivation
fn bench_palette(c: &mut Criterion) {
	let mut group = c.benchmark_group("palette");

	let (columns, rows) = sizes::BODY;
	let sheet = generate_sheet(columns, rows);
	let pixels = u64::from(sheet.width()) * u64::from(sheet.height());

	group.throughput(Throughput::Elements(pixels));
	group.bench_function("scan_body_sheet", |b| {
		b.iter(|| black_box(Palette::from_rgba(black_box(sheet.pixels()))));
	});

	let palette = Palette::from_rgba(sheet.pixels());
	let Ok(mutation) = Mutation::parse(&generate_directives(4)) else {
		return;
	};
	group.throughput(Throughput::Elements(palette.len() as u64));
	group.bench_function("derive_mapping", |b| {
		b.iter(|| black_box(ColorMapping::derive(black_box(&palette), &mutation)));
	});

	group.finish();
}

/// Benchmark a full recolor and one frame draw, as a picker change does
fn bench_realistic_workload(c: &mut Criterion) {
	let mut group = c.benchmark_group("realistic");

	let (columns, rows) = sizes::BODY;
	let Ok(mut sheet) = SpriteSheet::new(generate_sheet(columns, rows), &generate_frames(columns, rows))
	else {
		eprintln!("Warning: could not build benchmark sheet");
		return;
	};
	let Ok(mut canvas) = Canvas::new(64, 64) else {
		return;
	};
	let directives = generate_directives(4);

	group.bench_function("recolor_and_draw", |b| {
		b.iter(|| {
			let result = sheet.apply_directives(black_box(&directives)).map(|_| ());
			let drawn = sheet.draw(&mut canvas, "2.3", 10, 10).map(|_| ());
			black_box((result, drawn))
		});
	});

	group.finish();

	println!("\n=== Benchmark Summary ===");
	println!("Sheet size: {}x{} ({} frames)", sheet.width(), sheet.height(), sheet.clipping().len());
	println!("Palette colors: {}", sheet.palette().len());
}

criterion_group!(benches, bench_parse, bench_apply, bench_palette, bench_realistic_workload);

criterion_main!(benches);
