//! End-to-end tests: palette generation through rendering and file output.

use clap::Parser;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use gradia::cli::{self, Cli, Commands};
use gradia::manifest::Manifest;
use gradia::output::Printer;
use gradia::render::{render_artistic_gradient, ArtisticRenderer, RenderMeta};
use gradia::types::{generate_palette, BuiltinPresets, HarmonyKind};
use gradia::{format_code, CodeFormat};

fn hexes(stops: &[gradia::ColorStop]) -> Vec<(String, f64)> {
    stops
        .iter()
        .map(|s| (s.color.to_string(), s.position))
        .collect()
}

fn manifest_in(dir: &std::path::Path) -> Manifest {
    Manifest {
        output: dir.join("dist"),
        width: 48,
        height: 30,
        ..Manifest::default()
    }
}

#[test]
fn test_triadic_palette() {
    let stops = generate_palette("#9b87f5", HarmonyKind::Triadic, 30, 80).unwrap();
    assert_eq!(
        hexes(&stops),
        vec![
            ("#9b87f5".to_string(), 0.0),
            ("#f59d89".to_string(), 50.0),
            ("#89f59d".to_string(), 100.0),
        ]
    );
}

#[test]
fn test_invalid_base_colour_is_rejected() {
    assert!(generate_palette("#12345", HarmonyKind::Shades, 30, 80).is_err());
    assert!(generate_palette("9b87f5", HarmonyKind::Shades, 30, 80).is_err());
}

#[test]
fn test_same_seed_same_pixels() {
    let stops = generate_palette("#9b87f5", HarmonyKind::Triadic, 30, 80).unwrap();

    let a = render_artistic_gradient(&stops, 64, 40, Some(42.0));
    let b = render_artistic_gradient(&stops, 64, 40, Some(42.0));
    let c = render_artistic_gradient(&stops, 64, 40, Some(43.0));

    assert_eq!(a.seed, 42.0);
    assert!(a.image().as_raw() == b.image().as_raw());
    assert!(a.image().as_raw() != c.image().as_raw());
}

#[test]
fn test_render_output_is_opaque() {
    let stops = generate_palette("#ff0000", HarmonyKind::Complementary, 30, 80).unwrap();
    let rendered = ArtisticRenderer::new().render(&stops, 32, 20, Some(7.0));

    assert_eq!((rendered.width(), rendered.height()), (32, 20));
    assert!(rendered.image().pixels().all(|p| p.0[3] == 255));
}

#[test]
fn test_render_command_writes_png_and_sidecar() {
    let dir = tempdir().unwrap();
    let manifest = manifest_in(dir.path());
    let png = dir.path().join("out").join("bg.png");

    let cli = Cli::try_parse_from([
        "gradia",
        "render",
        "#9b87f5",
        "--harmony",
        "triadic",
        "--seed",
        "42",
        "-o",
        png.to_str().unwrap(),
    ])
    .unwrap();
    let Commands::Render(args) = cli.command else {
        panic!("expected render command");
    };
    cli::render::run(args, &manifest, &Printer::plain()).unwrap();

    let image = image::open(&png).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (48, 30));

    let meta = RenderMeta::load(&png.with_extension("json")).unwrap();
    assert_eq!(meta.seed, 42.0);
    assert_eq!((meta.width, meta.height), (48, 30));
    assert_eq!(meta.stops.len(), 3);

    // Same stops, size and seed reproduce the file's pixels.
    let again = ArtisticRenderer::new()
        .with_noise(meta.noise)
        .render(&meta.stops, meta.width, meta.height, Some(meta.seed));
    assert!(again.image().as_raw() == image.as_raw());
}

#[test]
fn test_replay_reproduces_render() {
    let dir = tempdir().unwrap();
    let manifest = manifest_in(dir.path());
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    let cli = Cli::try_parse_from([
        "gradia",
        "render",
        "--stops",
        "#ff0000:0,#0000ff:100",
        "-o",
        first.to_str().unwrap(),
    ])
    .unwrap();
    let Commands::Render(args) = cli.command else {
        panic!("expected render command");
    };
    cli::render::run(args, &manifest, &Printer::plain()).unwrap();

    let sidecar = first.with_extension("json");
    let cli = Cli::try_parse_from([
        "gradia",
        "render",
        "--replay",
        sidecar.to_str().unwrap(),
        "-o",
        second.to_str().unwrap(),
        "--no-meta",
    ])
    .unwrap();
    let Commands::Render(args) = cli.command else {
        panic!("expected render command");
    };
    cli::render::run(args, &manifest, &Printer::plain()).unwrap();

    let a = image::open(&first).unwrap().to_rgba8();
    let b = image::open(&second).unwrap().to_rgba8();
    assert!(a.as_raw() == b.as_raw());
    assert!(!second.with_extension("json").exists());
}

#[test]
fn test_linear_command_uses_manifest_output() {
    let dir = tempdir().unwrap();
    let manifest = manifest_in(dir.path());

    let cli = Cli::try_parse_from([
        "gradia",
        "linear",
        "--preset",
        "sunset",
        "--width",
        "60",
        "--height",
        "20",
    ])
    .unwrap();
    let Commands::Linear(args) = cli.command else {
        panic!("expected linear command");
    };
    cli::linear::run(args, &manifest, &Printer::plain()).unwrap();

    let path = dir.path().join("dist").join("sunset-linear.png");
    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (60, 20));
}

#[test]
fn test_conflicting_sources_are_rejected() {
    let result = Cli::try_parse_from(["gradia", "render", "#9b87f5", "--preset", "sunset"]);
    assert!(result.is_err());
}

#[test]
fn test_replay_rejects_render_settings() {
    for flag in ["--width", "--height", "--noise", "--seed"] {
        let result = Cli::try_parse_from(["gradia", "render", "--replay", "bg.json", flag, "1"]);
        assert!(result.is_err(), "{} should conflict with --replay", flag);
    }

    let result = Cli::try_parse_from(["gradia", "render", "--replay", "bg.json", "--no-meta"]);
    assert!(result.is_ok());
}

#[test]
fn test_every_preset_formats_as_css() {
    for preset in BuiltinPresets::all() {
        let css = format_code(CodeFormat::Css, &preset.gradient.stops, preset.gradient.angle)
            .unwrap();
        assert!(css.starts_with("background: linear-gradient("), "{}", css);
    }
}
