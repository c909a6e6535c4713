// SPDX-License-Identifier: MPL-2.0
use extension_icons::config::Config;
use extension_icons::error::Error;
use extension_icons::generator::Generator;
use extension_icons::report::success_count;
use image_rs::ColorType;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;

fn sample_svg() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/icon.svg")
}

fn prepare_source(dir: &Path) {
    fs::copy(sample_svg(), dir.join("icon.svg")).expect("failed to copy sample svg");
}

fn run_binary(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-icons"))
        .arg("--dir")
        .arg(dir)
        .output()
        .expect("failed to run generate-icons")
}

fn png_count(dir: &Path) -> usize {
    fs::read_dir(dir)
        .expect("dir readable")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "png"))
        .count()
}

#[test]
fn generates_every_size_as_rgba_png() {
    let dir = tempdir().expect("failed to create temp dir");
    prepare_source(dir.path());

    let generator = Generator::from_config(&Config::default(), dir.path()).expect("valid config");
    let outcomes = generator.run().expect("source exists");

    assert_eq!(outcomes.len(), 4);
    assert_eq!(success_count(&outcomes), 4);
    for size in [16u32, 32, 48, 128] {
        let path = dir.path().join(format!("icon{size}.png"));
        let image = image_rs::open(&path).expect("png should exist");
        assert_eq!((image.width(), image.height()), (size, size));
        assert_eq!(image.color(), ColorType::Rgba8);
    }
}

#[test]
fn rerunning_overwrites_with_identical_output() {
    let dir = tempdir().expect("failed to create temp dir");
    prepare_source(dir.path());
    let generator = Generator::from_config(&Config::default(), dir.path()).expect("valid config");

    generator.run().expect("first run");
    let first = fs::read(dir.path().join("icon48.png")).expect("png should exist");
    generator.run().expect("second run");
    let second = fs::read(dir.path().join("icon48.png")).expect("png should exist");

    assert_eq!(first, second);
}

#[test]
fn missing_source_produces_no_files() {
    let dir = tempdir().expect("failed to create temp dir");
    let generator = Generator::from_config(&Config::default(), dir.path()).expect("valid config");

    match generator.run() {
        Err(Error::SourceNotFound(path)) => assert_eq!(path, dir.path().join("icon.svg")),
        other => panic!("expected SourceNotFound, got {other:?}"),
    }
    assert_eq!(fs::read_dir(dir.path()).expect("dir readable").count(), 0);
}

#[test]
fn one_failing_size_does_not_block_the_others() {
    let dir = tempdir().expect("failed to create temp dir");
    prepare_source(dir.path());
    // A directory where icon32.png should go makes that write fail.
    fs::create_dir(dir.path().join("icon32.png")).expect("failed to create blocker");

    let generator = Generator::from_config(&Config::default(), dir.path()).expect("valid config");
    let outcomes = generator.run().expect("source exists");

    assert_eq!(success_count(&outcomes), 3);
    let failed: Vec<_> = outcomes.iter().filter(|o| !o.is_success()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].size.value(), 32);
    assert_eq!(failed[0].error.as_deref(), Some("Failed to generate icon32.png"));
    for size in [16u32, 48, 128] {
        let image = image_rs::open(dir.path().join(format!("icon{size}.png")))
            .expect("remaining sizes should exist");
        assert_eq!(image.width(), size);
    }
}

#[test]
fn configured_sizes_and_output_directory_are_used() {
    let dir = tempdir().expect("failed to create temp dir");
    prepare_source(dir.path());
    let out = dir.path().join("out");
    fs::create_dir(&out).expect("failed to create output dir");

    let config = Config {
        sizes: vec![64, 24],
        output_dir: Some(out.clone()),
        ..Config::default()
    };
    let outcomes = Generator::from_config(&config, dir.path())
        .expect("valid config")
        .run()
        .expect("source exists");

    let sizes: Vec<u32> = outcomes.iter().map(|o| o.size.value()).collect();
    assert_eq!(sizes, vec![24, 64]);
    assert!(out.join("icon24.png").is_file());
    assert!(out.join("icon64.png").is_file());
    assert!(!dir.path().join("icon24.png").exists());
}

#[test]
fn binary_reports_missing_source_once_and_exits_cleanly() {
    let dir = tempdir().expect("failed to create temp dir");

    let output = run_binary(dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(
        stdout
            .lines()
            .filter(|line| line.contains("SVG file not found"))
            .count(),
        1
    );
    assert!(!stdout.contains("Generating Chrome extension icons"));
    assert_eq!(png_count(dir.path()), 0);
}

#[test]
fn binary_prints_markers_and_created_files() {
    let dir = tempdir().expect("failed to create temp dir");
    prepare_source(dir.path());

    let output = run_binary(dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "status: {:?}", output.status);
    for size in [16u32, 32, 48, 128] {
        assert!(stdout.contains(&format!("✓ icon{size}.png")), "{stdout}");
    }
    let (_, summary) = stdout
        .split_once("Files created:")
        .expect("summary should be printed");
    let listed: Vec<&str> = summary.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(
        listed,
        vec!["  - icon16.png", "  - icon32.png", "  - icon48.png", "  - icon128.png"]
    );
    assert_eq!(png_count(dir.path()), 4);
}

#[test]
fn binary_prints_failure_detail_before_marker_on_stdout() {
    let dir = tempdir().expect("failed to create temp dir");
    prepare_source(dir.path());
    fs::create_dir(dir.path().join("icon48.png")).expect("failed to create blocker");

    let output = run_binary(dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let detail = stdout
        .find("Error generating")
        .expect("failure detail should be on stdout");
    let marker = stdout
        .find("✗ Failed to generate icon48.png")
        .expect("failure marker should be printed");
    assert!(detail < marker);
    assert!(stdout.contains("✓ icon128.png"));
    let (_, summary) = stdout
        .split_once("Files created:")
        .expect("summary should be printed");
    assert!(!summary.contains("icon48.png"));
}
