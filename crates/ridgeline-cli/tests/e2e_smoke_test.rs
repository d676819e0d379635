use std::{fs, path::PathBuf};

use tempfile::tempdir;

use ridgeline_cli::{Args, ReportFormat, run};

/// Collects all .toml roof files from a directory
fn collect_roof_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

/// Demo roofs live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: Option<String>, output: String) -> Args {
    Args {
        input,
        width: None,
        length: None,
        left_gutter_height: None,
        right_gutter_height: None,
        left_angle: None,
        right_angle: None,
        output,
        format: ReportFormat::Text,
        config: None,
        interactive: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = collect_roof_files(demos_path());

    assert!(!demos.is_empty(), "No demo roofs found in demos/");

    let mut failed = Vec::new();

    for demo_path in &demos {
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        let args = args_for(
            Some(demo_path.to_string_lossy().to_string()),
            output_path.to_string_lossy().to_string(),
        );

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("SVG was not written");
                assert!(svg.starts_with("<svg"), "{} produced no SVG", demo_path.display());
            }
            Err(e) => failed.push((demo_path.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemo roofs that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo roof(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_demos = collect_roof_files(demos_path().join("errors"));

    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        let args = args_for(
            Some(demo_path.to_string_lossy().to_string()),
            output_path.to_string_lossy().to_string(),
        );

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(!output_path.exists(), "{} wrote an SVG", demo_path.display());
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_flags_without_input_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("flags.svg");

    let mut args = args_for(None, output_path.to_string_lossy().to_string());
    args.width = Some(9000.0);
    args.left_angle = Some(40.0);
    args.right_angle = Some(20.0);
    args.format = ReportFormat::Toml;

    run(&args).expect("Flag-only run failed");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("Width: 9000 mm"));
    assert!(svg.contains("40°"));
    assert!(svg.contains("20°"));
}

#[test]
fn e2e_flag_out_of_range_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("steep.svg");

    let mut args = args_for(None, output_path.to_string_lossy().to_string());
    args.right_angle = Some(4.9);

    let err = run(&args).unwrap_err();
    assert!(err.to_string().contains("right_angle"));
    assert!(!output_path.exists());
}

#[test]
fn e2e_explicit_config_changes_language() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[labels]\nlanguage = \"nl\"\n\n[style]\nbackground_color = \"white\"\n",
    )
    .unwrap();
    let output_path = temp_dir.path().join("nl.svg");

    let mut args = args_for(None, output_path.to_string_lossy().to_string());
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("Run with config failed");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("Breedte: 6000 mm"));
    assert!(svg.contains("<rect"));
}
