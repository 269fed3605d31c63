use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use mullion_cli::{Args, CliError, run};

fn samples_dir() -> PathBuf {
    // Samples live at the workspace root, not in the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

/// Collects all .toml files from a directory
fn collect_toml_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect(),
        Err(_) => Vec::new(),
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        config: None,
        strict: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let samples = collect_toml_files(&samples_dir());
    assert!(!samples.is_empty(), "No samples found in samples/");

    let mut failed = Vec::new();
    for sample in &samples {
        let output = temp_dir
            .path()
            .join(format!("{}.svg", sample.file_stem().unwrap().to_string_lossy()));

        match run(&args(sample, &output)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output).expect("output written");
                assert!(svg.starts_with("<svg"), "{} is not SVG", output.display());
                assert!(svg.contains("</svg>"));
            }
            Err(err) => failed.push((sample.clone(), err)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nSamples that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} sample(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let samples = collect_toml_files(&samples_dir().join("errors"));
    assert!(!samples.is_empty(), "No error samples found in samples/errors/");

    for sample in &samples {
        let output = temp_dir.path().join("error.svg");
        let result = run(&args(sample, &output));
        assert!(
            matches!(result, Err(CliError::Input { .. })),
            "{} should be rejected as invalid input, got {:?}",
            sample.display(),
            result
        );
        assert!(!output.exists());
    }
}

#[test]
fn e2e_strict_mode_rejects_conflicts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("conflicts.svg");

    let mut strict = args(&samples_dir().join("conflicts.toml"), &output);
    strict.strict = true;

    let result = run(&strict);
    assert!(matches!(result, Err(CliError::Conflicts { count: 3 })), "{result:?}");
    assert!(!output.exists());

    strict.strict = false;
    run(&strict).expect("non-strict run exports despite conflicts");
    assert!(output.exists());
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[viewport]\nwidth = 1000\nheight = 500\n\n[style]\nbackground_color = \"ivory\"\n",
    )
    .unwrap();
    let output = temp_dir.path().join("frame.svg");

    let mut with_config = args(&samples_dir().join("single_mullion.toml"), &output);
    with_config.config = Some(config_path);
    run(&with_config).expect("run with config");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("viewBox=\"0 0 1000 500\""));
    assert!(svg.contains("background-color"));
}

#[test]
fn e2e_invalid_style_color_is_engine_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nframe = \"not-a-color\"\n").unwrap();

    let mut with_config = args(
        &samples_dir().join("single_mullion.toml"),
        &temp_dir.path().join("frame.svg"),
    );
    with_config.config = Some(config_path);

    assert!(matches!(run(&with_config), Err(CliError::Engine(_))));
}
