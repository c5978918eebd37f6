use std::fs;

use tempfile::tempdir;

use parterre_cli::{Args, run};

fn write_sample_layout(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("layout.json");
    fs::write(
        &path,
        r#"{
            "areas": [{
                "name": "Stalls",
                "blocks": [{
                    "rows": [{
                        "name": "A",
                        "showLabels": "left",
                        "seats": [
                            {"id": "A1", "name": "1"},
                            {"id": "A2", "name": "2", "x": 100}
                        ]
                    }]
                }],
                "volumes": [{"id": "ga", "label": "GA", "width": 200, "height": 100, "availableSeats": 12}]
            }],
            "decorations": [{"type": "text", "text": "Stage", "x": 100, "y": 300}]
        }"#,
    )
    .expect("Failed to write sample layout");
    path
}

#[test]
fn e2e_smoke_test_renders_svg_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = write_sample_layout(temp_dir.path());
    let output = temp_dir.path().join("layout.svg");

    let args = Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    run(&args).expect("Rendering the sample layout should succeed");

    let svg = fs::read_to_string(&output).expect("Output SVG should exist");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    assert!(svg.contains("Stage"));
    assert!(svg.contains("12"));
}

#[test]
fn e2e_smoke_test_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = write_sample_layout(temp_dir.path());
    let output = temp_dir.path().join("layout.svg");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "className = \"venue\"\nariaLabel = \"Main hall\"\n",
    )
    .expect("Failed to write config");

    let args = Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    run(&args).expect("Rendering with a config file should succeed");

    let svg = fs::read_to_string(&output).expect("Output SVG should exist");
    assert!(svg.contains("class=\"venue\""));
    assert!(svg.contains("aria-label=\"Main hall\""));
}

#[test]
fn e2e_smoke_test_invalid_layout_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("broken.json");
    fs::write(&input, "{ this is not json").expect("Failed to write broken layout");

    let args = Args {
        input: input.to_string_lossy().to_string(),
        output: temp_dir.path().join("out.svg").to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err(), "Malformed JSON must be reported");
}
