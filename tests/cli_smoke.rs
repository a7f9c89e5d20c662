use std::process::Command;

fn write_fixture(dir: &std::path::Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let scene = dir.join("scene.json");
    std::fs::write(
        &scene,
        r#"{
            "entities": [
                {"type": "LWPOLYLINE", "layer": "BIDANG", "closed": true,
                 "vertices": [{"x": 0, "y": 0}, {"x": 10, "y": 0}, {"x": 10, "y": 10}, {"x": 0, "y": 10}]}
            ]
        }"#,
    )
    .unwrap();

    let parcels = dir.join("parcels.json");
    std::fs::write(&parcels, r#"[{"identifier": "NIB-42", "area_m2": 100.0}]"#).unwrap();

    (scene, parcels)
}

#[test]
fn preview_subcommand_emits_the_client_payload() {
    let exe = env!("CARGO_BIN_EXE_petabidang");
    let temp = tempfile::tempdir().unwrap();
    let (scene, parcels) = write_fixture(temp.path());

    let output = Command::new(exe)
        .args([
            "preview",
            scene.to_str().unwrap(),
            "--parcels",
            parcels.to_str().unwrap(),
        ])
        .output()
        .expect("run petabidang");
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(payload["svg_full"].as_str().unwrap().starts_with("<svg"));
    assert!(payload["svg_full"].as_str().unwrap().contains("NIB-42"));
    assert_eq!(payload["dimensions"]["width_mm"], 40.0);
    assert!(payload["svg_boundary"].is_string());
}

#[test]
fn geojson_subcommand_tags_features_with_the_drawing_id() {
    let exe = env!("CARGO_BIN_EXE_petabidang");
    let temp = tempfile::tempdir().unwrap();
    let (scene, _) = write_fixture(temp.path());

    let output = Command::new(exe)
        .args(["geojson", scene.to_str().unwrap(), "--drawing-id", "GU-1"])
        .output()
        .expect("run petabidang");
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["type"], "FeatureCollection");
    assert_eq!(payload["features"][0]["properties"]["drawing_id"], "GU-1");
}

#[test]
fn missing_source_drawing_is_reported_distinctly() {
    let exe = env!("CARGO_BIN_EXE_petabidang");
    let output = Command::new(exe)
        .args(["preview", "/nonexistent/scene.json"])
        .output()
        .expect("run petabidang");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no source drawing found"), "stderr: {stderr}");
}
