//! Integration test: run the `polyreduce-bench` binary on files in a
//! temporary directory.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::cast_precision_loss)]

use std::fmt::Write;
use std::path::Path;
use std::process::{Command, Output};

fn bench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_polyreduce-bench"))
        .args(args)
        .output()
        .expect("bench binary should start")
}

/// A sine wave with `count` points.
fn write_wave(dir: &Path, count: usize) -> String {
    let mut poly = String::new();
    for i in 0..count {
        let x = i as f64 * 0.25;
        writeln!(poly, "{x},{}", x.sin() * 4.0).unwrap();
    }
    let path = dir.join("wave.poly");
    std::fs::write(&path, poly).unwrap();
    path.to_str().unwrap().to_owned()
}

#[test]
fn text_report_lists_every_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    let poly = write_wave(dir.path(), 200);
    std::fs::write(
        dir.path().join("wave.algo"),
        "# defaults to wave.algo\nsimplify_radial_distance,0.5\nsimplify_douglas_peucker,0.1\n",
    )
    .unwrap();

    let output = bench(&[&poly, "--runs", "2", "--compare-reference"]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = stdout.lines().skip(2).collect();
    assert_eq!(rows.len(), 2, "{stdout}");
    assert!(rows[0].starts_with("slice,radial_distance,0.5,"));
    assert!(rows[1].starts_with("slice,douglas_peucker,0.1,"));
    assert!(rows[1].ends_with(",same"));
}

#[test]
fn json_output_and_svg_overlays() {
    let dir = tempfile::tempdir().unwrap();
    let poly = write_wave(dir.path(), 100);
    let svg_dir = dir.path().join("svg");

    let output = bench(&[
        &poly,
        "--json",
        "--runs",
        "1",
        "--algorithms-json",
        r#"[{"algorithm":"nth_point","n":5},{"algorithm":"douglas_peucker_n","count":12}]"#,
        "--svg",
        svg_dir.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["points"], 100);
    assert_eq!(json["results"][0]["points"], 21);
    assert_eq!(json["results"][1]["points"], 12);

    let svg = std::fs::read_to_string(svg_dir.join("wave-01-douglas_peucker_n.svg")).unwrap();
    assert_eq!(svg.matches("<circle").count(), 12);
    assert!(svg.contains("<title>wave</title>"));
    assert!(svg_dir.join("wave-00-nth_point.svg").exists());
}

#[test]
fn list_container_runs_random_access_algorithms() {
    let dir = tempfile::tempdir().unwrap();
    let poly = write_wave(dir.path(), 50);
    let algo = dir.path().join("mixed.algo");
    std::fs::write(&algo, "lang,0.5,6\nopheim,0.2,2\n").unwrap();

    let output = bench(&[&poly, algo.to_str().unwrap(), "--container", "list"]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = stdout.lines().skip(2).collect();
    assert_eq!(rows.len(), 2, "{stdout}");
    assert!(rows[0].starts_with("list,lang,"), "{stdout}");
    assert!(rows[1].starts_with("list,opheim,"), "{stdout}");
}

#[test]
fn errors_exit_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let poly = write_wave(dir.path(), 10);

    // No wave.algo next to the polyline.
    let output = bench(&[&poly]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error reading"));

    let algo = dir.path().join("bad.algo");
    std::fs::write(&algo, "nth_point,3\nsimplify_unknown,1\n").unwrap();
    let output = bench(&[&poly, algo.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2: unknown algorithm"));

    let output = bench(&[&poly, "--runs", "0", "--algorithms-json", "[]"]);
    assert!(!output.status.success());

    let output = bench(&[&poly, "--algorithms-json", "[]"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no algorithms"));
}

#[test]
fn svg_requires_two_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let poly = dir.path().join("line.poly");
    std::fs::write(&poly, "0,0,0\n1,1,1\n2,0,2\n").unwrap();

    let output = bench(&[
        poly.to_str().unwrap(),
        "--algorithms-json",
        r#"[{"algorithm":"radial_distance","tol":0.5}]"#,
        "--svg",
        dir.path().to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("2-D"));
}
