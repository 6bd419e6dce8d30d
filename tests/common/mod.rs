// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const CHART_FILES: [&str; 5] = [
    "coverage.svg",
    "mutation.svg",
    "benchmark.svg",
    "cyclomatic.svg",
    "maintainability.svg",
];

pub fn feature(name: &str, coverage: &str, cyclo: &str) -> String {
    format!(
        r#""{name}": {{
            "test_coverage": "{coverage}",
            "mutation_score": "70%",
            "benchmark_score": "123.4ns/op",
            "cyclo_score": {cyclo},
            "maintainability_index": [80, 80, 72]
        }}"#
    )
}

pub fn write_results(dir: &Path, features: &[String]) -> PathBuf {
    let path = dir.join("results.json");
    fs::write(&path, format!("{{{}}}", features.join(","))).unwrap();
    path
}
