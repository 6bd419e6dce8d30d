// crates/charts/tests/svg.rs
use charts::{BarChart, Chart, Rgb, ScatterChart, SvgSink, render};
use metrics::{FrequencySeries, ScalarField, ScalarSeries, ScatterPoint};
use std::fs;
use tempfile::tempdir;

fn coverage_chart() -> Chart {
    Chart::Bar(BarChart {
        name: "coverage".into(),
        title: "Test Coverage per Feature".into(),
        x_label: "Feature".into(),
        y_label: "Test Coverage (%)".into(),
        color: Rgb::SKY_BLUE,
        size: (800, 500),
        series: ScalarSeries {
            field: ScalarField::TestCoverage,
            features: vec!["feature1".into(), "feature2".into()],
            values: vec![80.0, 92.5],
        },
    })
}

fn cyclomatic_chart() -> Chart {
    Chart::Scatter(ScatterChart {
        name: "cyclomatic".into(),
        title: "Cyclomatic Complexity Scatter Plot".into(),
        x_label: "Cyclomatic Complexity".into(),
        y_label: "Feature".into(),
        size: (1000, 600),
        opacity: 0.6,
        series: vec![
            FrequencySeries {
                feature: "feature1".into(),
                row: 10,
                points: vec![
                    ScatterPoint { x: 1.0, y: 10.0, size: 60.0 },
                    ScatterPoint { x: 2.0, y: 10.0, size: 30.0 },
                ],
            },
            FrequencySeries {
                feature: "feature2".into(),
                row: 20,
                points: vec![ScatterPoint { x: 5.0, y: 20.0, size: 90.0 }],
            },
        ],
        y_ticks: vec![(10.0, "feature1".into()), (20.0, "feature2".into())],
    })
}

#[test]
fn writes_one_svg_per_chart() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("charts");
    let mut sink = SvgSink::new(&out).unwrap();
    let n = render(&[coverage_chart(), cyclomatic_chart()], &mut sink).unwrap();
    assert_eq!(n, 2);
    assert_eq!(
        sink.written(),
        [out.join("coverage.svg"), out.join("cyclomatic.svg")]
    );

    let bar = fs::read_to_string(out.join("coverage.svg")).unwrap();
    assert!(bar.contains("<svg"));
    assert!(bar.contains("Test Coverage per Feature"));
    assert!(bar.contains("feature2"));

    let scatter = fs::read_to_string(out.join("cyclomatic.svg")).unwrap();
    assert!(scatter.contains("<circle"));
    assert!(scatter.contains("feature1"));
}

#[test]
fn empty_series_still_render() {
    let dir = tempdir().unwrap();
    let mut sink = SvgSink::new(dir.path()).unwrap();
    let Chart::Bar(mut bar) = coverage_chart() else {
        unreachable!()
    };
    bar.series.features.clear();
    bar.series.values.clear();
    let Chart::Scatter(mut scatter) = cyclomatic_chart() else {
        unreachable!()
    };
    scatter.series.clear();
    scatter.y_ticks.clear();
    render(&[Chart::Bar(bar), Chart::Scatter(scatter)], &mut sink).unwrap();
    assert_eq!(sink.written().len(), 2);
}

#[test]
fn scatter_ticks_are_drawn() {
    let dir = tempdir().unwrap();
    let mut sink = SvgSink::new(dir.path()).unwrap();
    render(&[cyclomatic_chart()], &mut sink).unwrap();
    let svg = fs::read_to_string(dir.path().join("cyclomatic.svg")).unwrap();
    // once on the y axis, once in the legend
    for name in ["feature1", "feature2"] {
        assert_eq!(svg.matches(name).count(), 2, "{name}");
    }
}

#[test]
fn values_near_f64_max_render() {
    let dir = tempdir().unwrap();
    let mut sink = SvgSink::new(dir.path()).unwrap();
    let Chart::Bar(mut bar) = coverage_chart() else {
        unreachable!()
    };
    bar.name = "benchmark".into();
    bar.series.field = ScalarField::BenchmarkScore;
    bar.series.values = vec![1.7e308, 1.7e308];
    let Chart::Scatter(mut scatter) = cyclomatic_chart() else {
        unreachable!()
    };
    for series in &mut scatter.series {
        for point in &mut series.points {
            point.x = 1.7e308;
        }
    }
    let n = render(&[Chart::Bar(bar), Chart::Scatter(scatter)], &mut sink).unwrap();
    assert_eq!(n, 2);
    assert!(dir.path().join("benchmark.svg").is_file());
    assert!(dir.path().join("cyclomatic.svg").is_file());
}
