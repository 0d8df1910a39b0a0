use covid_econ_analysis::config::AnalysisConfig;
use covid_econ_analysis::data::{CleanerError, LoaderError};
use covid_econ_analysis::pipeline::{self, PipelineError};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn sample_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sample_data/covid_economic_impact.csv")
}

fn config_for(csv_path: PathBuf) -> AnalysisConfig {
    AnalysisConfig {
        csv_path,
        render_charts: false,
        ..Default::default()
    }
}

#[test]
fn sample_run_cleans_and_scores() {
    let analysis = pipeline::run(&config_for(sample_csv())).unwrap();
    let report = &analysis.report;

    assert_eq!(report.missing.rows_before, 90);
    assert_eq!(report.missing.rows_after, 87);
    assert_eq!(report.missing.missing_in("gdp_growth"), Some(1));
    assert_eq!(report.missing.missing_in("poverty_rate"), Some(1));
    assert_eq!(report.missing.missing_in("date"), Some(1));
    assert_eq!(analysis.dataset.len(), 87);
    assert_eq!(analysis.dataset.countries().len(), 5);

    let split = &report.evaluation.split;
    assert_eq!(split.train.len(), 70);
    assert_eq!(split.test.len(), 17);
    let train: HashSet<_> = split.train.iter().collect();
    assert!(split.test.iter().all(|row| !train.contains(row)));

    assert!(report.evaluation.mse() >= 0.0);
    assert!(report.evaluation.r2().is_finite());
    assert_eq!(report.evaluation.model.coefficients.len(), 3);
    assert!(report.charts.is_empty());
}

#[test]
fn same_seed_reproduces_split_and_metrics() {
    let config = config_for(sample_csv());
    let a = pipeline::run(&config).unwrap().report.evaluation;
    let b = pipeline::run(&config).unwrap().report.evaluation;
    assert_eq!(a.split, b.split);
    assert_eq!(a.mse(), b.mse());
    assert_eq!(a.r2(), b.r2());
}

#[test]
fn ten_clean_rows_hold_out_two() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("ten.csv");
    let mut body = String::from("country,date,gdp_growth,unemployment_rate,poverty_rate\n");
    for i in 0..10 {
        let u = 4.0 + (i % 4) as f64;
        let p = 12.0 + ((i * 3) % 5) as f64;
        let g = 2.0 - 0.4 * u + 0.1 * p + if i % 2 == 0 { 0.05 } else { -0.05 };
        body.push_str(&format!("C{},2020-{:02}-01,{g},{u},{p}\n", i % 2, i + 1));
    }
    fs::write(&csv, body).unwrap();

    let first = pipeline::run(&config_for(csv.clone())).unwrap();
    let second = pipeline::run(&config_for(csv)).unwrap();
    let split = &first.report.evaluation.split;
    assert_eq!(split.train.len(), 8);
    assert_eq!(split.test.len(), 2);
    assert_eq!(split.test, second.report.evaluation.split.test);
}

#[test]
fn perfect_linear_data_scores_one() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("perfect.csv");
    let mut body = String::from("country,date,gdp_growth,unemployment_rate,poverty_rate\n");
    for i in 0..25 {
        let u = 3.0 + (i % 6) as f64 * 0.75;
        let p = 10.0 + ((i * 7) % 9) as f64 * 1.25;
        let g = 5.0 - 0.5 * u - 0.25 * p;
        body.push_str(&format!("Land,2020-01-{:02},{g},{u},{p}\n", i + 1));
    }
    fs::write(&csv, body).unwrap();

    let eval = pipeline::run(&config_for(csv)).unwrap().report.evaluation;
    assert!((eval.r2() - 1.0).abs() < 1e-9);
    assert!(eval.mse() < 1e-12);
}

#[test]
fn json_report_is_written() {
    let dir = tempdir().unwrap();
    let report_path = dir.path().join("report.json");
    let config = AnalysisConfig {
        report_path: Some(report_path.clone()),
        ..config_for(sample_csv())
    };
    let analysis = pipeline::run(&config).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    let mse = json["evaluation"]["metrics"]["mse"].as_f64().unwrap();
    assert!((mse - analysis.report.evaluation.mse()).abs() < 1e-9);
    assert_eq!(json["missing"]["rows_after"], 87);
    assert_eq!(json["config"]["seed"], 42);
}

#[test]
fn missing_input_aborts() {
    let err = pipeline::run(&config_for(PathBuf::from("no/such/file.csv"))).unwrap_err();
    assert!(matches!(err, PipelineError::Load(LoaderError::NotFound(_))));
}

#[test]
fn bad_date_aborts() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("dates.csv");
    fs::write(
        &csv,
        "country,date,gdp_growth,unemployment_rate,poverty_rate\n\
         A,2020-01-01,1.0,2.0,3.0\n\
         B,sometime,1.0,2.0,3.0\n",
    )
    .unwrap();
    let err = pipeline::run(&config_for(csv)).unwrap_err();
    assert!(matches!(err, PipelineError::Clean(_)));
}

#[test]
fn invalid_fraction_is_rejected_before_loading() {
    let config = AnalysisConfig {
        train_fraction: 0.0,
        ..config_for(PathBuf::from("no/such/file.csv"))
    };
    assert!(matches!(
        pipeline::run(&config).unwrap_err(),
        PipelineError::Config(_)
    ));
}

fn indicator_csv(dir: &std::path::Path, rows: usize, extra: &str) -> PathBuf {
    let csv = dir.join("indicators.csv");
    let mut body = String::from("country,date,gdp_growth,unemployment_rate,poverty_rate\n");
    for i in 0..rows {
        let u = 4.0 + (i % 7) as f64 * 0.5;
        let p = 15.0 + (i % 5) as f64;
        body.push_str(&format!(
            "C{},2020-01-01,{},{u},{p}\n",
            i % 3,
            1.0 - 0.3 * u + 0.05 * p
        ));
    }
    body.push_str(extra);
    fs::write(&csv, body).unwrap();
    csv
}

#[test]
fn pandas_missing_tokens_are_counted_and_dropped() {
    let dir = tempdir().unwrap();
    let csv = indicator_csv(
        dir.path(),
        10,
        "X,2020-02-01,NA,5.0,16.0\n\
         Y,2020-03-01,1.0,N/A,16.0\n\
         Z,2020-04-01,1.0,5.0,null\n",
    );
    let report = pipeline::run(&config_for(csv)).unwrap().report;
    assert_eq!(report.missing.rows_before, 13);
    assert_eq!(report.missing.rows_after, 10);
    assert_eq!(report.missing.missing_in("gdp_growth"), Some(1));
    assert_eq!(report.missing.missing_in("unemployment_rate"), Some(1));
    assert_eq!(report.missing.missing_in("poverty_rate"), Some(1));
}

#[test]
fn non_numeric_cell_in_csv_aborts() {
    let dir = tempdir().unwrap();
    let csv = indicator_csv(dir.path(), 10, "X,2020-02-01,high,5.0,16.0\n");
    match pipeline::run(&config_for(csv)).unwrap_err() {
        PipelineError::Clean(CleanerError::InvalidNumber { column, row, value }) => {
            assert_eq!(column, "gdp_growth");
            assert_eq!(row, 10);
            assert_eq!(value, "high");
        }
        other => panic!("expected number error, got {other}"),
    }
}

#[test]
fn non_numeric_cell_in_large_csv_aborts() {
    let dir = tempdir().unwrap();
    let csv = indicator_csv(dir.path(), 5000, "X,2020-02-01,high,5.0,16.0\n");
    let err = pipeline::run(&config_for(csv)).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Clean(CleanerError::InvalidNumber { row: 5000, .. })
    ));
}
