use std::io::Write;

use ecg_dashboard::data::filter::ClassFilter;
use ecg_dashboard::data::model::ClassLabel;
use ecg_dashboard::data::stats::{BalanceRating, ClassCounts};
use ecg_dashboard::{AppState, Section};

fn csv_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn loaded(contents: &str) -> (AppState, tempfile::NamedTempFile) {
    let file = csv_file(contents);
    let mut state = AppState::default();
    state.load_path(file.path()).unwrap();
    (state, file)
}

#[test]
fn three_distinct_classes_give_equal_pie() {
    let (state, _file) = loaded(
        "Patient,Heart_Rate,QRS_Duration,Class\n\
         p1,72,0.09,Normal\n\
         p2,118,0.14,Arrhythmia\n\
         p3,131,0.08,Stress\n",
    );

    let report = state.report.as_ref().unwrap();
    assert_eq!(
        report.class_counts,
        ClassCounts {
            normal: 1,
            arrhythmia: 1,
            stress: 1
        }
    );
    assert_eq!(report.recommendations.class_balance, BalanceRating::Balanced);

    let pie = state.charts.pie.get().unwrap();
    let fractions = pie.fractions();
    assert_eq!(fractions.len(), 3);
    for (label, fraction) in fractions {
        assert!(
            (fraction - 1.0 / 3.0).abs() < 1e-12,
            "{label} has share {fraction}"
        );
    }

    let bar = state.charts.bar.get().unwrap();
    let counts: Vec<usize> = bar.buckets.iter().map(|(_, n)| *n).collect();
    assert_eq!(counts, vec![1, 0, 1, 1, 0]);
    assert_eq!(state.charts.scatter.get().unwrap().points.len(), 3);
}

#[test]
fn explorer_filters_and_pages_through_rows() {
    let mut body = String::from("id,hr,label\n");
    for i in 0..120 {
        let label = if i % 2 == 0 { "normal" } else { "stress" };
        body.push_str(&format!("r{i},{},{label}\n", 60 + i));
    }
    // Short line, dropped by the parser.
    body.push_str("broken,99\n");
    let (mut state, _file) = loaded(&body);

    assert_eq!(state.visible_indices.len(), 120);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.current_page().len(), 50);
    state.go_to_page(3);
    assert_eq!(state.current_page().len(), 20);
    state.go_to_page(4);
    assert!(state.current_page().is_empty());

    state.filter_form.class = ClassFilter::Only(ClassLabel::Stress);
    state.apply_filters();
    assert_eq!(state.pager.page, 1);
    assert_eq!(state.visible_indices.len(), 60);

    state.filter_form.hr_min = "100".into();
    state.filter_form.hr_max = "120".into();
    state.apply_filters();
    // Odd i with 100 <= 60 + i <= 120: i = 41, 43, ..., 59.
    assert_eq!(state.visible_indices.len(), 10);

    let once = state.visible_indices.clone();
    state.apply_filters();
    assert_eq!(state.visible_indices, once);
}

#[test]
fn missing_columns_degrade_to_nan() {
    let (state, _file) = loaded("a,b\n1,2\n3,4\n");
    let report = state.report.as_ref().unwrap();
    assert!(report.heart_rate.mean.is_nan());
    assert!(report.heart_rate.median.is_nan());
    assert_eq!(report.class_counts, ClassCounts::default());
    assert!(state.charts.scatter.get().unwrap().points.is_empty());
    assert_eq!(state.charts.line.get().unwrap().runs().len(), 0);
}

#[test]
fn failed_load_keeps_previous_dataset() {
    let (mut state, file) = loaded("hr\n60\n");
    let missing = file.path().with_extension("missing");
    let err = state.load_path(&missing).unwrap_err();
    state.report_error(err);

    assert_eq!(state.dataset.as_ref().unwrap().len(), 1);
    assert!(state.status_message.as_deref().unwrap().starts_with("Error: loading"));
}

#[test]
fn exports_filtered_rows_and_report() {
    let (mut state, _file) = loaded("hr,label\n60,normal\n130,stress\n70,normal\n");
    state.filter_form.search = "normal".into();
    state.apply_filters();

    let dir = tempfile::tempdir().unwrap();
    let rows_path = dir.path().join("rows.csv");
    state.export_visible_rows(&rows_path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&rows_path).unwrap(),
        "hr,label\n60,normal\n70,normal\n"
    );

    let report_path = dir.path().join("report.json");
    state.export_report(&report_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["heart_rate"]["median"], 70.0);
    assert_eq!(json["quality"]["total_records"], 3);
}

#[test]
fn export_without_dataset_fails() {
    let state = AppState::default();
    let dir = tempfile::tempdir().unwrap();
    assert!(state.export_visible_rows(&dir.path().join("x.csv")).is_err());
    assert!(state.export_report(&dir.path().join("x.json")).is_err());
}

#[test]
fn switching_sections_leaves_data_alone() {
    let (mut state, _file) = loaded("hr,label\n60,normal\n");
    let before = state.report.clone();
    let view = state.visible_indices.clone();
    for section in Section::ALL {
        state.set_section(section);
        assert_eq!(state.section, section);
    }
    assert_eq!(state.report, before);
    assert_eq!(state.visible_indices, view);
}
