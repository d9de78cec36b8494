use super::*;
use crate::groups::defs::plotting_groups;
use crate::pipeline::stage2_groups::run_stage2;
use crate::pipeline::stage3_fit::run_stage3;
use crate::test_support::{fixture_table, make_temp_dir};

#[test]
fn test_write_reports_summary_and_text() {
    let table = fixture_table(3);
    let stage2 = run_stage2(&table, &plotting_groups()).unwrap();
    let panels = run_stage3(&stage2.groups).unwrap();
    let spec = FigureSpec::publication();
    let dir = make_temp_dir("report");

    let input = Stage5Input {
        audits: &stage2.audits,
        panels: &panels,
        spec: &spec,
        input_path: Path::new("data.csv"),
        output_path: Path::new("out.png"),
        tool_name: "green-residuals".to_string(),
        tool_version: "0.1.0".to_string(),
    };
    let targets = ReportTargets {
        summary: Some(dir.join("summary.json")),
        report: Some(dir.join("report.txt")),
    };
    write_reports(&input, &targets).unwrap();

    let json = std::fs::read_to_string(dir.join("summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["dpi"], 400);
    assert_eq!(value["figure_px"][0], 10_000);
    assert_eq!(value["groups"].as_array().unwrap().len(), 5);
    assert_eq!(value["panels"].as_array().unwrap().len(), 20);
    assert_eq!(value["panels"][3]["group"], "NutNet_C");
    // Cab drops row 0 in every replicate: 9 rows, 6 complete pairs.
    assert_eq!(value["panels"][3]["n_points"], 9);
    assert_eq!(value["panels"][3]["n_valid"], 6);

    let report = std::fs::read_to_string(dir.join("report.txt")).unwrap();
    assert!(report.contains("NutNet_NPK [replicates]: 9 rows"));
    assert!(report.contains("EGG: slope="));
}

#[test]
fn test_write_reports_noop_without_targets() {
    let spec = FigureSpec::publication();
    let input = Stage5Input {
        audits: &[],
        panels: &[],
        spec: &spec,
        input_path: Path::new("data.csv"),
        output_path: Path::new("out.png"),
        tool_name: "green-residuals".to_string(),
        tool_version: "0.1.0".to_string(),
    };
    write_reports(&input, &ReportTargets::default()).unwrap();
    assert_eq!(build_summary(&input).panels.len(), 0);
}
