use crate::report::{PanelSummary, SummaryData, format_f64_6};

pub fn render_fit_report(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Trait Residuals vs Green Area Ratio\n");
    out.push_str("===================================\n\n");
    out.push_str(&format!("Input: {}\n", data.input));
    out.push_str(&format!(
        "Figure: {} ({}x{} px, {} dpi)\n\n",
        data.output, data.figure_px[0], data.figure_px[1], data.dpi
    ));

    out.push_str("1. Groups\n");
    for group in &data.groups {
        out.push_str(&format!(
            "{} [{}]: {} rows\n",
            group.name, group.source, group.n_rows
        ));
    }
    out.push('\n');

    out.push_str("2. Linear fits\n");
    let mut current_row = None;
    for panel in &data.panels {
        if current_row != Some(panel.row) {
            out.push_str(&format!("{}\n", panel.variable));
            current_row = Some(panel.row);
        }
        out.push_str(&format!("  {}\n", panel_line(panel)));
    }

    out
}

fn panel_line(panel: &PanelSummary) -> String {
    match &panel.fit {
        Some(fit) => format!(
            "{}: slope={} intercept={} (n={}/{})",
            panel.group,
            format_f64_6(fit.slope),
            format_f64_6(fit.intercept),
            panel.n_valid,
            panel.n_points
        ),
        None => format!(
            "{}: no fit ({} valid pairs of {})",
            panel.group, panel.n_valid, panel.n_points
        ),
    }
}
