use crate::models::ReleaseReadinessReport;

const HEADER: &[&str] = &[
    "gate",
    "name",
    "passed",
    "status",
    "reason",
    "tests_needed",
    "hours_needed",
];

pub(super) fn render_csv(report: &ReleaseReadinessReport) -> String {
    let mut out = String::new();
    push_record(&mut out, HEADER.iter().map(|value| (*value).to_string()));
    for verdict in &report.verdicts {
        let (tests_needed, hours_needed) = verdict.remediation.map_or_else(
            || (String::new(), String::new()),
            |remediation| {
                (
                    remediation.tests_needed.to_string(),
                    format!("{:.2}", remediation.hours_needed),
                )
            },
        );
        push_record(
            &mut out,
            [
                verdict.gate_id.number().to_string(),
                verdict.name.clone(),
                verdict.passed.to_string(),
                verdict.status.as_str().to_string(),
                verdict.reason.clone().unwrap_or_default(),
                tests_needed,
                hours_needed,
            ],
        );
    }
    out
}

fn push_record(out: &mut String, fields: impl IntoIterator<Item = String>) {
    let line = fields
        .into_iter()
        .map(|field| escape_field(&field))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push('\n');
}

pub(super) fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
