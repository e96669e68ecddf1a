use crate::outcome::{FixReport, Outcome, OutcomeStatus};
use crate::rules::all_rules;
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation, Region,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::{BTreeSet, HashMap};

/// Formats a [`FixReport`] as SARIF 2.1.0.
///
/// Each outcome becomes one result: failures are errors, skipped
/// diagnostics (still needing manual attention) are warnings, and applied
/// fixes are notes.
pub fn format(report: &FixReport) -> String {
    let check_ids: Vec<&str> = report
        .outcomes
        .iter()
        .map(|o| o.check_name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let rule_index: HashMap<&str, i64> = check_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i as i64))
        .collect();

    let known = all_rules();
    let rules: Vec<ReportingDescriptor> = check_ids
        .iter()
        .map(|id| {
            let mut rule = ReportingDescriptor::builder().id(id.to_string()).build();
            if let Some(info) = known.iter().find(|r| r.check == *id) {
                rule.short_description = Some(
                    MultiformatMessageString::builder()
                        .text(info.description.to_string())
                        .build(),
                );
            }
            rule
        })
        .collect();

    let results: Vec<SarifResult> = report
        .outcomes
        .iter()
        .map(|o| {
            let (level, text) = level_and_message(o);

            let mut result = SarifResult::builder()
                .message(Message::builder().text(text).build())
                .build();

            result.rule_id = Some(o.check_name.clone());
            result.level = Some(level);
            result.rule_index = rule_index.get(o.check_name.as_str()).copied();

            let uri = o.file.to_string_lossy().replace('\\', "/");
            let mut location = Location::builder().build();
            let mut physical = PhysicalLocation::builder().build();
            physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());
            physical.region = Some(Region::builder().start_line(o.line as i64).build());
            location.physical_location = Some(physical);
            result.locations = Some(vec![location]);

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("oxidized-lint-fix")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}

fn level_and_message(outcome: &Outcome) -> (ResultLevel, String) {
    match &outcome.status {
        OutcomeStatus::Applied { after, .. } => {
            (ResultLevel::Note, format!("fixed: {}", after.trim()))
        }
        OutcomeStatus::Skipped { reason } => (ResultLevel::Warning, format!("not fixed: {reason}")),
        OutcomeStatus::Failed { error } => (ResultLevel::Error, format!("fix failed: {error}")),
    }
}
