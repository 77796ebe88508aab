use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;

use crate::{
    error::{PairFinderError, Result},
    runner::RunSummary,
};

const SUMMARY_TEMPLATE: &str = r#"# Two Sum: {{algorithm}}

**Complexity:** {{complexity}}
**Result:** {{passed}}/{{total}} passed

| Case | Result | Verdict | Time (µs) |
|------|--------|---------|-----------|
{{#each cases}}
| {{name}} | {{result}} | {{verdict}} | {{micros}} |
{{/each}}
{{#if failed}}

{{failed}} case(s) failed.
{{/if}}
"#;

fn build_registry() -> Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.register_template_string("summary", SUMMARY_TEMPLATE)?;
    Ok(handlebars)
}

/// Render a markdown summary of a case run.
pub fn render_summary(summary: &RunSummary) -> Result<String> {
    let cases: Vec<_> = summary
        .outcomes
        .iter()
        .map(|outcome| {
            json!({
                "name": outcome.name,
                "result": outcome
                    .result
                    .map(|pair| pair.to_string())
                    .unwrap_or_else(|| "none".to_string()),
                "verdict": outcome.verdict.label(),
                "micros": outcome.elapsed.as_micros().to_string(),
            })
        })
        .collect();

    let data = json!({
        "algorithm": summary.algorithm.name(),
        "complexity": summary.algorithm.complexity(),
        "passed": summary.passed(),
        "failed": summary.failed(),
        "total": summary.outcomes.len(),
        "cases": cases,
    });

    Ok(build_registry()?.render("summary", &data)?)
}

pub fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let rendered = render_summary(summary)?;
    std::fs::write(path, rendered).map_err(|e| PairFinderError::io(path, e))?;
    log::info!("wrote run summary to {}", path.display());
    Ok(())
}
