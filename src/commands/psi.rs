use std::fs;
use std::path::Path;
use anyhow::Context;
use crate::psi::{print_summary, PsiResult};

pub fn summarize(file: &Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(file).with_context(|| format!("cannot read {}", file.display()))?;
    let res = PsiResult::from_json(&raw)
        .with_context(|| format!("{} is not a PageSpeed Insights result", file.display()))?;
    print_summary(&res);
    Ok(())
}
