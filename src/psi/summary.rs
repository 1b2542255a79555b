use prettytable::{row, Table};
use super::types::PsiResult;

/// One table: where the report came from, then one row per category.
pub fn summary_table(res: &PsiResult) -> Table {
    let lh = &res.lighthouse_result;
    let mut table = Table::new();
    table.add_row(row!["URL", lh.final_url]);
    table.add_row(row!["Form factor", lh.config_settings.emulated_form_factor.as_str()]);
    table.add_row(row!["Lighthouse", lh.lighthouse_version]);
    table.add_row(row!["Fetched", lh.fetch_time.to_rfc3339()]);
    table.add_row(row!["Total time", format!("{:.0} ms", lh.timing.total)]);
    for cat in lh.categories.iter() {
        let score = cat.score_percent().map(|s| s.to_string()).unwrap_or_else(|| "n/a".to_string());
        table.add_row(row![cat.title, score]);
    }
    table
}

pub fn print_summary(res: &PsiResult) {
    summary_table(res).printstd();
}
