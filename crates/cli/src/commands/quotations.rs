use epoch_core::demo::demo_quotation_book;

use crate::commands::CommandResult;

pub fn run() -> CommandResult {
    let book = demo_quotation_book();

    let mut lines = vec![format!(
        "{:<12} {:<30} {:<12} {:<12} {:>12} {:<15}",
        "NO.", "PROJECT", "DRAFTED", "APPROVED", "VALUE", "STATUS"
    )];
    for record in book.list() {
        lines.push(format!(
            "{:<12} {:<30} {:<12} {:<12} {:>12} {:<15}",
            record.id.0,
            record.project_name,
            record.draft_date.to_string(),
            record
                .approval_date
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string()),
            format!("${}", record.value),
            record.status.label(),
        ));
    }

    CommandResult::success(lines.join("\n"))
}
