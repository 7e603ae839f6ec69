use crate::modules::transactions::Transaction;

pub const EMPTY_MESSAGE: &str = "No transactions yet. Add one from the input tab.";

/// `14 March 2025`
fn format_date(trx: &Transaction) -> String {
    trx.date.format("%-d %B %Y").to_string()
}

pub fn render(transactions: &[Transaction]) -> String {
    let mut lines = vec![
        "Recent transactions".to_string(),
        format!(
            "{:>5}  {:<18} {:<7} {:<32} {:>16} {:>14}",
            "ID", "Date", "Type", "Description", "Base (DPP)", "Tax"
        ),
    ];

    if transactions.is_empty() {
        lines.push(EMPTY_MESSAGE.to_string());
        return lines.join("\n");
    }

    for trx in transactions {
        lines.push(format!(
            "{:>5}  {:<18} {:<7} {:<32} {:>16} {:>14}",
            trx.id,
            format_date(trx),
            trx.tax_type.as_str().to_uppercase(),
            truncate(&trx.description, 32),
            trx.formatted_dpp(),
            trx.formatted_tax_amount()
        ));
    }
    lines.push(String::new());
    lines.push("delete <id> to remove a record".to_string());
    lines.join("\n")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
