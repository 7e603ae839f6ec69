use crate::modules::taxes::TaxCategory;
use crate::modules::transactions::TransactionForm;

pub fn render(form: &TransactionForm) -> String {
    let mut lines = vec!["New transaction".to_string()];

    if let Some(error) = form.error() {
        lines.push(format!("! {}", error));
    }

    lines.push(format!("  date         {}", form.date()));
    lines.push(format!("  category     {}", form.category().form_option()));
    if form.shows_manual_rate() {
        lines.push(format!(
            "  rate         {} % (effective PPh 21 rate, per TER table or manual calculation)",
            form.manual_rate()
        ));
    }
    lines.push(format!("  base         Rp {}", form.base()));
    lines.push(format!("  description  {}", form.description()));
    lines.push(String::new());
    lines.push(format!("Estimated tax  {}", form.formatted_preview()));
    lines.push(String::new());

    let options: Vec<&str> = TaxCategory::ALL.iter().map(|c| c.as_str()).collect();
    lines.push(format!("Categories: {}", options.join(", ")));
    if form.is_submitting() {
        lines.push("Saving...".to_string());
    } else {
        lines.push("set <field> <value>, then submit".to_string());
    }
    lines.join("\n")
}
