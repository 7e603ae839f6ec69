use crate::core::Rupiah;
use crate::modules::dashboard::DashboardSummary;
use crate::modules::taxes::TaxCategory;

pub fn render(summary: Option<&DashboardSummary>) -> String {
    let Some(summary) = summary else {
        return "Loading dashboard data...".to_string();
    };

    let mut lines = vec![
        format!("Total tax payable   {}", Rupiah::format_whole(summary.total_tax)),
        format!("Transactions        {}", summary.total_transactions),
        String::new(),
        "Per category:".to_string(),
    ];

    for category in TaxCategory::ALL {
        lines.push(format!(
            "  {:<8} {}",
            category.short_label(),
            Rupiah::format_whole(summary.breakdown.get(category))
        ));
    }

    lines.push(String::new());
    let shares = summary.breakdown.non_zero();
    if shares.is_empty() {
        lines.push("No tax recorded yet.".to_string());
    } else {
        lines.push("Share of total:".to_string());
        for (category, _) in shares {
            lines.push(format!(
                "  {:<8} {:>3}%",
                category.short_label(),
                summary.share_percent(category)
            ));
        }
    }

    lines.join("\n")
}
