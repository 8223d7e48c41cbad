use crate::services::simulation_types::SavingsReport;

pub fn format_savings_report(report: &SavingsReport) -> String {
    let stats = &report.stats;

    let mut lines = Vec::new();
    lines.push("Savings Report".to_string());
    lines.push(format!("Scenario: {}", report.scenario));
    lines.push(format!("Trials: {}", report.trials));
    lines.push(format!("Seed: {}", report.seed));
    lines.push(String::new());
    lines.push("Statistic | Value".to_string());
    lines.push("----------|------".to_string());
    lines.push(format!("Mean | {}", format_amount(stats.mean)));
    lines.push(format!("Median | {}", format_amount(stats.median)));
    lines.push(format!("Std dev | {}", format_amount(stats.std)));
    lines.push(format!("Min | {}", format_amount(stats.min)));
    lines.push(format!("Max | {}", format_amount(stats.max)));
    lines.push(format!("P10 | {}", format_amount(stats.p10)));
    lines.push(format!("P90 | {}", format_amount(stats.p90)));
    lines.push(format!(
        "P(savings > 0) | {}",
        format_probability(stats.prob_positive)
    ));

    lines.join("\n")
}

/// Comparison view across scenarios; reads only the distribution summary.
pub fn format_comparison_table(reports: &[SavingsReport]) -> String {
    let mut lines = Vec::new();
    lines.push("Scenario Comparison".to_string());
    lines.push("Scenario | Median | P10 | P90 | P(savings > 0)".to_string());
    lines.push("---------|--------|-----|-----|---------------".to_string());
    for report in reports {
        let stats = &report.stats;
        lines.push(format!(
            "{} | {} | {} | {} | {}",
            report.scenario,
            format_amount(stats.median),
            format_amount(stats.p10),
            format_amount(stats.p90),
            format_probability(stats.prob_positive)
        ));
    }

    lines.join("\n")
}

/// Currency-style formatting with thousands separators, two decimals.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let mut whole = rounded.trunc() as i64;
    let mut cents = ((rounded - whole as f64) * 100.0).round() as i64;
    if cents == 100 {
        whole += 1;
        cents = 0;
    }

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (index, ch) in digits.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-{grouped}.{cents:02}")
    } else {
        format!("{grouped}.{cents:02}")
    }
}

fn format_probability(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::simulation_types::{HistogramBin, SavingsStats};

    fn build_report(name: &str) -> SavingsReport {
        SavingsReport {
            scenario: name.to_string(),
            seed: 42,
            trials: 1000,
            stats: SavingsStats {
                mean: 95_321.5,
                median: 96_000.0,
                std: 12_345.678,
                min: -4_200.0,
                max: 180_000.0,
                p10: 70_500.25,
                p90: 120_000.0,
                prob_positive: 0.934,
            },
            histogram: vec![HistogramBin { lower_edge: -4_200.0, count: 1000 }],
        }
    }

    #[test]
    fn format_savings_report_includes_header_and_table() {
        let output = format_savings_report(&build_report("Harvest 2026"));

        assert!(output.contains("Savings Report"));
        assert!(output.contains("Scenario: Harvest 2026"));
        assert!(output.contains("Trials: 1000"));
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("Statistic | Value"));
        assert!(output.contains("Mean | 95,321.50"));
        assert!(output.contains("Median | 96,000.00"));
        assert!(output.contains("Std dev | 12,345.68"));
        assert!(output.contains("Min | -4,200.00"));
        assert!(output.contains("P10 | 70,500.25"));
        assert!(output.contains("P(savings > 0) | 93.4%"));
    }

    #[test]
    fn format_comparison_table_lists_one_row_per_scenario() {
        let reports = vec![build_report("A"), build_report("B")];
        let output = format_comparison_table(&reports);

        assert!(output.contains("Scenario Comparison"));
        assert!(output.contains("Scenario | Median | P10 | P90 | P(savings > 0)"));
        assert!(output.contains("A | 96,000.00 | 70,500.25 | 120,000.00 | 93.4%"));
        assert!(output.contains("B | 96,000.00 | 70,500.25 | 120,000.00 | 93.4%"));
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(-1_234.5), "-1,234.50");
        assert_eq!(format_amount(999.999), "1,000.00");
    }
}
