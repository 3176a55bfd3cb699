use colored::*;
use expectations_core::SuiteReport;

pub fn print_suite_report(report: &SuiteReport, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &SuiteReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    println!("\n{}", "Expectations:".bold());
    for outcome in &report.results {
        if outcome.success {
            println!("  {} {}", "✓".green(), outcome.description);
        } else {
            let counts = if outcome.element_count > 0 {
                format!(
                    " — {}/{} unexpected ({:.1}%)",
                    outcome.unexpected_count, outcome.element_count, outcome.unexpected_percent
                )
            } else {
                String::new()
            };
            println!(
                "  {} {}{}",
                "✗".red(),
                outcome.description.clone().red(),
                counts.red()
            );
            if let Some(detail) = &outcome.detail {
                if !detail.is_empty() {
                    println!("      {}", detail.yellow());
                }
            }
            if !outcome.unexpected_samples.is_empty() {
                println!(
                    "      unexpected: {}",
                    outcome.unexpected_samples.join(", ").yellow()
                );
            }
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Suite:       {}", report.suite_name);
    println!("  Data asset:  {}", report.data_asset);
    if let Some(run_name) = &report.run_name {
        println!("  Run name:    {}", run_name);
    }
    println!("  Rows:        {}", report.stats.rows_validated);
    println!(
        "  Failures:    {} of {}",
        report.failure_count(),
        report.results.len()
    );
    println!("  Duration:    {} ms", report.stats.duration_ms);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &SuiteReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize report: {}", e),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
