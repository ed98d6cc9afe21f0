use crate::AnalysisResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonSummaryEntry {
    british_spelling: String,
    american_spelling: String,
    british_count: usize,
    american_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonReport {
    source: String,
    british_count: usize,
    american_count: usize,
    total_found: usize,
    british_percentage: f64,
    american_percentage: f64,
    word_summary: Vec<JsonSummaryEntry>,
}

pub fn print_report(
    source: &str,
    result: &AnalysisResult,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_report(source, result, colored_output),
        OutputFormat::Json => print_json_report(source, result),
    }
}

fn print_text_report(source: &str, result: &AnalysisResult, colored_output: bool) {
    if colored_output {
        println!("\n{}", source.bold().underline());
    } else {
        println!("\n{}", source);
    }

    if result.total_found == 0 {
        if colored_output {
            println!("  {}", "No British or American spelling variants found.".yellow());
        } else {
            println!("  No British or American spelling variants found.");
        }
        return;
    }

    let verdict = verdict_line(result);
    if colored_output {
        println!("  {}", verdict.bold());
        println!(
            "  {} {} ({:.1}%)   {} {} ({:.1}%)   total {}",
            "British:".cyan(),
            result.british_count.to_string().cyan().bold(),
            result.british_percentage,
            "American:".magenta(),
            result.american_count.to_string().magenta().bold(),
            result.american_percentage,
            result.total_found
        );
    } else {
        println!("  {}", verdict);
        println!(
            "  British: {} ({:.1}%)   American: {} ({:.1}%)   total {}",
            result.british_count,
            result.british_percentage,
            result.american_count,
            result.american_percentage,
            result.total_found
        );
    }

    println!();
    for entry in &result.word_summary {
        let line = format!(
            "{:>4}x  {} / {}  (bre {}, ame {})",
            entry.total(),
            entry.british_spelling,
            entry.american_spelling,
            entry.british_count,
            entry.american_count
        );
        if colored_output {
            println!("  {}", line.dimmed());
        } else {
            println!("  {}", line);
        }
    }
}

fn verdict_line(result: &AnalysisResult) -> String {
    if result.british_count > result.american_count {
        "Leans British English".to_string()
    } else if result.american_count > result.british_count {
        "Leans American English".to_string()
    } else {
        "Evenly mixed British and American English".to_string()
    }
}

fn print_json_report(source: &str, result: &AnalysisResult) {
    let report = JsonReport {
        source: source.to_string(),
        british_count: result.british_count,
        american_count: result.american_count,
        total_found: result.total_found,
        british_percentage: result.british_percentage,
        american_percentage: result.american_percentage,
        word_summary: result
            .word_summary
            .iter()
            .map(|e| JsonSummaryEntry {
                british_spelling: e.british_spelling.clone(),
                american_spelling: e.american_spelling.clone(),
                british_count: e.british_count,
                american_count: e.american_count,
            })
            .collect(),
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize report: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SummaryEntry;

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display_round_trip() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_verdict() {
        let mut result = AnalysisResult {
            british_count: 3,
            american_count: 1,
            total_found: 4,
            ..Default::default()
        };
        assert_eq!(verdict_line(&result), "Leans British English");

        result.american_count = 5;
        assert_eq!(verdict_line(&result), "Leans American English");

        result.british_count = 5;
        assert_eq!(
            verdict_line(&result),
            "Evenly mixed British and American English"
        );
    }

    #[test]
    fn test_summary_entry_total() {
        let entry = SummaryEntry {
            british_spelling: "colour".to_string(),
            american_spelling: "color".to_string(),
            british_count: 2,
            american_count: 1,
        };
        assert_eq!(entry.total(), 3);
    }
}
