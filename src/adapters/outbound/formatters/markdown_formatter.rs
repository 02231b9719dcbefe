use crate::application::dto::{AdvisoryView, LookupResponse};
use crate::ports::outbound::LookupFormatter;
use crate::shared::Result;

/// Markdown table header for advisories
const TABLE_HEADER: &str = "| Vulnerability | Vendor IDs | Severity | Fixed Version | Arches |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------------|------------|----------|---------------|--------|\n";

/// MarkdownFormatter adapter rendering lookup results as a Markdown report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String, response: &LookupResponse) {
        output.push_str(&format!(
            "# Advisories for {}\n\n",
            Self::escape_markdown_table_cell(&response.package_name)
        ));
        output.push_str(&format!("Platform: `{}`\n\n", response.platform));
    }

    fn render_row(&self, output: &mut String, advisory: &AdvisoryView) {
        let fixed_version = if advisory.fixed_version.is_empty() {
            "-".to_string()
        } else {
            Self::escape_markdown_table_cell(&advisory.fixed_version)
        };
        let arches = if advisory.arches.is_empty() {
            "all".to_string()
        } else {
            Self::escape_markdown_table_cell(&advisory.arches.join(", "))
        };

        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            Self::escape_markdown_table_cell(&advisory.vulnerability_id),
            Self::escape_markdown_table_cell(&advisory.vendor_ids.join(", ")),
            advisory.severity,
            fixed_version,
            arches
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupFormatter for MarkdownFormatter {
    fn format(&self, response: &LookupResponse) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, response);

        if response.is_empty() {
            output.push_str("*No advisories found*\n");
            return Ok(output);
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for advisory in &response.advisories {
            self.render_row(&mut output, advisory);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory_generation::domain::Severity;

    fn view(id: &str, vendor_ids: &[&str], fixed: &str, arches: &[&str]) -> AdvisoryView {
        AdvisoryView {
            vulnerability_id: id.to_string(),
            vendor_ids: vendor_ids.iter().map(|s| s.to_string()).collect(),
            severity: Severity::High,
            fixed_version: fixed.to_string(),
            arches: arches.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(MarkdownFormatter::escape_markdown_table_cell("a|b"), "a\\|b");
        assert_eq!(MarkdownFormatter::escape_markdown_table_cell("a\nb"), "a b");
    }

    #[test]
    fn test_format_table() {
        let response = LookupResponse {
            package_name: "libfoo".to_string(),
            platform: "cpe:/o:alt:kworkstation:10".to_string(),
            advisories: vec![
                view("CVE-2024-9999", &["ALT-PU-2024-001"], "1.2-4", &["x86_64", "i586"]),
                view("BDU:2024-00001", &[], "", &[]),
            ],
        };

        let output = MarkdownFormatter::new().format(&response).unwrap();

        assert!(output.starts_with("# Advisories for libfoo\n\n"));
        assert!(output.contains("Platform: `cpe:/o:alt:kworkstation:10`"));
        assert!(output.contains(TABLE_HEADER));
        assert!(output.contains("| CVE-2024-9999 | ALT-PU-2024-001 | High | 1.2-4 | x86_64, i586 |"));
        assert!(output.contains("| BDU:2024-00001 |  | High | - | all |"));
    }

    #[test]
    fn test_format_empty() {
        let response = LookupResponse {
            package_name: "zlib".to_string(),
            platform: "cpe:/o:alt:server:10".to_string(),
            advisories: Vec::new(),
        };

        let output = MarkdownFormatter::default().format(&response).unwrap();
        assert!(output.contains("*No advisories found*"));
        assert!(!output.contains(TABLE_SEPARATOR));
    }
}
