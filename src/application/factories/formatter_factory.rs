use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::LookupFormatter;

/// Factory selecting the lookup formatter for an output format
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the formatter for `format`
    ///
    /// # Examples
    /// ```
    /// use alt_vulndb::application::dto::OutputFormat;
    /// use alt_vulndb::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn LookupFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Progress line printed before rendering
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering advisories as JSON...",
            OutputFormat::Markdown => "📝 Rendering advisories as Markdown...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::LookupResponse;

    fn empty_response() -> LookupResponse {
        LookupResponse {
            package_name: "libfoo".to_string(),
            platform: "cpe:/o:alt:kworkstation:10".to_string(),
            advisories: Vec::new(),
        }
    }

    #[test]
    fn test_create_json_formatter_renders_json() {
        let output = FormatterFactory::create(OutputFormat::Json)
            .format(&empty_response())
            .unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());
    }

    #[test]
    fn test_create_markdown_formatter_renders_markdown() {
        let output = FormatterFactory::create(OutputFormat::Markdown)
            .format(&empty_response())
            .unwrap();
        assert!(output.starts_with("# Advisories for libfoo"));
    }

    #[test]
    fn test_progress_messages() {
        assert!(FormatterFactory::progress_message(OutputFormat::Json).contains("JSON"));
        assert!(FormatterFactory::progress_message(OutputFormat::Markdown).contains("Markdown"));
    }
}
