// src/extract/classify.rs

/// Header keywords that mark a column as numeric, and header words that veto
/// the digit-in-cell fallback. Injectable so deployments (and tests) can tune
/// the heuristic instead of patching constants.
#[derive(Debug, Clone)]
pub struct ClassifierRules {
    pub numeric_keywords: Vec<String>,
    pub text_header_words: Vec<String>,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        ClassifierRules {
            numeric_keywords: [
                "revenue",
                "profit",
                "gdp",
                "export",
                "import",
                "balance",
                "growth",
                "percentage",
                "%",
                "million",
                "employer",
                "business",
                "establishment",
                "micro",
                "small",
                "medium",
                "large",
                "total",
                "average",
                "quartile",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            text_header_words: ["province", "territory"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ClassifierRules {
    /// Decide whether a column should be treated as numeric, from its header
    /// and one sample cell. Keyword match on the header wins outright;
    /// otherwise any digit/currency/percent character in the cell counts,
    /// unless the header names a province/territory-style text column.
    ///
    /// Heuristic, not a schema: a "Name" column whose cells contain digits
    /// ("123 Co.") classifies as numeric. That quirk is part of the observed
    /// behavior and is kept as-is.
    pub fn is_numeric_column(&self, header: &str, cell: &str) -> bool {
        let header_lower = header.to_lowercase();

        if self
            .numeric_keywords
            .iter()
            .any(|kw| header_lower.contains(kw.as_str()))
        {
            return true;
        }

        let cell_suggests_number = cell
            .chars()
            .any(|c| c.is_ascii_digit() || matches!(c, '$' | '%' | ',' | '.'));
        let header_is_textual = self
            .text_header_words
            .iter()
            .any(|w| header_lower.contains(w.as_str()));

        cell_suggests_number && !header_is_textual
    }
}
