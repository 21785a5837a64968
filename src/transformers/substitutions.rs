//! Ordered find/replace rules for OCR'd Romanian text.
//!
//! Rules are applied one after the other on the whole text, each one seeing the output
//! of the previous ones. They are not idempotent and some of them overlap
//! (several malformed inputs map to `ș`): table order is the only precedence.
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::Transform;
use crate::error::Error;

/// Plain string replacements, applied first, in order.
const LITERAL_RULES: &[(&str, &str)] = &[
    // romanian specific characters
    ("$", "ș"),
    ("à", "ă"),
    ("ì", "î"),
    ("è", "e"),
    // common OCR mistakes on romanian letters
    ("(;", "ț"),
    ("(ia", "ția"),
    ("fji", "și"),
    ("sji", "și"),
    ("iji", "și"),
    ("jji", "și"),
    ("cìnd", "când"),
    ("Bucurestii", "București"),
    ("Bucurejti", "București"),
    // spacing
    (" si ", " și "),
    (" ti ", " ți "),
    // words
    ("dupà", "după"),
    ("càtre", "către"),
    ("càci", "căci"),
    ("càror", "căror"),
    ("càrui", "cărui"),
    ("fàrà", "fără"),
    ("pìnà", "până"),
    ("pinà", "până"),
    ("trebuìe", "trebuie"),
    ("existà", "există"),
    // parentheses read instead of ț
    ("(;i", "ți"),
    ("(ie", "țe"),
    ("(ii", "ții"),
];

/// Regex replacements, applied after [LITERAL_RULES], in order.
const PATTERN_RULES: &[(&str, &str)] = &[
    (r"\bsj\b", "și"),
    (r"\bcj\b", "că"),
    // standalone page numbers
    (r"(?m)^\s*\d+\s*$", ""),
    // excessive whitespace
    (r"\n{3,}", "\n\n"),
    (r" {2,}", " "),
];

lazy_static! {
    /// Rule table used by the `clean` command.
    pub static ref DEFAULT_RULES: RuleSet =
        RuleSet::from_tables(LITERAL_RULES, PATTERN_RULES).expect("default rule table is valid");
}

/// A single replacement rule.
#[derive(Debug, Clone)]
pub enum Rule {
    Literal { from: String, to: String },
    Pattern { re: Regex, to: String },
}

impl Rule {
    pub fn literal(from: &str, to: &str) -> Self {
        Rule::Literal {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn pattern(re: &str, to: &str) -> Result<Self, Error> {
        Ok(Rule::Pattern {
            re: Regex::new(re)?,
            to: to.to_string(),
        })
    }
}

impl Transform for Rule {
    fn transform_own(&self, text: String) -> String {
        match self {
            Rule::Literal { from, to } => {
                if text.contains(from.as_str()) {
                    text.replace(from.as_str(), to)
                } else {
                    text
                }
            }
            Rule::Pattern { re, to } => {
                if re.is_match(&text) {
                    re.replace_all(&text, to.as_str()).into_owned()
                } else {
                    text
                }
            }
        }
    }
}

/// Ordered rule chain.
#[derive(Debug, Clone, Default)]
pub struct RuleSet(Vec<Rule>);

impl RuleSet {
    /// Build a set from (literal, replacement) then (pattern, replacement) tables.
    pub fn from_tables(
        literals: &[(&str, &str)],
        patterns: &[(&str, &str)],
    ) -> Result<Self, Error> {
        let mut rules = RuleSet::default();
        for (from, to) in literals {
            rules.add(Rule::literal(from, to));
        }
        for (re, to) in patterns {
            rules.add(Rule::pattern(re, to)?);
        }
        debug!("rule set with {} rules", rules.len());
        Ok(rules)
    }

    pub fn add(&mut self, rule: Rule) -> &mut RuleSet {
        self.0.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Transform for RuleSet {
    fn transform_own(&self, text: String) -> String {
        self.0
            .iter()
            .fold(text, |text, rule| rule.transform_own(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(text: &str) -> String {
        DEFAULT_RULES.transform_own(text.to_string())
    }

    #[test]
    fn table_is_valid() {
        assert_eq!(
            DEFAULT_RULES.len(),
            LITERAL_RULES.len() + PATTERN_RULES.len()
        );
    }

    #[test]
    fn diacritics() {
        assert_eq!(clean("$i dupà càtre Bucurejti"), "și după către București");
        assert_eq!(clean("fàrà sà existà"), "fără să există");
    }

    #[test]
    fn order_matters() {
        // `(;` is replaced before `(;i` gets a chance to match
        assert_eq!(clean("ac(;iune"), "acțiune");

        let mut rules = RuleSet::default();
        rules.add(Rule::literal("ab", "x")).add(Rule::literal("xb", "y"));
        assert_eq!(rules.transform_own("abb".to_string()), "y");

        let mut reversed = RuleSet::default();
        reversed
            .add(Rule::literal("xb", "y"))
            .add(Rule::literal("ab", "x"));
        assert_eq!(reversed.transform_own("abb".to_string()), "xb");
    }

    #[test]
    fn word_boundaries() {
        assert_eq!(clean("el sj ea"), "el și ea");
        assert_eq!(clean("zice cj da"), "zice că da");
        // not a whole word
        assert_eq!(clean("sjx"), "sjx");
    }

    #[test]
    fn page_numbers_and_whitespace() {
        assert_eq!(clean("pagina\n12\ntext"), "pagina\n\ntext");
        assert_eq!(clean("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(clean("a   b  c"), "a b c");
        // numbers inside a line are kept
        assert_eq!(clean("art. 12 alin"), "art. 12 alin");
    }

    #[test]
    fn invalid_pattern() {
        assert!(matches!(Rule::pattern("(", "x"), Err(Error::Regex(_))));
        assert!(RuleSet::from_tables(&[], &[("[", "")]).is_err());
    }

    #[test]
    fn untouched() {
        let text = "Gaius, Institutiile. In iure cessio.";
        assert_eq!(clean(text), text);
    }
}
