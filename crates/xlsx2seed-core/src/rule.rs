use crate::error::CoreError;
use crate::subdivide::Subdivision;

/// A sheet name with optional cut counts, written `[N:]name[:M]`.
///
/// Used for `--subdivide`, `--only` and `--ignore` entries alike; ignore rules
/// only care about the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdivideRule {
    pub sheet_name: String,
    pub cut_prefix: Option<usize>,
    pub cut_postfix: Option<usize>,
}

impl SubdivideRule {
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let malformed = || CoreError::MalformedSheetNameRule {
            rule: text.to_string(),
        };
        if text.is_empty() || text.contains(['\n', '\r']) {
            return Err(malformed());
        }

        let mut cut_prefix = None;
        let mut rest = text;
        if let Some((head, tail)) = text.split_once(':') {
            if is_count(head) && !tail.is_empty() {
                cut_prefix = Some(head.parse().map_err(|_| malformed())?);
                rest = tail;
            }
        }

        let mut cut_postfix = None;
        let mut sheet_name = rest;
        if let Some((head, tail)) = rest.rsplit_once(':') {
            if is_count(tail) && !head.is_empty() {
                cut_postfix = Some(tail.parse().map_err(|_| malformed())?);
                sheet_name = head;
            }
        }

        Ok(Self {
            sheet_name: sheet_name.to_string(),
            cut_prefix,
            cut_postfix,
        })
    }

    pub fn subdivision(&self) -> Subdivision {
        Subdivision::new(self.cut_prefix, self.cut_postfix)
    }

    pub fn is_subdivided(&self) -> bool {
        self.subdivision().is_subdivided()
    }
}

impl std::str::FromStr for SubdivideRule {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_count(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse every entry, failing on the first malformed one.
pub fn parse_rule_list<S: AsRef<str>>(rules: &[S]) -> Result<Vec<SubdivideRule>, CoreError> {
    rules
        .iter()
        .map(|rule| SubdivideRule::parse(rule.as_ref()))
        .collect()
}
