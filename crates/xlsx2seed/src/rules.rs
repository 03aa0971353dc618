use std::collections::{HashMap, HashSet};

use xlsx2seed_core::{CoreError, Subdivision, parse_rule_list};

/// Sheet selection and subdivision rules, built once from the command line.
#[derive(Debug, Clone, Default)]
pub struct SheetRules {
    ignore: HashSet<String>,
    only: Option<HashSet<String>>,
    subdivide: HashMap<String, Subdivision>,
}

impl SheetRules {
    /// Every list uses the `[N:]name[:M]` grammar. Cuts given with `only`
    /// apply too, but an explicit `subdivide` entry for the same sheet wins.
    pub fn new<S: AsRef<str>>(ignore: &[S], only: &[S], subdivide: &[S]) -> Result<Self, CoreError> {
        let ignore = parse_rule_list(ignore)?
            .into_iter()
            .map(|rule| rule.sheet_name)
            .collect();

        let mut rules = HashMap::new();
        let only_rules = parse_rule_list(only)?;
        let only = if only_rules.is_empty() {
            None
        } else {
            let mut names = HashSet::new();
            for rule in only_rules {
                rules.insert(rule.sheet_name.clone(), rule.subdivision());
                names.insert(rule.sheet_name);
            }
            Some(names)
        };

        for rule in parse_rule_list(subdivide)? {
            rules.insert(rule.sheet_name.clone(), rule.subdivision());
        }

        Ok(Self {
            ignore,
            only,
            subdivide: rules,
        })
    }

    /// False when `--only` is in effect and does not name this sheet.
    pub fn selects(&self, sheet: &str) -> bool {
        self.only.as_ref().is_none_or(|only| only.contains(sheet))
    }

    pub fn is_ignored(&self, sheet: &str) -> bool {
        self.ignore.contains(sheet)
    }

    pub fn subdivision(&self, sheet: &str) -> Subdivision {
        self.subdivide.get(sheet).copied().unwrap_or_default()
    }
}
