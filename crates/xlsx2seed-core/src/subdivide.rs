use std::ops::Range;

/// How many leading and trailing records get their own output group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Subdivision {
    pub cut_prefix: Option<usize>,
    pub cut_postfix: Option<usize>,
}

/// A named output group and the record indices it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPlan {
    pub name: String,
    pub range: Range<usize>,
}

impl Subdivision {
    pub const NONE: Subdivision = Subdivision {
        cut_prefix: None,
        cut_postfix: None,
    };

    pub fn new(cut_prefix: Option<usize>, cut_postfix: Option<usize>) -> Self {
        Self {
            cut_prefix,
            cut_postfix,
        }
    }

    pub fn is_subdivided(&self) -> bool {
        self.cut_prefix.is_some() || self.cut_postfix.is_some()
    }

    /// Partition `len` ordered records into named groups.
    ///
    /// Group numbers are fixed by role and never renumbered: with both cuts the
    /// prefix is `1`, the middle `2` and the suffix `3`; with one cut the two
    /// sides are `1` and `2`. Empty groups are omitted. When the cuts overlap
    /// the prefix keeps its records and the suffix shrinks.
    pub fn plan(&self, sheet_name: &str, len: usize) -> Vec<GroupPlan> {
        let candidates = match (self.cut_prefix, self.cut_postfix) {
            (None, None) => {
                return vec![GroupPlan {
                    name: sheet_name.to_string(),
                    range: 0..len,
                }];
            }
            (Some(prefix), None) => {
                let split = prefix.min(len);
                vec![(1, 0..split), (2, split..len)]
            }
            (None, Some(postfix)) => {
                let split = len.saturating_sub(postfix);
                vec![(1, 0..split), (2, split..len)]
            }
            (Some(prefix), Some(postfix)) => {
                let head = prefix.min(len);
                let tail = len.saturating_sub(postfix).max(head);
                vec![(1, 0..head), (2, head..tail), (3, tail..len)]
            }
        };

        candidates
            .into_iter()
            .filter(|(_, range)| !range.is_empty())
            .map(|(number, range)| GroupPlan {
                name: format!("{sheet_name}{number}"),
                range,
            })
            .collect()
    }
}
