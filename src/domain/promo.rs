use crate::domain::model::PromoDiscount;
use std::collections::BTreeMap;

/// Redeemable codes keyed by their uppercase form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoTable {
    codes: BTreeMap<String, PromoDiscount>,
}

impl PromoTable {
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, code: &str, discount: PromoDiscount) {
        self.codes.insert(normalize_code(code), discount);
    }

    /// Case-insensitive lookup; blank codes never match.
    pub fn lookup(&self, raw_code: &str) -> Option<PromoDiscount> {
        let code = normalize_code(raw_code);
        if code.is_empty() {
            return None;
        }
        self.codes.get(&code).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PromoDiscount)> {
        self.codes.iter().map(|(code, discount)| (code.as_str(), *discount))
    }
}

impl Default for PromoTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("OTTER10", PromoDiscount::Percentage(10));
        table.insert("FIRST20", PromoDiscount::Fixed(20));
        table
    }
}

impl FromIterator<(String, PromoDiscount)> for PromoTable {
    fn from_iter<I: IntoIterator<Item = (String, PromoDiscount)>>(iter: I) -> Self {
        let mut table = Self::empty();
        for (code, discount) in iter {
            table.insert(&code, discount);
        }
        table
    }
}

pub fn normalize_code(raw_code: &str) -> String {
    raw_code.trim().to_uppercase()
}
