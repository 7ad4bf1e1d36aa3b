/// Ordered, de-duplicated list of normalized symptoms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomSet {
    symptoms: Vec<String>,
}

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits free text on whitespace and commas and inserts every new token
    /// longer than one character. Returns how many were inserted.
    pub fn add_from_text(&mut self, raw: &str) -> usize {
        raw.split(|c: char| c == ',' || c.is_whitespace())
            .filter_map(normalize)
            .filter(|token| self.insert(token.clone()))
            .count()
    }

    /// Inserts a single symptom, e.g. from a quick-pick list.
    pub fn add_one(&mut self, symptom: &str) -> bool {
        match normalize(symptom) {
            Some(token) => self.insert(token),
            None => false,
        }
    }

    pub fn remove(&mut self, symptom: &str) -> bool {
        let before = self.symptoms.len();
        self.symptoms.retain(|s| s != symptom);
        self.symptoms.len() != before
    }

    pub fn clear(&mut self) {
        self.symptoms.clear();
    }

    pub fn list(&self) -> &[String] {
        &self.symptoms
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom)
    }

    fn insert(&mut self, token: String) -> bool {
        if self.contains(&token) {
            return false;
        }
        self.symptoms.push(token);
        true
    }
}

fn normalize(raw: &str) -> Option<String> {
    let token = raw.trim().to_lowercase();
    (token.chars().count() > 1).then_some(token)
}
