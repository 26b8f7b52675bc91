use std::collections::BTreeSet;

/// Checked row ids of the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Check or uncheck a single row.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Select every id on the page, or clear them all if they already are.
    pub fn toggle_all<'a>(&mut self, page_ids: impl IntoIterator<Item = &'a str>) {
        let page_ids: Vec<&str> = page_ids.into_iter().collect();
        if !page_ids.is_empty() && page_ids.iter().all(|id| self.ids.contains(*id)) {
            for id in page_ids {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(page_ids.into_iter().map(str::to_string));
        }
    }

    /// Drop every id that is not on the given page.
    pub fn retain_page<'a>(&mut self, page_ids: impl IntoIterator<Item = &'a str>) {
        let keep: BTreeSet<&str> = page_ids.into_iter().collect();
        self.ids.retain(|id| keep.contains(id.as_str()));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
