use drive_host::FileEntry;

use super::filter::FilterState;

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the file area should show for the current batch and filters.
pub enum ListingView {
    /// No listing has been applied yet.
    NotLoaded,
    /// Nothing has been applied and no listing is in flight, e.g. after the first fetch failed.
    Unavailable,
    /// The batch (or its filtered view) is empty; shown as "No files found".
    NoFilesFound,
    /// Visible entries in server order.
    Entries(Vec<FileEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// The batch of entries listed for the current folder.
pub struct FileCatalog {
    entries: Vec<FileEntry>,
    loaded: bool,
}

impl FileCatalog {
    /// Swaps in a whole new batch.
    pub fn replace(&mut self, entries: Vec<FileEntry>) {
        self.entries = entries;
        self.loaded = true;
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn get(&self, id: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries passing `filter`, in the order the server returned them.
    pub fn visible_entries<'a>(
        &'a self,
        filter: &'a FilterState,
    ) -> impl Iterator<Item = &'a FileEntry> + 'a {
        self.entries.iter().filter(move |entry| filter.predicate(entry))
    }

    pub fn view(&self, filter: &FilterState) -> ListingView {
        if !self.loaded {
            return ListingView::NotLoaded;
        }
        let visible: Vec<FileEntry> = self.visible_entries(filter).cloned().collect();
        if visible.is_empty() {
            ListingView::NoFilesFound
        } else {
            ListingView::Entries(visible)
        }
    }

    /// Sets the name of entry `id`. Returns `false` when no entry matches.
    pub fn apply_rename(&mut self, id: &str, new_name: &str) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.name = new_name.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes entry `id`, returning it.
    pub fn apply_delete(&mut self, id: &str) -> Option<FileEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use drive_host::{FOLDER_MIME_TYPE, PDF_MIME_TYPE};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AccountFilter, TypeFilter};

    fn batch() -> Vec<FileEntry> {
        vec![
            FileEntry::new("1", "a", FOLDER_MIME_TYPE, "u@x.com", "root"),
            FileEntry::new("2", "b.pdf", PDF_MIME_TYPE, "u@x.com", "root"),
            FileEntry::new("3", "c.png", "image/png", "v@x.com", "root"),
            FileEntry::new("4", "d.pdf", PDF_MIME_TYPE, "v@x.com", "root"),
            FileEntry::new("5", "e.txt", "text/plain", "u@x.com", "root"),
        ]
    }

    fn ids(catalog: &FileCatalog, filter: &FilterState) -> Vec<String> {
        catalog
            .visible_entries(filter)
            .map(|entry| entry.id.clone())
            .collect()
    }

    #[test]
    fn pdf_filter_over_folder_and_pdf_batch() {
        let mut catalog = FileCatalog::default();
        catalog.replace(batch()[..2].to_vec());
        let filter = FilterState {
            account: AccountFilter::All,
            type_filter: TypeFilter::Pdf,
        };
        assert_eq!(
            catalog.view(&filter),
            ListingView::Entries(vec![FileEntry::new(
                "2",
                "b.pdf",
                PDF_MIME_TYPE,
                "u@x.com",
                "root"
            )])
        );
    }

    #[test]
    fn visible_entries_are_an_order_preserving_subset() {
        let mut catalog = FileCatalog::default();
        catalog.replace(batch());
        let all_ids: Vec<String> = batch().into_iter().map(|entry| entry.id).collect();

        for account in [AccountFilter::All, "u@x.com".into(), "v@x.com".into(), "w@x.com".into()] {
            for type_filter in TypeFilter::ALL_FILTERS {
                let filter = FilterState {
                    account: account.clone(),
                    type_filter,
                };
                let visible = ids(&catalog, &filter);
                let mut cursor = all_ids.iter();
                for id in &visible {
                    assert!(
                        cursor.any(|candidate| candidate == id),
                        "{id} out of order for {filter:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn empty_batch_is_no_files_found_not_not_loaded() {
        let mut catalog = FileCatalog::default();
        assert_eq!(catalog.view(&FilterState::default()), ListingView::NotLoaded);
        catalog.replace(Vec::new());
        assert_eq!(
            catalog.view(&FilterState::default()),
            ListingView::NoFilesFound
        );
    }

    #[test]
    fn rename_and_delete_touch_only_the_matching_entry() {
        let mut catalog = FileCatalog::default();
        catalog.replace(batch());

        assert!(catalog.apply_rename("2", "X"));
        assert_eq!(catalog.get("2").map(|entry| entry.name.as_str()), Some("X"));
        assert!(!catalog.apply_rename("404", "X"));

        assert_eq!(catalog.apply_delete("3").map(|entry| entry.id), Some("3".to_string()));
        assert_eq!(catalog.apply_delete("3"), None);
        assert_eq!(catalog.entries().len(), 4);
        assert_eq!(
            ids(&catalog, &FilterState::default()),
            vec!["1", "2", "4", "5"]
        );
    }
}
