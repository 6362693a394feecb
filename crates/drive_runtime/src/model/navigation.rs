use drive_host::{ROOT_DISPLAY_NAME, ROOT_FOLDER_ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One breadcrumb segment.
pub struct FolderPathEntry {
    /// Remote folder id.
    pub folder_id: String,
    /// Name shown in the breadcrumb.
    pub display_name: String,
}

impl FolderPathEntry {
    /// The drive root segment.
    pub fn root() -> Self {
        Self {
            folder_id: ROOT_FOLDER_ID.to_string(),
            display_name: ROOT_DISPLAY_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Folder path from the root to the current folder.
///
/// Never empty: the first segment is always the root and cannot be popped.
pub struct NavigationStack {
    path: Vec<FolderPathEntry>,
    dirty: bool,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self {
            path: vec![FolderPathEntry::root()],
            dirty: true,
        }
    }
}

impl NavigationStack {
    /// Pushes a folder. Returns `false` (and changes nothing) for an empty id.
    pub fn enter(&mut self, folder_id: impl Into<String>, display_name: impl Into<String>) -> bool {
        let folder_id = folder_id.into();
        if folder_id.is_empty() {
            return false;
        }
        self.path.push(FolderPathEntry {
            folder_id,
            display_name: display_name.into(),
        });
        self.dirty = true;
        true
    }

    /// Pops the current folder. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.path.pop();
        self.dirty = true;
        true
    }

    /// Drops every segment above the root.
    pub fn reset_to_root(&mut self) {
        self.path.truncate(1);
        self.dirty = true;
    }

    pub fn current(&self) -> &FolderPathEntry {
        // `path` always holds the root segment.
        &self.path[self.path.len() - 1]
    }

    pub fn current_folder_id(&self) -> &str {
        &self.current().folder_id
    }

    pub fn breadcrumb_path(&self) -> &[FolderPathEntry] {
        &self.path
    }

    /// Display names joined the way the breadcrumb renders them.
    pub fn breadcrumb_label(&self) -> String {
        self.path
            .iter()
            .map(|entry| entry.display_name.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.path.len() > 1
    }

    /// Whether the current folder still needs a fresh listing.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_at_root_and_refuses_to_pop_it() {
        let mut nav = NavigationStack::default();
        assert_eq!(nav.current_folder_id(), "root");
        assert_eq!(nav.breadcrumb_label(), "My Drive");
        assert!(!nav.can_go_back());
        assert!(!nav.back());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn back_returns_to_the_folder_before_the_matching_enter() {
        let mut nav = NavigationStack::default();
        assert!(nav.enter("f1", "Photos"));
        assert!(nav.enter("f2", "2024"));
        assert_eq!(nav.breadcrumb_label(), "My Drive / Photos / 2024");

        assert!(nav.back());
        assert_eq!(nav.current_folder_id(), "f1");
        assert!(nav.back());
        assert_eq!(nav.current_folder_id(), "root");
        assert!(!nav.back());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn depth_never_drops_below_one_for_mixed_sequences() {
        let mut nav = NavigationStack::default();
        let mut expected = vec!["root".to_string()];
        for step in 0..40 {
            if step % 3 == 2 {
                nav.back();
                if expected.len() > 1 {
                    expected.pop();
                }
            } else {
                let id = format!("f{step}");
                nav.enter(id.clone(), id.clone());
                expected.push(id);
            }
            assert!(nav.depth() >= 1);
            assert_eq!(nav.current_folder_id(), expected.last().expect("root"));
        }
        for _ in 0..50 {
            nav.back();
        }
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn empty_folder_id_is_rejected() {
        let mut nav = NavigationStack::default();
        nav.mark_clean();
        assert!(!nav.enter("", "Nowhere"));
        assert_eq!(nav.depth(), 1);
        assert!(!nav.is_dirty());
    }

    #[test]
    fn navigation_marks_the_stack_dirty_until_cleaned() {
        let mut nav = NavigationStack::default();
        nav.mark_clean();
        nav.enter("f1", "Photos");
        assert!(nav.is_dirty());
        nav.mark_clean();
        nav.reset_to_root();
        assert!(nav.is_dirty());
        assert_eq!(nav.breadcrumb_path(), &[FolderPathEntry::root()]);
    }
}
