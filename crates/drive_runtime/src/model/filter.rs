use std::{fmt, str::FromStr};

use drive_host::{
    FileEntry, ALL_ACCOUNTS, DOCUMENT_MIME_TYPE, FOLDER_MIME_TYPE, IMAGE_MIME_PREFIX,
    PDF_MIME_TYPE, PLAIN_TEXT_MIME_TYPE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// Account selector: every account, or one connected account.
pub enum AccountFilter {
    #[default]
    All,
    Account(String),
}

impl AccountFilter {
    /// Wire/display token (`"ALL"` or the email).
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_ACCOUNTS,
            Self::Account(email) => email,
        }
    }

    /// The email to scope remote listings to, if any.
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Account(email) => Some(email),
        }
    }

    pub fn matches(&self, account: &str) -> bool {
        match self {
            Self::All => true,
            Self::Account(email) => email == account,
        }
    }
}

impl From<String> for AccountFilter {
    fn from(value: String) -> Self {
        if value == ALL_ACCOUNTS {
            Self::All
        } else {
            Self::Account(value)
        }
    }
}

impl From<&str> for AccountFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<AccountFilter> for String {
    fn from(value: AccountFilter) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Content-type classification applied client-side to the fetched batch.
pub enum TypeFilter {
    #[default]
    All,
    Folder,
    Doc,
    Pdf,
    Image,
}

impl TypeFilter {
    /// Every selector in toolbar order.
    pub const ALL_FILTERS: [TypeFilter; 5] =
        [Self::All, Self::Folder, Self::Doc, Self::Pdf, Self::Image];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Folder => "FOLDER",
            Self::Doc => "DOC",
            Self::Pdf => "PDF",
            Self::Image => "IMAGE",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Folder => "Folders",
            Self::Doc => "Docs",
            Self::Pdf => "PDFs",
            Self::Image => "Images",
        }
    }

    pub fn matches(self, mime_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Folder => mime_type == FOLDER_MIME_TYPE,
            Self::Doc => mime_type == DOCUMENT_MIME_TYPE || mime_type == PLAIN_TEXT_MIME_TYPE,
            Self::Pdf => mime_type == PDF_MIME_TYPE,
            Self::Image => mime_type.starts_with(IMAGE_MIME_PREFIX),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_FILTERS
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| format!("unknown type filter: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Active account and type selectors; the visible predicate is their conjunction.
pub struct FilterState {
    pub account: AccountFilter,
    #[serde(rename = "type")]
    pub type_filter: TypeFilter,
}

impl FilterState {
    /// Returns whether the value changed.
    pub fn set_account(&mut self, account: AccountFilter) -> bool {
        if self.account == account {
            return false;
        }
        self.account = account;
        true
    }

    /// Returns whether the value changed.
    pub fn set_type(&mut self, type_filter: TypeFilter) -> bool {
        if self.type_filter == type_filter {
            return false;
        }
        self.type_filter = type_filter;
        true
    }

    pub fn predicate(&self, entry: &FileEntry) -> bool {
        self.account.matches(&entry.account) && self.type_filter.matches(&entry.mime_type)
    }

    pub fn account_scope(&self) -> Option<&str> {
        self.account.email()
    }
}
