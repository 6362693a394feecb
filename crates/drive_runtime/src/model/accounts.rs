use super::filter::AccountFilter;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Connected account emails in server order, without duplicates.
pub struct AccountRegistry {
    emails: Vec<String>,
}

impl AccountRegistry {
    /// Replaces the set with `emails`, dropping blanks and repeats.
    pub fn rebuild<I, S>(&mut self, emails: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emails.clear();
        for email in emails {
            let email = email.into();
            if !email.is_empty() && !self.emails.contains(&email) {
                self.emails.push(email);
            }
        }
    }

    pub fn contains(&self, email: &str) -> bool {
        self.emails.iter().any(|known| known == email)
    }

    /// Whether `filter` names `ALL` or a connected account.
    pub fn admits(&self, filter: &AccountFilter) -> bool {
        filter.email().map_or(true, |email| self.contains(email))
    }

    pub fn remove(&mut self, email: &str) -> bool {
        let before = self.emails.len();
        self.emails.retain(|known| known != email);
        self.emails.len() != before
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    /// Selector options: `ALL` first, then each account.
    pub fn options(&self) -> Vec<AccountFilter> {
        std::iter::once(AccountFilter::All)
            .chain(self.emails.iter().cloned().map(AccountFilter::Account))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rebuild_keeps_server_order_without_duplicates() {
        let mut registry = AccountRegistry::default();
        registry.rebuild(["b@x.com", "a@x.com", "", "b@x.com"]);
        assert_eq!(registry.emails(), &["b@x.com", "a@x.com"]);
        assert_eq!(
            registry.options(),
            vec![
                AccountFilter::All,
                AccountFilter::from("b@x.com"),
                AccountFilter::from("a@x.com"),
            ]
        );
    }

    #[test]
    fn admits_all_and_known_accounts_only() {
        let mut registry = AccountRegistry::default();
        registry.rebuild(["u@x.com"]);
        assert!(registry.admits(&AccountFilter::All));
        assert!(registry.admits(&AccountFilter::from("u@x.com")));
        assert!(!registry.admits(&AccountFilter::from("v@x.com")));

        assert!(registry.remove("u@x.com"));
        assert!(!registry.remove("u@x.com"));
        assert!(!registry.admits(&AccountFilter::from("u@x.com")));
    }
}
