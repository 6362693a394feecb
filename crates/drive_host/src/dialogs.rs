//! User confirmation and text-prompt dialog contracts.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`DialogService`].
pub type DialogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for blocking user dialogs.
pub trait DialogService {
    /// Asks the user to confirm `message`; resolves to `false` when declined.
    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool>;

    /// Asks the user for a line of text pre-filled with `default`; `None` when cancelled.
    fn prompt<'a>(&'a self, message: &'a str, default: &'a str)
        -> DialogFuture<'a, Option<String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Dialog service for targets without user interaction; declines everything.
pub struct NoopDialogService;

impl DialogService for NoopDialogService {
    fn confirm<'a>(&'a self, _message: &'a str) -> DialogFuture<'a, bool> {
        Box::pin(async { false })
    }

    fn prompt<'a>(
        &'a self,
        _message: &'a str,
        _default: &'a str,
    ) -> DialogFuture<'a, Option<String>> {
        Box::pin(async { None })
    }
}

#[derive(Debug, Default)]
struct ScriptedAnswers {
    confirms: VecDeque<bool>,
    prompts: VecDeque<Option<String>>,
    asked: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// Dialog service answering from queued scripted replies.
///
/// An empty confirm queue declines and an empty prompt queue cancels.
pub struct ScriptedDialogService {
    inner: Rc<RefCell<ScriptedAnswers>>,
}

impl ScriptedDialogService {
    /// Queues the reply for the next `confirm` call.
    pub fn push_confirm(&self, answer: bool) {
        self.inner.borrow_mut().confirms.push_back(answer);
    }

    /// Queues the reply for the next `prompt` call.
    pub fn push_prompt(&self, answer: Option<&str>) {
        self.inner
            .borrow_mut()
            .prompts
            .push_back(answer.map(str::to_string));
    }

    /// Messages shown so far, oldest first.
    pub fn asked(&self) -> Vec<String> {
        self.inner.borrow().asked.clone()
    }
}

impl DialogService for ScriptedDialogService {
    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.asked.push(message.to_string());
            inner.confirms.pop_front().unwrap_or(false)
        })
    }

    fn prompt<'a>(
        &'a self,
        message: &'a str,
        _default: &'a str,
    ) -> DialogFuture<'a, Option<String>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.asked.push(message.to_string());
            inner.prompts.pop_front().flatten()
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn scripted_dialogs_answer_in_order_then_decline() {
        let dialogs = ScriptedDialogService::default();
        dialogs.push_confirm(true);
        dialogs.push_prompt(Some("new name"));

        assert!(block_on(dialogs.confirm("Delete this item?")));
        assert!(!block_on(dialogs.confirm("Delete this item?")));
        assert_eq!(
            block_on(dialogs.prompt("Rename to:", "old")).as_deref(),
            Some("new name")
        );
        assert_eq!(block_on(dialogs.prompt("Rename to:", "old")), None);
        assert_eq!(dialogs.asked().len(), 4);
    }

    #[test]
    fn noop_dialogs_decline() {
        let dialogs: &dyn DialogService = &NoopDialogService;
        assert!(!block_on(dialogs.confirm("Remove account?")));
        assert_eq!(block_on(dialogs.prompt("Rename to:", "a")), None);
    }
}
