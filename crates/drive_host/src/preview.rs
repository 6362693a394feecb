//! Embeddable preview surface contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`PreviewService`].
pub type PreviewFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that shows at most one embedded preview surface at a time.
pub trait PreviewService {
    /// Shows a preview for `url`, replacing any surface that is already open.
    fn show_preview<'a>(&'a self, url: &'a str) -> PreviewFuture<'a, Result<(), String>>;

    /// Closes the open preview surface, if any.
    fn close_preview<'a>(&'a self) -> PreviewFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preview service for unsupported targets.
pub struct NoopPreviewService;

impl PreviewService for NoopPreviewService {
    fn show_preview<'a>(&'a self, _url: &'a str) -> PreviewFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn close_preview<'a>(&'a self) -> PreviewFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Preview service that records the open surface and every URL it was asked to show.
pub struct MemoryPreviewService {
    current: Rc<RefCell<Option<String>>>,
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryPreviewService {
    /// URL of the surface currently open.
    pub fn current(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    /// Every URL shown so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl PreviewService for MemoryPreviewService {
    fn show_preview<'a>(&'a self, url: &'a str) -> PreviewFuture<'a, Result<(), String>> {
        Box::pin(async move {
            *self.current.borrow_mut() = Some(url.to_string());
            self.history.borrow_mut().push(url.to_string());
            Ok(())
        })
    }

    fn close_preview<'a>(&'a self) -> PreviewFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.current.borrow_mut().take();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_preview_keeps_only_the_latest_surface() {
        let preview = MemoryPreviewService::default();
        let preview_obj: &dyn PreviewService = &preview;

        block_on(preview_obj.show_preview("https://p/1")).expect("show");
        block_on(preview_obj.show_preview("https://p/2")).expect("show");
        assert_eq!(preview.current().as_deref(), Some("https://p/2"));
        assert_eq!(preview.history().len(), 2);

        block_on(preview_obj.close_preview()).expect("close");
        assert_eq!(preview.current(), None);
    }
}
