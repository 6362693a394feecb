//! User-visible alert contracts for surfaced failures.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`AlertService`].
pub type AlertFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that surfaces a short message to the user.
pub trait AlertService {
    /// Shows `message`.
    fn alert<'a>(&'a self, message: &'a str) -> AlertFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op alert service for unsupported targets.
pub struct NoopAlertService;

impl AlertService for NoopAlertService {
    fn alert<'a>(&'a self, _message: &'a str) -> AlertFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Alert service that records every message.
pub struct MemoryAlertService {
    messages: Rc<RefCell<Vec<String>>>,
}

impl MemoryAlertService {
    /// Messages shown so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl AlertService for MemoryAlertService {
    fn alert<'a>(&'a self, message: &'a str) -> AlertFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.messages.borrow_mut().push(message.to_string());
            Ok(())
        })
    }
}
