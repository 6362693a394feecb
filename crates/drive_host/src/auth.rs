//! Account authorization redirect contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`AuthRedirectService`].
pub type AuthRedirectFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that hands control to the external account-authorization endpoint.
///
/// The handshake itself is owned by the backend; the page is expected to reload afterwards.
pub trait AuthRedirectService {
    /// Navigates the page to `url`.
    fn redirect<'a>(&'a self, url: &'a str) -> AuthRedirectFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op redirect service for unsupported targets.
pub struct NoopAuthRedirectService;

impl AuthRedirectService for NoopAuthRedirectService {
    fn redirect<'a>(&'a self, _url: &'a str) -> AuthRedirectFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Redirect service that records target URLs instead of navigating.
pub struct MemoryAuthRedirectService {
    redirects: Rc<RefCell<Vec<String>>>,
}

impl MemoryAuthRedirectService {
    /// URLs redirected to so far.
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl AuthRedirectService for MemoryAuthRedirectService {
    fn redirect<'a>(&'a self, url: &'a str) -> AuthRedirectFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.redirects.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}
