//! Scope guard: run an open action now and a close action when the guard
//! goes out of scope, unless cancelled first.

pub struct Scoper<'a> {
    close: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> Scoper<'a> {
    pub fn new<C>(close: C) -> Self
    where
        C: FnOnce() + 'a,
    {
        Self { close: Some(Box::new(close)) }
    }

    pub fn with_open<O, C>(open: O, close: C) -> Self
    where
        O: FnOnce(),
        C: FnOnce() + 'a,
    {
        open();
        Self::new(close)
    }

    /// Like `with_open`, but neither action runs if `do_it` is false.
    pub fn when<O, C>(do_it: bool, open: O, close: C) -> Self
    where
        O: FnOnce(),
        C: FnOnce() + 'a,
    {
        if do_it {
            Self::with_open(open, close)
        } else {
            Self::noop()
        }
    }

    /// Close-only `when`: arm `close` only if `do_it` is true.
    pub fn new_when<C>(do_it: bool, close: C) -> Self
    where
        C: FnOnce() + 'a,
    {
        if do_it {
            Self::new(close)
        } else {
            Self::noop()
        }
    }

    pub fn noop() -> Self {
        Self { close: None }
    }

    /// Whether the close action is still pending.
    pub fn is_armed(&self) -> bool {
        self.close.is_some()
    }

    pub fn cancel(&mut self) {
        #[cfg(feature = "log")]
        if self.close.is_some() {
            log::trace!("scoper cancelled");
        }
        self.close = None;
    }

    /// Run the close action now instead of at end of scope.
    pub fn run_now(mut self) {
        if let Some(close) = self.close.take() {
            close();
        }
    }
}

impl Default for Scoper<'_> {
    fn default() -> Self {
        Self::noop()
    }
}

impl std::fmt::Debug for Scoper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scoper").field("armed", &self.is_armed()).finish()
    }
}

impl Drop for Scoper<'_> {
    fn drop(&mut self) {
        if let Some(close) = self.close.take() {
            close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_smoke() {
        let i = Cell::new(0);
        {
            let _scope = Scoper::new(|| i.set(i.get() + 2));
            assert_eq!(i.get(), 0);
        }
        assert_eq!(i.get(), 2);

        i.set(0);
        {
            let _scope = Scoper::new_when(false, || i.set(i.get() + 2));
        }
        assert_eq!(i.get(), 0);

        {
            let scope = Scoper::new_when(true, || i.set(i.get() + 3));
            assert!(scope.is_armed());
            assert_eq!(i.get(), 0);
        }
        assert_eq!(i.get(), 3);

        i.set(0);
        {
            let _scope = Scoper::with_open(|| i.set(i.get() + 2), || i.set(i.get() * 2));
            assert_eq!(i.get(), 2);
        }
        assert_eq!(i.get(), 4);

        i.set(0);
        {
            let _scope = Scoper::when(false, || i.set(i.get() + 2), || i.set(i.get() * 2));
            assert_eq!(i.get(), 0);
        }
        assert_eq!(i.get(), 0);
    }

    #[test]
    fn test_cancel() {
        let i = Cell::new(0);
        {
            let mut scope = Scoper::with_open(|| i.set(i.get() + 2), || i.set(i.get() * 2));
            assert_eq!(i.get(), 2);
            scope.cancel();
            assert!(!scope.is_armed());
        }
        assert_eq!(i.get(), 2);
    }

    #[test]
    fn test_move_transfers_close() {
        let i = Cell::new(0);
        {
            let scope = Scoper::with_open(|| i.set(i.get() + 2), || i.set(i.get() * 2));
            let mut other = Scoper::default();
            assert!(!other.is_armed());
            assert_eq!(i.get(), 2);
            other = scope;
            assert!(other.is_armed());
        }
        assert_eq!(i.get(), 4);
    }

    #[test]
    fn test_run_now() {
        let i = Cell::new(1);
        let scope = Scoper::new(|| i.set(i.get() * 3));
        scope.run_now();
        assert_eq!(i.get(), 3);
    }
}
