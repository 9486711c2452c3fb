//! Memoization of formatters.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::render::Formatter;
use crate::style::StyleSpec;

/// A cache from resolved style specifications to formatters.
///
/// The cache is unbounded on purpose: its key space is the finite set of
/// style combinations a program actually requests, with true-color entries
/// keyed by their resolved codes. Each brush instance owns its own cache, so
/// brushes configured with different support levels cannot bleed resolved
/// codes into one another.
#[derive(Debug, Default)]
pub(crate) struct FormatterCache {
    inner: Mutex<HashMap<StyleSpec, Arc<Formatter>>>,
}

impl FormatterCache {
    /// Get the formatter for the specification, creating and memoizing it on
    /// the first request.
    ///
    /// The read-check-insert happens under the lock, so concurrent misses for
    /// the same specification converge on a single stored formatter.
    pub fn formatter(&self, spec: &StyleSpec) -> Arc<Formatter> {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(formatter) = map.get(spec) {
            return formatter.clone();
        }

        let formatter = Arc::new(Formatter::new(spec));
        map.insert(spec.clone(), formatter.clone());
        formatter
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::style::{Attribute, Sgr};

    #[test]
    fn test_memoization() {
        let cache = FormatterCache::default();
        let spec = StyleSpec::default().with(Sgr::Attribute(Attribute::Bold));

        let first = cache.formatter(&spec);
        let second = cache.formatter(&spec);
        assert!(Arc::ptr_eq(&first, &second));

        let other = cache.formatter(&StyleSpec::default());
        assert!(!Arc::ptr_eq(&first, &other));
    }
}
