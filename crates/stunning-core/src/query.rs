//! Keyed cache of request results for the screens.
//!
//! Each key holds at most one entry. Starting a new fetch for a key
//! supersedes whatever was in flight for it; a result that arrives for a
//! superseded fetch is dropped.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

/// Cache key: a resource name plus the filter parameters it was fetched with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: String,
    pub params: Vec<String>,
}

impl QueryKey {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter. `None` is kept as a distinct `-` slot so an
    /// unfiltered key never collides with a filtered one.
    pub fn param<P: fmt::Display>(mut self, value: Option<P>) -> Self {
        self.params.push(match value {
            Some(v) => v.to_string(),
            None => "-".to_owned(),
        });
        self
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource)?;
        for p in &self.params {
            write!(f, "/{p}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Handle for one fetch; only the most recent ticket per key may resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    key: QueryKey,
    generation: u64,
}

impl Ticket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

#[derive(Debug)]
struct Entry<T> {
    generation: u64,
    state: QueryState<T>,
}

#[derive(Debug)]
pub struct QueryCache<T> {
    entries: HashMap<QueryKey, Entry<T>>,
    next_generation: u64,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            next_generation: 0,
        }
    }
}

impl<T> QueryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as loading and return the ticket that may resolve it.
    pub fn begin(&mut self, key: QueryKey) -> Ticket {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.entries.insert(
            key.clone(),
            Entry {
                generation,
                state: QueryState::Loading,
            },
        );
        Ticket { key, generation }
    }

    /// Store a result. Returns `false` if the ticket was superseded or the
    /// key invalidated in the meantime, in which case the result is dropped.
    pub fn resolve<E: fmt::Display>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        let Some(entry) = self.entries.get_mut(&ticket.key) else {
            tracing::debug!(key = %ticket.key, "result for evicted query dropped");
            return false;
        };
        if entry.generation != ticket.generation {
            tracing::debug!(key = %ticket.key, "stale query result dropped");
            return false;
        }
        entry.state = match result {
            Ok(data) => QueryState::Ready(data),
            Err(e) => {
                tracing::warn!(key = %ticket.key, error = %e, "query failed");
                QueryState::Failed(e.to_string())
            }
        };
        true
    }

    /// Begin, await and resolve in one step.
    pub async fn fetch<F, E>(&mut self, key: QueryKey, request: F) -> &QueryState<T>
    where
        F: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let ticket = self.begin(key.clone());
        let result = request.await;
        self.resolve(ticket, result);
        &self.entries[&key].state
    }

    pub fn get(&self, key: &QueryKey) -> Option<&QueryState<T>> {
        self.entries.get(key).map(|e| &e.state)
    }

    pub fn invalidate(&mut self, key: &QueryKey) {
        self.entries.remove(key);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histories(model_id: Option<i64>) -> QueryKey {
        QueryKey::new("histories").param(model_id)
    }

    #[test]
    fn test_key_display_and_distinct_none() {
        assert_eq!(histories(Some(7)).to_string(), "histories/7");
        assert_eq!(histories(None).to_string(), "histories/-");
        assert_ne!(histories(None), histories(Some(7)));
        assert_eq!(QueryKey::new("clients").to_string(), "clients");
    }

    #[test]
    fn test_begin_then_resolve() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        let ticket = cache.begin(histories(Some(1)));
        assert!(cache.get(&histories(Some(1))).unwrap().is_loading());

        assert!(cache.resolve::<String>(ticket, Ok(vec![1, 2])));
        assert_eq!(
            cache.get(&histories(Some(1))).unwrap().data(),
            Some(&vec![1, 2])
        );
    }

    #[test]
    fn test_refetch_supersedes_previous() {
        let mut cache: QueryCache<&str> = QueryCache::new();
        let first = cache.begin(histories(None));
        let second = cache.begin(histories(None));

        assert!(cache.resolve::<String>(second, Ok("new")));
        assert!(!cache.resolve::<String>(first, Ok("old")));
        assert_eq!(cache.get(&histories(None)).unwrap().data(), Some(&"new"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_resolve_independently_in_any_order() {
        let mut cache: QueryCache<&str> = QueryCache::new();
        let hair = cache.begin(QueryKey::new("hairLayers"));
        let outfit = cache.begin(QueryKey::new("outfitLayers"));
        let scene = cache.begin(QueryKey::new("sceneLayers"));

        cache.resolve::<String>(scene, Ok("scene"));
        cache.resolve(outfit, Err("boom"));
        cache.resolve::<String>(hair, Ok("hair"));

        assert_eq!(
            cache.get(&QueryKey::new("hairLayers")).unwrap().data(),
            Some(&"hair")
        );
        assert_eq!(
            cache.get(&QueryKey::new("outfitLayers")).unwrap().error(),
            Some("boom")
        );
        assert_eq!(
            cache.get(&QueryKey::new("sceneLayers")).unwrap().data(),
            Some(&"scene")
        );
    }

    #[test]
    fn test_invalidated_key_drops_late_result() {
        let mut cache: QueryCache<u8> = QueryCache::new();
        let ticket = cache.begin(QueryKey::new("clients"));
        cache.invalidate(&QueryKey::new("clients"));
        assert!(!cache.resolve::<String>(ticket, Ok(1)));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_stores_result() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        let state = cache
            .fetch(QueryKey::new("models").param(Some(3)), async {
                Ok::<_, String>(42)
            })
            .await;
        assert_eq!(state, &QueryState::Ready(42));
    }
}
