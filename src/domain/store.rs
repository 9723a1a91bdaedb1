//! Ordered text store with change notification

use std::fmt;

use super::error::StoreError;

/// Handle returned by [`TextStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut()>;

/// Ordered sequence of strings.
///
/// Every successful insert or remove broadcasts exactly one notification to
/// each subscribed observer. Notifications carry no payload; observers read
/// the store again if they need the new contents.
#[derive(Default)]
pub struct TextStore {
    items: Vec<String>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl TextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with items. No notification is sent.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Insert `value` at `index`, shifting later items up.
    /// `index` may equal the length to append.
    pub fn insert_data(&mut self, index: usize, value: impl Into<String>) -> Result<(), StoreError> {
        if index > self.items.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, value.into());
        self.broadcast();
        Ok(())
    }

    /// Remove and return the item at `index`
    pub fn remove_data(&mut self, index: usize) -> Result<String, StoreError> {
        if index >= self.items.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        self.broadcast();
        Ok(removed)
    }

    pub fn get_data(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn get_data_length(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Register an observer called after every mutation
    pub fn subscribe(&mut self, observer: impl FnMut() + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn broadcast(&mut self) {
        for (_, observer) in &mut self.observers {
            observer();
        }
    }
}

impl fmt::Debug for TextStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextStore")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(store: &mut TextStore) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let observed = Rc::clone(&count);
        store.subscribe(move || observed.set(observed.get() + 1));
        count
    }

    #[test]
    fn insert_then_get_returns_value() {
        let mut store = TextStore::new();
        store.insert_data(0, "first").unwrap();
        store.insert_data(0, "zeroth").unwrap();
        assert_eq!(store.get_data(0), Some("zeroth"));
        assert_eq!(store.get_data(1), Some("first"));
    }

    #[test]
    fn insert_at_len_appends() {
        let mut store = TextStore::from_items(["a", "b"]);
        store.insert_data(2, "c").unwrap();
        assert_eq!(store.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_past_end_fails() {
        let mut store = TextStore::from_items(["a"]);
        let err = store.insert_data(3, "x").unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfBounds { index: 3, len: 1 });
    }

    #[test]
    fn remove_returns_value_and_shrinks() {
        let mut store = TextStore::from_items(["a", "b", "c"]);
        let removed = store.remove_data(1).unwrap();
        assert_eq!(removed, "b");
        assert_eq!(store.get_data_length(), 2);
        assert_eq!(store.get_data(1), Some("c"));
    }

    #[test]
    fn remove_out_of_range_fails() {
        let mut store = TextStore::new();
        assert!(store.remove_data(0).is_err());
    }

    #[test]
    fn each_mutation_broadcasts_once() {
        let mut store = TextStore::new();
        let count = counting(&mut store);

        store.insert_data(0, "a").unwrap();
        assert_eq!(count.get(), 1);
        store.insert_data(1, "b").unwrap();
        assert_eq!(count.get(), 2);
        store.remove_data(0).unwrap();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn failed_mutation_does_not_broadcast() {
        let mut store = TextStore::new();
        let count = counting(&mut store);

        let _ = store.remove_data(0);
        let _ = store.insert_data(5, "x");
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let mut store = TextStore::new();
        let count = Rc::new(Cell::new(0));
        let observed = Rc::clone(&count);
        let id = store.subscribe(move || observed.set(observed.get() + 1));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.insert_data(0, "a").unwrap();
        assert_eq!(count.get(), 0);
    }
}
