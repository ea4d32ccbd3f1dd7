//! Favorites domain — locally persisted favorite coins.
//!
//! [`Favorites`] is the single writer to its [`FavoritesStore`]. A successful
//! write is applied to the published set before the store is re-read, so the next
//! [`Favorites::snapshot`] reflects it even when that reload fails.

pub mod store;

use crate::domain::coin::Coin;
use crate::error::StoreError;
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::watch;

pub use store::{FavoritesStore, JsonFileStore, MemoryStore};

/// The persisted subset of a [`Coin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub icon_url: String,
}

impl From<&Coin> for FavoriteRecord {
    fn from(coin: &Coin) -> Self {
        Self {
            id: coin.id.clone(),
            symbol: coin.symbol.clone(),
            name: coin.name.clone(),
            icon_url: coin.icon_url.clone(),
        }
    }
}

/// Favorite records keyed by coin id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    records: BTreeMap<CoinId, FavoriteRecord>,
}

impl FavoriteSet {
    pub fn contains(&self, id: &CoinId) -> bool {
        self.records.contains_key(id)
    }

    pub fn get(&self, id: &CoinId) -> Option<&FavoriteRecord> {
        self.records.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn insert(&mut self, record: FavoriteRecord) {
        self.records.insert(record.id.clone(), record);
    }

    fn remove(&mut self, id: &CoinId) -> bool {
        self.records.remove(id).is_some()
    }
}

impl FromIterator<FavoriteRecord> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = FavoriteRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }
}

/// Favorites adapter over a persistence collaborator.
pub struct Favorites {
    store: Box<dyn FavoritesStore>,
    state: watch::Sender<FavoriteSet>,
}

impl Favorites {
    /// Wrap `store`, loading its current contents.
    pub fn new(store: impl FavoritesStore + 'static) -> Result<Self, StoreError> {
        let initial: FavoriteSet = store.fetch_all()?.into_iter().collect();
        let (state, _) = watch::channel(initial);
        Ok(Self {
            store: Box::new(store),
            state,
        })
    }

    /// Favorites backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        let (state, _) = watch::channel(FavoriteSet::default());
        Self {
            store: Box::new(MemoryStore::new()),
            state,
        }
    }

    /// Remove `coin` if it is a favorite, add it otherwise.
    ///
    /// Returns whether the coin is a favorite afterwards.
    pub fn toggle(&self, coin: &Coin) -> Result<bool, StoreError> {
        let was_favorite = self.contains(&coin.id);
        if was_favorite {
            self.store.delete_by_identifier(&coin.id)?;
            self.state.send_modify(|set| {
                set.remove(&coin.id);
            });
        } else {
            let record = FavoriteRecord::from(coin);
            self.store.insert(record.clone())?;
            self.state.send_modify(|set| set.insert(record));
        }
        tracing::debug!(coin = %coin.id, favorite = !was_favorite, "Toggled favorite");
        self.reload_after_write();
        Ok(!was_favorite)
    }

    pub fn remove(&self, id: &CoinId) -> Result<(), StoreError> {
        self.store.delete_by_identifier(id)?;
        self.state.send_if_modified(|set| set.remove(id));
        self.reload_after_write();
        Ok(())
    }

    pub fn contains(&self, id: &CoinId) -> bool {
        self.state.borrow().contains(id)
    }

    pub fn snapshot(&self) -> FavoriteSet {
        self.state.borrow().clone()
    }

    /// Receiver that observes every change to the favorite set.
    pub fn subscribe(&self) -> watch::Receiver<FavoriteSet> {
        self.state.subscribe()
    }

    /// Re-read the store and publish its contents.
    pub fn reload(&self) -> Result<(), StoreError> {
        let records: FavoriteSet = self.store.fetch_all()?.into_iter().collect();
        self.state.send_replace(records);
        Ok(())
    }

    /// The write already landed in the published set; a failed re-read keeps it.
    fn reload_after_write(&self) {
        if let Err(err) = self.reload() {
            tracing::warn!(error = %err, "Failed to reload favorites after write");
        }
    }
}

impl std::fmt::Debug for Favorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Favorites")
            .field("favorites", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn coin(id: &str, name: &str) -> Coin {
        Coin {
            id: CoinId::from(id),
            symbol: name[..3].to_uppercase(),
            name: name.to_string(),
            icon_url: format!("https://cdn.example.com/{id}.svg"),
            price: Decimal::ONE,
            change: Decimal::ZERO,
            rank: 1,
            color: None,
            market_cap: None,
            volume_24h: None,
            btc_price: None,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let favorites = Favorites::in_memory();
        let btc = coin("Qwsogvtv82FCd", "Bitcoin");

        assert!(favorites.toggle(&btc).unwrap());
        assert!(favorites.contains(&btc.id));
        assert_eq!(favorites.snapshot().get(&btc.id).unwrap().symbol, "BIT");

        assert!(!favorites.toggle(&btc).unwrap());
        assert!(favorites.snapshot().is_empty());
    }

    #[test]
    fn test_toggle_matches_by_id_only() {
        let favorites = Favorites::in_memory();
        let original = coin("x1", "Original");
        favorites.toggle(&original).unwrap();

        let mut renamed = original.clone();
        renamed.name = "Renamed".to_string();
        assert!(!favorites.toggle(&renamed).unwrap());
        assert!(favorites.snapshot().is_empty());
    }

    #[test]
    fn test_remove_and_subscribe() {
        let favorites = Favorites::in_memory();
        let mut rx = favorites.subscribe();
        favorites.toggle(&coin("a", "Alpha")).unwrap();
        favorites.toggle(&coin("b", "Beta")).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 2);

        favorites.remove(&CoinId::from("a")).unwrap();
        let ids: Vec<_> = rx.borrow_and_update().iter().map(|r| r.name.clone()).collect();
        assert_eq!(ids, ["Beta"]);
    }

    #[test]
    fn test_new_loads_existing_records() {
        let store = MemoryStore::new();
        store.insert(FavoriteRecord::from(&coin("a", "Alpha"))).unwrap();
        let favorites = Favorites::new(store).unwrap();
        assert!(favorites.contains(&CoinId::from("a")));
    }

    /// Memory store whose next `fetch_all` calls fail.
    #[derive(Default)]
    struct Flaky {
        inner: MemoryStore,
        failing_reads: AtomicUsize,
    }

    impl Flaky {
        fn fail_reads(&self, n: usize) {
            self.failing_reads.store(n, Ordering::SeqCst);
        }
    }

    impl FavoritesStore for Arc<Flaky> {
        fn fetch_all(&self) -> Result<Vec<FavoriteRecord>, StoreError> {
            let failing = self
                .failing_reads
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if failing {
                return Err(StoreError::Io(std::io::Error::other("read failed")));
            }
            self.inner.fetch_all()
        }

        fn insert(&self, record: FavoriteRecord) -> Result<(), StoreError> {
            self.inner.insert(record)
        }

        fn delete_by_identifier(&self, id: &CoinId) -> Result<(), StoreError> {
            self.inner.delete_by_identifier(id)
        }
    }

    #[test]
    fn test_toggle_stays_inverse_when_reload_fails() {
        let store = Arc::new(Flaky::default());
        let favorites = Favorites::new(store.clone()).unwrap();
        let btc = coin("Qwsogvtv82FCd", "Bitcoin");

        store.fail_reads(1);
        assert!(favorites.toggle(&btc).unwrap());
        assert!(favorites.contains(&btc.id));
        assert_eq!(store.inner.fetch_all().unwrap().len(), 1);

        store.fail_reads(1);
        assert!(!favorites.toggle(&btc).unwrap());
        assert!(favorites.snapshot().is_empty());
        assert!(store.inner.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn test_remove_applies_when_reload_fails() {
        let store = Arc::new(Flaky::default());
        let favorites = Favorites::new(store.clone()).unwrap();
        favorites.toggle(&coin("a", "Alpha")).unwrap();

        store.fail_reads(1);
        favorites.remove(&CoinId::from("a")).unwrap();
        assert!(favorites.snapshot().is_empty());
        assert!(store.inner.fetch_all().unwrap().is_empty());
    }
}
