//! Exclusive-Access Mode - RingStore di belakang reader/writer lock
//!
//! Semua write memegang write lock, semua read memegang read lock.
//! Reader boleh paralel; satu writer mengeksklusi semuanya. Hasilnya
//! linearizable: setiap read melihat state dari put yang sudah selesai,
//! tidak pernah torn state. Trade-off: writer dan reader saling contend.

use parking_lot::RwLock;

use super::ring_store::RingStore;

/// Ring store dengan shared/exclusive lock discipline.
///
/// Dipakai kalau caller butuh konsistensi read/write penuh. Lock acquisition
/// unconditional dan blocking - tidak ada timeout atau cancellation.
pub struct LockedRing<T> {
    store: RwLock<RingStore<T>>,
}

impl<T: Copy> LockedRing<T> {
    /// Membuat locked ring dengan kapasitas tetap.
    ///
    /// # Panics
    /// Panic jika `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: RwLock::new(RingStore::new(capacity)),
        }
    }

    /// Kapasitas ring
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.store.read().capacity()
    }

    /// Jumlah item valid saat ini
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Cek apakah ring kosong
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Menulis item di bawah write lock
    #[inline(always)]
    pub fn put(&self, item: T) {
        self.store.write().put(item);
    }

    /// Item terbaru, atau `None` jika kosong
    #[inline(always)]
    pub fn newest(&self) -> Option<T> {
        self.store.read().newest()
    }

    /// Item `n` posisi di belakang yang terbaru (`n == 0` adalah newest)
    #[inline(always)]
    pub fn nth_from_newest(&self, n: usize) -> Option<T> {
        self.store.read().nth_from_newest(n)
    }

    /// Hingga `k` item terakhir, urut oldest-first
    #[inline(always)]
    pub fn most_recent(&self, k: usize) -> Vec<T> {
        self.store.read().most_recent(k)
    }

    /// Snapshot seluruh isi, urut oldest-first
    #[inline(always)]
    pub fn all_items(&self) -> Vec<T> {
        self.store.read().all_items()
    }
}
