//! Kontrak kapabilitas minimal untuk recent-window buffer
//!
//! Caller yang hanya butuh Len/Cap/Get/Put bisa memegang mode mana pun di
//! belakang trait ini, tanpa tahu strategi sinkronisasinya.

use super::atomic::AtomicRing;
use super::locked::LockedRing;

/// Kontrak minimal sebuah recent-window buffer.
///
/// `get` mengembalikan item terbaru atau `None` jika kosong - kondisi
/// "tidak ada data" bukan error. Diimplementasikan oleh kedua mode
/// konkuren; [`RingStore`](super::RingStore) sendiri tidak, karena `put`
/// miliknya membutuhkan `&mut self` (serialisasi eksternal).
pub trait RecentWindow<T> {
    /// Jumlah item valid saat ini
    fn len(&self) -> usize;

    /// Kapasitas tetap buffer
    fn cap(&self) -> usize;

    /// Item terbaru, atau `None` jika kosong
    fn get(&self) -> Option<T>;

    /// Append satu item, menimpa yang tertua jika penuh
    fn put(&self, item: T);

    /// Cek apakah buffer kosong
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Copy> RecentWindow<T> for LockedRing<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        LockedRing::len(self)
    }

    #[inline(always)]
    fn cap(&self) -> usize {
        self.capacity()
    }

    #[inline(always)]
    fn get(&self) -> Option<T> {
        self.newest()
    }

    #[inline(always)]
    fn put(&self, item: T) {
        LockedRing::put(self, item);
    }
}

impl<T: Copy> RecentWindow<T> for AtomicRing<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        AtomicRing::len(self)
    }

    #[inline(always)]
    fn cap(&self) -> usize {
        self.capacity()
    }

    #[inline(always)]
    fn get(&self) -> Option<T> {
        self.newest()
    }

    #[inline(always)]
    fn put(&self, item: T) {
        AtomicRing::put(self, item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(window: &dyn RecentWindow<u64>, count: u64) {
        for i in 0..count {
            window.put(i);
        }
    }

    #[test]
    fn test_both_modes_behind_trait_object() {
        let locked = LockedRing::new(4);
        let atomic = AtomicRing::new(4);

        for window in [&locked as &dyn RecentWindow<u64>, &atomic] {
            assert!(window.is_empty());
            assert_eq!(window.get(), None);

            fill(window, 6);
            assert_eq!(window.len(), 4);
            assert_eq!(window.cap(), 4);
            assert_eq!(window.get(), Some(5));
        }
    }
}
