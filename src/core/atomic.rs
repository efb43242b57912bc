//! Lock-Free Access Mode - multi-writer append via CAS retry loop
//!
//! Write path tidak pernah blocking: writer mengklaim slot dengan
//! compare-and-swap pada cursor, lalu menulis payload ke slot miliknya.
//! CAS menjamin paling banyak satu pemenang per nilai cursor lama, jadi
//! tidak ada dua writer yang menulis slot klaim yang sama bersamaan.
//!
//! Read path di mode ini best-effort: satu atomic load pada cursor,
//! selebihnya tanpa sinkronisasi terhadap slot array. Payload ditulis
//! SETELAH cursor dipublikasikan, sehingga reader bisa sempat melihat
//! cursor baru sementara slot masih berisi nilai cycle sebelumnya.
//! Caller yang butuh konsistensi read/write memakai
//! [`LockedRing`](super::LockedRing).

use std::sync::atomic::Ordering;
use std::thread;

use super::ring_store::RingStore;

// Spin budget sebelum menyerahkan prosesor ke scheduler
const SPIN_LIMIT: u32 = 64;

/// Ring store dengan lock-free multi-writer append.
///
/// `T: Copy` wajib: read di mode ini menduplikasi bit tanpa sinkronisasi,
/// dan bit pattern nol harus valid untuk `T` (integer, float, struct
/// plain-old-data) karena slot zero-initialized sebelum cycle pertama.
pub struct AtomicRing<T> {
    store: RingStore<T>,
}

impl<T: Copy> AtomicRing<T> {
    /// Membuat lock-free ring dengan kapasitas tetap.
    ///
    /// # Panics
    /// Panic jika `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: RingStore::new(capacity),
        }
    }

    /// Kapasitas ring
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Jumlah item valid (atomic load, visible antar writer)
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Cek apakah ring kosong
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Append item tanpa lock.
    ///
    /// CAS sukses berarti writer ini eksklusif memiliki slot yang diklaim
    /// untuk generation tersebut. Gagal berarti writer lain menang; reload
    /// cursor dan coba lagi dengan spin-then-yield backoff. Bounded retry,
    /// tidak pernah blocking.
    pub fn put(&self, item: T) {
        let capacity = self.store.capacity();
        let mut spin = 0u32;
        let mut cursor = self.store.cursor.value.load(Ordering::Acquire);

        loop {
            let next = (cursor + 1) % capacity;
            match self.store.cursor.value.compare_exchange(
                cursor,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    // Saturating increment: satu atomic compare-and-increment,
                    // len tidak pernah melewati capacity
                    self.store
                        .len
                        .value
                        .fetch_update(Ordering::Release, Ordering::Relaxed, |len| {
                            (len < capacity).then_some(len + 1)
                        })
                        .ok();

                    // SAFETY: CAS sukses menjadikan `cursor` klaim eksklusif
                    // writer ini; tidak ada writer lain yang menulis slot ini
                    // sampai cursor wrap satu putaran penuh
                    unsafe {
                        self.store.write_slot(cursor, item);
                    }
                    return;
                }
                Err(observed) => {
                    cursor = observed;
                    spin = backoff(spin);
                }
            }
        }
    }

    /// Item terbaru menurut cursor yang terpublikasi, atau `None` jika kosong.
    ///
    /// Best-effort: cursor bisa sudah maju sementara payload slot belum
    /// ditulis, jadi nilai yang kembali bisa stale satu cycle.
    #[inline(always)]
    pub fn newest(&self) -> Option<T> {
        self.store.newest()
    }

    /// Item `n` posisi di belakang yang terbaru. Best-effort, lihat [`newest`].
    ///
    /// [`newest`]: AtomicRing::newest
    #[inline(always)]
    pub fn nth_from_newest(&self, n: usize) -> Option<T> {
        self.store.nth_from_newest(n)
    }

    /// Hingga `k` item terakhir, urut oldest-first. Best-effort snapshot.
    #[inline(always)]
    pub fn most_recent(&self, k: usize) -> Vec<T> {
        self.store.most_recent(k)
    }

    /// Seluruh isi menurut cursor/len saat load, urut oldest-first.
    /// Best-effort snapshot.
    #[inline(always)]
    pub fn all_items(&self) -> Vec<T> {
        self.store.all_items()
    }
}

/// Spin-then-yield backoff untuk CAS contention
#[inline(always)]
fn backoff(spin: u32) -> u32 {
    if spin < SPIN_LIMIT {
        std::hint::spin_loop();
        spin + 1
    } else {
        thread::yield_now();
        spin
    }
}
