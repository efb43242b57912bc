//! Fixed-Capacity Ring Store - penyimpanan inti untuk recent-window buffer
//!
//! Write cursor adalah satu-satunya pointer otoritatif: posisi "oldest"
//! diturunkan murni dari cursor dan len, sehingga mode lock-free hanya perlu
//! mengkoordinasikan satu integer atomic. Tidak ada alokasi setelah
//! inisialisasi.

use std::cell::UnsafeCell;
use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Slot dalam ring store - menyimpan satu item
#[repr(C, align(64))] // Cache line alignment untuk menghindari false sharing antar writer
pub(super) struct Slot<T> {
    data: UnsafeCell<MaybeUninit<T>>,
}

impl<T> Slot<T> {
    /// Slot zero-initialized. Pembacaan stale pada mode lock-free melihat
    /// bit pattern nol, bukan memori uninitialized.
    fn zeroed() -> Self {
        Self {
            data: UnsafeCell::new(MaybeUninit::zeroed()),
        }
    }
}

/// Padding untuk cache line isolation (64 bytes pada x86-64)
#[repr(C, align(64))]
pub(super) struct CacheLinePadded<T> {
    pub(super) value: T,
}

impl<T> CacheLinePadded<T> {
    const fn new(value: T) -> Self {
        Self { value }
    }
}

/// Fixed-capacity ring store dengan overwrite-on-full semantics.
///
/// Menyimpan N item terakhir yang ditulis. Setelah penuh, setiap write
/// menimpa satu item tertua. `put` membutuhkan `&mut self` - serialisasi
/// eksternal adalah kontrak caller. Untuk akses konkuren gunakan
/// [`LockedRing`](super::LockedRing) atau [`AtomicRing`](super::AtomicRing).
#[repr(C)]
pub struct RingStore<T> {
    // Cursor tulis - index slot untuk write BERIKUTNYA, selalu < capacity
    pub(super) cursor: CacheLinePadded<AtomicUsize>,
    // Jumlah item valid, saturate di capacity
    pub(super) len: CacheLinePadded<AtomicUsize>,
    // Pre-allocated slot array di heap
    slots: Box<[Slot<T>]>,
    capacity: usize,
}

// SAFETY: RingStore boleh dibagi antar thread karena:
// - cursor dan len hanya diakses via atomic operations
// - slot write pada path konkuren hanya dilakukan pemenang klaim CAS
//   (lihat AtomicRing) atau pemegang &mut self
// - slot read bersifat volatile dan mode lock-free mendokumentasikan
//   best-effort semantics untuk T: Copy
unsafe impl<T: Send> Send for RingStore<T> {}
unsafe impl<T: Send> Sync for RingStore<T> {}

impl<T: Copy> RingStore<T> {
    /// Membuat ring store baru dengan kapasitas tetap.
    ///
    /// Alokasi hanya terjadi sekali di sini, tidak ada alokasi di write path.
    ///
    /// # Panics
    /// Panic jika `capacity == 0` (modulo arithmetic tidak terdefinisi).
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1");

        let mut slots = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            slots.push(Slot::zeroed());
        }

        Self {
            cursor: CacheLinePadded::new(AtomicUsize::new(0)),
            len: CacheLinePadded::new(AtomicUsize::new(0)),
            slots: slots.into_boxed_slice(),
            capacity,
        }
    }

    /// Kapasitas store, tetap sepanjang lifetime
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Jumlah item valid saat ini.
    ///
    /// Atomic load: visible antar writer, tapi bukan point-in-time snapshot
    /// terhadap write yang sedang berlangsung di mode lock-free.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len.value.load(Ordering::Acquire)
    }

    /// Cek apakah store kosong
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cek apakah store sudah penuh (write berikutnya menimpa item tertua)
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Menulis item di posisi cursor, menimpa item tertua jika penuh.
    ///
    /// Tidak pernah gagal dan tidak pernah alokasi. `&mut self` menjamin
    /// eksklusivitas - ini adalah baseline path tanpa sinkronisasi.
    #[inline(always)]
    pub fn put(&mut self, item: T) {
        let cursor = *self.cursor.value.get_mut();

        // SAFETY: &mut self menjamin tidak ada reader/writer lain
        unsafe {
            (*self.slots[cursor].data.get()).write(item);
        }

        let len = self.len.value.get_mut();
        if *len < self.capacity {
            *len += 1;
        }
        *self.cursor.value.get_mut() = (cursor + 1) % self.capacity;
    }

    /// Item yang paling baru ditulis, atau `None` jika kosong
    #[inline(always)]
    pub fn newest(&self) -> Option<T> {
        self.nth_from_newest(0)
    }

    /// Item `n` posisi di belakang yang terbaru (`n == 0` adalah newest).
    ///
    /// Mengembalikan `None` untuk store kosong atau `n` di luar jangkauan
    /// (`n >= len` atau `n >= capacity`) - defensive read, bukan error.
    pub fn nth_from_newest(&self, n: usize) -> Option<T> {
        let len = self.len();
        if len == 0 || n >= len || n >= self.capacity {
            return None;
        }

        let cursor = self.cursor.value.load(Ordering::Acquire);
        let index = (cursor + self.capacity - n - 1) % self.capacity;

        // SAFETY: index < capacity, dan n < len menjamin slot tersebut
        // sudah pernah ditulis (atau zero-initialized pada window stale
        // mode lock-free, lihat AtomicRing)
        Some(unsafe { self.read_slot(index) })
    }

    /// Hingga `k` item terakhir, urut oldest-first.
    ///
    /// Hasilnya adalah `min(k, len)` item terakhir dari [`all_items`].
    /// Store kosong (atau `k == 0`) menghasilkan `Vec` kosong - konvensi
    /// yang sama dipakai semua operasi sequence di crate ini.
    ///
    /// [`all_items`]: RingStore::all_items
    pub fn most_recent(&self, k: usize) -> Vec<T> {
        let mut items = self.all_items();
        if k < items.len() {
            items.split_off(items.len() - k)
        } else {
            items
        }
    }

    /// Seluruh isi store, urut oldest-first.
    ///
    /// Belum wrap (`len < capacity`): urutan logis = urutan fisik
    /// `slots[0..len]`. Sudah wrap: cursor adalah batas antara item tertua
    /// dan yang baru saja ditimpa, jadi `slots[cursor..]` disusul
    /// `slots[..cursor]`.
    pub fn all_items(&self) -> Vec<T> {
        let len = self.len();
        let cursor = self.cursor.value.load(Ordering::Acquire);

        let mut items = Vec::with_capacity(len);
        if len < self.capacity {
            for index in 0..len {
                // SAFETY: index < len <= capacity, slot sudah ditulis
                items.push(unsafe { self.read_slot(index) });
            }
        } else {
            for index in (cursor..self.capacity).chain(0..cursor) {
                // SAFETY: store penuh, semua slot sudah ditulis
                items.push(unsafe { self.read_slot(index) });
            }
        }
        items
    }

    /// Baca satu slot tanpa sinkronisasi terhadap slot write.
    ///
    /// # Safety
    /// `index` harus < capacity. Pada mode lock-free, slot bisa saja sedang
    /// ditulis writer lain - volatile read memastikan pembacaan dari memori,
    /// tapi hasilnya bisa stale (nilai cycle sebelumnya).
    #[inline(always)]
    pub(super) unsafe fn read_slot(&self, index: usize) -> T {
        (*self.slots[index].data.get()).as_ptr().read_volatile()
    }

    /// Tulis satu slot tanpa mengambil `&mut self`.
    ///
    /// # Safety
    /// Caller harus memegang klaim eksklusif atas `index` untuk write
    /// generation ini (pemenang CAS di AtomicRing). Dua writer tidak boleh
    /// menulis index klaim yang sama secara bersamaan.
    #[inline(always)]
    pub(super) unsafe fn write_slot(&self, index: usize, item: T) {
        (*self.slots[index].data.get()).write(item);
    }
}
