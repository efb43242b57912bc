//! Mnemo - Fixed-Capacity Recent-Window Ring Buffer
//!
//! Menyimpan N item terakhir dari satu atau banyak writer, untuk dibaca
//! bulk atau point-in-time oleh reader. Setelah penuh, write baru menimpa
//! item tertua.
//!
//! Arsitektur:
//! - [`RingStore`]: slot array + write cursor + len; seluruh index arithmetic
//! - [`LockedRing`]: shared/exclusive lock, read/write linearizable
//! - [`AtomicRing`]: CAS retry loop, multi-writer tanpa blocking,
//!   read best-effort
//!
//! Pilih mode sesuai kebutuhan: `LockedRing` kalau reader harus konsisten
//! dengan writer, `AtomicRing` kalau write throughput yang utama dan reader
//! mentolerir staleness window.

pub mod core;

pub use crate::core::{AtomicRing, LockedRing, RecentWindow, RingStore};
