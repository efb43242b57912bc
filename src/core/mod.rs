//! Core module: Ring Store dengan dua mode akses konkuren
//!
//! Prinsip desain:
//! - Satu layout penyimpanan: semua mode berbagi index arithmetic RingStore
//! - Lock-Free write path: hanya atomic operations, tanpa Mutex di AtomicRing
//! - No-Allocation: slot array pre-allocated saat init, write path bebas alokasi

mod atomic;
mod locked;
mod ring_store;
mod window;

pub use atomic::AtomicRing;
pub use locked::LockedRing;
pub use ring_store::RingStore;
pub use window::RecentWindow;
