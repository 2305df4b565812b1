//! Concurrent recycling pools for byte buffers and string-keyed maps.
//!
//! Instead of allocating a fresh object on every request, borrow one from a
//! pool and recycle it when done. A pool keeps idle objects in a lock-free
//! [`Cache`] and falls back to a caller-supplied factory when none is idle,
//! counting every such fabrication.
//!
//! ```
//! use recycle::{BufferPool, MapPool};
//! use std::collections::HashMap;
//!
//! let buffers = BufferPool::new(|| vec![0u8; 8]);
//! let mut buf = buffers.borrow();
//! buf.fill(b'a');
//! buffers.recycle(buf);
//! assert_eq!(buffers.borrow().len(), 8);
//!
//! let maps = MapPool::new(HashMap::<String, f32>::new);
//! let mut map = maps.borrow();
//! map.insert("pi".to_owned(), 3.14);
//! maps.recycle(map);
//! assert!(maps.borrow().is_empty());
//! ```
#![warn(missing_docs, missing_debug_implementations)]
mod buffer;
mod cache;
mod counting;
mod guard;
mod map;

pub use buffer::*;
pub use cache::*;
pub use counting::*;
pub use guard::*;
pub use map::*;
