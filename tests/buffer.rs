mod common;

use recycle::*;

fn eight_bytes() -> Vec<u8> {
    vec![0; 8]
}

#[test]
fn test_borrow_fill_recycle() {
    common::init_tracing();
    let pool = BufferPool::new(eight_bytes);

    let mut buf = pool.borrow();
    buf.fill(b'a');
    assert_eq!(buf, vec![b'a'; 8]);
    pool.recycle(buf);

    let buf = pool.borrow();
    assert_eq!(buf.len(), 8);
    pool.recycle(buf);
    assert_eq!(pool.fabricated(), 1);
}

#[test]
fn test_borrow_restores_truncated_length() {
    let pool = BufferPool::new(|| Vec::with_capacity(64));

    for keep in [0, 1, 17, 63] {
        let mut buf = pool.borrow();
        assert!(buf.len() >= 64);
        assert_eq!(buf.len(), buf.capacity());
        buf.truncate(keep);
        pool.recycle(buf);
    }
    let buf = pool.borrow();
    assert_eq!(buf.len(), buf.capacity());
    assert_eq!(pool.fabricated(), 1);
}

#[test]
fn test_borrow_keeps_written_prefix() {
    let pool = BufferPool::new(eight_bytes);
    let mut buf = pool.borrow();
    buf.copy_from_slice(b"abcdefgh");
    buf.truncate(3);
    pool.recycle(buf);

    let buf = pool.borrow();
    assert_eq!(&buf[..3], b"abc");
    assert_eq!(buf.len(), 8);
}

#[test]
fn test_shrunk_buffer_comes_back_shrunk() {
    let pool = BufferPool::new(eight_bytes);
    let mut buf = pool.borrow();
    buf.truncate(2);
    buf.shrink_to_fit();
    let shrunk = buf.capacity();
    pool.recycle(buf);

    assert_eq!(pool.borrow().len(), shrunk);
}

#[test]
fn test_untouched_recycle_matches_fresh() {
    let pool = BufferPool::new(eight_bytes);
    let fresh = pool.borrow();
    let (len, cap) = (fresh.len(), fresh.capacity());
    pool.recycle(fresh);

    let reused = pool.borrow();
    assert_eq!((reused.len(), reused.capacity()), (len, cap));
}

#[test]
fn test_cold_start_fabricates() {
    let pool = BufferPool::new(eight_bytes);
    assert_eq!(pool.fabricated(), 0);
    assert_eq!(pool.available(), 0);

    let a = pool.borrow();
    let b = pool.borrow();
    assert_eq!(pool.fabricated(), 2);
    pool.recycle(a);
    pool.recycle(b);
    assert_eq!(pool.available(), 2);

    let _a = pool.borrow();
    let _b = pool.borrow();
    assert_eq!(pool.fabricated(), 2);
}

#[test]
fn test_borrow_pooled_recycles_on_drop() {
    let pool = BufferPool::new(eight_bytes);
    {
        let mut buf = pool.borrow_pooled();
        buf.fill(b'z');
        assert_eq!(buf, vec![b'z'; 8]);
    }
    assert_eq!(pool.available(), 1);
    assert_eq!(pool.borrow_pooled().len(), 8);
    assert_eq!(pool.fabricated(), 1);
}

#[test]
fn test_borrow_pooled_into_inner() {
    let pool = BufferPool::new(eight_bytes);
    let buf = pool.borrow_pooled().into_inner();
    assert_eq!(buf.len(), 8);
    assert_eq!(pool.available(), 0);
}

#[test]
fn test_bounded_cache_discards_overflow() {
    let pool = BufferPool::with_cache(eight_bytes, BoundedFreeList::new(1));
    let a = pool.borrow();
    let b = pool.borrow();
    pool.recycle(a);
    pool.recycle(b);
    assert_eq!(pool.available(), 1);

    let _a = pool.borrow();
    let _b = pool.borrow();
    assert_eq!(pool.fabricated(), 3);
}
