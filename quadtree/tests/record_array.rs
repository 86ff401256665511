use loose_quadtree::record_array::{RecordArray, INLINE_CAPACITY};

#[test]
fn test_push_back_and_fields() {
    let mut records = RecordArray::new(3);
    assert!(records.is_empty());
    for i in 0..10 {
        let index = records.push_back();
        assert_eq!(index, i);
        records.set(index, 0, i as i32);
        records.set(index, 1, -(i as i32));
        records.set(index, 2, 100 + i as i32);
    }
    assert_eq!(records.len(), 10);
    assert_eq!(records.fields(), 3);
    assert_eq!(records.get(4, 0), 4);
    assert_eq!(records.get(4, 1), -4);
    assert_eq!(records.get(4, 2), 104);
}

#[test]
fn test_pop_back() {
    let mut records = RecordArray::new(1);
    let a = records.push_back();
    records.set(a, 0, 7);
    let b = records.push_back();
    records.set(b, 0, 8);
    records.pop_back();
    assert_eq!(records.len(), 1);
    assert_eq!(records.get(records.len() - 1, 0), 7);
    records.pop_back();
    assert!(records.is_empty());
}

#[test]
fn test_free_list_reuses_most_recently_erased() {
    let mut records = RecordArray::new(2);
    for _ in 0..3 {
        records.insert();
    }
    records.erase(1);
    records.erase(0);
    assert_eq!(records.insert(), 0);
    assert_eq!(records.insert(), 1);
    assert_eq!(records.insert(), 3);
    assert_eq!(records.len(), 4);
}

#[test]
fn test_erase_keeps_other_records() {
    let mut records = RecordArray::new(2);
    for i in 0..5 {
        let index = records.insert();
        records.set(index, 0, i * 10);
        records.set(index, 1, i * 10 + 1);
    }
    records.erase(2);
    for i in [0usize, 1, 3, 4] {
        assert_eq!(records.get(i, 0), i as i32 * 10);
        assert_eq!(records.get(i, 1), i as i32 * 10 + 1);
    }
    // Only the first field of the erased slot is touched.
    assert_eq!(records.get(2, 1), 21);
}

#[test]
fn test_spills_after_inline_buffer() {
    let fields = 2;
    let mut records = RecordArray::new(fields);
    assert_eq!(records.capacity(), INLINE_CAPACITY / fields);
    for i in 0..INLINE_CAPACITY / fields {
        let index = records.push_back();
        records.set(index, 0, i as i32);
        records.set(index, 1, 1);
    }
    assert!(!records.spilled());

    let index = records.push_back();
    records.set(index, 0, 999);
    records.set(index, 1, 1);
    assert!(records.spilled());
    // Growth doubles the required slot count.
    assert_eq!(records.capacity(), (INLINE_CAPACITY / fields + 1) * 2);
    for i in 0..INLINE_CAPACITY / fields {
        assert_eq!(records.get(i, 0), i as i32);
    }
    assert_eq!(records.get(index, 0), 999);
}

#[test]
fn test_clear_keeps_capacity_and_resets_free_list() {
    let mut records = RecordArray::new(4);
    for _ in 0..200 {
        records.insert();
    }
    records.erase(150);
    let capacity = records.capacity();
    records.clear();
    assert!(records.is_empty());
    assert_eq!(records.capacity(), capacity);
    assert_eq!(records.insert(), 0);
}

#[test]
fn test_destroy_releases_heap() {
    let mut records = RecordArray::new(1);
    for _ in 0..1_000 {
        records.push_back();
    }
    assert!(records.spilled());
    records.destroy();
    assert!(!records.spilled());
    assert!(records.is_empty());
    assert_eq!(records.capacity(), INLINE_CAPACITY);
    assert_eq!(records.push_back(), 0);
}

#[test]
fn test_with_capacity() {
    let records = RecordArray::with_capacity(5, 100);
    assert!(records.capacity() >= 100);
    assert!(records.is_empty());

    let small = RecordArray::with_capacity(5, 2);
    assert!(!small.spilled());
}

#[test]
#[should_panic(expected = "records need at least one field")]
fn test_zero_fields_rejected() {
    RecordArray::new(0);
}
