use super::*;

#[test]
fn alloc_advances_cursor_by_one_value() {
    let mut arena: LinearArena<[u64; 4]> = LinearArena::default();
    let before = arena.used_bytes();
    let id = arena.alloc([1, 2, 3, 4]);
    assert_eq!(arena.used_bytes() - before, std::mem::size_of::<[u64; 4]>());
    assert_eq!(arena[id], [1, 2, 3, 4]);
    assert_eq!(id.index(), 0);
}

#[test]
fn rewind_reclaims_only_the_last_allocation() {
    let mut arena = LinearArena::default();
    let a = arena.alloc(1u32);
    let b = arena.alloc(2u32);

    assert!(!arena.rewind_if_last_alloc(a));
    assert_eq!(arena.len(), 2);

    assert!(arena.rewind_if_last_alloc(b));
    assert_eq!(arena.len(), 1);
    assert!(arena.get(b).is_none());
    assert_eq!(arena.get(a), Some(&1));

    // `b` is gone, so rewinding it again must not eat `a`.
    assert!(!arena.rewind_if_last_alloc(b));
    assert_eq!(arena.len(), 1);
    assert_eq!(arena.stats().rewinds, 1);
}

#[test]
fn reset_invalidates_outstanding_handles() {
    let mut arena = LinearArena::new(ArenaOpts {
        initial_capacity: 2,
        max_retained_capacity: 2,
    });
    let old = arena.alloc("old");
    arena.reset();
    assert!(arena.is_empty());
    assert!(arena.get(old).is_none());
    assert!(arena.try_get(old).is_err());

    let fresh = arena.alloc("fresh");
    assert_eq!(fresh.index(), old.index());
    assert_ne!(fresh, old);
    assert!(!arena.rewind_if_last_alloc(old));
    assert_eq!(arena.get(fresh), Some(&"fresh"));

    let st = arena.stats();
    assert_eq!(st.resets, 1);
    assert_eq!(st.allocations, 2);
    assert_eq!(st.peak_len, 1);
}

#[test]
fn iter_yields_live_handles_in_order() {
    let mut arena = LinearArena::default();
    for v in 0..3u8 {
        arena.alloc(v);
    }
    let seen: Vec<_> = arena.iter().map(|(id, v)| (id.index(), *v)).collect();
    assert_eq!(seen, vec![(0, 0), (1, 1), (2, 2)]);
    for (id, v) in arena.iter() {
        assert_eq!(arena[id], *v);
    }
}

#[test]
#[should_panic(expected = "stale or rewound")]
fn index_panics_on_rewound_handle() {
    let mut arena = LinearArena::default();
    let id = arena.alloc(7i32);
    arena.rewind_if_last_alloc(id);
    let v = arena[id];
    assert_eq!(v, 7);
}
