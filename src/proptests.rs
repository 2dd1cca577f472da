use super::*;

use proptest::prelude::*;
use std::collections::HashMap;

fn validate_table(map: &IntLongMap) {
    let capacity = map.capacity();
    assert!(capacity.is_power_of_two(), "capacity must be a power of two");
    assert_eq!(map.keys.len(), map.values.len(), "parallel arrays must match");
    assert!(map.len <= capacity, "len must never exceed capacity");
    assert!(
        map.threshold < capacity,
        "threshold must leave at least one empty slot"
    );

    let mask = capacity - 1;
    let mut occupied = 0usize;
    let mut seen: HashMap<i32, usize> = HashMap::new();

    for slot in 0..capacity {
        let key = map.keys[slot];
        if key == IntLongMap::NULL_KEY {
            assert_eq!(
                map.values[slot],
                IntLongMap::NULL_VALUE,
                "empty slot {slot} must hold the value sentinel"
            );
            continue;
        }

        occupied += 1;
        if let Some(other) = seen.insert(key, slot) {
            panic!("key {key} occupies both slot {other} and slot {slot}");
        }

        // The probe from the key's home slot must reach it without crossing
        // an empty slot, otherwise get() would report a false miss.
        let mut i = index_for(key, mask);
        while i != slot {
            assert_ne!(
                map.keys[i],
                IntLongMap::NULL_KEY,
                "empty slot {i} breaks the probe chain of key {key} at slot {slot}"
            );
            i = (i + 1) & mask;
        }
    }

    assert_eq!(occupied, map.len, "len must match the occupied slot count");
}

#[derive(Clone, Debug)]
enum Op {
    Insert(i32, i64),
    Get(i32),
}

fn key_strategy() -> impl Strategy<Value = i32> + Clone {
    // i32::MIN is the empty-slot marker and rejected by insert. A narrow
    // range keeps collision and overwrite rates high.
    prop_oneof![
        8 => -512i32..=512,
        1 => (i32::MIN + 1)..=i32::MAX,
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        70 => (key.clone(), any::<i64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        30 => key.clone().prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..=2000)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut map = IntLongMap::new();
        let mut model: HashMap<i32, i64> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let old_map = map.insert(key, value);
                    let old_model = model.insert(key, value);
                    prop_assert_eq!(old_map, old_model);
                }
                Op::Get(key) => {
                    prop_assert_eq!(map.get(key), model.get(&key).copied());
                }
            }

            prop_assert_eq!(map.len(), model.len());
        }

        validate_table(&map);
        for (&key, &value) in &model {
            prop_assert_eq!(map.get(key), Some(value));
        }
    }

    #[test]
    fn prop_constructed_table_is_valid(
        capacity in 1usize..=4096,
        load_factor in 0.01f64..=0.99,
    ) {
        let map = IntLongMap::with_capacity_and_load_factor(capacity, load_factor);
        prop_assert!(map.capacity() >= capacity);
        prop_assert!(map.is_empty());
        validate_table(&map);
    }

    #[test]
    fn prop_growth_preserves_every_binding(count in 1usize..=600) {
        let mut map = IntLongMap::with_capacity(1);
        for i in 0..count {
            let key = (i as i32).wrapping_mul(2654435769u32 as i32);
            map.insert(key, i as i64);
            validate_table(&map);
        }
        prop_assert_eq!(map.len(), count);
        for i in 0..count {
            let key = (i as i32).wrapping_mul(2654435769u32 as i32);
            prop_assert_eq!(map.get(key), Some(i as i64));
        }
    }
}
