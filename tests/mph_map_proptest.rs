use mph_map::MphMap;
use proptest::prelude::*;
use std::collections::HashMap;

// Model operations on MphMap against a plain HashMap over the same fixed
// key pool and assert the two agree after every step. Only in-set keys
// are generated; foreign keys are a precondition violation, not a
// behavior to model.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i64),
    Erase(usize),
    Get(usize),
    SlotWrite(usize, Option<i64>),
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (1usize..=12).prop_flat_map(|pool| {
        let idx = 0..pool;
        let op = prop_oneof![
            (idx.clone(), any::<i64>()).prop_map(|(i, v)| Op::Insert(i, v)),
            idx.clone().prop_map(Op::Erase),
            idx.clone().prop_map(Op::Get),
            (idx, proptest::option::of(any::<i64>())).prop_map(|(i, v)| Op::SlotWrite(i, v)),
            Just(Op::Clear),
        ];
        (Just(pool), proptest::collection::vec(op, 1..100))
    })
}

proptest! {
    #[test]
    fn mph_map_matches_hashmap_model((pool, ops) in arb_scenario()) {
        let keys: Vec<String> = (0..pool).map(|i| format!("k{i}")).collect();
        let mut m: MphMap<String, i64> = MphMap::new(&keys).expect("construct");
        let mut model: HashMap<String, i64> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let prev = m.insert(&keys[i], v);
                    prop_assert_eq!(prev, model.insert(keys[i].clone(), v));
                }
                Op::Erase(i) => {
                    let prev = m.erase(&keys[i]);
                    prop_assert_eq!(prev, model.remove(&keys[i]));
                }
                Op::Get(i) => {
                    prop_assert_eq!(m.get(&keys[i]), model.get(&keys[i]));
                }
                Op::SlotWrite(i, v) => {
                    *m.slot_mut(&keys[i]) = v;
                    match v {
                        Some(v) => {
                            model.insert(keys[i].clone(), v);
                        }
                        None => {
                            model.remove(&keys[i]);
                        }
                    }
                }
                Op::Clear => {
                    m.clear();
                    model.clear();
                }
            }
        }

        // Final sweep: every key agrees, and values() matches the model's
        // population.
        for k in &keys {
            prop_assert_eq!(m.get(k), model.get(k));
        }
        prop_assert_eq!(m.values().count(), model.len());
    }
}
