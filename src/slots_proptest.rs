#![cfg(test)]

// Property tests for the private slot layer, kept inside the crate so
// they can reach `SlotArray` without widening its visibility.

use crate::slots::SlotArray;
use proptest::prelude::*;

// Operations over a fixed-length array; indices may run past the end to
// exercise the range check.
#[derive(Clone, Debug)]
enum Op {
    Set(usize, i32),
    Take(usize),
    Read(usize),
    Clear,
}

fn arb_ops(len: usize) -> impl Strategy<Value = Vec<Op>> {
    let idx = 0..len.saturating_mul(2).max(1);
    let op = prop_oneof![
        (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
        idx.clone().prop_map(Op::Take),
        idx.prop_map(Op::Read),
        Just(Op::Clear),
    ];
    proptest::collection::vec(op, 0..64)
}

// Tie the op index range to the array length so shrinking keeps them
// consistent.
fn arb_scenario() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (0usize..24).prop_flat_map(|len| (Just(len), arb_ops(len)))
}

proptest! {
    // Model the slot array against a plain Vec<Option<i32>>: every
    // operation agrees with the model, and out-of-range indices fail on
    // the array exactly when they fall outside the model.
    #[test]
    fn slot_array_matches_vec_model((len, ops) in arb_scenario()) {
        let mut arr: SlotArray<i32> = SlotArray::new(len);
        let mut model: Vec<Option<i32>> = vec![None; len];

        for op in ops {
            match op {
                Op::Set(i, v) => {
                    let got = arr.set(i, v);
                    if i < len {
                        prop_assert_eq!(got.unwrap(), model[i].replace(v));
                    } else {
                        prop_assert!(got.is_err());
                    }
                }
                Op::Take(i) => {
                    let got = arr.take(i);
                    if i < len {
                        prop_assert_eq!(got.unwrap(), model[i].take());
                    } else {
                        prop_assert!(got.is_err());
                    }
                }
                Op::Read(i) => {
                    let got = arr.slot(i);
                    if i < len {
                        prop_assert_eq!(*got.unwrap(), model[i]);
                    } else {
                        prop_assert!(got.is_err());
                    }
                }
                Op::Clear => {
                    arr.clear();
                    model.iter_mut().for_each(|s| *s = None);
                }
            }
        }

        // Final sweep: every slot agrees with the model.
        let final_state: Vec<Option<i32>> = arr.iter().cloned().collect();
        prop_assert_eq!(final_state, model);
    }
}
