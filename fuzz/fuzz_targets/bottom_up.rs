#![no_main]

use std::rc::Rc;

use libfuzzer_sys::fuzz_target;

// The first two bytes pick the callback invocation that fails, zero means it never fails. The
// rest is the input.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let fail_at = u16::from_le_bytes([data[0], data[1]]) as usize;
    let originals = data[2..].iter().map(|&b| Rc::new(b)).collect::<Vec<_>>();
    let mut v = originals.clone();

    let mut calls = 0;
    let res = bottom_up_sort::sort_by(&mut v, |a, b| {
        calls += 1;
        if calls == fail_at {
            return Err(calls);
        }

        Ok(**a as i32 - **b as i32)
    });

    assert_eq!(v.len(), originals.len());
    assert!(v.iter().all(|val| originals.iter().any(|orig| Rc::ptr_eq(orig, val))));

    match res {
        Ok(()) => {
            assert!(v.windows(2).all(|w| w[0] <= w[1]));
            assert!(originals.iter().all(|val| Rc::strong_count(val) == 2));
        }
        Err(err) => {
            assert_eq!(err.into_comparator_error(), Some(fail_at));
            assert_eq!(calls, fail_at);
        }
    }

    drop(v);
    assert!(originals.iter().all(|val| Rc::strong_count(val) == 1));
});
