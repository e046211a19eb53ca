#![no_main]
use bitidx::{from_bit_map_producer, from_index_array, to_bit_map_array, IndexProducer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<i32>, u16)| {
    let (raw, extra) = data;

    let indices = match from_index_array(raw.as_slice()) {
        Ok(indices) => indices,
        Err(_) => {
            assert!(raw.iter().any(|&v| v < 0));
            return;
        }
    };

    let positions = indices.as_index_array();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // keep the bitmap allocation bounded
    let Some(&max) = positions.last() else {
        return;
    };
    if max > 1 << 20 {
        return;
    }

    let bit_count = max + 1 + extra as usize;
    let bit_maps = to_bit_map_array(&indices, bit_count).unwrap();
    assert_eq!(from_bit_map_producer(&bit_maps).as_index_array(), positions);

    assert!(to_bit_map_array(&indices, max).is_err());
});
