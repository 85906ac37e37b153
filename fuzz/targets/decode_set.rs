#![no_main]

use std::io::Cursor;

use arbitrary::Arbitrary;
use intsets::{DecodeLimits, FastIntSet};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    data: Vec<u8>,
    max_elements: Option<u16>,
}

fuzz_target!(|input: FuzzInput| {
    let limits = match input.max_elements {
        Some(n) => DecodeLimits::new(u64::from(n)),
        None => DecodeLimits::default(),
    };

    let mut set = FastIntSet::from([1, 200, -3]);
    match set.decode_with_limits(&mut Cursor::new(&input.data), &limits) {
        Ok(()) => {
            // Всё, что декодировалось, должно кодироваться обратно.
            let bytes = set.to_bytes().expect("decoded set must be encodable");
            let again = FastIntSet::from_reader(&mut Cursor::new(&bytes))
                .expect("re-encoded set must decode");
            assert_eq!(again, set);
            assert!(set.iter().all(|v| v >= 0));
        }
        Err(_) => assert!(set.is_empty()),
    }
});
