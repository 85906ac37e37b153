#![no_main]

use std::{hash::Hasher, io::Cursor};

use intsets::FastIntSet;
use libfuzzer_sys::fuzz_target;

/// Хешер, который копит все байты.
#[derive(Default)]
struct Recorder(Vec<u8>);

impl Hasher for Recorder {
    fn finish(&self) -> u64 {
        0
    }

    fn write(
        &mut self,
        bytes: &[u8],
    ) {
        self.0.extend_from_slice(bytes);
    }
}

fuzz_target!(|set: FastIntSet| {
    let encoded = set.to_bytes();
    if set.min().is_some_and(|m| m < 0) {
        assert!(encoded.is_err());
        return;
    }
    let bytes = encoded.expect("non-negative set must encode");

    let decoded = FastIntSet::from_reader(&mut Cursor::new(&bytes)).expect("roundtrip decode");
    assert_eq!(decoded, set);
    assert_eq!(decoded.to_string(), set.to_string());

    let mut recorder = Recorder::default();
    set.encode_base64_string(&mut recorder)
        .expect("base64 encode");
    assert_eq!(recorder.0, bytes);

    // Алгебра с самим собой не меняет множество.
    assert!(set.union(&decoded).equals(&set));
    assert!(set.difference(&decoded).is_empty());
});
