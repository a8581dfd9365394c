#![no_main]

use libfuzzer_sys::fuzz_target;

use florin_events::codec::{self, Decoded};

// Fuzz the record codec with arbitrary lines.
// Decoding must never panic; anything that decodes must re-encode stably.
fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(Decoded::Event(event)) = codec::decode(line) {
        let encoded = codec::encode(&event).expect("decoded event must re-encode");
        match codec::decode(&encoded) {
            Ok(Decoded::Event(again)) => {
                let twice = codec::encode(&again).expect("stable encoding");
                assert_eq!(encoded, twice, "encoding must be stable");
            }
            other => panic!("re-encoded record failed to decode: {other:?}"),
        }
    }
});
