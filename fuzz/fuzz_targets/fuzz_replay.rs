#![no_main]

use libfuzzer_sys::fuzz_target;

use florin_ledger::replay;

// Fuzz replay with arbitrary record streams. Corrupt records and integrity
// faults must come back as errors, never panics.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let records: Vec<String> = text.lines().map(str::to_string).collect();
    if let Ok(state) = replay(&records) {
        // Whatever a log replays to must satisfy the supply invariant.
        assert_eq!(state.total_supply(), state.audit_supply());
    }
});
