#![no_main]

use libfuzzer_sys::fuzz_target;

use fftmul_core::{DigitSequence, MulError};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    match text.parse::<DigitSequence>() {
        Ok(seq) => {
            let rendered = seq.to_string();
            assert!(rendered.bytes().all(|b| b.is_ascii_digit()));
            assert!(rendered == "0" || !rendered.starts_with('0'));
        }
        Err(MulError::InvalidDigit { .. }) => {}
        Err(e) => panic!("unexpected parse error: {e}"),
    }
});
