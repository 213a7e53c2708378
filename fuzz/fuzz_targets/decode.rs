#![no_main]

use binarycookies::{CookieFile, Opaque, Options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(file) = CookieFile::decode_with(data, &Options::default(), &Opaque) {
        let bytes = file.encode_with(&Opaque).expect("decoded files re-encode");
        let again = CookieFile::decode_with(&bytes, &Options::default(), &Opaque).expect("re-encoded files decode");
        assert_eq!(file.cookie_count(), again.cookie_count());
    }
});
