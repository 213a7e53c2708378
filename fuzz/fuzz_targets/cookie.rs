#![no_main]

use binarycookies::Cookie;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(cookie) = Cookie::decode(data) {
        let bytes = cookie.encode().expect("decoded cookies re-encode");
        assert_eq!(bytes.len(), cookie.encoded_len());

        let again = Cookie::decode(&bytes).expect("re-encoded cookies decode");
        assert_eq!(again.url(), cookie.url());
        assert_eq!(again.value(), cookie.value());
        assert_eq!(again.comment(), cookie.comment());
    }
});
