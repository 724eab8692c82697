#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks where the needle ends; the rest is the haystack
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let split = (split as usize).min(rest.len());
    let (needle, haystack) = rest.split_at(split);

    if let Ok(needle) = std::str::from_utf8(needle) {
        if let Ok(signature) = assetmini::OwnershipSignature::new(needle) {
            let _ = signature.is_found_in(haystack);
        }
    }
});
