#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        if let Ok(file) = assetmini::ManagedFile::new(name) {
            let target = Path::new("/project/assets");
            assert!(file.destination_path(target).starts_with(target));
        }
    }
});
