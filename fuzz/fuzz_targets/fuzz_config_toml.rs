#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<folio::Config>(s) {
            // Anything that validates must also yield session options.
            if config.validate().is_ok() {
                assert!(config.session_options(true, Some(0)).is_ok());
            }
        }
    }
});
