#![no_main]
use libfuzzer_sys::fuzz_target;
use tagcheck_core::{MismatchPolicy, Validator, ValidatorConfig};
use tagcheck_syntax::{ScanMode, TagScanner};

fuzz_target!(|data: &[u8]| {
    // Panic freedom across every scan mode and policy.
    let s = String::from_utf8_lossy(data);
    for scan_mode in [ScanMode::Tags, ScanMode::Lines] {
        for mismatch_policy in [MismatchPolicy::Report, MismatchPolicy::Extras] {
            let tokens = TagScanner::new(scan_mode).scan(&s);
            let config = ValidatorConfig {
                mismatch_policy,
                scan_mode,
            };
            let _ = Validator::new(config).validate(&tokens);
        }
    }
});
