#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use wordsift::{sift, wordlist};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let words = wordlist::split_lines(&text);
    let output = sift(&words);

    let kept: HashSet<&str> = output.iter().copied().collect();
    for word in &output {
        assert!(!word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()));
        if let Some(stem) = word.strip_suffix('s') {
            assert!(!kept.contains(stem));
        }
    }

    assert_eq!(sift(&output), output);
});
