#![no_main]

use libfuzzer_sys::fuzz_target;
use suftree::tree::SuffixTree;

fuzz_target!(|data: &[u8]| {
    // First byte picks the pattern length, the rest is the text
    let Some((&n, text)) = data.split_first() else {
        return;
    };
    let pattern_len = (n as usize % 4) + 1;
    if text.len() < pattern_len {
        return;
    }
    let pattern = &text[text.len() - pattern_len..];

    let tree = SuffixTree::build(text).expect("construction failed");
    let naive: Vec<usize> = (0..text.len())
        .filter(|&k| text[k..].starts_with(pattern))
        .collect();
    assert_eq!(tree.occurrences(pattern).unwrap(), naive);
});
