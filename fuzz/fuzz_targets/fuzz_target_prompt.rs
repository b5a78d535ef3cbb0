#![no_main]
use dashprune::deletion::compose_prompt;
use dashprune::search::SelectionCounts;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|counts: (usize, usize)| {
    let (folders, dashboards) = counts;
    let prompt = compose_prompt(SelectionCounts { folders, dashboards });
    assert!(prompt.text.ends_with('?'));
    assert_eq!(prompt.subtitle.is_some(), folders > 0 && dashboards > 0);
});
