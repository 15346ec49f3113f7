use keysweep::search::{run, search, search_candidates, NoProgress, ProgressSink, SearchConfig};
use keysweep::source::{
    BruteForceSource, CandidateSource, DictionarySource, SizeEstimator, TotalCount,
};
use keysweep::{SearchError, SearchOutcome, Verdict};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Counts attempts per verdict kind.
#[derive(Default)]
struct CountingProgress {
    total: Option<TotalCount>,
    attempts: u64,
    errors: u64,
}

impl ProgressSink for CountingProgress {
    fn on_start(&mut self, total: TotalCount) {
        self.total = Some(total);
    }

    fn on_attempt(&mut self, verdict: &Verdict) {
        self.attempts += 1;
        if verdict.is_error() {
            self.errors += 1;
        }
    }
}

fn wordlist(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

fn brute(alphabet: &str, min: i64, max: i64) -> CandidateSource {
    BruteForceSource::new(alphabet, min, max).unwrap().into()
}

#[test]
fn test_brute_force_count_and_sequence() {
    let source = brute("ab", 1, 2);
    assert_eq!(SizeEstimator::count(&source).unwrap(), 6);

    let all: Vec<String> = source.collect();
    assert_eq!(all, vec!["a", "b", "aa", "ab", "ba", "bb"]);
}

#[test]
fn test_dictionary_yields_every_line_for_any_worker_count() {
    let lines: Vec<String> = (0..200).map(|i| format!("word{}", i)).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let file = wordlist(&refs);

    for workers in [1, 4, 50] {
        let source: CandidateSource = DictionarySource::open(file.path()).unwrap().into();
        assert_eq!(SizeEstimator::count(&source).unwrap(), 200);

        let seen = Mutex::new(Vec::new());
        let verifier = |c: &str| {
            seen.lock().unwrap().push(c.to_string());
            Verdict::Rejected
        };
        let report = search(source, &verifier, workers, &mut NoProgress).unwrap();
        assert_eq!(report.outcome, SearchOutcome::Exhausted);

        let mut seen = seen.into_inner().unwrap();
        if workers == 1 {
            assert_eq!(seen, lines, "single worker evaluates in file order");
        }
        seen.sort();
        let mut expected = lines.clone();
        expected.sort();
        assert_eq!(seen, expected, "workers = {}", workers);
    }
}

#[test]
fn test_single_accepted_candidate_found_with_bounded_stragglers() {
    // "ab" is the 6th of 84 candidates over "abcd", lengths 1..=3
    let target = "ab";
    let total = 4 + 16 + 64;
    let target_index = 6;

    for workers in [1, 4, 50] {
        for _ in 0..5 {
            let verifier = |c: &str| {
                if c == target {
                    Verdict::Accepted
                } else {
                    thread::sleep(Duration::from_millis(10));
                    Verdict::Rejected
                }
            };

            let report = search(brute("abcd", 1, 3), &verifier, workers, &mut NoProgress).unwrap();

            assert_eq!(report.outcome, SearchOutcome::Found(target.to_string()));
            let evaluated = report.statistics.candidates_evaluated;
            assert!(
                evaluated <= (target_index + workers - 1).min(total) as u64,
                "workers = {}, evaluated = {}",
                workers,
                evaluated
            );
        }
    }
}

#[test]
fn test_cancellation_stops_large_space_early() {
    let calls = AtomicUsize::new(0);
    let verifier = |c: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        if c == "ba" {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    };

    // Over a million candidates; the winner is the 21st
    let report = search(brute("abcdefghij", 1, 6), &verifier, 8, &mut NoProgress).unwrap();

    assert_eq!(report.outcome, SearchOutcome::Found("ba".to_string()));
    assert!(calls.load(Ordering::SeqCst) < 10_000);
    assert_eq!(
        calls.load(Ordering::SeqCst) as u64,
        report.statistics.candidates_evaluated
    );
}

#[test]
fn test_never_accepting_verifier_exhausts_once_each() {
    let calls = AtomicUsize::new(0);
    let verifier = |_: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        Verdict::Rejected
    };
    let mut progress = CountingProgress::default();

    let report = search(brute("xyz", 0, 4), &verifier, 6, &mut progress).unwrap();

    let total = 1 + 3 + 9 + 27 + 81;
    assert_eq!(report.outcome, SearchOutcome::Exhausted);
    assert_eq!(progress.total, Some(TotalCount::Exact(total)));
    assert_eq!(progress.attempts, total);
    assert_eq!(calls.load(Ordering::SeqCst) as u64, total);
}

#[test]
fn test_two_acceptable_candidates_exactly_one_wins() {
    let winners = ["ba", "cb"];
    for workers in [1, 2, 4, 16, 50] {
        for _ in 0..20 {
            let verifier = |c: &str| {
                if winners.contains(&c) {
                    Verdict::Accepted
                } else {
                    Verdict::Rejected
                }
            };

            let report = search(brute("abc", 2, 2), &verifier, workers, &mut NoProgress).unwrap();

            match report.outcome {
                SearchOutcome::Found(ref c) => assert!(winners.contains(&c.as_str())),
                SearchOutcome::Exhausted => panic!("expected a winner with {} workers", workers),
            }
            if workers == 1 {
                assert_eq!(report.outcome, SearchOutcome::Found("ba".to_string()));
            }
        }
    }
}

#[test]
fn test_verifier_errors_are_reported_not_fatal() {
    let verifier = |c: &str| {
        if c.starts_with('a') {
            Verdict::Error("unreadable".to_string())
        } else {
            Verdict::Rejected
        }
    };
    let mut progress = CountingProgress::default();

    let report = search(brute("ab", 1, 2), &verifier, 3, &mut progress).unwrap();

    assert_eq!(report.outcome, SearchOutcome::Exhausted);
    assert_eq!(progress.attempts, 6);
    assert_eq!(progress.errors, 3);
    assert_eq!(report.statistics.errors, 3);
}

#[test]
fn test_invalid_config_starts_no_worker() {
    let calls = AtomicUsize::new(0);
    let verifier = |_: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        Verdict::Accepted
    };

    let err = search(brute("ab", 1, 2), &verifier, 0, &mut NoProgress).unwrap_err();
    assert!(matches!(err, SearchError::InvalidConfig(_)));

    let err = search_candidates(
        vec!["x".to_string()].into_iter(),
        TotalCount::Unknown,
        &verifier,
        0,
        &mut NoProgress,
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::InvalidConfig(_)));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_invalid_range_generates_nothing() {
    let calls = AtomicUsize::new(0);
    let verifier = |_: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        Verdict::Rejected
    };
    let config = SearchConfig::default().with_brute_force("ab", 5, 3).with_workers(2);

    let err = run(&config, &verifier, &mut NoProgress).unwrap_err();
    assert!(matches!(err, SearchError::InvalidRange { min: 5, max: 3 }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_missing_wordlist_is_source_unavailable() {
    let verifier = |_: &str| Verdict::Rejected;
    let config = SearchConfig::default()
        .with_dictionary("/nonexistent/keysweep/rockyou.txt")
        .with_workers(2);

    let err = run(&config, &verifier, &mut NoProgress).unwrap_err();
    assert!(matches!(err, SearchError::SourceUnavailable { .. }));
}

#[test]
fn test_directory_wordlist_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let calls = AtomicUsize::new(0);
    let verifier = |_: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        Verdict::Accepted
    };
    let config = SearchConfig::default()
        .with_dictionary(dir.path())
        .with_workers(2);

    let err = run(&config, &verifier, &mut NoProgress).unwrap_err();

    assert!(matches!(err, SearchError::SourceUnavailable { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[cfg(target_os = "linux")]
#[test]
fn test_unreadable_wordlist_is_an_error_not_exhaustion() {
    let source: CandidateSource = DictionarySource::open("/proc/self/mem").unwrap().into();
    let verifier = |_: &str| Verdict::Accepted;

    let result = search(source, &verifier, 2, &mut NoProgress);

    assert!(matches!(result, Err(SearchError::SourceUnavailable { .. })));
}

#[test]
fn test_dictionary_count_is_idempotent() {
    let file = wordlist(&["one", "", "three", "four"]);
    let mut source = DictionarySource::open(file.path()).unwrap();

    assert_eq!(SizeEstimator::count_dictionary(&source).unwrap(), 4);
    assert_eq!(SizeEstimator::count_dictionary(&source).unwrap(), 4);
    assert_eq!(source.next().as_deref(), Some("one"));
    assert_eq!(source.next().as_deref(), Some(""));
}

#[test]
fn test_run_dictionary_finds_password() {
    let file = wordlist(&["123456", "password", "letmein", "qwerty"]);
    let config = SearchConfig::default().with_dictionary(file.path()).with_workers(3);
    let verifier = |c: &str| {
        if c == "letmein" {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    };
    let mut progress = CountingProgress::default();

    let report = run(&config, &verifier, &mut progress).unwrap();

    assert_eq!(report.outcome, SearchOutcome::Found("letmein".to_string()));
    assert_eq!(progress.total, Some(TotalCount::Exact(4)));
    assert!(progress.attempts >= 3);
}

#[test]
fn test_overflowing_total_still_searches() {
    let alphabet: String = ('!'..='~').collect();
    let source = brute(&alphabet, 1, 12);
    let verifier = |c: &str| {
        if c == "!#" {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    };
    let mut progress = CountingProgress::default();

    let report = search(source, &verifier, 2, &mut progress).unwrap();

    assert_eq!(progress.total, Some(TotalCount::Unknown));
    assert_eq!(report.total, TotalCount::Unknown);
    assert_eq!(report.outcome, SearchOutcome::Found("!#".to_string()));
}
