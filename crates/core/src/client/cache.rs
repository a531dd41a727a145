use std::sync::atomic::{AtomicI64, Ordering};

// Last token handed out in this process.
static LAST_TOKEN: AtomicI64 = AtomicI64::new(0);

/// Cache-defeat token for the next backend request.
///
/// Tokens are wall-clock milliseconds, bumped past the previous token when two requests land in
/// the same millisecond, so no two calls in one process ever share a token.
pub fn next_token() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let prev = LAST_TOKEN
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or_else(|last| last);
    now.max(prev + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn back_to_back_tokens_are_strictly_increasing() {
        let mut prev = next_token();
        for _ in 0..1_000 {
            let t = next_token();
            assert!(t > prev, "token {t} did not advance past {prev}");
            prev = t;
        }
    }

    #[test]
    fn tokens_are_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..500).map(|_| next_token()).collect::<Vec<_>>()))
            .collect();

        let mut seen = HashSet::new();
        for h in handles {
            for t in h.join().unwrap() {
                assert!(seen.insert(t), "duplicate token {t}");
            }
        }
        assert_eq!(seen.len(), 2_000);
    }

    #[test]
    fn tokens_track_wall_clock() {
        let before = chrono::Utc::now().timestamp_millis();
        assert!(next_token() >= before);
    }
}
