//! Nonce generation for Buda API authentication.
//!
//! Buda requires a strictly increasing nonce on each authenticated request
//! to prevent replay attacks.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
///
/// The nonce must be strictly increasing for each request issued by one
/// client instance.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be numerically greater than any previously returned
    /// value.
    fn next_nonce(&self) -> String;
}

struct NonceState {
    last_ms: u64,
    counter: u32,
}

/// A nonce provider producing `<epoch_millis><zero-padded counter>`.
///
/// The counter resets to 0 whenever the wall-clock millisecond advances and
/// increments for every nonce issued within the same millisecond, so nonces
/// remain distinct and strictly increasing even under bursts. The counter is
/// zero-padded to keep the nonce length stable while it stays below 1000;
/// beyond 1000 nonces in a single millisecond the padding is exhausted and
/// string-lexicographic order can diverge from numeric order (the server only
/// verifies numeric increase).
pub struct MillisNonce {
    state: Mutex<NonceState>,
}

impl MillisNonce {
    /// Create a new millisecond nonce provider.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(NonceState {
                last_ms: 0,
                counter: 0,
            }),
        }
    }

    /// Get current time in milliseconds since UNIX epoch.
    fn current_time_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    /// Issue the next nonce for the given clock reading.
    ///
    /// The whole read-compare-increment-store sequence runs under the state
    /// lock so concurrent callers still observe strictly increasing nonces.
    fn next_at(&self, now: u64) -> String {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        // Never step backwards if the system clock does.
        let now = now.max(state.last_ms);

        if now != state.last_ms {
            state.counter = 0;
        } else {
            state.counter += 1;
        }
        state.last_ms = now;

        let padding = match state.counter {
            0..10 => "000",
            10..100 => "00",
            100..1000 => "0",
            _ => "",
        };
        format!("{now}{padding}{counter}", counter = state.counter)
    }
}

impl Default for MillisNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for MillisNonce {
    fn next_nonce(&self) -> String {
        self.next_at(Self::current_time_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_first_nonce_has_full_padding() {
        let provider = MillisNonce::new();
        assert_eq!(provider.next_at(1_528_768_062_310), "15287680623100000");
    }

    #[test]
    fn test_nonce_strictly_increasing_within_millisecond() {
        let provider = MillisNonce::new();
        let now = 1_528_768_062_310;

        let mut previous: Option<String> = None;
        for _ in 0..1000 {
            let nonce = provider.next_at(now);
            if let Some(prev) = previous {
                assert!(nonce > prev, "lexicographic order broken: {prev} vs {nonce}");
                assert!(
                    nonce.parse::<u128>().unwrap() > prev.parse::<u128>().unwrap(),
                    "numeric order broken: {prev} vs {nonce}"
                );
            }
            previous = Some(nonce);
        }
    }

    #[test]
    fn test_counter_resets_across_millisecond_boundary() {
        let provider = MillisNonce::new();

        for _ in 0..42 {
            provider.next_at(1_700_000_000_000);
        }
        let before = provider.next_at(1_700_000_000_000);
        let after = provider.next_at(1_700_000_000_001);

        assert_eq!(before, "17000000000000042");
        assert_eq!(after, "17000000000010000");
        assert!(after.parse::<u128>().unwrap() > before.parse::<u128>().unwrap());
    }

    #[test]
    fn test_padding_width_follows_counter() {
        let provider = MillisNonce::new();
        let now = 1_700_000_000_000;

        let mut last = String::new();
        for _ in 0..=150 {
            last = provider.next_at(now);
        }
        // Counter 150 pads with a single zero.
        assert!(last.ends_with("0150"));
        assert_eq!(last, format!("{now}0150"));
    }

    #[test]
    fn test_clock_regression_does_not_decrease_nonce() {
        let provider = MillisNonce::new();

        let first = provider.next_at(1_700_000_000_005);
        let second = provider.next_at(1_700_000_000_001);

        assert!(second.parse::<u128>().unwrap() > first.parse::<u128>().unwrap());
    }

    #[test]
    fn test_nonce_unique_across_threads() {
        let provider = std::sync::Arc::new(MillisNonce::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                let mut nonces = Vec::new();
                for _ in 0..500 {
                    nonces.push(p.next_nonce());
                }
                nonces
            }));
        }

        let mut all_nonces = HashSet::new();
        for handle in handles {
            let nonces = handle.join().unwrap();
            for nonce in nonces {
                assert!(
                    all_nonces.insert(nonce),
                    "Nonce must be unique across threads"
                );
            }
        }
    }
}
