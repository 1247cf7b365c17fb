//! Random message selection
//!
//! A single generator is shared by every connection task. The lock is held
//! only for the index draw.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{MessageCatalog, TimeOfDay};

pub struct MessagePicker {
    rng: Mutex<StdRng>,
}

impl MessagePicker {
    /// Create a picker seeded once from the operating system
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Pick a uniformly random message for the bucket
    pub fn pick(&self, part: TimeOfDay) -> &'static str {
        let messages = MessageCatalog::messages(part);
        let index = {
            // A panic while holding the lock cannot leave the generator half-updated
            let mut rng = self
                .rng
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            rng.random_range(0..messages.len())
        };
        messages[index]
    }
}

impl Default for MessagePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_pick_stays_in_bucket() {
        let picker = MessagePicker::with_seed(7);
        for part in TimeOfDay::ALL {
            for _ in 0..200 {
                let message = picker.pick(part);
                assert!(MessageCatalog::contains(part, message), "{part}: {message:?}");
            }
        }
    }

    #[test]
    fn test_pick_covers_whole_list() {
        let picker = MessagePicker::with_seed(42);
        let seen: HashSet<_> = (0..2_000).map(|_| picker.pick(TimeOfDay::Evening)).collect();
        assert_eq!(seen.len(), MessageCatalog::messages(TimeOfDay::Evening).len());
    }

    #[test]
    fn test_concurrent_picks() {
        let picker = Arc::new(MessagePicker::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let picker = Arc::clone(&picker);
                std::thread::spawn(move || {
                    for _ in 0..500 {
                        let message = picker.pick(TimeOfDay::Night);
                        assert!(MessageCatalog::contains(TimeOfDay::Night, message));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
