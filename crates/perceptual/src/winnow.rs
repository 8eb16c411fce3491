//! Window-minimum selection.

use std::collections::VecDeque;

use crate::config::{PerceptualError, WinnowConfig};
use crate::fingerprint::{Fingerprint, FingerprintMeta, WinnowedHash};
use crate::hash::{hash_sequence, ElementHash};
use crate::WINNOW_VERSION;

/// Winnowing via monotonic deque, O(n).
///
/// Every window of `window_size` consecutive hashes selects its minimum,
/// earliest position on ties. A hash is emitted only when the selected
/// position changes from one window to the next, so a minimum that stays in
/// view across several windows is reported once.
///
/// The output is identical to the classic scan that keeps one minimum,
/// rescans the window right-to-left when that minimum slides out, and
/// otherwise compares only the newly entered hash.
pub fn winnow(hashes: &[i32], window_size: usize) -> Result<Vec<WinnowedHash>, PerceptualError> {
    if window_size == 0 {
        return Err(PerceptualError::InvalidWindow { window: 0 });
    }
    let n = hashes.len();
    if n < window_size {
        return Err(PerceptualError::InputTooShort {
            len: n,
            window: window_size,
        });
    }

    let mut out = Vec::with_capacity(n - window_size + 1);
    // Indices of the current window with strictly increasing hashes; the
    // front is the selected minimum. Equal values keep the older index.
    let mut dq: VecDeque<usize> = VecDeque::with_capacity(window_size);
    let mut last_picked: Option<usize> = None;

    for (i, &value) in hashes.iter().enumerate() {
        while let Some(&j) = dq.back() {
            if hashes[j] > value {
                dq.pop_back();
            } else {
                break;
            }
        }
        dq.push_back(i);

        if i + 1 < window_size {
            continue;
        }
        let left = i + 1 - window_size;
        while let Some(&j) = dq.front() {
            if j < left {
                dq.pop_front();
            } else {
                break;
            }
        }

        if let Some(&idx) = dq.front() {
            if last_picked != Some(idx) {
                out.push(WinnowedHash {
                    hash: hashes[idx],
                    position: idx,
                });
                last_picked = Some(idx);
            }
        }
    }

    Ok(out)
}

/// Hash `seq` with the configured scheme and winnow it.
pub fn fingerprint<T: ElementHash>(
    seq: &[T],
    cfg: &WinnowConfig,
) -> Result<Fingerprint, PerceptualError> {
    cfg.validate()?;
    let hashes = hash_sequence(seq, cfg.hash);
    let selected = winnow(&hashes, cfg.window_size)?;
    Ok(Fingerprint {
        hashes: selected,
        meta: FingerprintMeta {
            algorithm_version: WINNOW_VERSION,
            window_size: cfg.window_size,
            hash: cfg.hash,
            sequence_len: seq.len(),
        },
    })
}
