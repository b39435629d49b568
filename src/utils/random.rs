//! Purpose: Generate random alphanumeric identifiers.
//! Exports: `ALPHANUMERIC`, `generate_random_string`.
//! Role: Short, URL-safe ids for UI state and fixtures; not a secrets generator.
//! Invariants: Output has exactly `length` chars, all drawn uniformly from `ALPHANUMERIC`.
use getrandom::fill as fill_random;

use crate::core::error::{Error, ErrorKind};

pub const ALPHANUMERIC: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

// Largest multiple of 62 that fits in a byte; higher values are rejected to keep the draw uniform.
const ACCEPT_BELOW: u8 = 248;
const BATCH: usize = 64;

pub fn generate_random_string(length: usize) -> Result<String, Error> {
    let mut out = String::with_capacity(length);
    let mut buf = [0u8; BATCH];
    while out.len() < length {
        fill_random(&mut buf).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message(format!("failed to generate random string: {err}"))
        })?;
        for byte in buf {
            if out.len() == length {
                break;
            }
            if byte < ACCEPT_BELOW {
                out.push(ALPHANUMERIC[usize::from(byte) % ALPHANUMERIC.len()] as char);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        for length in [0, 1, 10, 63, 64, 65, 500] {
            let value = generate_random_string(length).expect("random");
            assert_eq!(value.len(), length);
        }
    }

    #[test]
    fn output_is_alphanumeric() {
        let value = generate_random_string(256).expect("random");
        assert!(value.bytes().all(|byte| ALPHANUMERIC.contains(&byte)));
    }

    #[test]
    fn independent_calls_differ() {
        let first = generate_random_string(10).expect("random");
        let second = generate_random_string(10).expect("random");
        assert_ne!(first, second);
    }
}
