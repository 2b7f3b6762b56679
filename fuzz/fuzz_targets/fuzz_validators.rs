#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use textcheck::{
    NumericOptions, ValidationError, check_national_id, is_numeric_literal, is_valid_national_id,
    parse_numeric_literal, parse_numeric_literal_with, patterns,
};

const HEADER: usize = 1; // option flags

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Bytes the scanner treats specially; biases generated inputs towards
/// interesting transitions.
static NUMERIC_TABLE: &[u8] = b"0123456789+-.eExXlLfFdDaA";

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x03);
        let limit = max_size - HEADER;
        HEADER + append_candidate(&mut data[HEADER..], limit)
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Writes a numeric-looking or ID-looking candidate, never exceeding `limit`.
fn append_candidate(buf: &mut [u8], limit: usize) -> usize {
    let candidate = loop {
        let bytes: Vec<u8> = with_rng(|rng| (0..64).map(|_| rng.random::<u8>()).collect());
        if let Ok(candidate) = Candidate::arbitrary(&mut Unstructured::new(&bytes)) {
            break candidate;
        }
    };
    let len = candidate.0.len().min(limit);
    buf[..len].copy_from_slice(&candidate.0[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct Candidate(Vec<u8>);

impl<'a> Arbitrary<'a> for Candidate {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let bytes = match u.choose_index(3)? {
            // Numeric-looking: a short run over the scanner's alphabet.
            0 => {
                let len = u.int_in_range(1..=12usize)?;
                (0..len)
                    .map(|_| u.choose(NUMERIC_TABLE).copied())
                    .collect::<arbitrary::Result<Vec<u8>>>()?
            }
            // ID-looking: 15 or 18 digits, sometimes ending in X/x.
            1 => {
                let len: usize = if u.arbitrary()? { 15 } else { 18 };
                let mut v = (0..len)
                    .map(|_| u.int_in_range(b'0'..=b'9'))
                    .collect::<arbitrary::Result<Vec<u8>>>()?;
                if len == 18 && u.arbitrary()? {
                    v[17] = *u.choose(b"xX")?;
                }
                v
            }
            _ => u.arbitrary::<String>()?.into_bytes(),
        };
        Ok(Candidate(bytes))
    }
}

fn validators(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let input = String::from_utf8_lossy(&data[HEADER..]).into_owned();

    let literal = parse_numeric_literal(&input);
    assert_eq!(is_numeric_literal(&input), literal.is_ok());
    if let Err(ValidationError::InvalidCharacter { ch, index }) = literal {
        assert_eq!(input[index..].chars().next(), Some(ch));
    }

    let options = NumericOptions {
        forbid_hex: flags & 1 != 0,
        forbid_type_suffix: flags & 2 != 0,
    };
    if parse_numeric_literal_with(&input, options).is_ok() {
        assert!(literal.is_ok(), "options accepted {input:?}");
    }

    let id = check_national_id(&input);
    assert_eq!(is_valid_national_id(&input), id.is_ok());

    let _ = patterns::is_real_name(&input);
    let _ = patterns::is_phone_number(&input);
    let _ = patterns::is_account(&input);
    let _ = patterns::is_password(&input);
    let _ = patterns::is_mixed_password(&input);
    let _ = patterns::is_email(&input);
    let _ = patterns::is_ipv4(&input);
    let _ = patterns::is_url(&input);
    let _ = patterns::is_vehicle_plate(&input);
    let _ = patterns::is_postcode(&input);
}

fuzz_target!(|data: &[u8]| validators(data));
