// Path: crates/types/src/abi.rs

//! Defines the canonical head/tail binary codec for installation parameters.
//!
//! The buffer layout is a compatibility surface, not plumbing: downstream
//! tooling hashes installation buffers and compares the digests for
//! equality/versioning, so any two implementations of this module must agree
//! byte-for-byte. Centralizing the codec here in the base `types` crate keeps
//! every component on the exact same serialization.
//!
//! ## Layout
//!
//! Fixed-width fields are packed into a leading header in declaration order;
//! every scalar occupies one 32-byte word, zero-padded (integers big-endian,
//! addresses right-aligned in the low 20 bytes). Variable-length fields are
//! stored out-of-line and referenced from the header by byte offset relative
//! to the start of their containing structure; nested structures repeat the
//! scheme recursively. Sequences and strings are length-prefixed; string
//! bytes are zero-padded up to a whole-word boundary.
//!
//! For `(VotingSettings, TokenSettings, MintSettings)` this yields a 5-word
//! top-level header: the three voting scalars inline (the all-static tuple is
//! flattened), then one offset word each for the token and mint tails.
//!
//! The decoder accepts any *consistent* offset arrangement but rejects
//! truncated buffers, out-of-range or misaligned offsets, scalar words wider
//! than their logical type, and dirty address padding — always with
//! [`SetupError::MalformedParameters`], never with partially populated
//! output. The encoder always emits the canonical packing shown above.

use alloy_primitives::{Address, U256};

use crate::error::SetupError;
use crate::settings::{InstallationParameters, MintSettings, TokenSettings, VotingSettings};

/// Size of one codec word in bytes.
pub const WORD: usize = 32;

/// Size of the fixed top-level header in bytes.
const HEAD: usize = 5 * WORD;

fn malformed(msg: String) -> SetupError {
    SetupError::MalformedParameters(msg)
}

// --- encoding ---

fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD) * WORD
}

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&[0u8; 28]);
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_u64(out: &mut Vec<u8>, v: u64) {
    out.extend_from_slice(&[0u8; 24]);
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_u256(out: &mut Vec<u8>, v: U256) {
    out.extend_from_slice(&v.to_be_bytes::<WORD>());
}

fn push_usize(out: &mut Vec<u8>, v: usize) {
    push_u64(out, v as u64);
}

fn push_address(out: &mut Vec<u8>, a: Address) {
    out.extend_from_slice(&[0u8; 12]);
    out.extend_from_slice(a.as_slice());
}

fn push_padded_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    push_usize(out, bytes.len());
    out.extend_from_slice(bytes);
    out.resize(out.len() + (padded_len(bytes.len()) - bytes.len()), 0);
}

fn encode_token_settings(t: &TokenSettings) -> Vec<u8> {
    let name = t.name.as_bytes();
    let symbol = t.symbol.as_bytes();
    // Three header words (addr, name offset, symbol offset), then the two
    // length-prefixed strings. Offsets are relative to the tuple start.
    let name_at = 3 * WORD;
    let symbol_at = name_at + WORD + padded_len(name.len());
    let mut out = Vec::with_capacity(symbol_at + WORD + padded_len(symbol.len()));
    push_address(&mut out, t.addr);
    push_usize(&mut out, name_at);
    push_usize(&mut out, symbol_at);
    push_padded_bytes(&mut out, name);
    push_padded_bytes(&mut out, symbol);
    out
}

fn encode_mint_settings(m: &MintSettings) -> Vec<u8> {
    let receivers_at = 2 * WORD;
    let amounts_at = receivers_at + WORD + m.len() * WORD;
    let mut out = Vec::with_capacity(amounts_at + WORD + m.len() * WORD);
    push_usize(&mut out, receivers_at);
    push_usize(&mut out, amounts_at);
    push_usize(&mut out, m.len());
    for receiver in m.receivers() {
        push_address(&mut out, *receiver);
    }
    push_usize(&mut out, m.len());
    for amount in m.amounts() {
        push_u256(&mut out, *amount);
    }
    out
}

/// Encodes installation parameters into the canonical buffer form.
pub fn encode_installation_parameters(params: &InstallationParameters) -> Vec<u8> {
    let token_tail = encode_token_settings(&params.token);
    let mint_tail = encode_mint_settings(&params.mint);
    let mut out = Vec::with_capacity(HEAD + token_tail.len() + mint_tail.len());
    push_u32(&mut out, params.voting.min_veto_ratio);
    push_u64(&mut out, params.voting.min_duration);
    push_u256(&mut out, params.voting.min_proposer_voting_power);
    push_usize(&mut out, HEAD);
    push_usize(&mut out, HEAD + token_tail.len());
    out.extend_from_slice(&token_tail);
    out.extend_from_slice(&mint_tail);
    out
}

// --- decoding ---

fn word(buf: &[u8], at: usize) -> Result<[u8; WORD], SetupError> {
    let end = at
        .checked_add(WORD)
        .ok_or_else(|| malformed(format!("offset overflow at byte {at}")))?;
    let slice = buf
        .get(at..end)
        .ok_or_else(|| malformed(format!("word read past end of buffer at byte {at}")))?;
    slice
        .try_into()
        .map_err(|_| malformed(format!("word read past end of buffer at byte {at}")))
}

fn read_u32(buf: &[u8], at: usize) -> Result<u32, SetupError> {
    let w = word(buf, at)?;
    let (pad, tail) = w.split_at(WORD - 4);
    if pad.iter().any(|&b| b != 0) {
        return Err(malformed(format!("u32 word at byte {at} overflows 32 bits")));
    }
    let arr: [u8; 4] = tail
        .try_into()
        .map_err(|_| malformed(format!("u32 word at byte {at} is truncated")))?;
    Ok(u32::from_be_bytes(arr))
}

fn read_u64(buf: &[u8], at: usize) -> Result<u64, SetupError> {
    let w = word(buf, at)?;
    let (pad, tail) = w.split_at(WORD - 8);
    if pad.iter().any(|&b| b != 0) {
        return Err(malformed(format!("u64 word at byte {at} overflows 64 bits")));
    }
    let arr: [u8; 8] = tail
        .try_into()
        .map_err(|_| malformed(format!("u64 word at byte {at} is truncated")))?;
    Ok(u64::from_be_bytes(arr))
}

fn read_u256(buf: &[u8], at: usize) -> Result<U256, SetupError> {
    Ok(U256::from_be_bytes(word(buf, at)?))
}

fn read_address(buf: &[u8], at: usize) -> Result<Address, SetupError> {
    let w = word(buf, at)?;
    let (pad, tail) = w.split_at(WORD - 20);
    if pad.iter().any(|&b| b != 0) {
        return Err(malformed(format!(
            "address word at byte {at} has non-zero padding"
        )));
    }
    Ok(Address::from_slice(tail))
}

/// Reads an offset word at `at` and resolves it against `base`, the start of
/// the containing structure.
fn read_offset(buf: &[u8], base: usize, at: usize) -> Result<usize, SetupError> {
    let rel = read_u64(buf, at)?;
    let rel = usize::try_from(rel)
        .map_err(|_| malformed(format!("offset at byte {at} does not fit in memory")))?;
    if rel % WORD != 0 {
        return Err(malformed(format!(
            "offset {rel} at byte {at} is not word-aligned"
        )));
    }
    let abs = base
        .checked_add(rel)
        .ok_or_else(|| malformed(format!("offset at byte {at} overflows")))?;
    if abs >= buf.len() {
        return Err(malformed(format!(
            "offset {rel} at byte {at} points past the end of the buffer"
        )));
    }
    Ok(abs)
}

/// Reads a length prefix at `at`, bounds-checked so a corrupt word cannot
/// trigger a huge allocation.
fn read_length(buf: &[u8], at: usize) -> Result<usize, SetupError> {
    let len = read_u64(buf, at)?;
    let len = usize::try_from(len)
        .map_err(|_| malformed(format!("length at byte {at} does not fit in memory")))?;
    if len > buf.len() {
        return Err(malformed(format!(
            "length {len} at byte {at} exceeds the buffer size"
        )));
    }
    Ok(len)
}

fn read_string(buf: &[u8], at: usize) -> Result<String, SetupError> {
    let len = read_length(buf, at)?;
    let start = at
        .checked_add(WORD)
        .ok_or_else(|| malformed(format!("string at byte {at} overflows")))?;
    let end = start
        .checked_add(len)
        .ok_or_else(|| malformed(format!("string at byte {at} overflows")))?;
    let bytes = buf
        .get(start..end)
        .ok_or_else(|| malformed(format!("string at byte {at} is truncated")))?;
    String::from_utf8(bytes.to_vec())
        .map_err(|_| malformed(format!("string at byte {at} is not valid UTF-8")))
}

fn read_address_array(buf: &[u8], at: usize) -> Result<Vec<Address>, SetupError> {
    let len = read_length(buf, at)?;
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let item = at
            .checked_add(WORD)
            .and_then(|s| i.checked_mul(WORD).and_then(|o| s.checked_add(o)))
            .ok_or_else(|| malformed(format!("array at byte {at} overflows")))?;
        out.push(read_address(buf, item)?);
    }
    Ok(out)
}

fn read_u256_array(buf: &[u8], at: usize) -> Result<Vec<U256>, SetupError> {
    let len = read_length(buf, at)?;
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let item = at
            .checked_add(WORD)
            .and_then(|s| i.checked_mul(WORD).and_then(|o| s.checked_add(o)))
            .ok_or_else(|| malformed(format!("array at byte {at} overflows")))?;
        out.push(read_u256(buf, item)?);
    }
    Ok(out)
}

fn decode_token_settings(buf: &[u8], base: usize) -> Result<TokenSettings, SetupError> {
    let addr = read_address(buf, base)?;
    let name_at = read_offset(buf, base, base + WORD)?;
    let symbol_at = read_offset(buf, base, base + 2 * WORD)?;
    Ok(TokenSettings {
        addr,
        name: read_string(buf, name_at)?,
        symbol: read_string(buf, symbol_at)?,
    })
}

fn decode_mint_settings(buf: &[u8], base: usize) -> Result<MintSettings, SetupError> {
    let receivers_at = read_offset(buf, base, base)?;
    let amounts_at = read_offset(buf, base, base + WORD)?;
    let receivers = read_address_array(buf, receivers_at)?;
    let amounts = read_u256_array(buf, amounts_at)?;
    MintSettings::new(receivers, amounts)
}

/// Decodes an installation parameter buffer.
///
/// Fails fast with [`SetupError::MalformedParameters`] on any inconsistency;
/// output is never partially populated.
pub fn decode_installation_parameters(data: &[u8]) -> Result<InstallationParameters, SetupError> {
    if data.len() < HEAD {
        return Err(malformed(format!(
            "buffer too short: {} bytes, header needs {HEAD}",
            data.len()
        )));
    }
    let voting = VotingSettings {
        min_veto_ratio: read_u32(data, 0)?,
        min_duration: read_u64(data, WORD)?,
        min_proposer_voting_power: read_u256(data, 2 * WORD)?,
    };
    // Top-level offsets are relative to the start of the buffer.
    let token_base = read_offset(data, 0, 3 * WORD)?;
    let mint_base = read_offset(data, 0, 4 * WORD)?;
    let token = decode_token_settings(data, token_base)?;
    let mint = decode_mint_settings(data, mint_base)?;
    Ok(InstallationParameters {
        voting,
        token,
        mint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // The fixture buffer, word by word:
    //   0  min_veto_ratio          = 100000
    //   1  min_duration            = 432000
    //   2  min_proposer_voting_power = 0
    //   3  offset of token settings  = 0xa0
    //   4  offset of mint settings   = 0x180
    //   5  token address
    //   6  name offset (tuple-relative)   = 0x60
    //   7  symbol offset (tuple-relative) = 0xa0
    //   8  name length = 13
    //   9  "Wrapped Token" padded
    //  10  symbol length = 3
    //  11  "wTK" padded
    //  12  receivers offset (tuple-relative) = 0x40
    //  13  amounts offset (tuple-relative)   = 0x60
    //  14  receivers length = 0
    //  15  amounts length = 0
    const GOLDEN_HEX: &str = concat!(
        "00000000000000000000000000000000000000000000000000000000000186a0",
        "0000000000000000000000000000000000000000000000000000000000069780",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000000000000000000000000000000000a0",
        "0000000000000000000000000000000000000000000000000000000000000180",
        "00000000000000000000000002e2199f8a2ef32dc1ebc2ddb465f3255d32570b",
        "0000000000000000000000000000000000000000000000000000000000000060",
        "00000000000000000000000000000000000000000000000000000000000000a0",
        "000000000000000000000000000000000000000000000000000000000000000d",
        "5772617070656420546f6b656e00000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000003",
        "77544b0000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000040",
        "0000000000000000000000000000000000000000000000000000000000000060",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000000",
    );

    fn golden_params() -> InstallationParameters {
        InstallationParameters {
            voting: VotingSettings {
                min_veto_ratio: 100_000,
                min_duration: 432_000,
                min_proposer_voting_power: U256::ZERO,
            },
            token: TokenSettings {
                addr: "0x02e2199f8a2ef32dc1ebc2ddb465f3255d32570b"
                    .parse()
                    .unwrap(),
                name: "Wrapped Token".to_string(),
                symbol: "wTK".to_string(),
            },
            mint: MintSettings::none(),
        }
    }

    fn golden_buffer() -> Vec<u8> {
        hex::decode(GOLDEN_HEX).unwrap()
    }

    #[test]
    fn golden_fixture_encodes_bit_exactly() {
        let encoded = encode_installation_parameters(&golden_params());
        assert_eq!(encoded.len(), 16 * WORD);
        assert_eq!(hex::encode(&encoded), GOLDEN_HEX);
    }

    #[test]
    fn golden_fixture_decodes() {
        assert_eq!(
            decode_installation_parameters(&golden_buffer()).unwrap(),
            golden_params()
        );
    }

    #[test]
    fn field_changes_perturb_only_their_region() {
        let base = encode_installation_parameters(&golden_params());

        let mut params = golden_params();
        params.voting.min_veto_ratio = 200_000;
        let changed = encode_installation_parameters(&params);
        assert_eq!(base.len(), changed.len());
        for (i, (a, b)) in base.chunks(WORD).zip(changed.chunks(WORD)).enumerate() {
            if i == 0 {
                assert_ne!(a, b);
            } else {
                assert_eq!(a, b, "word {i} must be untouched");
            }
        }

        let mut params = golden_params();
        params.token.symbol = "xTK".to_string();
        let changed = encode_installation_parameters(&params);
        for (i, (a, b)) in base.chunks(WORD).zip(changed.chunks(WORD)).enumerate() {
            if i == 11 {
                assert_ne!(a, b);
            } else {
                assert_eq!(a, b, "word {i} must be untouched");
            }
        }
    }

    #[test]
    fn roundtrips_a_fully_populated_payload() {
        let params = InstallationParameters {
            voting: VotingSettings {
                min_veto_ratio: 1,
                min_duration: u64::MAX,
                min_proposer_voting_power: U256::MAX,
            },
            token: TokenSettings::fresh("Gövernance Tokén", "GT"),
            mint: MintSettings::new(
                vec![Address::repeat_byte(0x11), Address::repeat_byte(0x22)],
                vec![U256::from(7u64), U256::MAX],
            )
            .unwrap(),
        };
        let encoded = encode_installation_parameters(&params);
        assert_eq!(
            decode_installation_parameters(&encoded).unwrap(),
            params
        );
    }

    #[test]
    fn rejects_truncated_buffer() {
        let mut buf = golden_buffer();
        buf.truncate(buf.len() - WORD);
        let err = decode_installation_parameters(&buf).unwrap_err();
        assert!(matches!(err, SetupError::MalformedParameters(_)), "{err}");

        let err = decode_installation_parameters(&[]).unwrap_err();
        assert!(err.to_string().contains("too short"), "{err}");
    }

    #[test]
    fn rejects_out_of_range_offset() {
        let mut buf = golden_buffer();
        // Point the token settings tail past the end of the buffer, keeping
        // the offset word-aligned so the range check is what trips.
        buf[3 * WORD + 31] = 0x00;
        buf[3 * WORD + 30] = 0x20;
        let err = decode_installation_parameters(&buf).unwrap_err();
        assert!(err.to_string().contains("past the end"), "{err}");
    }

    #[test]
    fn rejects_misaligned_offset() {
        let mut buf = golden_buffer();
        buf[3 * WORD + 31] = 0xa1;
        let err = decode_installation_parameters(&buf).unwrap_err();
        assert!(err.to_string().contains("not word-aligned"), "{err}");
    }

    #[test]
    fn rejects_dirty_address_padding() {
        let mut buf = golden_buffer();
        buf[5 * WORD + 3] = 0x01;
        let err = decode_installation_parameters(&buf).unwrap_err();
        assert!(err.to_string().contains("non-zero padding"), "{err}");
    }

    #[test]
    fn rejects_scalar_overflow() {
        let mut buf = golden_buffer();
        // min_veto_ratio is logically 32 bits; taint a high byte.
        buf[7] = 0x01;
        let err = decode_installation_parameters(&buf).unwrap_err();
        assert!(err.to_string().contains("overflows 32 bits"), "{err}");
    }

    #[test]
    fn rejects_mismatched_mint_sequences() {
        let mut buf = golden_buffer();
        // Claim one receiver while the amounts sequence stays empty. The
        // spoofed element overlaps the (zero) amounts length word, so every
        // read stays in bounds and the mismatch itself must be what trips.
        buf[14 * WORD + 31] = 0x01;
        let err = decode_installation_parameters(&buf).unwrap_err();
        assert!(err.to_string().contains("length mismatch"), "{err}");
    }

    #[test]
    fn rejects_invalid_utf8_strings() {
        let mut buf = golden_buffer();
        buf[9 * WORD] = 0xFF;
        let err = decode_installation_parameters(&buf).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"), "{err}");
    }

    fn arb_address() -> impl Strategy<Value = Address> {
        any::<[u8; 20]>().prop_map(Address::from)
    }

    fn arb_u256() -> impl Strategy<Value = U256> {
        any::<[u8; 32]>().prop_map(U256::from_be_bytes)
    }

    fn arb_params() -> impl Strategy<Value = InstallationParameters> {
        (
            (any::<u32>(), any::<u64>(), arb_u256()),
            (arb_address(), ".{0,40}", "[A-Za-z]{0,8}"),
            prop::collection::vec((arb_address(), arb_u256()), 0..8),
        )
            .prop_map(|(voting, token, entries)| {
                let (receivers, amounts) = entries.into_iter().unzip();
                InstallationParameters {
                    voting: VotingSettings {
                        min_veto_ratio: voting.0,
                        min_duration: voting.1,
                        min_proposer_voting_power: voting.2,
                    },
                    token: TokenSettings {
                        addr: token.0,
                        name: token.1,
                        symbol: token.2,
                    },
                    mint: MintSettings::new(receivers, amounts).unwrap(),
                }
            })
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(params in arb_params()) {
            let encoded = encode_installation_parameters(&params);
            prop_assert_eq!(decode_installation_parameters(&encoded).unwrap(), params);
        }
    }
}
