use longan_crc::{
    bytes_to_hex, crc32, crc32_raw, hex_to_bytes, u32_to_hex, Crc32Stream, Error,
};
use quickcheck_macros::quickcheck;
use rstest::rstest;

#[rstest]
#[case("deno", "fd6f8c63")]
#[case("33", "0a6216d9")]
#[case("", "00000000")]
#[case("123456789", "cbf43926")]
fn one_shot_known_vectors(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(crc32(input), expected);
    assert_eq!(crc32(input.as_bytes()), expected);
    assert_eq!(u32_to_hex(crc32_raw(input)), expected);
}

#[test]
fn stream_prefix_property() {
    let mut stream = Crc32Stream::new();
    for (chunk, prefix) in [("d", "d"), ("e", "de"), ("n", "den"), ("o", "deno")] {
        assert_eq!(stream.append(chunk), crc32(prefix));
    }
    assert_eq!(stream.checksum(), "fd6f8c63");
}

#[test]
fn stream_reset_replays_identically() {
    let chunks: [&[u8]; 3] = [b"longan", b"", b"crc"];

    let mut fresh = Crc32Stream::new();
    let expected: Vec<String> = chunks
        .iter()
        .map(|chunk| fresh.append(chunk).to_string())
        .collect();

    let mut reused = Crc32Stream::new();
    reused.append(b"unrelated data".as_slice());
    reused.reset();
    assert_eq!(reused.checksum(), "");

    let replayed: Vec<String> = chunks
        .iter()
        .map(|chunk| reused.append(chunk).to_string())
        .collect();
    assert_eq!(replayed, expected);
}

#[test]
fn hex_input_validation() {
    assert_eq!(hex_to_bytes(""), Err(Error::InvalidHexLength { len: 0 }));
    assert_eq!(hex_to_bytes("abc"), Err(Error::InvalidHexLength { len: 3 }));
    assert!(matches!(
        hex_to_bytes("zz"),
        Err(Error::InvalidHexDigit { ch: 'z', index: 0 })
    ));
    assert_eq!(hex_to_bytes("fd6f8c63").unwrap(), vec![0xfd, 0x6f, 0x8c, 0x63]);
}

#[quickcheck]
fn hex_round_trip(bytes: Vec<u8>) -> bool {
    let hex = bytes_to_hex(&bytes);
    if bytes.is_empty() {
        // Encoding an empty sequence is fine; decoding requires at least one pair.
        return hex.is_empty() && hex_to_bytes(&hex).is_err();
    }
    hex_to_bytes(&hex) == Ok(bytes)
}

#[quickcheck]
fn chunked_append_matches_one_shot(chunks: Vec<Vec<u8>>) -> bool {
    let mut stream = Crc32Stream::new();
    let mut seen = Vec::new();
    for chunk in &chunks {
        seen.extend_from_slice(chunk);
        if stream.append(chunk) != crc32(&seen) {
            return false;
        }
    }
    stream.value() == crc32_raw(&seen)
}

#[quickcheck]
fn agrees_with_crc32fast(bytes: Vec<u8>) -> bool {
    crc32_raw(&bytes) == crc32fast::hash(&bytes)
}
