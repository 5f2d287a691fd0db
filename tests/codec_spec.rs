use brarchive_codec::brarchive::format::{DESCRIPTOR_LEN, HEADER_LEN, NAME_LEN_MAX};
use brarchive_codec::{
    classify, decode, encode, BrArchiveError, ContentKind, Entry, FormatVersion,
};

/// (entry name, payload, expected classification)
type ClassifyCase = (&'static str, &'static [u8], ContentKind);

const CLASSIFY_CASES: &[ClassifyCase] = &[
    ("data.json", br#"{"x":1}"#, ContentKind::Json),
    ("nested.json", br#"{"a":{"b":[1,2,3]},"c":null}"#, ContentKind::Json),
    ("list", b"[1, 2, 3]", ContentKind::Json),
    ("version.json", b"5", ContentKind::Json),
    ("version.txt", b"5", ContentKind::Text),
    ("note.txt", b"hello", ContentKind::Text),
    ("empty.txt", b"", ContentKind::Text),
    ("tabs.txt", b"col1\tcol2\r\nval1\tval2\n", ContentKind::Text),
    ("broken.json", b"{not json at all", ContentKind::Text),
    ("nuls.dat", b"ab\x00cd", ContentKind::Binary),
    ("blob.bin", &[0x00, 0xFF, 0x13, 0x37], ContentKind::Binary),
];

fn build(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let owned: Vec<Entry> = entries
        .iter()
        .map(|(name, data)| Entry::new(*name, *data))
        .collect();
    encode(&owned).expect("encode fixture")
}

fn two_entry_fixture() -> Vec<u8> {
    build(&[("a.json", br#"{"x":1}"#), ("b.txt", b"hello")])
}

fn descriptor_at(index: usize) -> usize {
    HEADER_LEN + index * DESCRIPTOR_LEN
}

#[test]
fn two_entry_scenario_decodes_and_classifies() {
    let buffer = two_entry_fixture();
    let archive = decode(&buffer).expect("decode");

    assert_eq!(archive.len(), 2);
    assert_eq!(archive.version, FormatVersion::V1);
    assert_eq!(archive.total_size, buffer.len() as u64);
    assert!(archive.size_mismatch.is_none());

    let first = &archive.entries[0];
    let second = &archive.entries[1];
    assert_eq!(first.name, "a.json");
    assert_eq!(first.data, br#"{"x":1}"#);
    assert_eq!(first.kind(), ContentKind::Json);
    assert_eq!(second.name, "b.txt");
    assert_eq!(second.data, b"hello");
    assert_eq!(second.kind(), ContentKind::Text);
}

#[test]
fn entry_offsets_point_into_the_source_buffer() {
    let buffer = two_entry_fixture();
    let archive = decode(&buffer).expect("decode");

    for entry in &archive.entries {
        let offset = entry.offset.expect("decoded entries carry an offset") as usize;
        let end = offset + entry.data.len();
        assert_eq!(
            &buffer[offset..end],
            entry.data,
            "offset of '{}' does not address its payload",
            entry.name
        );
    }
}

#[test]
fn round_trip_preserves_names_bytes_and_order() {
    let fixtures: &[(&str, &[u8])] = &[
        ("config/settings.json", br#"{"volume":0.8}"#),
        ("설정.txt", "안녕하세요".as_bytes()),
        ("empty.bin", b""),
        ("texture.bin", &[0x00, 0xFF, 0x7F, 0x80, 0x01]),
    ];
    let buffer = build(fixtures);
    let archive = decode(&buffer).expect("decode");

    assert_eq!(archive.len(), fixtures.len());
    for (entry, (name, data)) in archive.entries.iter().zip(fixtures) {
        assert_eq!(entry.name, *name);
        assert_eq!(entry.data, *data);
    }
}

#[test]
fn empty_archive_is_valid() {
    let buffer = build(&[]);
    assert_eq!(buffer.len(), HEADER_LEN);

    let archive = decode(&buffer).expect("decode empty archive");
    assert!(archive.is_empty());
    assert_eq!(archive.version, FormatVersion::V1);
    assert!(archive.size_mismatch.is_none());
}

#[test]
fn short_buffers_never_partially_succeed() {
    let buffer = two_entry_fixture();
    for len in 0..HEADER_LEN {
        let result = decode(&buffer[..len]);
        assert!(
            matches!(result, Err(BrArchiveError::BufferTooShort { .. })),
            "expected BufferTooShort for {}-byte buffer",
            len
        );
    }
}

#[test]
fn flipped_magic_byte_is_a_hard_failure() {
    let mut buffer = two_entry_fixture();
    buffer[3] ^= 0xFF;
    let result = decode(&buffer);
    assert!(matches!(result, Err(BrArchiveError::MagicMismatch { .. })));
}

#[test]
fn flipped_content_byte_still_decodes() {
    // v1 carries no payload checksum, so content corruption is invisible to
    // the structural parse.
    let mut buffer = two_entry_fixture();
    let last = buffer.len() - 1;
    buffer[last] ^= 0xFF;

    let archive = decode(&buffer).expect("decode with corrupt payload");
    assert_eq!(archive.len(), 2);
    assert_ne!(archive.entries[1].data, b"hello");
}

#[test]
fn unknown_version_is_rejected() {
    let mut buffer = two_entry_fixture();
    buffer[12..16].copy_from_slice(&2u32.to_le_bytes());
    let result = decode(&buffer);
    assert!(matches!(
        result,
        Err(BrArchiveError::UnsupportedVersion(2))
    ));
}

#[test]
fn entry_overrunning_the_content_area_fails_the_decode() {
    let mut buffer = two_entry_fixture();
    // Inflate the second entry's declared length past the buffer end.
    let len_field = descriptor_at(1) + 1 + NAME_LEN_MAX + 4;
    buffer[len_field..len_field + 4].copy_from_slice(&u32::MAX.to_le_bytes());

    let result = decode(&buffer);
    match result {
        Err(BrArchiveError::TruncatedEntry { name, .. }) => assert_eq!(name, "b.txt"),
        other => panic!("expected TruncatedEntry, got {:?}", other.map(|a| a.len())),
    }
}

#[test]
fn chopped_buffer_fails_the_decode() {
    let buffer = two_entry_fixture();
    let result = decode(&buffer[..buffer.len() - 1]);
    assert!(matches!(result, Err(BrArchiveError::TruncatedEntry { .. })));
}

#[test]
fn hostile_entry_count_fails_before_the_descriptor_walk() {
    let mut buffer = two_entry_fixture();
    buffer[8..12].copy_from_slice(&u32::MAX.to_le_bytes());
    let result = decode(&buffer);
    assert!(matches!(
        result,
        Err(BrArchiveError::BufferTooShort { .. })
    ));
}

#[test]
fn duplicate_names_are_corruption() {
    let mut buffer = build(&[("aa", b"one"), ("ab", b"two")]);
    // Patch the second descriptor's name bytes from "ab" to "aa".
    let name_at = descriptor_at(1) + 1;
    buffer[name_at..name_at + 2].copy_from_slice(b"aa");

    let result = decode(&buffer);
    match result {
        Err(BrArchiveError::DuplicateName(name)) => assert_eq!(name, "aa"),
        other => panic!("expected DuplicateName, got {:?}", other.map(|a| a.len())),
    }
}

#[test]
fn empty_name_in_descriptor_is_corruption() {
    let mut buffer = two_entry_fixture();
    buffer[descriptor_at(0)] = 0;
    let result = decode(&buffer);
    assert!(matches!(
        result,
        Err(BrArchiveError::EmptyEntryName { index: 0 })
    ));
}

#[test]
fn invalid_utf8_name_is_corruption() {
    let mut buffer = two_entry_fixture();
    buffer[descriptor_at(0) + 1] = 0xFF;
    let result = decode(&buffer);
    assert!(matches!(result, Err(BrArchiveError::InvalidFormat(_))));
}

#[test]
fn trailing_padding_sets_the_size_mismatch_flag() {
    let mut buffer = two_entry_fixture();
    let expected = buffer.len() as u64;
    buffer.extend_from_slice(&[0u8; 7]);

    let archive = decode(&buffer).expect("padded archive still decodes");
    assert_eq!(archive.len(), 2);
    assert_eq!(archive.entries[1].data, b"hello");

    let mismatch = archive.size_mismatch.expect("padding should be flagged");
    assert_eq!(mismatch.expected, expected);
    assert_eq!(mismatch.actual, expected + 7);
}

#[test]
fn encode_rejects_invalid_names() {
    let data: &[u8] = b"x";

    let empty = encode(&[Entry::new("", data)]);
    assert!(matches!(
        empty,
        Err(BrArchiveError::EmptyEntryName { index: 0 })
    ));

    let long_name = "a".repeat(NAME_LEN_MAX + 1);
    let too_long = encode(&[Entry::new(long_name, data)]);
    assert!(matches!(
        too_long,
        Err(BrArchiveError::NameTooLong { found, limit })
            if found == NAME_LEN_MAX + 1 && limit == NAME_LEN_MAX
    ));

    let duplicate = encode(&[Entry::new("same", data), Entry::new("same", data)]);
    assert!(matches!(duplicate, Err(BrArchiveError::DuplicateName(_))));
}

#[test]
fn maximum_length_name_round_trips() {
    let name = "n".repeat(NAME_LEN_MAX);
    let buffer = build(&[(&name, b"payload")]);
    let archive = decode(&buffer).expect("decode");
    assert_eq!(archive.entries[0].name, name);
    assert_eq!(archive.entries[0].data, b"payload");
}

#[test]
fn classify_cases_match_expectations() {
    for (name, data, expected) in CLASSIFY_CASES {
        assert_eq!(
            classify(name, data),
            *expected,
            "unexpected kind for '{}'",
            name
        );
    }
}

#[test]
fn classify_handles_bom_marked_text() {
    // "hi" as UTF-16LE behind its byte-order mark: not valid UTF-8, but the
    // BOM probe recognizes it.
    let utf16: &[u8] = &[0xFF, 0xFE, b'h', 0x00, b'i', 0x00];
    assert_eq!(classify("greeting.txt", utf16), ContentKind::Text);
}

#[test]
fn classify_is_idempotent() {
    for (name, data, _) in CLASSIFY_CASES {
        assert_eq!(classify(name, data), classify(name, data));
    }

    let entry = Entry::new("a.json", br#"{"x":1}"#.as_slice());
    let first = entry.kind();
    assert_eq!(first, entry.kind());
    assert_eq!(first, ContentKind::Json);
}

#[test]
fn archive_lookup_by_name() {
    let buffer = two_entry_fixture();
    let archive = decode(&buffer).expect("decode");

    assert_eq!(archive.entry("b.txt").expect("b.txt").data, b"hello");
    assert!(archive.entry("missing.txt").is_none());
}
