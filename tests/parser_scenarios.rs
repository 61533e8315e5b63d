use pretty_assertions::assert_eq;
use tempfile::TempDir;

use tether_sig::{load_signature_file, parse, Classification, Member, ParseError, Signature};

#[test]
fn single_simple_signature() {
    let signatures = parse(b"int:\x04\n").unwrap();

    assert_eq!(signatures.len(), 1);
    assert_eq!(signatures[0].classification(), Classification::Simple);
    assert_eq!(signatures[0].name(), "int");
    assert_eq!(signatures[0].immediate_length_bytes(), 4);
}

#[test]
fn consecutive_simple_signatures() {
    assert_eq!(
        parse(b"a:\x04b:\x08\n").unwrap(),
        vec![Signature::simple("a", 4), Signature::simple("b", 8)]
    );
}

#[test]
fn complex_members_without_type_names() {
    let signatures = parse(b"\nVector:#\x00\x00\x00\x00x|#\x00\x00\x00\x04y!").unwrap();

    assert_eq!(
        signatures,
        vec![Signature::complex(
            "Vector",
            vec![("", "x", 0u32).into(), ("", "y", 4u32).into()]
        )]
    );
}

#[test]
fn truncated_member_offset() {
    let err = parse(b"\nVector:int#\x00\x00!").unwrap_err();
    assert!(matches!(
        err,
        ParseError::MalformedInput {
            reason: "truncated offset",
            ..
        }
    ));
}

#[test]
fn newline_only_file_is_empty() {
    assert!(parse(b"\n").unwrap().is_empty());
}

#[test]
fn trailing_colon_is_malformed() {
    let err = parse(b"int:\x04long:").unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(err.offset(), Some(9));
}

#[test]
fn trailing_colon_in_complex_section_is_malformed() {
    let bytes = b"\nA:u8#\x00\x00\x00\x00x!B:";
    let err = parse(bytes).unwrap_err();

    assert!(matches!(
        err,
        ParseError::MalformedInput {
            reason: "signature truncated: body missing",
            ..
        }
    ));
    assert_eq!(err.offset(), Some(bytes.len() - 1));
}

#[test]
fn load_reads_whole_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("types.sig");
    std::fs::write(&path, b"int:\x04\nPair:int#\x00\x00\x00\x00a|int#\x00\x00\x00\x04b").unwrap();

    let signatures = load_signature_file(&path).unwrap();

    assert_eq!(
        signatures,
        vec![
            Signature::simple("int", 4),
            Signature::complex(
                "Pair",
                vec![Member::new("int", "a", 0), Member::new("int", "b", 4)]
            ),
        ]
    );
}

#[test]
fn load_reports_io_errors() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_signature_file(temp_dir.path().join("missing.sig")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}
