use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OpStateError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        OpStateError::degenerate("x")
            .to_string()
            .contains("degenerate geometry:")
    );
    assert!(OpStateError::arena("x").to_string().contains("arena error:"));
    assert!(
        OpStateError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OpStateError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
