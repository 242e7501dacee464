use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TrochographError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        TrochographError::numeric("x")
            .to_string()
            .contains("numeric degeneracy:")
    );
    assert!(
        TrochographError::length_mismatch("x")
            .to_string()
            .contains("length mismatch:")
    );
    assert!(
        TrochographError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TrochographError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
