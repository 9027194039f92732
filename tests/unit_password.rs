use data_encoding::BASE64;
use taskgrid::utils::errors::ErrorKind;
use taskgrid::utils::password::PasswordHasher;

#[test]
fn test_hash_password_success() {
    let hasher = PasswordHasher::new();
    let password = "testpassword123";

    let hash = hasher.hash(password).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_hash_is_salt_and_key_concatenated() {
    let hasher = PasswordHasher::new();

    let hash = hasher.hash("testpassword123").unwrap();
    let decoded = BASE64.decode(hash.as_bytes()).unwrap();

    // 16 byte salt followed by a 32 byte derived key
    assert_eq!(decoded.len(), 48);
}

#[test]
fn test_hash_empty_password() {
    let hasher = PasswordHasher::new();

    let hash = hasher.hash("").unwrap();

    assert!(hasher.verify("", &hash).unwrap());
}

#[test]
fn test_verify_password_correct() {
    let hasher = PasswordHasher::new();
    let password = "correctpassword";
    let hash = hasher.hash(password).unwrap();

    assert!(hasher.verify(password, &hash).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hasher = PasswordHasher::new();
    let hash = hasher.hash("correctpassword").unwrap();

    assert!(!hasher.verify("wrongpassword", &hash).unwrap());
}

#[test]
fn test_verify_rejects_invalid_base64() {
    let hasher = PasswordHasher::new();

    let err = hasher.verify("testpassword", "not base64!!!").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Server);
}

#[test]
fn test_verify_rejects_truncated_hash() {
    let hasher = PasswordHasher::new();
    let truncated = BASE64.encode(&[0u8; 20]);

    let err = hasher.verify("testpassword", &truncated).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Server);
}

#[test]
fn test_hash_generates_unique_hashes() {
    let hasher = PasswordHasher::new();
    let password = "samepassword";

    let hash1 = hasher.hash(password).unwrap();
    let hash2 = hasher.hash(password).unwrap();

    assert_ne!(hash1, hash2);
    assert!(hasher.verify(password, &hash1).unwrap());
    assert!(hasher.verify(password, &hash2).unwrap());
}

#[test]
fn test_hash_special_characters() {
    let hasher = PasswordHasher::new();
    let password = "p@ssw0rd!#$%^&*()";
    let hash = hasher.hash(password).unwrap();

    assert!(hasher.verify(password, &hash).unwrap());
}

#[test]
fn test_hash_unicode_characters() {
    let hasher = PasswordHasher::new();
    let password = "пароль密碼🔒";
    let hash = hasher.hash(password).unwrap();

    assert!(hasher.verify(password, &hash).unwrap());
}

#[test]
fn test_hash_long_password() {
    let hasher = PasswordHasher::new();
    let password = "a".repeat(100);
    let hash = hasher.hash(&password).unwrap();

    assert!(hasher.verify(&password, &hash).unwrap());
}

#[test]
fn test_verify_case_sensitive() {
    let hasher = PasswordHasher::new();
    let hash = hasher.hash("Password123").unwrap();

    assert!(!hasher.verify("password123", &hash).unwrap());
    assert!(!hasher.verify("PASSWORD123", &hash).unwrap());
}
