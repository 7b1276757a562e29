use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

pub fn verify_password(pw: &str, pw_hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(pw_hash) {
        Ok(hash) => hash,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(pw.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Argon2 PHC string with a fresh random salt.
pub fn get_password_hash(pw: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    match Argon2::default().hash_password(pw.as_bytes(), &salt) {
        Ok(hash) => hash.to_string(),
        Err(_) => String::new(),
    }
}
