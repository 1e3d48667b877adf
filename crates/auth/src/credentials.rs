//! Login credential check for the token endpoint.

/// Verify login credentials.
///
/// Single fixed admin account; a user store can replace this without touching
/// the token layer.
pub fn verify_credentials(username: &str, password: &str) -> bool {
    username == "admin" && password == "password123"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_admin_account() {
        assert!(verify_credentials("admin", "password123"));
    }

    #[test]
    fn rejects_anything_else() {
        assert!(!verify_credentials("admin", "wrong"));
        assert!(!verify_credentials("ADMIN", "password123"));
        assert!(!verify_credentials("", ""));
    }
}
