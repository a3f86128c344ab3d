use std::collections::HashSet;
use std::env;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@guest.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub public_dir: String,
    pub db_max_connections: u32,
    pub admin_emails: HashSet<String>,
    pub admin_seed_password: Option<String>, // Only used to bootstrap missing admin users
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://guesthouse.db".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS").unwrap_or_else(|_| "5".to_string()).parse().expect("DB_MAX_CONNECTIONS must be a number"),
            admin_emails: parse_admin_emails(&env::var("ADMIN_EMAILS").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string())),
            admin_seed_password: env::var("ADMIN_SEED_PASSWORD").ok().filter(|p| !p.is_empty()),
        }
    }
}

/// Splits a comma-separated list, dropping blanks. Entries are kept verbatim
/// apart from surrounding whitespace, so matching stays case-sensitive.
pub fn parse_admin_emails(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_emails_are_split_and_trimmed() {
        let emails = parse_admin_emails(" admin@guest.com, owner@guest.com ,,");
        assert_eq!(emails.len(), 2);
        assert!(emails.contains("admin@guest.com"));
        assert!(emails.contains("owner@guest.com"));
    }

    #[test]
    fn admin_match_is_case_sensitive() {
        let emails = parse_admin_emails("admin@guest.com");
        assert!(!emails.contains("Admin@guest.com"));
    }
}
