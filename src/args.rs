use clap::Parser;

/// Mentorship platform backend
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Data path for the file-backed store
    #[arg(long, default_value("mentorship-data"))]
    pub data_path: String,

    /// Database URL; empty means the file-backed store is used
    #[arg(long, default_value(""))]
    pub db_url: String,

    /// Database name
    #[arg(long, default_value("mentorship"), visible_alias("database"))]
    pub db_name: String,

    /// Bind address
    #[arg(long, default_value("127.0.0.1"))]
    pub host: String,

    /// Port number
    #[arg(long, default_value_t = 8090)]
    pub port: u16,

    /// Session cookie signing secret, at least 32 bytes; empty means a
    /// fresh key is generated at startup
    #[arg(long, default_value(""))]
    pub session_secret: String,

    /// SMTP relay for notification emails; empty disables them
    #[arg(long, default_value(""))]
    pub smtp_server: String,

    /// SMTP login
    #[arg(long, default_value(""))]
    pub smtp_login: String,

    /// SMTP password
    #[arg(long, default_value(""))]
    pub smtp_password: String,

    /// From address for notification emails
    #[arg(long, default_value(""))]
    pub smtp_from: String,

    /// Seed the initial admin account if no users exist yet
    #[arg(long)]
    pub first_run: bool,

    /// Email of the seeded admin account
    #[arg(long, default_value("admin@localhost"))]
    pub admin_email: String,

    /// Password of the seeded admin account
    #[arg(long, default_value("admin"))]
    pub admin_password: String,
}

impl Args {
    /// Arguments with all defaults, as if the binary was run bare.
    pub fn default_for_test() -> Self {
        Args::parse_from(["mentorship-core"])
    }
}
