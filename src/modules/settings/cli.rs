// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use clap::{builder::ValueParser, Parser};
use std::{path::PathBuf, sync::LazyLock};

#[cfg(not(test))]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::parse);

#[cfg(test)]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::new_for_test);

#[derive(Debug, Parser)]
#[clap(
    name = "suki",
    about = "Backend service for the Suki portfolio site: records client status
    check-ins in an embedded store and relays contact-form submissions to the
    site operator's inbox over SMTP.",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Settings {
    /// suki log level (default: "info")
    #[clap(long, default_value = "info", env, help = "Set the log level for suki")]
    pub suki_log_level: String,

    /// suki HTTP port (default: 8000)
    #[clap(long, default_value = "8000", env, help = "Set the HTTP port for suki")]
    pub suki_http_port: i32,

    /// The IP address that the server binds to, in IPv4 format (e.g., 192.168.1.1).
    #[clap(
        long,
        env,
        default_value = "0.0.0.0",
        help = "The IP address that the server binds to, in IPv4 format (e.g., 192.168.1.1).",
        value_parser = ValueParser::new(|s: &str| {
            if s.parse::<std::net::Ipv4Addr>().is_err() {
                return Err("The bind IP address must be a valid IPv4 address.".to_string());
            }
            Ok(s.to_string())
        })
    )]
    pub suki_bind_ip: Option<String>,

    #[clap(
        long,
        env,
        help = "Set the data directory holding the status store and file logs",
        value_parser = ValueParser::new(|s: &str| {
            let path = PathBuf::from(s);
            if !path.is_absolute() {
                return Err("Path must be an absolute directory path".to_string());
            }
            if !path.exists() {
                return Err(format!("Path {:?} does not exist", path));
            }
            if !path.is_dir() {
                return Err(format!("Path {:?} is not a directory", path));
            }
            Ok(s.to_string())
        })
    )]
    pub suki_store_path: String,

    #[clap(
        long,
        env,
        help = "Set the filename of the status store inside the data directory",
        value_parser = ValueParser::new(|s: &str| {
            let re = regex::Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap();
            if !re.is_match(s) {
                return Err(
                    "Store name must start with a letter or digit and may only contain letters, digits, dots, underscores, or dashes.".to_string(),
                );
            }
            Ok(s.to_string())
        })
    )]
    pub suki_store_name: String,

    /// Cache size for the status store in bytes (default: 64MB)
    #[clap(
        long,
        env,
        help = "Set the cache size for the status store in bytes"
    )]
    pub suki_store_cache_size: Option<usize>,

    /// Mail relay host (default: "smtp.gmail.com")
    #[clap(
        long,
        default_value = "smtp.gmail.com",
        env,
        help = "Set the SMTP relay host used for contact-form delivery"
    )]
    pub suki_smtp_host: String,

    /// Mail relay submission port (default: 587)
    #[clap(
        long,
        default_value = "587",
        env,
        help = "Set the SMTP relay submission port"
    )]
    pub suki_smtp_port: u16,

    /// SMTP account used to authenticate and as the From address.
    /// When unset, contact-form delivery reports "not configured".
    #[clap(
        long,
        env,
        help = "Set the SMTP account used to authenticate and as the From address"
    )]
    pub suki_smtp_user: Option<String>,

    /// App password for the SMTP account.
    #[clap(long, env, help = "Set the app password for the SMTP account")]
    pub suki_smtp_app_password: Option<String>,

    /// Destination inbox for contact-form submissions.
    #[clap(
        long,
        env,
        help = "Set the destination inbox for contact-form submissions"
    )]
    pub suki_contact_to: Option<String>,

    /// Subject prefix for relayed contact mail (default: "[Suki Portfolio]")
    #[clap(
        long,
        default_value = "[Suki Portfolio]",
        env,
        help = "Set the subject prefix for relayed contact mail"
    )]
    pub suki_subject_prefix: String,

    /// CORS max age in seconds (default: 86400)
    #[clap(
        long,
        default_value = "86400",
        env,
        help = "Set the CORS max age in seconds"
    )]
    pub suki_cors_max_age: i32,

    /// Enable ANSI logs (default: true)
    #[clap(long, default_value = "true", env, help = "Enable ANSI formatted logs")]
    pub suki_ansi_logs: bool,

    /// Enable log file output (default: false)
    /// If false, logs will be printed to stdout
    #[clap(
        long,
        default_value = "false",
        env,
        help = "Enable log file output (otherwise logs go to stdout)"
    )]
    pub suki_log_to_file: bool,

    /// Maximum number of log files (default: 5)
    #[clap(
        long,
        default_value = "5",
        env,
        help = "Set the maximum number of server log files"
    )]
    pub suki_max_server_log_files: usize,

    #[clap(
        long,
        default_value = "true",
        env,
        help = "Enable compression for the open api server"
    )]
    pub suki_http_compression_enabled: bool,
}

impl Settings {
    #[cfg(test)]
    fn new_for_test() -> Self {
        Self {
            suki_log_level: "info".to_string(),
            suki_http_port: 8000,
            suki_bind_ip: Default::default(),
            suki_store_path: if cfg!(windows) {
                "D:\\suki_data".into()
            } else {
                "/tmp/suki_data".into()
            },
            suki_store_name: "status.db".to_string(),
            suki_store_cache_size: None,
            suki_smtp_host: "smtp.gmail.com".to_string(),
            suki_smtp_port: 587,
            suki_smtp_user: None,
            suki_smtp_app_password: None,
            suki_contact_to: None,
            suki_subject_prefix: "[Suki Portfolio]".to_string(),
            suki_cors_max_age: 86400,
            suki_ansi_logs: false,
            suki_log_to_file: false,
            suki_max_server_log_files: 5,
            suki_http_compression_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_mail_relay_unconfigured() {
        let settings = Settings::new_for_test();
        assert!(settings.suki_smtp_user.is_none());
        assert!(settings.suki_smtp_app_password.is_none());
        assert!(settings.suki_contact_to.is_none());
        assert_eq!(settings.suki_smtp_host, "smtp.gmail.com");
        assert_eq!(settings.suki_smtp_port, 587);
        assert_eq!(settings.suki_subject_prefix, "[Suki Portfolio]");
    }
}
