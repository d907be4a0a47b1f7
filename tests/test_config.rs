use std::io::Write;
use std::path::PathBuf;

use courier::config::{Config, directory_flag};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:4221");
    assert_eq!(cfg.files.directory, PathBuf::from("/tmp"));
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();

    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
    assert_eq!(cfg1.files.directory, cfg2.files.directory);
}

#[test]
fn test_config_env_overrides() {
    // Env mutations live in this one test to keep the suite race-free
    unsafe {
        std::env::remove_var("COURIER_CONFIG");
        std::env::set_var("LISTEN", "127.0.0.1:3000");
        std::env::set_var("SERVE_DIR", "/srv/data");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:3000");
    assert_eq!(cfg.files.directory, PathBuf::from("/srv/data"));

    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("SERVE_DIR");
    }
}

#[test]
fn test_config_yaml_full() {
    let yaml = "server:\n  listen_addr: 0.0.0.0:8080\nfiles:\n  directory: /var/www\n";
    let cfg: Config = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:8080");
    assert_eq!(cfg.files.directory, PathBuf::from("/var/www"));
}

#[test]
fn test_config_yaml_partial_sections_use_defaults() {
    let yaml = "files:\n  directory: /var/www\n";
    let cfg: Config = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:4221");
    assert_eq!(cfg.files.directory, PathBuf::from("/var/www"));
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server:").unwrap();
    writeln!(file, "  listen_addr: 127.0.0.1:9999").unwrap();
    file.flush().unwrap();

    let cfg = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9999");
    assert_eq!(cfg.files.directory, PathBuf::from("/tmp"));
}

#[test]
fn test_config_from_file_missing() {
    assert!(Config::from_file("/nonexistent/courier.yaml").is_err());
}

#[test]
fn test_directory_flag_present() {
    let args = ["--directory", "/srv/files"].map(String::from);

    assert_eq!(
        directory_flag(args.into_iter()),
        Some(PathBuf::from("/srv/files"))
    );
}

#[test]
fn test_directory_flag_after_other_args() {
    let args = ["serve", "--verbose", "--directory", "/data"].map(String::from);

    assert_eq!(
        directory_flag(args.into_iter()),
        Some(PathBuf::from("/data"))
    );
}

#[test]
fn test_directory_flag_absent() {
    let args = ["serve", "--verbose"].map(String::from);

    assert_eq!(directory_flag(args.into_iter()), None);
}

#[test]
fn test_directory_flag_missing_value() {
    let args = ["--directory"].map(String::from);

    assert_eq!(directory_flag(args.into_iter()), None);
}
