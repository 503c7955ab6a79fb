use plainlog::*;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[test]
fn test_registry_round_trip() {
    for level in Level::ALL {
        let value = value_of(level.name()).unwrap();
        assert_eq!(Level::from_value(value), Some(level));
        assert_eq!(name_of(value), Some(level.name()));
    }
}

#[test]
fn test_formatter_receives_lowercase_name_and_joined_message() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let record = Arc::clone(&seen);

    let mut logger = create_with_formatter(Vec::new(), move |_date, level, msg| {
        record.lock().unwrap().push((level.to_string(), msg.to_string()));
        String::new()
    });

    logger.info(&[&"a", &"b", &3]).unwrap();
    logger.critical(&[&'x', &-1.25]).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            ("info".to_string(), "a,b,3".to_string()),
            ("critical".to_string(), "x,-1.25".to_string()),
        ]
    );
}

#[test]
fn test_create_with_formatter_has_notset_threshold() {
    let mut logger = create_with_formatter(Vec::new(), |_, level, _| format!("{}\n", level));
    assert_eq!(logger.level(), Level::Notset.value());

    logger.debug(&[]).unwrap();
    assert_eq!(String::from_utf8(logger.into_sink()).unwrap(), "debug\n");
}

#[test]
fn test_default_line_layout() {
    let mut logger = create(Vec::new());
    logger.error(&[&"failed", &404]).unwrap();

    let line = String::from_utf8(logger.into_sink()).unwrap();
    let (head, tail) = line.split_once("] ").unwrap();

    assert!(head.starts_with("E, ["));
    let timestamp = &head[4..];
    // YYYY-MM-DD HH:MM:SS.mmm
    assert_eq!(timestamp.len(), 23);
    assert_eq!(&timestamp[4..5], "-");
    assert_eq!(&timestamp[10..11], " ");
    assert_eq!(&timestamp[19..20], ".");
    assert_eq!(tail, "   ERROR -- : failed,404\n");
}

#[test]
fn test_threshold_from_name() {
    let mut logger = create_with_level(Vec::new(), "error", None).unwrap();
    logger.debug(&[&1]).unwrap();
    logger.info(&[&2]).unwrap();
    logger.warning(&[&3]).unwrap();
    logger.error(&[&4]).unwrap();
    logger.critical(&[&5]).unwrap();
    logger.fatal(&[&6]).unwrap();

    let out = String::from_utf8(logger.into_sink()).unwrap();
    let firsts: Vec<char> = out.lines().map(|l| l.chars().next().unwrap()).collect();
    assert_eq!(firsts, vec!['E', 'C', 'F']);
}

#[test]
fn test_config_file_to_logger() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("out.log");
    let config_path = dir.path().join("plainlog.toml");

    fs::write(
        &config_path,
        format!(
            "[logger]\nlevel = \"warning\"\noutput = \"file\"\nfile_path = {:?}\n",
            log_path.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = Config::load_from_file(&config_path).unwrap();
    config.validate().unwrap();

    let mut logger = config.logger.build_logger().unwrap();
    logger.info(&[&"below threshold"]).unwrap();
    logger.warning(&[&"disk", &"90%"]).unwrap();
    logger.log(99, &[&"custom"]).unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("W, ["));
    assert!(lines[0].ends_with(" WARNING -- : disk,90%"));
    assert!(lines[1].starts_with("U, ["));
    assert!(lines[1].ends_with("UNDEFINED -- : custom"));
}
