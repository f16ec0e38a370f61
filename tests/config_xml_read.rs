//! Verify XML config is parsed and used without touching user state.

use std::fs;
use tempfile::tempdir;

use jellylink::linker::ExtensionSet;
use jellylink::{load_config_from_xml_path, Config, LogLevel, Mode};

#[test]
fn reads_config_xml_and_applies_values() {
    let td = tempdir().expect("create tempdir");

    let cfg_path = td.path().join("config.xml");
    let source = td.path().join("Library");
    let destination = td.path().join("Library-Jellyfin");
    let log_file = td.path().join("jellylink.log");

    let xml = format!(
        r#"
<config>
  <source>{}</source>
  <destination>{}</destination>
  <mode>series</mode>
  <log_level>info</log_level>
  <log_file>{}</log_file>
  <collection_threshold> 40 </collection_threshold>
  <prefix_words>3</prefix_words>
  <video_extensions>mkv, .webm</video_extensions>
</config>
"#,
        source.display(),
        destination.display(),
        log_file.display()
    );
    fs::write(&cfg_path, xml).expect("write config.xml");

    let cfg = load_config_from_xml_path(&cfg_path).expect("load_config_from_xml_path");

    assert_eq!(cfg.source, source, "source mismatch");
    assert_eq!(cfg.destination, destination, "destination mismatch");
    assert_eq!(cfg.mode, Some(Mode::Series));
    assert_eq!(cfg.log_level, LogLevel::Info, "log_level mismatch");
    assert_eq!(cfg.log_file.as_deref(), Some(log_file.as_path()));
    assert_eq!(cfg.collection_threshold, 40);
    assert_eq!(cfg.prefix_words, 3);
    assert_eq!(cfg.video_extensions, ExtensionSet::new(["mkv", "webm"]));
    assert_eq!(cfg.image_extensions, ExtensionSet::images(), "absent field keeps default");
}

#[test]
fn empty_values_keep_defaults() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(
        &cfg_path,
        "<config><source></source><mode></mode><log_file>  </log_file><prefix_words></prefix_words></config>",
    )
    .unwrap();

    let cfg = load_config_from_xml_path(&cfg_path).unwrap();
    let def = Config::default();
    assert_eq!(cfg.source, def.source);
    assert_eq!(cfg.mode, None);
    assert!(cfg.log_file.is_none());
    assert_eq!(cfg.prefix_words, def.prefix_words);
    assert_eq!(cfg.collection_threshold, 53);
}

#[test]
fn unknown_field_is_rejected() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config><sourse>/typo</sourse></config>").unwrap();
    let err = load_config_from_xml_path(&cfg_path).unwrap_err();
    assert!(format!("{err:#}").contains("parse config xml"));
}

#[test]
fn bad_values_are_reported_with_the_file() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");

    fs::write(&cfg_path, "<config><mode>music</mode></config>").unwrap();
    let err = format!("{:#}", load_config_from_xml_path(&cfg_path).unwrap_err());
    assert!(err.contains("invalid mode"), "err was: {err}");
    assert!(err.contains("config.xml"));

    fs::write(&cfg_path, "<config><collection_threshold>many</collection_threshold></config>").unwrap();
    let err = format!("{:#}", load_config_from_xml_path(&cfg_path).unwrap_err());
    assert!(err.contains("many"), "err was: {err}");
}

#[test]
fn template_is_loadable_and_never_overwritten() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("nested").join("config.xml");
    jellylink::create_template_config(&cfg_path).expect("template written");

    let cfg = load_config_from_xml_path(&cfg_path).expect("template parses");
    assert_eq!(cfg.source, std::path::PathBuf::from("Library"));
    assert_eq!(cfg.destination, std::path::PathBuf::from("Library-Jellyfin"));
    assert_eq!(cfg.mode, None);
    assert_eq!(cfg.collection_threshold, 53);
    assert_eq!(cfg.prefix_words, 2);
    assert_eq!(cfg.video_extensions, ExtensionSet::videos());
    assert_eq!(cfg.image_extensions, ExtensionSet::images());

    assert!(jellylink::create_template_config(&cfg_path).is_err());
}
