//! Destination path resolution for each naming strategy.

use jellylink::linker::{resolve, ExtensionFilter, FsEntry, LinkContext, NamingStrategy};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

fn ctx<'a>(src: &'a Path, dst: &'a Path, filter: &'a ExtensionFilter, s: NamingStrategy) -> LinkContext<'a> {
    LinkContext::new(src, dst, filter, s)
}

#[test]
fn tree_mirror_keeps_relative_position_of_directories() {
    let any = ExtensionFilter::Any;
    let c = ctx(Path::new("/lib"), Path::new("/out"), &any, NamingStrategy::TreeMirror);
    let entry = FsEntry::directory("/lib/ShowA/Season 1");
    assert_eq!(
        resolve(&entry, &c, None).unwrap(),
        PathBuf::from("/out/ShowA/Season 1")
    );
}

#[test]
fn tree_mirror_resolves_files_to_their_directory() {
    let any = ExtensionFilter::Any;
    let c = ctx(Path::new("/lib"), Path::new("/out"), &any, NamingStrategy::TreeMirror);
    let entry = FsEntry::file("/lib/ShowA/Season 1/ep1.mkv");
    assert_eq!(
        resolve(&entry, &c, None).unwrap(),
        PathBuf::from("/out/ShowA/Season 1")
    );
    // A file directly under the source root governs the destination root itself.
    let top = FsEntry::file("/lib/readme.txt");
    assert_eq!(resolve(&top, &c, None).unwrap(), PathBuf::from("/out"));
}

#[test]
fn root_flatten_keeps_only_the_name() {
    let any = ExtensionFilter::Any;
    let c = ctx(Path::new("/lib"), Path::new("/out"), &any, NamingStrategy::RootFlatten);
    let entry = FsEntry::directory("/lib/Shows/ShowA");
    assert_eq!(resolve(&entry, &c, None).unwrap(), PathBuf::from("/out/ShowA"));
}

#[test]
fn collection_prefix_rewrites_file_name() {
    let any = ExtensionFilter::Any;
    let c = ctx(
        Path::new("/lib/Best Of 2019"),
        Path::new("/out"),
        &any,
        NamingStrategy::CollectionPrefix,
    );
    let entry = FsEntry::file("/lib/Best Of 2019/beach.jpg");
    assert_eq!(
        resolve(&entry, &c, Some(OsStr::new("Best Of"))).unwrap(),
        PathBuf::from("/out/Best Of - beach.jpg")
    );
    assert_eq!(
        resolve(&entry, &c, None).unwrap(),
        PathBuf::from("/out/beach.jpg")
    );
}

#[test]
fn collection_prefix_rejects_directories() {
    let any = ExtensionFilter::Any;
    let c = ctx(Path::new("/lib"), Path::new("/out"), &any, NamingStrategy::CollectionPrefix);
    let err = resolve(&FsEntry::directory("/lib/sub"), &c, Some(OsStr::new("x"))).unwrap_err();
    assert_eq!(err.kind(), "contract_violation");
}

#[test]
fn entries_outside_the_source_root_are_rejected() {
    let any = ExtensionFilter::Any;
    let c = ctx(Path::new("/lib"), Path::new("/out"), &any, NamingStrategy::TreeMirror);
    let err = resolve(&FsEntry::directory("/elsewhere/x"), &c, None).unwrap_err();
    assert_eq!(err.kind(), "contract_violation");

    let err = resolve(&FsEntry::directory("/lib/a/../../etc"), &c, None).unwrap_err();
    assert_eq!(err.kind(), "contract_violation");
}

#[test]
fn resolved_paths_stay_under_destination_root() {
    let any = ExtensionFilter::Any;
    let src = Path::new("/lib");
    let dst = Path::new("/out");
    let entries = [
        FsEntry::directory("/lib/a"),
        FsEntry::directory("/lib/a/b/c"),
        FsEntry::file("/lib/a/b/c/d.mkv"),
        FsEntry::file("/lib/x y/z.jpg"),
    ];
    for strategy in [NamingStrategy::TreeMirror, NamingStrategy::RootFlatten] {
        let c = ctx(src, dst, &any, strategy);
        for e in &entries {
            let p = resolve(e, &c, None).unwrap();
            assert!(p.starts_with(dst), "{} escaped via {strategy}", p.display());
            assert!(!p.components().any(|c| c == Component::ParentDir));
        }
    }
    let c = ctx(src, dst, &any, NamingStrategy::CollectionPrefix);
    for e in entries.iter().filter(|e| !e.is_dir()) {
        let p = resolve(e, &c, Some(OsStr::new("pre"))).unwrap();
        assert!(p.starts_with(dst) && p != dst);
    }
}

#[test]
fn strategy_names_parse_and_unknown_fails_fast() {
    assert_eq!(NamingStrategy::from_str("tree").unwrap(), NamingStrategy::TreeMirror);
    assert_eq!(NamingStrategy::from_str("ROOT").unwrap(), NamingStrategy::RootFlatten);
    assert_eq!(
        NamingStrategy::from_str("collection").unwrap(),
        NamingStrategy::CollectionPrefix
    );
    for s in [NamingStrategy::TreeMirror, NamingStrategy::RootFlatten, NamingStrategy::CollectionPrefix] {
        assert_eq!(NamingStrategy::from_str(&s.to_string()).unwrap(), s);
    }
    let err = NamingStrategy::from_str("spiral").unwrap_err();
    assert_eq!(err.kind(), "unknown_strategy");
    assert!(err.to_string().contains("spiral"));
}
