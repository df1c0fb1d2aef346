#[path = "../src/paths.rs"]
mod paths;
#[path = "../src/catalog.rs"]
mod catalog;
#[path = "../src/shortcuts.rs"]
mod shortcuts;

use std::fs;

#[test]
fn shortcuts_cover_the_whole_catalog() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let loaded = catalog::load(root).unwrap();

    shortcuts::create_shortcuts(root, &loaded).unwrap();

    let dir = shortcuts::shortcuts_dir(root);
    for apps in loaded.values() {
        for app in apps {
            assert!(shortcuts::shortcut_path(&dir, &app.package).unwrap().exists());
        }
    }
}

#[test]
fn generated_descriptor_matches_the_template() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let loaded = catalog::load(root).unwrap();

    shortcuts::create_shortcuts(root, &loaded).unwrap();

    let dir = shortcuts::shortcuts_dir(root);
    let contents =
        fs::read_to_string(dir.join("com.google.android.keep.desktop")).unwrap();
    assert_eq!(
        contents,
        "[Desktop Entry]\n\
         Name=Google Keep\n\
         Comment=Tablet-optimized Google Keep\n\
         Exec=am start -n com.google.android.keep/.MainActivity\n\
         Icon=com.google.android.keep\n\
         Type=Application\n\
         Categories=TabletApps;Utilities;\n\
         StartupNotify=true\n\
         MimeType=application/x-tablet-app;\n\
         X-Tablet-Optimized=true\n\
         X-Stylus-Support=true\n"
    );
}

#[test]
fn regeneration_overwrites_in_place() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let loaded = catalog::load(root).unwrap();

    shortcuts::create_shortcuts(root, &loaded).unwrap();
    let dir = shortcuts::shortcuts_dir(root);
    let path = dir.join("com.spotify.music.desktop");
    fs::write(&path, "stale").unwrap();

    shortcuts::create_shortcuts(root, &loaded).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("[Desktop Entry]\n"));
    assert!(!contents.contains("stale"));
}
