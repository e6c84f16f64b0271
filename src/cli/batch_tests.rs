use super::*;
use crate::target::default_targets;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_write_matches_in_order() {
    let mut out = Vec::new();
    let count = write_matches(&mut out, names(&["Ahri", "Akali", "Kaisa"]), "ka").unwrap();

    assert_eq!(count, 2);
    assert_eq!(String::from_utf8(out).unwrap(), "Akali\nKaisa\n");
}

#[test]
fn test_write_matches_empty_query_prints_all() {
    let mut out = Vec::new();
    let count = write_matches(&mut out, names(&["Ahri", "Akali"]), "").unwrap();

    assert_eq!(count, 2);
    assert_eq!(String::from_utf8(out).unwrap(), "Ahri\nAkali\n");
}

#[test]
fn test_write_matches_none() {
    let mut out = Vec::new();
    let count = write_matches(&mut out, names(&["Ahri"]), "zzz").unwrap();

    assert_eq!(count, 0);
    assert!(out.is_empty());
}

#[test]
fn test_write_resolved_first_match() {
    let mut out = Vec::new();
    let target = Target::new("Build", "https://x/{q}/build/");
    let resolved = write_resolved(&mut out, names(&["Ahri", "Dr. Mundo"]), "mun", &target)
        .unwrap()
        .unwrap();

    assert_eq!(resolved.as_str(), "https://x/drmundo/build/");
    assert_eq!(String::from_utf8(out).unwrap(), "https://x/drmundo/build/\n");
}

#[test]
fn test_write_resolved_secondary_default_target() {
    let mut out = Vec::new();
    let targets = default_targets();
    write_resolved(&mut out, names(&["Kai'Sa"]), "kai", &targets[1]).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "https://lolalytics.com/lol/kaisa/aram/build/\n"
    );
}

#[test]
fn test_write_resolved_no_match_writes_nothing() {
    let mut out = Vec::new();
    let target = Target::new("Build", "https://x/{q}/");
    let resolved = write_resolved(&mut out, names(&["Ahri"]), "zzz", &target).unwrap();

    assert!(resolved.is_none());
    assert!(out.is_empty());
}
