use assert_cmd::Command;
use tempfile::tempdir;

#[test]
fn cli_sources_copies_support_headers() {
    let work = tempdir().expect("create tempdir");

    let mut cmd = Command::cargo_bin("faust2hpp").expect("binary not found");
    cmd.current_dir(work.path()).args(["sources", "--out", "include"]);
    cmd.assert().success();

    for name in ["Meta.h", "UI.h", "FaustImpl.h"] {
        assert!(work.path().join("include").join(name).is_file(), "{name}");
    }
}
