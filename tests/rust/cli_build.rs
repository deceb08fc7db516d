use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn cli_build_rejects_missing_dsp() {
    let work = tempdir().expect("create tempdir");

    let mut cmd = Command::cargo_bin("faust2hpp").expect("binary not found");
    cmd.current_dir(work.path())
        .args(["build", "missing.dsp", "--class-name", "Missing"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("DSP file not found"));
}

#[test]
fn cli_build_reports_missing_compiler() {
    let work = tempdir().expect("create tempdir");
    fs::write(work.path().join("gain.dsp"), "process = _;").unwrap();

    let mut cmd = Command::cargo_bin("faust2hpp").expect("binary not found");
    cmd.current_dir(work.path())
        .env("FAUST2HPP_FAUST", "faust2hpp-no-such-compiler")
        .args(["build", "gain.dsp", "--class-name", "Gain", "--out", "out"]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("CompileError"));

    assert!(!work.path().join("out/Gain.h").exists());
    assert!(!work.path().join("out/gain.dsp.json").exists());
}

// `sh` stands in for the compiler: it runs the .dsp file as a script and
// receives the usual Faust arguments.
#[cfg(unix)]
const FAKE_FAUST: &str = r#"
while [ $# -gt 0 ]; do
  case "$1" in
    -O) out="$2"; shift ;;
    -o) header="$2"; shift ;;
  esac
  shift
done
printf '%s' '{"ui":[{"type":"vgroup","label":"synth","items":[{"label":"cutoff"},{"label":"gain"}]}]}' > "$out/synth.dsp.json"
echo "// engine" > "$out/$header"
"#;

#[cfg(unix)]
#[test]
fn cli_build_end_to_end_with_stand_in_compiler() {
    let work = tempdir().expect("create tempdir");
    fs::write(work.path().join("synth.dsp"), FAKE_FAUST).unwrap();
    fs::write(
        work.path().join("synth.json"),
        r#"{ "gain": { "transform": "x*2", "default": 1.5 }, "ghost": {} }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("faust2hpp").expect("binary not found");
    cmd.current_dir(work.path())
        .env("FAUST2HPP_FAUST", "sh")
        .args([
            "build",
            "synth.dsp",
            "--class-name",
            "Synth",
            "--out",
            "out",
            "--info",
            "synth.json",
        ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("unused parameter name: ghost"))
        .stdout(predicate::str::contains("no parameter info: cutoff"));

    let out = work.path().join("out");
    let header = fs::read_to_string(out.join("Synth.h")).unwrap();
    assert!(header.contains("x += 1.500000e+00f;\n    *par_gain = x*2;"));
    assert!(!header.contains("ghost"));
    assert!(out.join("SynthFaust.h").is_file());
    assert!(out.join("FaustImpl.h").is_file());
    assert!(!out.join("synth.dsp.json").exists());
}

#[cfg(unix)]
#[test]
fn cli_build_propagates_compiler_exit_code() {
    let work = tempdir().expect("create tempdir");
    fs::write(work.path().join("broken.dsp"), "exit 7\n").unwrap();

    let mut cmd = Command::cargo_bin("faust2hpp").expect("binary not found");
    cmd.current_dir(work.path())
        .env("FAUST2HPP_FAUST", "sh")
        .args(["build", "broken.dsp", "--class-name", "Broken", "--out", "out"]);
    cmd.assert().code(7);

    assert!(!work.path().join("out/Broken.h").exists());
}
