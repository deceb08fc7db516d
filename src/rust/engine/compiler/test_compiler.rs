use super::*;

fn job() -> CompileJob {
    CompileJob {
        dsp_path: PathBuf::from("dsp/filter.dsp"),
        output_dir: PathBuf::from("out"),
        class_name: "Filter".to_string(),
        architecture_path: PathBuf::from("/res/FaustImpl.h"),
    }
}

#[test]
fn test_faust_arguments() {
    let args: Vec<String> = FaustCompiler::arguments(&job())
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        args,
        vec![
            "dsp/filter.dsp",
            "-lang",
            "cpp",
            "-i",
            "-scal",
            "-inpl",
            "-ftz",
            "2",
            "-json",
            "-scn",
            "FaustImpl",
            "-cn",
            "FilterFaust",
            "-a",
            "/res/FaustImpl.h",
            "-o",
            "FilterFaust.h",
            "-O",
            "out",
        ]
    );
}

#[test]
fn test_job_naming() {
    let job = job();
    assert_eq!(job.engine_class_name(), "FilterFaust");
    assert_eq!(job.engine_header_path(), PathBuf::from("out/FilterFaust.h"));
    assert_eq!(job.sidecar_path(), PathBuf::from("out/filter.dsp.json"));
}

#[test]
fn test_missing_program_is_spawn_error() {
    let compiler = FaustCompiler::new("faust2hpp-definitely-not-installed");
    let err = compiler.compile(&job()).unwrap_err();
    assert!(matches!(err, CompileError::Spawn { .. }));
    assert_eq!(err.exit_code(), None);
}

#[cfg(unix)]
#[test]
fn test_non_zero_exit_is_fatal() {
    // `false` ignores its arguments and exits with 1
    let compiler = FaustCompiler::new("false");
    let err = compiler.compile(&job()).unwrap_err();
    assert_eq!(err.exit_code(), Some(1));
    assert_eq!(err.to_string(), "DSP compiler `false` exited with status 1");
}
