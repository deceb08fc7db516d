use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_without_spec_everything_is_identity() {
    let resolution = resolve(&names(&["cutoff", "gain", "mix"]), None);

    assert!(resolution.diagnostics.is_empty());
    let resolved: Vec<_> = resolution
        .parameters
        .iter()
        .map(|p| (p.name.as_str(), p.transform.as_str(), p.default))
        .collect();
    assert_eq!(
        resolved,
        vec![("cutoff", "x", 0.0), ("gain", "x", 0.0), ("mix", "x", 0.0)]
    );
}

#[test]
fn test_spec_entries_are_applied() {
    let spec: TransformSpec = [("gain", TransformEntry::new("x*2", 1.5))]
        .into_iter()
        .collect();
    let resolution = resolve(&names(&["gain"]), Some(&spec));

    assert_eq!(
        resolution.parameters,
        vec![ResolvedParameter {
            name: "gain".to_string(),
            transform: "x*2".to_string(),
            default: 1.5,
        }]
    );
    assert!(resolution.diagnostics.is_empty());
}

#[test]
fn test_unused_entries_are_reported_sorted() {
    let spec: TransformSpec = [
        ("zeta", TransformEntry::default()),
        ("gain", TransformEntry::default()),
        ("alpha", TransformEntry::default()),
    ]
    .into_iter()
    .collect();
    let resolution = resolve(&names(&["gain"]), Some(&spec));

    assert_eq!(resolution.unused().collect::<Vec<_>>(), vec!["alpha", "zeta"]);
    assert_eq!(resolution.missing().count(), 0);
    assert!(resolution.parameters.iter().all(|p| p.name == "gain"));
}

#[test]
fn test_missing_info_when_spec_supplied() {
    let spec: TransformSpec = [("cutoff", TransformEntry::new("x * x", 0.25))]
        .into_iter()
        .collect();
    let resolution = resolve(&names(&["resonance", "cutoff", "gain"]), Some(&spec));

    assert_eq!(
        resolution.missing().collect::<Vec<_>>(),
        vec!["resonance", "gain"]
    );
    let gain = &resolution.parameters[2];
    assert_eq!(gain.transform, IDENTITY_TRANSFORM);
    assert_eq!(gain.default, 0.0);
}

#[test]
fn test_empty_spec_reports_every_parameter_missing() {
    let spec = TransformSpec::default();
    let resolution = resolve(&names(&["a", "b"]), Some(&spec));
    assert_eq!(
        resolution.diagnostics,
        vec![
            Diagnostic::MissingInfo("a".to_string()),
            Diagnostic::MissingInfo("b".to_string()),
        ]
    );
}

#[test]
fn test_order_is_preserved() {
    let order = names(&["z", "a", "m", "b"]);
    let spec: TransformSpec = [("a", TransformEntry::default())].into_iter().collect();
    let resolution = resolve(&order, Some(&spec));
    let resolved: Vec<_> = resolution.parameters.iter().map(|p| p.name.clone()).collect();
    assert_eq!(resolved, order);
}

#[test]
fn test_diagnostic_messages() {
    assert_eq!(
        Diagnostic::UnusedEntry("foo".into()).to_string(),
        "unused parameter name: foo"
    );
    assert_eq!(
        Diagnostic::MissingInfo("bar".into()).to_string(),
        "no parameter info: bar"
    );
    assert_eq!(Diagnostic::MissingInfo("bar".into()).name(), "bar");
}
