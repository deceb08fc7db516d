use super::*;
use crate::engine::transform::ResolvedParameter;

fn infos(names: &[&str]) -> Vec<ParameterInfo> {
    names
        .iter()
        .map(|name| {
            ParameterInfo::from_resolved(&ResolvedParameter {
                name: name.to_string(),
                transform: "x".to_string(),
                default: 0.0,
            })
        })
        .collect()
}

fn positions(haystack: &str, needles: &[String]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| haystack.find(n.as_str()).unwrap_or_else(|| panic!("missing {n}")))
        .collect()
}

fn is_sorted(values: &[usize]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

#[test]
fn test_counts_and_order_follow_parameters() {
    let names = ["resonance", "cutoff", "drive"];
    let text = HeaderTemplate::default().render("Filter", &infos(&names));

    assert_eq!(text.matches("inline void set_").count(), 3);
    assert_eq!(text.matches("faustDsp.getParameter(").count(), 3);
    assert_eq!(text.matches("= nullptr;").count(), 3);
    assert_eq!(text.matches("(0.0f);").count(), 3);

    let setters: Vec<String> = names
        .iter()
        .map(|n| format!("inline void set_{n}("))
        .collect();
    let binds: Vec<String> = names
        .iter()
        .map(|n| format!("par_{n} = faustDsp.getParameter"))
        .collect();
    let decls: Vec<String> = names
        .iter()
        .map(|n| format!("FAUSTFLOAT* par_{n} = nullptr;"))
        .collect();
    let zeros: Vec<String> = names.iter().map(|n| format!("set_{n}(0.0f);")).collect();

    assert!(is_sorted(&positions(&text, &setters)));
    assert!(is_sorted(&positions(&text, &binds)));
    assert!(is_sorted(&positions(&text, &decls)));
    assert!(is_sorted(&positions(&text, &zeros)));
}

#[test]
fn test_class_skeleton() {
    let text = HeaderTemplate::default().render("Filter", &infos(&["gain"]));

    assert!(text.starts_with("#ifndef __faust2hpp_Filter_H__\n#define __faust2hpp_Filter_H__\n"));
    assert!(text.ends_with("#endif"));
    assert!(text.contains("#include \"FilterFaust.h\""));
    assert!(text.contains("class Filter\n{"));
    assert!(text.contains("  FilterFaust faustDsp;"));
    assert!(text.contains("#define uscale(x, l, u)"));
    assert!(text.contains("#define ulscale(x, l, u)"));
    assert!(text.contains("faustDsp.compute(count, buffer, buffer);"));
    assert!(!text.contains("{{"));
}

#[test]
fn test_scaling_macros_parenthesize_arguments() {
    let text = HeaderTemplate::default().render("Filter", &[]);

    assert!(text.contains(
        "#define uscale(x, l, u) ((((x)) + 1.0f) / 2.0f * ((u) - (l)) + (l))\n"
    ));
    assert!(text.contains(
        "#define ulscale(x, l, u) (std::exp((((x)) + 1.0f) / 2.0f * (std::log((u)) - std::log((l))) + std::log((l))))\n"
    ));
}

#[test]
fn test_pointers_bound_before_zeroing_runs() {
    let text = HeaderTemplate::default().render("Filter", &infos(&["gain"]));

    let ctor_ui = text.find("faustDsp.buildUserInterface(&faustDsp);").unwrap();
    let bind = text.find("par_gain = faustDsp.getParameter(\"gain\");").unwrap();
    let reset = text.find("void reset()").unwrap();
    assert!(ctor_ui < bind && bind < reset);

    let reset_body = &text[reset..text.find("void prepare(").unwrap()];
    let clear = reset_body.find("faustDsp.instanceClear();").unwrap();
    let zero = reset_body.find("zeroParameters();").unwrap();
    assert!(clear < zero);

    let prepare = text.find("void prepare(int sampleRate)").unwrap();
    let prepare_body = &text[prepare..text.find("void process(").unwrap()];
    let init = prepare_body.find("faustDsp.init(sampleRate);").unwrap();
    let zero = prepare_body.find("zeroParameters();").unwrap();
    assert!(init < zero);
}

#[test]
fn test_zero_parameters() {
    let text = HeaderTemplate::default().render("Empty", &[]);
    assert!(text.contains("class Empty"));
    assert!(!text.contains("inline void set_"));
    assert!(!text.contains("par_"));
}

#[test]
fn test_transform_text_is_not_expanded() {
    let info = ParameterInfo::from_resolved(&ResolvedParameter {
        name: "odd".to_string(),
        transform: "x /* {{setters}} {{class_name}} */".to_string(),
        default: 0.0,
    });
    let text = HeaderTemplate::default().render("Filter", &[info]);
    assert!(text.contains("*par_odd = x /* {{setters}} {{class_name}} */;"));
}

#[test]
fn test_render_is_deterministic() {
    let parameters = infos(&["a", "b", "c"]);
    let template = HeaderTemplate::default();
    assert_eq!(
        template.render("Det", &parameters),
        template.render("Det", &parameters)
    );
}

#[test]
fn test_substitute_keeps_unknown_and_unclosed() {
    let out = substitute("{{known}} {{unknown}} {{open", |key| match key {
        "known" => Some("yes"),
        _ => None,
    });
    assert_eq!(out, "yes {{unknown}} {{open");
}
