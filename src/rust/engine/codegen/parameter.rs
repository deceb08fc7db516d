use crate::engine::transform::ResolvedParameter;

/// Generated C++ snippets for one parameter.
///
/// Every field is derived from the resolved parameter alone; the template
/// joins them in parameter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    pub name: String,
    pub setter: String,
    pub declare_pointer: String,
    pub assign_pointer: String,
    pub to_zero: String,
}

impl ParameterInfo {
    pub fn from_resolved(parameter: &ResolvedParameter) -> Self {
        let name = &parameter.name;
        let setter = [
            format!("inline void set_{name}(FAUSTFLOAT x)"),
            "{".to_string(),
            format!("  x += {}f;", format_scientific(parameter.default)),
            format!("  *par_{name} = {};", parameter.transform),
            "}".to_string(),
        ]
        .join("\n  ");

        Self {
            name: name.clone(),
            setter,
            declare_pointer: format!("FAUSTFLOAT* par_{name} = nullptr;"),
            assign_pointer: format!("par_{name} = faustDsp.getParameter(\"{name}\");"),
            to_zero: format!("set_{name}(0.0f);"),
        }
    }
}

/// `%.6e` formatting: six fractional digits, signed exponent of at least two digits.
pub fn format_scientific(value: f64) -> String {
    let raw = format!("{value:.6e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(name: &str, transform: &str, default: f64) -> ResolvedParameter {
        ResolvedParameter {
            name: name.to_string(),
            transform: transform.to_string(),
            default,
        }
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(0.0), "0.000000e+00");
        assert_eq!(format_scientific(1.5), "1.500000e+00");
        assert_eq!(format_scientific(-0.25), "-2.500000e-01");
        assert_eq!(format_scientific(20000.0), "2.000000e+04");
        assert_eq!(format_scientific(1e-120), "1.000000e-120");
    }

    #[test]
    fn test_setter_applies_default_then_transform() {
        let info = ParameterInfo::from_resolved(&resolved("gain", "x*2", 1.5));
        assert_eq!(
            info.setter,
            "inline void set_gain(FAUSTFLOAT x)\n  {\n    x += 1.500000e+00f;\n    *par_gain = x*2;\n  }"
        );

        let offset = info.setter.find("x += 1.500000e+00f;").unwrap();
        let write = info.setter.find("*par_gain = x*2;").unwrap();
        assert!(offset < write);
    }

    #[test]
    fn test_pointer_snippets() {
        let info = ParameterInfo::from_resolved(&resolved("cutoff", "x", 0.0));
        assert_eq!(info.declare_pointer, "FAUSTFLOAT* par_cutoff = nullptr;");
        assert_eq!(
            info.assign_pointer,
            "par_cutoff = faustDsp.getParameter(\"cutoff\");"
        );
        assert_eq!(info.to_zero, "set_cutoff(0.0f);");
    }

    #[test]
    fn test_transform_is_inserted_verbatim() {
        let expr = "ulscale(x, 20.0f, 20000.0f)";
        let info = ParameterInfo::from_resolved(&resolved("freq", expr, -1.0));
        assert!(info.setter.contains("*par_freq = ulscale(x, 20.0f, 20000.0f);"));
        assert!(info.setter.contains("x += -1.000000e+00f;"));
    }
}
