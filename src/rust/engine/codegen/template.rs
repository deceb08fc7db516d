use super::parameter::ParameterInfo;

/// Wrapper class emitted for every DSP.
///
/// Placeholders are `{{name}}`; single braces are C++ and pass through.
/// `uscale` maps [-1, 1] linearly onto [l, u], `ulscale` geometrically onto a
/// positive [l, u]. Both are only defined while the class body is compiled.
pub const WRAPPER_TEMPLATE: &str = r#"#ifndef __faust2hpp_{{class_name}}_H__
#define __faust2hpp_{{class_name}}_H__

#include <cmath>

#define uscale(x, l, u) ((((x)) + 1.0f) / 2.0f * ((u) - (l)) + (l))
#define ulscale(x, l, u) (std::exp((((x)) + 1.0f) / 2.0f * (std::log((u)) - std::log((l))) + std::log((l))))

#include "{{class_name}}Faust.h"

class {{class_name}}
{
public:
  {{class_name}}()
  {
    faustDsp.buildUserInterface(&faustDsp);
    {{assign_pointers}}
  }

  ~{{class_name}}() = default;

  void reset()
  {
    faustDsp.instanceClear();
    zeroParameters();
  }

  void prepare(int sampleRate)
  {
    faustDsp.init(sampleRate);
    zeroParameters();
  }

  void process(int count, FAUSTFLOAT** buffer)
  {
    faustDsp.compute(count, buffer, buffer);
  }

  {{setters}}

private:
  {{class_name}}Faust faustDsp;

  {{declare_pointers}}

  void zeroParameters()
  {
    {{to_zero}}
  }
};

#undef uscale
#undef ulscale

#endif"#;

/// The fixed class template. Read-only; hand it to whoever renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderTemplate {
    source: &'static str,
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self::new(WRAPPER_TEMPLATE)
    }
}

impl HeaderTemplate {
    pub const fn new(source: &'static str) -> Self {
        Self { source }
    }

    /// Renders the class for `parameters`.
    ///
    /// Every list is built from the same slice, so pointer binding, setters and
    /// zeroing always follow one parameter order.
    pub fn render(&self, class_name: &str, parameters: &[ParameterInfo]) -> String {
        let setters = join_lines(parameters, |p| p.setter.as_str(), "\n  ");
        let declare_pointers = join_lines(parameters, |p| p.declare_pointer.as_str(), "\n  ");
        let assign_pointers = join_lines(parameters, |p| p.assign_pointer.as_str(), "\n    ");
        let to_zero = join_lines(parameters, |p| p.to_zero.as_str(), "\n    ");

        substitute(self.source, |key| match key {
            "class_name" => Some(class_name),
            "setters" => Some(setters.as_str()),
            "declare_pointers" => Some(declare_pointers.as_str()),
            "assign_pointers" => Some(assign_pointers.as_str()),
            "to_zero" => Some(to_zero.as_str()),
            _ => None,
        })
    }
}

fn join_lines<'p>(
    parameters: &'p [ParameterInfo],
    field: impl Fn(&'p ParameterInfo) -> &'p str,
    separator: &str,
) -> String {
    parameters.iter().map(field).collect::<Vec<_>>().join(separator)
}

/// Single pass over `source`: inserted values are never scanned again, so a
/// transform containing `{{setters}}` stays literal. Unknown keys are kept.
fn substitute<'a>(source: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    let mut rest = source;

    while let Some(open) = rest.find("{{") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            break;
        };

        out.push_str(&rest[..open]);
        let key = &after_open[..close];
        match lookup(key) {
            Some(value) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after_open[close + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "test_template.rs"]
mod tests;
