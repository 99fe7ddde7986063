//! Placeholder substitution for the site template.
//!
//! The template is plain HTML with two kinds of markers:
//!
//! - `{{name}}` — replaced with the value of variable `name`.
//! - `{{#if subtitle}} ... {{/if}}` — kept (markers stripped) when the
//!   `subtitle` variable is non-empty, removed with its contents otherwise.
//!
//! Rendering is a single left-to-right pass over the template: text inserted
//! for a variable is never scanned again, so a post body that happens to
//! contain `{{year}}` comes out exactly as written. Placeholders that name no
//! variable are left in the output untouched.

use std::collections::BTreeMap;

/// Variables available to a render, keyed by placeholder name.
pub type Vars = BTreeMap<String, String>;

const IF_SUBTITLE: &str = "{{#if subtitle}}";
const END_IF: &str = "{{/if}}";

/// Render `template` with `vars`.
pub fn render(template: &str, vars: &Vars) -> String {
    let show_subtitle = vars.get("subtitle").is_some_and(|s| !s.is_empty());
    let resolved = resolve_conditionals(template, show_subtitle);
    substitute(&resolved, vars)
}

/// Resolve every `{{#if subtitle}}...{{/if}}` span (shortest match).
///
/// An opening marker with no closing marker after it is left as-is.
fn resolve_conditionals(template: &str, show: bool) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(IF_SUBTITLE) {
        let after_open = &rest[start + IF_SUBTITLE.len()..];
        let Some(len) = after_open.find(END_IF) else {
            break;
        };
        out.push_str(&rest[..start]);
        if show {
            // A nested opening marker inside the span is dropped along with the outer ones
            out.push_str(&after_open[..len].replace(IF_SUBTITLE, ""));
        }
        rest = &after_open[len + END_IF.len()..];
    }

    out.push_str(rest);
    out
}

fn substitute(template: &str, vars: &Vars) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        let value = candidate[2..]
            .find("}}")
            .and_then(|end| vars.get(&candidate[2..2 + end]).map(|v| (end, v)));
        match value {
            Some((end, v)) => {
                out.push_str(v);
                rest = &candidate[end + 4..];
            }
            None => {
                // Not a known placeholder: emit one brace and keep scanning,
                // so `{{{title}}}` still finds `{{title}}`.
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
