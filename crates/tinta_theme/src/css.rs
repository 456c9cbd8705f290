//! CSS custom property export

use indexmap::IndexMap;
use serde_json::Value;

use crate::assemble::ThemeTree;
use crate::error::{Result, ThemeError};
use crate::tone::ColorScheme;

const PREFIX: &str = "--tinta";

impl ThemeTree {
    /// Flatten one scheme into `--tinta-<tone>-<group>-...` properties
    ///
    /// Properties follow the tree's field order. Keys are kebab-cased, so
    /// `focusRing` becomes `focus-ring`.
    pub fn to_css_variables(&self, scheme: ColorScheme) -> Result<IndexMap<String, String>> {
        let value = serde_json::to_value(self.scheme(scheme))
            .map_err(|err| ThemeError::Serialize(err.to_string()))?;

        let mut vars = IndexMap::new();
        flatten(PREFIX, &value, &mut vars);
        Ok(vars)
    }

    /// Render a stylesheet
    ///
    /// The first scheme is declared on `:root`; each later one is wrapped in a
    /// `prefers-color-scheme` media query.
    pub fn to_css(&self, schemes: &[ColorScheme]) -> Result<String> {
        let mut css = String::new();

        for (index, &scheme) in schemes.iter().enumerate() {
            let vars = self.to_css_variables(scheme)?;
            if index == 0 {
                push_block(&mut css, &vars, "");
            } else {
                css.push_str(&format!("\n@media (prefers-color-scheme: {scheme}) {{\n"));
                push_block(&mut css, &vars, "  ");
                css.push_str("}\n");
            }
        }

        Ok(css)
    }
}

fn flatten(path: &str, value: &Value, vars: &mut IndexMap<String, String>) {
    match value {
        Value::Object(fields) => {
            for (key, child) in fields {
                flatten(&format!("{path}-{}", kebab_case(key)), child, vars);
            }
        }
        Value::String(color) => {
            vars.insert(path.to_string(), color.clone());
        }
        // The `dark` flag is not a color
        _ => {}
    }
}

fn push_block(css: &mut String, vars: &IndexMap<String, String>, indent: &str) {
    css.push_str(indent);
    css.push_str(":root {\n");
    for (name, color) in vars {
        css.push_str(&format!("{indent}  {name}: {color};\n"));
    }
    css.push_str(indent);
    css.push_str("}\n");
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
