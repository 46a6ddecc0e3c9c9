use crate::config::FlagConfig;
use anyhow::Result;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub content: String,
    pub flag_name: String,
    pub changed: bool,
}

pub struct Transformer {
    recognized_names: Vec<String>,
    default_name: String,
    indent_unit: String,
    decl_pattern: Regex,
}

const CONTROL_FLOW_TOKENS: [&str; 4] = ["if ", "for ", "while ", "match "];

impl Transformer {
    pub fn new(flags: &FlagConfig) -> Result<Self> {
        Ok(Self {
            recognized_names: flags.recognized_names.clone(),
            default_name: flags.default_name.clone(),
            indent_unit: flags.indent_unit.clone(),
            decl_pattern: Regex::new(r"^\s*(const|var)\s+(\w+)\s*=")?,
        })
    }

    /// Run the full pipeline: ensure a flag exists, force it disabled,
    /// then guard unwrapped print calls with it.
    pub fn transform(&self, content: &str) -> Result<TransformOutcome> {
        let (with_flag, flag_name) = self.ensure_flag(content);
        let normalized = self.normalize_flag(&with_flag, &flag_name)?;
        let wrapped = self.wrap_prints(&normalized, &flag_name);

        Ok(TransformOutcome {
            changed: wrapped != content,
            content: wrapped,
            flag_name,
        })
    }

    /// Find the first recognized debug flag declaration, scanning line by line.
    pub fn detect_flag(&self, content: &str) -> Option<String> {
        for line in content.lines() {
            if let Some(captures) = self.decl_pattern.captures(line) {
                let name = &captures[2];
                if self.recognized_names.iter().any(|n| n == name) {
                    return Some(name.to_string());
                }
            }
        }
        None
    }

    /// Make sure the buffer declares a debug flag, inserting a disabled one
    /// after the script header line when none is present. Returns the buffer
    /// and the resolved flag name.
    pub fn ensure_flag(&self, content: &str) -> (String, String) {
        if let Some(flag_name) = self.detect_flag(content) {
            return (content.to_string(), flag_name);
        }

        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        let mut insert_index = 0;

        // Insert after the extends/class header if there is one, otherwise
        // before the first line of actual code.
        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("extends ") || trimmed.starts_with("class ") {
                insert_index = i + 1;
                break;
            } else if !trimmed.is_empty() && !trimmed.starts_with('#') {
                insert_index = i;
                break;
            }
        }

        let declaration = format!(
            "const {} = false  # Set to false for production release",
            self.default_name
        );
        lines.splice(
            insert_index..insert_index,
            [String::new(), declaration, String::new()],
        );

        (lines.join("\n"), self.default_name.clone())
    }

    /// Rewrite any `const`/`var` declaration of the resolved flag with a
    /// boolean literal value to the disabled form.
    pub fn normalize_flag(&self, content: &str, flag_name: &str) -> Result<String> {
        let escaped = regex::escape(flag_name);
        let const_decl = Regex::new(&format!(r"const\s+{}\s*=\s*(?:true|false)", escaped))?;
        let var_decl = Regex::new(&format!(r"var\s+{}\s*=\s*(?:true|false)", escaped))?;

        let content = const_decl.replace_all(content, format!("const {} = false", flag_name));
        let content = var_decl.replace_all(&content, format!("var {} = false", flag_name));

        Ok(content.into_owned())
    }

    /// Wrap unguarded print calls in an `if <flag>:` check. Single forward
    /// pass; guard detection only looks at the immediately preceding input
    /// line, not real block scope.
    pub fn wrap_prints(&self, content: &str, flag_name: &str) -> String {
        let lines: Vec<&str> = content.split('\n').collect();
        let mut result: Vec<String> = Vec::with_capacity(lines.len());
        let guard = format!("if {}:", flag_name);

        for (i, line) in lines.iter().enumerate() {
            if line.contains("print(") && !line.trim_start().starts_with('#') {
                let stripped = line.trim_start();
                let indent = &line[..line.len() - stripped.len()];

                let already_guarded = i > 0 && {
                    let prev = lines[i - 1].trim_end();
                    prev.contains(&guard) || prev.contains("if not")
                };

                if !already_guarded && stripped.starts_with("print(") {
                    result.push(format!("{}{}", indent, guard));
                    result.push(format!("{}{}{}", indent, self.indent_unit, stripped));
                    continue;
                } else if !already_guarded
                    && !CONTROL_FLOW_TOKENS.iter().any(|kw| stripped.contains(kw))
                {
                    // Print embedded mid-statement; wrapping the whole line is
                    // a heuristic and can misfire on prints nested in other
                    // expressions.
                    result.push(format!("{}{}", indent, guard));
                    result.push(format!("{}{}{}", indent, self.indent_unit, stripped));
                    continue;
                }
            }

            result.push((*line).to_string());
        }

        result.join("\n")
    }
}
