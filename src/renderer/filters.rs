use minijinja::value::{Value, ValueKind};
use minijinja::{Error, ErrorKind};

pub use cruet::case::{kebab::to_kebab_case, snake::to_snake_case};

/// Renders a value as an HCL literal.
///
/// Strings are quoted and escaped (including `${` and `%{` template
/// sequences), numbers and booleans are emitted bare, sequences become
/// tuples and maps become single-line objects: `{ env = "prod", count = 2 }`.
pub fn hcl_filter(value: &Value) -> Result<String, Error> {
    match value.kind() {
        ValueKind::Undefined => Err(Error::new(
            ErrorKind::UndefinedError,
            "cannot render an undefined value as HCL",
        )),
        ValueKind::None => Ok("null".to_string()),
        // minijinja displays booleans as `True`/`False`
        ValueKind::Bool => Ok(value.is_true().to_string()),
        ValueKind::Number => Ok(value.to_string()),
        ValueKind::String => Ok(quote(value.as_str().unwrap_or_default())),
        ValueKind::Seq => {
            let items = value
                .try_iter()?
                .map(|item| hcl_filter(&item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", items.join(", ")))
        }
        ValueKind::Map => {
            let mut attrs = Vec::new();
            for key in value.try_iter()? {
                let item = value.get_item(&key)?;
                attrs.push(format!("{} = {}", hcl_key(&key.to_string()), hcl_filter(&item)?));
            }
            if attrs.is_empty() {
                Ok("{}".to_string())
            } else {
                Ok(format!("{{ {} }}", attrs.join(", ")))
            }
        }
        _ => Ok(quote(&value.to_string())),
    }
}

fn hcl_key(key: &str) -> String {
    let is_identifier = key
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if is_identifier {
        key.to_string()
    } else {
        quote(key)
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
