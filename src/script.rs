//! Recovers values assigned to named constants inside inline script text.
//!
//! The evaluator only understands literal expressions (strings, numbers,
//! booleans, null, arrays, objects). It runs a single forward scan with a
//! nesting cap and has no access to any environment, so page script is
//! data here, never code.

use serde_json::{Map, Number, Value};

use crate::parse_error::{ParseError, Result};

const MAX_DEPTH: usize = 32;

/// Returns the value bound to `name` by the first `name = <literal>`
/// declaration or assignment in `source`.
pub fn constant(source: &str, name: &str) -> Result<Value> {
    let mut search = 0;
    while let Some(found) = source[search..].find(name) {
        let start = search + found;
        let end = start + name.len();
        search = start + 1;

        // whole-identifier matches only
        if source[..start]
            .chars()
            .next_back()
            .map_or(false, is_ident_char)
        {
            continue;
        }
        if source[end..].chars().next().map_or(false, is_ident_char) {
            continue;
        }

        let mut scanner = Scanner {
            src: source,
            pos: end,
        };
        scanner.skip_ws();
        if !scanner.eat('=') {
            continue;
        }
        // `==` is a comparison, `=>` an arrow function; neither binds
        if scanner.peek() == Some('=') || scanner.peek() == Some('>') {
            continue;
        }
        return scanner
            .value(0)
            .map_err(ParseError::ScriptEvaluationError);
    }
    Err(ParseError::ScriptConstantNotFound(name.to_owned()))
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

type ScanResult<T> = core::result::Result<T, String>;

impl Scanner<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().map_or(false, char::is_whitespace) {
            self.bump();
        }
    }

    fn value(&mut self, depth: usize) -> ScanResult<Value> {
        if depth > MAX_DEPTH {
            return Err("literal nesting too deep".to_owned());
        }
        self.skip_ws();
        match self.peek() {
            None => Err("expected an expression".to_owned()),
            Some('"') | Some('\'') => self.string().map(Value::String),
            Some('[') => self.array(depth),
            Some('{') => self.object(depth),
            Some(c) if c == '-' || c.is_ascii_digit() => self.number(),
            Some(c) if is_ident_char(c) => self.word(),
            Some(c) => Err(format!("unsupported expression starting with '{c}'")),
        }
    }

    fn string(&mut self) -> ScanResult<String> {
        let Some(quote) = self.bump() else {
            return Err("expected a string literal".to_owned());
        };
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err("unterminated string literal".to_owned()),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    None => return Err("unterminated string escape".to_owned()),
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some('0') => out.push('\0'),
                    Some('u') => out.push(self.unicode_escape()?),
                    // \" \' \\ \/ and anything else pass through
                    Some(other) => out.push(other),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn unicode_escape(&mut self) -> ScanResult<char> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| "invalid unicode escape".to_owned())?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| "invalid unicode escape".to_owned())
    }

    fn number(&mut self) -> ScanResult<Value> {
        let start = self.pos;
        self.eat('-');
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.bump();
        }
        if self.eat('.') {
            while self.peek().map_or(false, |c| c.is_ascii_digit()) {
                self.bump();
            }
        }
        if self.peek() == Some('e') || self.peek() == Some('E') {
            self.bump();
            let _ = self.eat('+') || self.eat('-');
            while self.peek().map_or(false, |c| c.is_ascii_digit()) {
                self.bump();
            }
        }
        let text = &self.src[start..self.pos];
        if let Ok(int) = text.parse::<i64>() {
            return Ok(Value::Number(Number::from(int)));
        }
        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| format!("invalid number literal `{text}`"))
    }

    fn word(&mut self) -> ScanResult<Value> {
        let start = self.pos;
        while self.peek().map_or(false, is_ident_char) {
            self.bump();
        }
        match &self.src[start..self.pos] {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" | "undefined" => Ok(Value::Null),
            other => Err(format!("`{other}` is not a literal")),
        }
    }

    fn array(&mut self, depth: usize) -> ScanResult<Value> {
        self.bump();
        let mut items = vec![];
        loop {
            self.skip_ws();
            if self.eat(']') {
                return Ok(Value::Array(items));
            }
            items.push(self.value(depth + 1)?);
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            if self.eat(']') {
                return Ok(Value::Array(items));
            }
            return Err("expected ',' or ']' in array literal".to_owned());
        }
    }

    fn object(&mut self, depth: usize) -> ScanResult<Value> {
        self.bump();
        let mut map = Map::new();
        loop {
            self.skip_ws();
            if self.eat('}') {
                return Ok(Value::Object(map));
            }
            let key = match self.peek() {
                Some('"') | Some('\'') => self.string()?,
                Some(c) if is_ident_char(c) => {
                    let start = self.pos;
                    while self.peek().map_or(false, is_ident_char) {
                        self.bump();
                    }
                    self.src[start..self.pos].to_owned()
                }
                _ => return Err("expected an object key".to_owned()),
            };
            self.skip_ws();
            if !self.eat(':') {
                return Err("expected ':' after object key".to_owned());
            }
            let value = self.value(depth + 1)?;
            map.insert(key, value);
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            if self.eat('}') {
                return Ok(Value::Object(map));
            }
            return Err("expected ',' or '}' in object literal".to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::parse_error::ParseError;

    #[test]
    fn finds_an_array_constant() {
        let value = constant("const imgHttps = ['a','b'];", "imgHttps").unwrap();
        assert_eq!(value, json!(["a", "b"]));
    }

    #[test]
    fn double_quotes_and_var_declarations_work_too() {
        let value = constant("var imgHttps = [\"u1\", \"u2\"];", "imgHttps").unwrap();
        assert_eq!(value, json!(["u1", "u2"]));
    }

    #[test]
    fn missing_binding_is_not_found() {
        let err = constant("const other = 1;", "imgHttps").unwrap_err();
        assert!(matches!(err, ParseError::ScriptConstantNotFound(name) if name == "imgHttps"));
    }

    #[test]
    fn comparisons_do_not_count_as_assignments() {
        let source = "if (imgHttps == null) {} const imgHttps = [1];";
        assert_eq!(constant(source, "imgHttps").unwrap(), json!([1]));
    }

    #[test]
    fn identifier_prefixes_do_not_match() {
        let source = "const imgHttpsBackup = [2]; const imgHttps = [3];";
        assert_eq!(constant(source, "imgHttps").unwrap(), json!([3]));
    }

    #[test]
    fn non_literal_expressions_fail_evaluation() {
        let err = constant("const imgHttps = window.pages;", "imgHttps").unwrap_err();
        assert!(matches!(err, ParseError::ScriptEvaluationError(_)));
    }

    #[test]
    fn unterminated_literals_fail_evaluation() {
        let err = constant("const imgHttps = ['a',", "imgHttps").unwrap_err();
        assert!(matches!(err, ParseError::ScriptEvaluationError(_)));
    }

    #[test]
    fn nested_objects_numbers_and_escapes_evaluate() {
        let source = r#"const payload = { pages: [{ n: 1.5, ok: true }], title: 'it\'s' };"#;
        let value = constant(source, "payload").unwrap();
        assert_eq!(
            value,
            json!({ "pages": [{ "n": 1.5, "ok": true }], "title": "it's" })
        );
    }

    #[test]
    fn trailing_commas_are_tolerated() {
        let value = constant("const imgHttps = ['a', 'b',];", "imgHttps").unwrap();
        assert_eq!(value, json!(["a", "b"]));
    }

    #[test]
    fn nesting_is_bounded() {
        let mut source = String::from("const deep = ");
        source.push_str(&"[".repeat(100));
        source.push_str(&"]".repeat(100));
        source.push(';');
        let err = constant(&source, "deep").unwrap_err();
        assert!(matches!(err, ParseError::ScriptEvaluationError(_)));
    }
}
