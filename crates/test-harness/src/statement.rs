//! Statement tokenizer for emitted macro text.
//!
//! A statement is one logical VBScript line: physical lines ending in ` _`
//! are joined with the following line. Blank lines between statements are
//! dropped.

/// A lexical token inside a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A string literal with the quotes removed (`""` unescaped to `"`).
    Quoted(String),
    /// Anything else that is not punctuation: identifiers, numbers, `=`.
    Word(String),
    Punct(char),
}

/// One logical statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// 1-based physical line the statement starts on.
    pub line: usize,
    /// Continuations joined with a single space.
    pub text: String,
}

impl Statement {
    pub fn tokens(&self) -> Vec<Token> {
        lex(&self.text)
    }

    /// First bare word, e.g. `oEditor.CreateCylinder`, `Dim`, `Set`.
    pub fn head(&self) -> Option<String> {
        self.tokens().into_iter().find_map(|t| match t {
            Token::Word(w) => Some(w),
            _ => None,
        })
    }

    /// Every `"Key:=", value` pair, in order. Quoted values are unquoted.
    pub fn entries(&self) -> Vec<(String, String)> {
        let tokens = self.tokens();
        let mut out = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            let Token::Quoted(key) = token else { continue };
            let Some(key) = key.strip_suffix(":=") else { continue };
            let value = tokens[i + 1..]
                .iter()
                .find(|t| !matches!(t, Token::Punct(',')))
                .and_then(|t| match t {
                    Token::Quoted(v) | Token::Word(v) => Some(v.clone()),
                    Token::Punct(_) => None,
                });
            if let Some(value) = value {
                out.push((key.to_string(), value));
            }
        }
        out
    }

    /// Values of every entry named `key`.
    pub fn values(&self, key: &str) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect()
    }

    /// Value of the first entry named `key`.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values(key).into_iter().next()
    }
}

/// Split macro text into logical statements.
pub fn tokenize(script: &str) -> Vec<Statement> {
    let mut out = Vec::new();
    let mut current: Option<Statement> = None;

    for (i, raw) in script.lines().enumerate() {
        let line = raw.trim_end();
        let (body, continued) = match line.strip_suffix(" _") {
            Some(body) => (body, true),
            None => (line, false),
        };

        match current.as_mut() {
            Some(stmt) => {
                stmt.text.push(' ');
                stmt.text.push_str(body.trim_start());
            }
            None if body.trim().is_empty() => continue,
            None => {
                current = Some(Statement {
                    line: i + 1,
                    text: body.trim_start().to_string(),
                });
            }
        }

        if !continued {
            out.extend(current.take());
        }
    }
    // A dangling continuation still counts as a statement.
    out.extend(current.take());
    out
}

fn lex(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                let mut s = String::new();
                loop {
                    match chars.next() {
                        Some('"') if chars.peek() == Some(&'"') => {
                            chars.next();
                            s.push('"');
                        }
                        Some('"') | None => break,
                        Some(ch) => s.push(ch),
                    }
                }
                tokens.push(Token::Quoted(s));
            }
            '(' | ')' | ',' => tokens.push(Token::Punct(c)),
            c if c.is_whitespace() => {}
            _ => {
                let mut w = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() || matches!(next, '(' | ')' | ',' | '"') {
                        break;
                    }
                    w.push(next);
                    chars.next();
                }
                tokens.push(Token::Word(w));
            }
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_continuations() {
        let text = "\noEditor.Subtract _\nArray(\"NAME:Selections\", _\n\"Blank Parts:=\", _\n\"A,B\", _\n\"Tool Parts:=\", _\n\"C\"))\nDim x\n";
        let stmts = tokenize(text);
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0].line, 2);
        assert_eq!(stmts[0].head().as_deref(), Some("oEditor.Subtract"));
        assert_eq!(stmts[0].value("Blank Parts").as_deref(), Some("A,B"));
        assert_eq!(stmts[0].value("Tool Parts").as_deref(), Some("C"));
        assert_eq!(stmts[1].head().as_deref(), Some("Dim"));
    }

    #[test]
    fn bare_values_are_words() {
        let stmt = Statement {
            line: 1,
            text: "Array(\"NAME:A\", \"Transparency:=\", 0.75, \"SolveInside:=\", true)".into(),
        };
        assert_eq!(
            stmt.entries(),
            vec![
                ("Transparency".to_string(), "0.75".to_string()),
                ("SolveInside".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn doubled_quotes_unescape() {
        assert_eq!(
            lex("\"a\"\"b\""),
            vec![Token::Quoted("a\"b".to_string())]
        );
    }
}
