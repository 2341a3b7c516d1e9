// src/core/pattern.rs
use anyhow::{Context as _, Result};
use regex::Regex;

/// Token produced while reading a user-authored name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Wildcard,
}

/// A name pattern using `*` as a wildcard, compiled into an anchored regular
/// expression with one capture group per wildcard.
///
/// Examples of the resulting renames (stem only, the extension is kept):
///
/// | pattern   | name            | new name   |
/// |-----------|-----------------|------------|
/// | `abc*`    | `abc 123.txt`   | `123.txt`  |
/// | `*123`    | `abc 123.txt`   | `abc.txt`  |
/// | `aa*cc`   | `aa bbb cc.txt` | `bbb.txt`  |
/// | `*111*`   | `aa111bb.txt`   | `aabb.txt` |
/// | `1*3*5`   | `12345.txt`     | `24.txt`   |
/// | `\*\**`   | `**abc.txt`     | `abc.txt`  |
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    source: String,
    regex: Regex,
}

impl CompiledMatcher {
    /// Compiles a name pattern.
    ///
    /// Every character is literal except `*`, which matches any (possibly
    /// empty) run of characters other than a newline and captures it. A run
    /// of one or more backslashes directly before `*` makes that asterisk
    /// literal and is consumed whole; any other backslash, including a
    /// trailing one, is kept as a literal backslash. No pattern is rejected
    /// for its syntax.
    ///
    /// # Errors
    ///
    /// Returns an error only if the translated expression exceeds the regex
    /// engine's size limits.
    #[inline]
    pub fn compile(pattern: &str) -> Result<Self> {
        let expression = translate(&tokenize(pattern));
        let regex = Regex::new(&expression)
            .with_context(|| format!("Failed to compile rename pattern: {pattern}"))?;
        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    /// The pattern as written by the user.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Matches the whole of `name` and returns the text captured by each
    /// wildcard, in pattern order. Wildcards that matched nothing yield `""`.
    #[inline]
    #[must_use]
    pub fn captures<'a>(&self, name: &'a str) -> Option<Vec<&'a str>> {
        let caps = self.regex.captures(name)?;
        Some(
            caps.iter()
                .skip(1)
                .map(|group| group.map_or("", |m| m.as_str()))
                .collect(),
        )
    }

    /// Builds the replacement stem for `name`: the wildcard captures joined
    /// together with surrounding whitespace trimmed. `None` if `name` does not
    /// match.
    #[inline]
    #[must_use]
    pub fn rebuild(&self, name: &str) -> Option<String> {
        self.captures(name)
            .map(|parts| parts.concat().trim().to_owned())
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let mut run = 1_usize;
                while chars.next_if_eq(&'\\').is_some() {
                    run = run.saturating_add(1);
                }
                if chars.next_if_eq(&'*').is_some() {
                    literal.push('*');
                } else {
                    literal.extend(std::iter::repeat_n('\\', run));
                }
            }
            '*' => {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Wildcard);
            }
            _ => literal.push(c),
        }
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    tokens
}

fn translate(tokens: &[Token]) -> String {
    let mut expression = String::from(r"\A(?:");
    for token in tokens {
        match token {
            Token::Literal(text) => expression.push_str(&regex::escape(text)),
            Token::Wildcard => expression.push_str("(.*)"),
        }
    }
    expression.push_str(r")\z");
    expression
}
