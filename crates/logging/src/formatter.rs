// crates/logging/src/formatter.rs
use std::collections::HashMap;
use std::fmt;
use time::{OffsetDateTime, macros::format_description};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

/// Plain-text event formatter.
///
/// Without a template the message is word wrapped to `COLUMNS` (default 80).
/// With a template, each line is the template with its tokens expanded and
/// nothing else; time and pid appear only where `%t` and `%p` ask for them:
///
/// | token      | expands to                          |
/// |------------|-------------------------------------|
/// | `%t`       | local time                          |
/// | `%p`       | process id                          |
/// | `%l`       | level                               |
/// | `%T`       | event target                        |
/// | `%m`       | message                             |
/// | `%f`       | `feature` field                     |
/// | `%c`       | `chart` field                       |
/// | `%%`       | literal `%`                         |
pub struct ReportFormatter {
    tokens: Option<Vec<Token>>,
}

impl ReportFormatter {
    pub fn new(format: Option<String>) -> Self {
        Self {
            tokens: format.map(|f| parse_tokens(&f)),
        }
    }

    fn columns() -> usize {
        std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&c| c > 0)
            .unwrap_or(80)
    }

    fn wrap(msg: &str, width: usize) -> String {
        let mut out = String::new();
        let mut line_len = 0usize;
        for word in msg.split_whitespace() {
            let wlen = word.len();
            if line_len == 0 {
                out.push_str(word);
                line_len = wlen;
            } else if line_len + 1 + wlen > width {
                out.push('\n');
                out.push_str(word);
                line_len = wlen;
            } else {
                out.push(' ');
                out.push_str(word);
                line_len += 1 + wlen;
            }
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Lit(String),
    Percent,
    Time,
    Pid,
    Level,
    Target,
    Message,
    Feature,
    Chart,
}

fn parse_tokens(fmt: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = fmt.chars();
    let mut lit = String::new();
    while let Some(c) = chars.next() {
        if c == '%' {
            if !lit.is_empty() {
                tokens.push(Token::Lit(std::mem::take(&mut lit)));
            }
            match chars.next() {
                Some('%') => tokens.push(Token::Percent),
                Some('t') => tokens.push(Token::Time),
                Some('p') => tokens.push(Token::Pid),
                Some('l') => tokens.push(Token::Level),
                Some('T') => tokens.push(Token::Target),
                Some('m') => tokens.push(Token::Message),
                Some('f') => tokens.push(Token::Feature),
                Some('c') => tokens.push(Token::Chart),
                Some(other) => {
                    lit.push('%');
                    lit.push(other);
                }
                None => lit.push('%'),
            }
        } else {
            lit.push(c);
        }
    }
    if !lit.is_empty() {
        tokens.push(Token::Lit(lit));
    }
    tokens
}

struct MsgVisitor {
    msg: String,
    fields: HashMap<String, String>,
}

impl MsgVisitor {
    fn new() -> Self {
        Self {
            msg: String::new(),
            fields: HashMap::new(),
        }
    }
}

impl Visit for MsgVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            if !self.msg.is_empty() {
                self.msg.push(' ');
            }
            self.msg.push_str(value);
        } else {
            self.fields
                .insert(field.name().to_string(), value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            if !self.msg.is_empty() {
                self.msg.push(' ');
            }
            self.msg.push_str(&format!("{value:?}"));
        } else {
            self.fields
                .insert(field.name().to_string(), format!("{value:?}"));
        }
    }
}

fn format_time() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let fmt = format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");
    now.format(&fmt).unwrap_or_default()
}

impl<S, N> FormatEvent<S, N> for ReportFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MsgVisitor::new();
        event.record(&mut visitor);
        if let Some(tokens) = &self.tokens {
            let mut out = String::new();
            for tok in tokens {
                match tok {
                    Token::Lit(s) => out.push_str(s),
                    Token::Percent => out.push('%'),
                    Token::Time => out.push_str(&format_time()),
                    Token::Pid => out.push_str(&std::process::id().to_string()),
                    Token::Level => out.push_str(event.metadata().level().as_str()),
                    Token::Target => out.push_str(event.metadata().target()),
                    Token::Message => out.push_str(&visitor.msg),
                    Token::Feature => {
                        if let Some(v) = visitor.fields.get("feature") {
                            out.push_str(v);
                        }
                    }
                    Token::Chart => {
                        if let Some(v) = visitor.fields.get("chart") {
                            out.push_str(v);
                        }
                    }
                }
            }
            writer.write_str(&out)?;
            writer.write_char('\n')
        } else {
            let msg = if visitor.msg.is_empty() {
                event.metadata().target()
            } else {
                &visitor.msg
            };
            let width = Self::columns();
            let wrapped = Self::wrap(msg, width);
            for (i, line) in wrapped.lines().enumerate() {
                if i > 0 {
                    writer.write_char('\n')?;
                }
                writer.write_str(line)?;
            }
            writer.write_char('\n')
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tokens_and_literals() {
        let tokens = parse_tokens("[%l] %f: %m %%");
        assert_eq!(
            tokens,
            vec![
                Token::Lit("[".into()),
                Token::Level,
                Token::Lit("] ".into()),
                Token::Feature,
                Token::Lit(": ".into()),
                Token::Message,
                Token::Lit(" ".into()),
                Token::Percent,
            ]
        );
    }

    #[test]
    fn unknown_token_is_kept_literally() {
        assert_eq!(parse_tokens("%q"), vec![Token::Lit("%q".into())]);
        assert_eq!(parse_tokens("50%"), vec![Token::Lit("50".into()), Token::Lit("%".into())]);
    }

    #[test]
    fn wrap_breaks_on_width() {
        let wrapped = ReportFormatter::wrap("rendered chart cyclomatic", 16);
        assert_eq!(wrapped, "rendered chart\ncyclomatic");
    }
}
