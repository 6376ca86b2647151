//! Style attribute filtering.
//!
//! Parses an inline `style` attribute as a CSS declaration list and keeps
//! only the five properties of the restricted model, with keyword validation
//! on `text-decoration` and `text-align`. Survivors are re-serialized in
//! source order as `prop: value` pairs joined by `"; "`.

use cssparser::{CowRcStr, ParseError, Parser, ParserInput, RuleBodyItemParser, RuleBodyParser};

use super::policy::{ALIGN_KEYWORDS, ALLOWED_STYLE_PROPS, DECORATION_KEYWORDS};

/// Filter a raw style attribute value. Returns `None` when nothing survives.
pub fn filter_style(style: &str) -> Option<String> {
    let mut input = ParserInput::new(style);
    let mut parser = Parser::new(&mut input);

    let mut kept: Vec<(String, String)> = Vec::new();
    let mut decl_parser = StyleAttrParser { kept: &mut kept };

    for result in RuleBodyParser::new(&mut parser, &mut decl_parser) {
        // Lenient: malformed declarations are skipped, not fatal.
        let _ = result;
    }

    if kept.is_empty() {
        return None;
    }
    Some(
        kept.iter()
            .map(|(prop, value)| format!("{}: {}", prop, value))
            .collect::<Vec<_>>()
            .join("; "),
    )
}

/// Validate a declaration against the restricted vocabulary.
fn accept_declaration(prop: &str, value: &str) -> Option<String> {
    if !ALLOWED_STYLE_PROPS.contains(&prop) {
        return None;
    }
    match prop {
        "text-align" => {
            let keyword = value.to_ascii_lowercase();
            ALIGN_KEYWORDS.contains(&keyword.as_str()).then_some(keyword)
        }
        "text-decoration" => {
            let lowered = value.to_ascii_lowercase();
            let mut words = lowered.split_whitespace().peekable();
            words.peek()?;
            lowered
                .split_whitespace()
                .all(|w| DECORATION_KEYWORDS.contains(&w))
                .then_some(lowered)
        }
        // font-weight / font-style / font-size pass through unvalidated.
        _ => Some(value.to_string()),
    }
}

struct StyleAttrParser<'a> {
    kept: &'a mut Vec<(String, String)>,
}

impl<'i> cssparser::DeclarationParser<'i> for StyleAttrParser<'_> {
    type Declaration = ();
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &cssparser::ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let prop = name.as_ref().to_ascii_lowercase();

        // Capture the raw value text rather than re-assembling tokens.
        let start = input.position();
        while input.next().is_ok() {}
        let mut raw = input.slice_from(start).trim();

        // `!important` has no meaning in the restricted model.
        let lowered = raw.to_ascii_lowercase();
        if let Some(pos) = lowered.rfind("!important") {
            raw = raw[..pos].trim_end();
        }

        if raw.is_empty() {
            return Ok(());
        }
        if let Some(value) = accept_declaration(&prop, raw) {
            self.kept.push((prop, value));
        }
        Ok(())
    }
}

impl<'i> cssparser::AtRuleParser<'i> for StyleAttrParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Err(input.new_custom_error(()))
    }
}

impl<'i> cssparser::QualifiedRuleParser<'i> for StyleAttrParser<'_> {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Err(input.new_custom_error(()))
    }
}

impl<'i> RuleBodyItemParser<'i, (), ()> for StyleAttrParser<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
