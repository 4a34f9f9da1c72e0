//! The context state machine over segments and slots.

use std::vec;

use strum_macros::Display;

use crate::error::ParseError;
use crate::scanner;

use super::token::Token;

/// The tokenizer's lexical context.
///
/// Context decides two things: how the next literal characters are read, and
/// what a slot means when the current segment runs out underneath the
/// cursor. Transitions are driven purely by scanned characters and segment
/// exhaustion; there is no backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Context {
    /// Between and around tags: text, entities, comments, tag openers.
    /// A slot here is a child node.
    TopLevel,
    /// Just after `<`, expecting the element name. A slot here is a
    /// component reference.
    TagName,
    /// Inside an open tag, before `/>` or `>`. A spread slot here is a
    /// whole attribute set.
    Attributes,
    /// Just after an attribute name, deciding whether `=` follows.
    AttributeEquals,
    /// Just after `=`, expecting a quoted literal or a slot value.
    AttributeValue,
}

/// Outcome of one dispatch of the state machine.
enum Step<V> {
    /// A token to yield.
    Token(Token<V>),
    /// State advanced without producing a token; dispatch again.
    Continue,
    /// The template is fully consumed.
    Finished,
}

/// Pull-based tokenizer over a template's segments and slot values.
///
/// Yields `Result<Token<V>, ParseError>` and is fused: after the first
/// error, or after the end of the template, it yields nothing further.
///
/// Segments are consumed strictly left to right, each exactly once; the
/// slot between two segments is consumed at most once, by whichever context
/// is active when the first of the two segments runs out.
#[derive(Debug)]
pub struct Tokenizer<'s, V> {
    /// Literal text segments, in template order.
    segments: &'s [&'s str],
    /// Slot values not yet consumed, in template order.
    values: vec::IntoIter<V>,
    /// Index of the segment under the cursor.
    segment: usize,
    /// Byte offset within the current segment.
    offset: usize,
    /// Current lexical context.
    context: Context,
    /// Set after yielding an error or exhausting the template.
    done: bool,
}

impl<'s, V> Tokenizer<'s, V> {
    /// Create a tokenizer over `segments` interleaved with `values`.
    ///
    /// A well-formed template has `values.len() == segments.len() - 1`.
    /// Fewer values are tolerated at top level (adjacent segments read as
    /// one); a trailing extra value is emitted as a final child token.
    #[must_use]
    pub fn new(segments: &'s [&'s str], values: Vec<V>) -> Self {
        Tokenizer {
            segments,
            values: values.into_iter(),
            segment: 0,
            offset: 0,
            context: Context::TopLevel,
            done: false,
        }
    }

    /// The lexical context the next token will be read in.
    #[must_use]
    pub const fn context(&self) -> Context {
        self.context
    }

    /// Move the cursor to the start of the next segment. Called after the
    /// slot between the two segments has been consumed.
    fn advance_segment(&mut self) {
        self.segment += 1;
        self.offset = 0;
    }

    /// Take the next slot value, which the current context requires.
    fn take_value(&mut self) -> Result<V, ParseError> {
        self.values.next().ok_or(ParseError::UnexpectedEndOfTemplate)
    }

    /// Dispatch once in the current context.
    fn dispatch(&mut self) -> Result<Step<V>, ParseError> {
        let Some(&segment) = self.segments.get(self.segment) else {
            return Ok(Step::Finished);
        };

        match self.context {
            Context::TopLevel => self.handle_top_level(segment),
            Context::TagName => self.handle_tag_name(segment),
            Context::Attributes => self.handle_attributes(segment),
            Context::AttributeEquals => Ok(self.handle_attribute_equals(segment)),
            Context::AttributeValue => self.handle_attribute_value(segment),
        }
    }

    /// Text, entities, comments, tag openers; a slot is a child node.
    fn handle_top_level(&mut self, segment: &str) -> Result<Step<V>, ParseError> {
        self.offset = scanner::skip_comments_and_whitespace(segment, self.offset)?;

        // Segment exhausted: the next slot is a direct child value. With no
        // slot left, reading continues into the next segment, if any.
        if self.offset >= segment.len() {
            if let Some(value) = self.values.next() {
                self.advance_segment();
                return Ok(Step::Token(Token::SlotNode(value)));
            }
            if self.segment + 1 < self.segments.len() {
                self.advance_segment();
                return Ok(Step::Continue);
            }
            return Ok(Step::Finished);
        }

        let bytes = segment.as_bytes();
        match bytes[self.offset] {
            b'<' => {
                self.offset += 1;
                match bytes.get(self.offset) {
                    Some(&b'>') => {
                        self.offset += 1;
                        Ok(Step::Token(Token::FragmentOpen))
                    }
                    Some(&b'/') => self.handle_closing_tag(segment),
                    // Anything else, including a segment ending right after
                    // the '<' (slot-supplied component name).
                    _ => {
                        self.context = Context::TagName;
                        Ok(Step::Token(Token::OpenTagStart))
                    }
                }
            }
            b'&' => {
                let start = self.offset;
                self.offset = scanner::skip_entity(segment, start)?;
                Ok(Step::Token(Token::Entity(
                    segment[start..self.offset].to_string(),
                )))
            }
            _ => {
                let start = self.offset;
                let end = scanner::skip_text(segment, start);
                if end == start {
                    // A '>', '"', or '\'' outside any tag starts nothing.
                    return Err(ParseError::UnexpectedToken {
                        found: format!("{:?}", scanner::char_at(segment, start)),
                    });
                }
                self.offset = end;
                Ok(Step::Token(Token::Text(segment[start..end].to_string())))
            }
        }
    }

    /// A closing tag. The cursor rests on the `/`.
    ///
    /// Two forms: a literal name (`</div>`, `</>`), skipped without
    /// inspection, and the slot form (`</${Component}>`) where the `/` ends
    /// the segment. The slot-form component reference is consumed but
    /// discarded; it is never matched against the opening tag.
    fn handle_closing_tag(&mut self, segment: &str) -> Result<Step<V>, ParseError> {
        if self.offset + 1 == segment.len() {
            let _ = self.take_value()?;
            self.advance_segment();

            let Some(&rest) = self.segments.get(self.segment) else {
                return Err(ParseError::UnexpectedEndOfTemplate);
            };
            let close = scanner::skip_whitespace(rest, 0);
            if rest.as_bytes().get(close) != Some(&b'>') {
                return Err(ParseError::MalformedClosingTag { at: close });
            }
            self.offset = close + 1;
        } else {
            self.offset = scanner::skip_closing_tag(segment, self.offset)?;
        }

        Ok(Step::Token(Token::CloseTag))
    }

    /// The element name after `<`; a slot is a component reference.
    fn handle_tag_name(&mut self, segment: &str) -> Result<Step<V>, ParseError> {
        self.context = Context::Attributes;

        if self.offset >= segment.len() {
            let value = self.take_value()?;
            self.advance_segment();
            return Ok(Step::Token(Token::SlotTagName(value)));
        }

        let start = self.offset;
        self.offset = scanner::skip_tag_name(segment, start);
        Ok(Step::Token(Token::TagName(
            segment[start..self.offset].to_string(),
        )))
    }

    /// Zero or more attributes, a spread slot, or the tag close. Comments
    /// may sit between attributes and are elided like whitespace.
    fn handle_attributes(&mut self, segment: &str) -> Result<Step<V>, ParseError> {
        self.offset = scanner::skip_comments_and_whitespace(segment, self.offset)?;

        // The spread marker is exactly "..." ending the segment, with the
        // attribute-set slot right behind it.
        if segment.len() == self.offset + 3 && segment.as_bytes()[self.offset..] == *b"..." {
            let value = self.take_value()?;
            self.advance_segment();
            return Ok(Step::Token(Token::SpreadAttributes(value)));
        }

        let bytes = segment.as_bytes();
        match bytes.get(self.offset) {
            None => Err(ParseError::UnexpectedEndOfTemplate),
            Some(&b'/') => {
                self.offset += 1;
                if bytes.get(self.offset) != Some(&b'>') {
                    return Err(ParseError::MalformedSelfClosingTag { at: self.offset });
                }
                self.offset += 1;
                self.context = Context::TopLevel;
                Ok(Step::Token(Token::SelfClosingEnd))
            }
            Some(&b'>') => {
                self.offset += 1;
                self.context = Context::TopLevel;
                Ok(Step::Token(Token::OpenTagEnd))
            }
            Some(&c) if scanner::is_letter(c) => {
                let start = self.offset;
                self.offset = scanner::skip_attribute_name(segment, start);
                self.context = Context::AttributeEquals;
                Ok(Step::Token(Token::AttrName(
                    segment[start..self.offset].to_string(),
                )))
            }
            Some(_) => Err(ParseError::InvalidAttributeStart {
                at: self.offset,
                found: scanner::char_at(segment, self.offset),
            }),
        }
    }

    /// Decide whether the attribute just named has an explicit value.
    /// Emits nothing when it does not; the bare name is a boolean attribute.
    fn handle_attribute_equals(&mut self, segment: &str) -> Step<V> {
        if segment.as_bytes().get(self.offset) == Some(&b'=') {
            self.offset += 1;
            self.context = Context::AttributeValue;
            Step::Token(Token::AttrEqual)
        } else {
            self.context = Context::Attributes;
            Step::Continue
        }
    }

    /// The value after `=`; a slot is the value itself.
    fn handle_attribute_value(&mut self, segment: &str) -> Result<Step<V>, ParseError> {
        self.context = Context::Attributes;

        if self.offset >= segment.len() {
            let value = self.take_value()?;
            self.advance_segment();
            return Ok(Step::Token(Token::SlotAttrValue(value)));
        }

        let start = self.offset;
        self.offset = scanner::skip_attribute_value(segment, start)?;
        // Strip the surrounding quotes; the token carries the decoded text.
        Ok(Step::Token(Token::AttrValue(
            segment[start + 1..self.offset - 1].to_string(),
        )))
    }
}

impl<V> Iterator for Tokenizer<'_, V> {
    type Item = Result<Token<V>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.dispatch() {
                Ok(Step::Token(token)) => return Some(Ok(token)),
                Ok(Step::Continue) => {}
                Ok(Step::Finished) => {
                    self.done = true;
                    return None;
                }
                Err(error) => {
                    self.done = true;
                    return Some(Err(error));
                }
            }
        }
    }
}
