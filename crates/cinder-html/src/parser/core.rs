//! Recursive-descent parser over the token stream.
//!
//! The parser pulls one token at a time, matches open and close tags into a
//! tree, and delegates every node construction to a [`NodeBuilder`]. Its
//! only state is the call stack: recursion depth equals tag nesting depth.

use cinder_common::warning::warn_once;
use cinder_tree::{AttributeMap, AttributeValue, NodeBuilder, Slot, Tag};

use crate::error::ParseError;
use crate::tokenizer::{Token, Tokenizer};

/// What `read_node` found: a completed node, or the close tag that ends the
/// current children list. The close sentinel never escapes the parser.
enum NodeOrClose<N> {
    /// A completed node.
    Node(N),
    /// A close-tag token, terminating the children list being read.
    Close,
}

/// Parse one template into a single node.
///
/// `segments` are the literal text pieces, `values` the slot values between
/// them (`values.len() == segments.len() - 1` for a well-formed template).
/// Exactly one top-level node is parsed; tokens after it are ignored.
///
/// # Errors
///
/// Any [`ParseError`]: malformed markup in a segment, a slot misused for
/// its context, a stray closing tag, or a template ending mid-node.
pub fn parse<B: NodeBuilder>(
    builder: &mut B,
    segments: &[&str],
    values: Vec<B::Slot>,
) -> Result<B::Node, ParseError> {
    Parser::new(builder, Tokenizer::new(segments, values)).run()
}

/// Recursive-descent consumer of a token stream.
///
/// Generic over the token source so tests can feed hand-built streams; in
/// normal use the source is a [`Tokenizer`].
pub struct Parser<'b, B, I> {
    /// Constructs output nodes; invoked children-first.
    builder: &'b mut B,
    /// The pull-based token source.
    tokens: I,
}

impl<'b, B, I> Parser<'b, B, I>
where
    B: NodeBuilder,
    I: Iterator<Item = Result<Token<B::Slot>, ParseError>>,
{
    /// Create a parser feeding `builder` from `tokens`.
    pub fn new(builder: &'b mut B, tokens: I) -> Self {
        Parser { builder, tokens }
    }

    /// Parse exactly one node from the stream.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`]; in particular
    /// [`ParseError::UnexpectedClosingTag`] when the stream begins with a
    /// close tag.
    pub fn run(mut self) -> Result<B::Node, ParseError> {
        match self.read_node()? {
            NodeOrClose::Node(node) => Ok(node),
            NodeOrClose::Close => Err(ParseError::UnexpectedClosingTag),
        }
    }

    /// Pull the next token, failing if the stream is exhausted.
    fn next_token(&mut self) -> Result<Token<B::Slot>, ParseError> {
        self.tokens
            .next()
            .transpose()?
            .ok_or(ParseError::UnexpectedEndOfTemplate)
    }

    /// Read one node, or the close tag ending the current children list.
    fn read_node(&mut self) -> Result<NodeOrClose<B::Node>, ParseError> {
        let node = match self.next_token()? {
            Token::CloseTag => return Ok(NodeOrClose::Close),
            Token::SlotNode(value) => self.builder.slot(value),
            Token::Text(text) => self.builder.text(&text),
            Token::Entity(text) => self.builder.entity(&text),
            Token::FragmentOpen => {
                let children = self.read_children()?;
                self.builder.element(Tag::Fragment, None, children)
            }
            Token::OpenTagStart => {
                let tag = self.read_tag_name()?;
                let (attributes, closed) = self.read_attributes()?;
                let children = if closed {
                    Vec::new()
                } else {
                    self.read_children()?
                };
                self.builder.element(tag, Some(attributes), children)
            }
            other => {
                return Err(ParseError::UnexpectedToken {
                    found: other.to_string(),
                });
            }
        };
        Ok(NodeOrClose::Node(node))
    }

    /// Read the tag identity following an open-tag-start token.
    fn read_tag_name(&mut self) -> Result<Tag<B::Slot>, ParseError> {
        match self.next_token()? {
            Token::TagName(name) => Ok(Tag::Host(name)),
            Token::SlotTagName(value) => Ok(Tag::Component(value)),
            other => Err(ParseError::UnexpectedToken {
                found: other.to_string(),
            }),
        }
    }

    /// Accumulate attributes until the tag closes. Returns the map and
    /// whether the tag was self-closing.
    ///
    /// A name with no value seen by the time the next name (or the tag end)
    /// arrives is a boolean attribute. Spread slots merge their whole map
    /// at the point they appear; on any collision the later assignment
    /// wins.
    fn read_attributes(&mut self) -> Result<(AttributeMap<B::Slot>, bool), ParseError> {
        let mut attributes = AttributeMap::new();
        let mut pending: Option<String> = None;

        loop {
            match self.next_token()? {
                Token::SelfClosingEnd => {
                    finish_pending(&mut attributes, pending);
                    return Ok((attributes, true));
                }
                Token::OpenTagEnd => {
                    finish_pending(&mut attributes, pending);
                    return Ok((attributes, false));
                }
                Token::SpreadAttributes(value) => {
                    // A still-pending name was declared before the spread,
                    // so its boolean entry must land first for the spread
                    // to win collisions.
                    finish_pending(&mut attributes, pending.take());
                    let spread = value.into_attributes().ok_or(ParseError::InvalidSpread)?;
                    for (name, spread_value) in spread {
                        assign(&mut attributes, name, spread_value);
                    }
                }
                Token::AttrName(name) => {
                    finish_pending(&mut attributes, pending.take());
                    pending = Some(name);
                }
                Token::AttrEqual => {
                    if pending.is_none() {
                        return Err(ParseError::DanglingEqualsSign);
                    }
                }
                Token::AttrValue(text) => match pending.take() {
                    Some(name) => assign(&mut attributes, name, AttributeValue::Literal(text)),
                    None => {
                        return Err(ParseError::UnexpectedToken {
                            found: Token::<B::Slot>::AttrValue(text).to_string(),
                        });
                    }
                },
                Token::SlotAttrValue(value) => match pending.take() {
                    Some(name) => assign(&mut attributes, name, AttributeValue::Dynamic(value)),
                    None => {
                        return Err(ParseError::UnexpectedToken {
                            found: Token::SlotAttrValue(value).to_string(),
                        });
                    }
                },
                other => {
                    return Err(ParseError::UnexpectedToken {
                        found: other.to_string(),
                    });
                }
            }
        }
    }

    /// Read nodes until the close tag of the enclosing element.
    fn read_children(&mut self) -> Result<Vec<B::Node>, ParseError> {
        let mut children = Vec::new();
        loop {
            match self.read_node()? {
                NodeOrClose::Node(node) => children.push(node),
                NodeOrClose::Close => return Ok(children),
            }
        }
    }
}

/// Finalize a pending value-less attribute name as a boolean attribute.
fn finish_pending<V>(attributes: &mut AttributeMap<V>, pending: Option<String>) {
    if let Some(name) = pending {
        assign(attributes, name, AttributeValue::Boolean);
    }
}

/// Insert one attribute, warning once when a name is assigned twice.
fn assign<V>(attributes: &mut AttributeMap<V>, name: String, value: AttributeValue<V>) {
    if attributes.contains_key(&name) {
        warn_once(
            "Parser",
            &format!("attribute '{name}' assigned more than once, the later value wins"),
        );
    }
    let _ = attributes.insert(name, value);
}
