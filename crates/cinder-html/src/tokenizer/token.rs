//! Token types produced by the tokenizer.

use core::fmt;

/// One token of the flat stream the tokenizer hands to the parser.
///
/// Each token carries at most one payload: either text decoded from a
/// literal segment, or a raw slot value of the caller's type `V`. Nesting is
/// not represented here; matching open and close tags back up into a tree is
/// the parser's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<V> {
    /// A `<` beginning an element. The tag identity follows as a
    /// [`Token::TagName`] or [`Token::SlotTagName`].
    OpenTagStart,
    /// The fragment opener `<>`.
    FragmentOpen,
    /// A literal tag name (lowercase ASCII).
    TagName(String),
    /// A slot in tag-name position: a component reference, forwarded raw.
    SlotTagName(V),
    /// A literal attribute name.
    AttrName(String),
    /// The `=` between an attribute name and its value. An attribute name
    /// with no following `AttrEqual` is a boolean attribute.
    AttrEqual,
    /// A literal attribute value, stored without its surrounding quotes.
    AttrValue(String),
    /// A slot in attribute-value position.
    SlotAttrValue(V),
    /// A spread slot (`...${value}`): a whole attribute set to merge.
    SpreadAttributes(V),
    /// The `>` ending an open tag that will have children.
    OpenTagEnd,
    /// The `/>` ending a self-closing tag.
    SelfClosingEnd,
    /// A closing tag, literal or slot form; also the fragment closer `</>`.
    CloseTag,
    /// A run of literal text.
    Text(String),
    /// An entity reference, exact source text including `&` and `;`.
    Entity(String),
    /// A slot used directly as a child node.
    SlotNode(V),
}

impl<V> fmt::Display for Token<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenTagStart => write!(f, "open-tag-start"),
            Self::FragmentOpen => write!(f, "fragment-open"),
            Self::TagName(name) => write!(f, "tag-name({name})"),
            Self::SlotTagName(_) => write!(f, "tag-name(${{...}})"),
            Self::AttrName(name) => write!(f, "attr-name({name})"),
            Self::AttrEqual => write!(f, "attr-equal"),
            Self::AttrValue(value) => write!(f, "attr-value({value:?})"),
            Self::SlotAttrValue(_) => write!(f, "attr-value(${{...}})"),
            Self::SpreadAttributes(_) => write!(f, "spread-attributes"),
            Self::OpenTagEnd => write!(f, "open-tag-end"),
            Self::SelfClosingEnd => write!(f, "self-closing-end"),
            Self::CloseTag => write!(f, "close-tag"),
            Self::Text(text) => write!(f, "text({text:?})"),
            Self::Entity(text) => write!(f, "entity({text})"),
            Self::SlotNode(_) => write!(f, "value-node"),
        }
    }
}
