//! Node builder contract for the cinder template parser.
//!
//! The parser in `cinder-html` never constructs output nodes itself. It
//! assembles a tag identity, an attribute map, and a child list, then hands
//! the triple to a caller-supplied [`NodeBuilder`]. The builder decides what
//! a node *is* — a UI-toolkit element, a string, a test fixture — and the
//! parser treats the result as opaque.
//!
//! # Design
//!
//! Slot values (the `${...}` interpolations of a template) are likewise
//! opaque to the parser. The one place the parser must look inside a slot is
//! spread position (`<div ...${attrs}>`), where the slot has to yield an
//! attribute map; the [`Slot`] trait is that single seam.

use std::collections::HashMap;

/// Map of attribute names to values for one element.
///
/// The map is orderless. When the same name is assigned twice during
/// parsing, whether literally or via spread, the later assignment wins.
pub type AttributeMap<V> = HashMap<String, AttributeValue<V>>;

/// The value bound to one attribute name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue<V> {
    /// A quoted literal from the template source, stored without its quotes:
    /// `class="app"` binds `Literal("app")`.
    Literal(String),
    /// A value-less attribute: `<input disabled>` binds `Boolean`, which
    /// reads as true. Absence from the map is the false state.
    Boolean,
    /// A slot value: `onclick=${handler}` binds `Dynamic(handler)`.
    Dynamic(V),
}

impl<V> AttributeValue<V> {
    /// Returns the literal text if this is a [`AttributeValue::Literal`].
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true for a presence-only ([`AttributeValue::Boolean`]) value.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }

    /// Returns the slot value if this is a [`AttributeValue::Dynamic`].
    #[must_use]
    pub const fn as_dynamic(&self) -> Option<&V> {
        match self {
            Self::Dynamic(value) => Some(value),
            _ => None,
        }
    }
}

/// The identity of an element handed to [`NodeBuilder::element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag<V> {
    /// A literal lowercase tag name from the template: `<div>`.
    Host(String),
    /// A component reference supplied by a slot: `<${Button}>`. The value is
    /// forwarded unchanged; the parser only assembles its attributes and
    /// children.
    Component(V),
    /// The fragment form `<>...</>`. Fragments never carry attributes.
    Fragment,
}

impl<V> Tag<V> {
    /// Returns the tag name if this is a [`Tag::Host`].
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        match self {
            Self::Host(name) => Some(name),
            _ => None,
        }
    }
}

/// A caller-supplied slot value.
///
/// Implementations only have to answer one question: when this value is
/// spread into an element's attributes (`<div ...${value}>`), what map does
/// it contribute? Values that cannot act as an attribute set return `None`,
/// which the parser surfaces as an invalid-spread error.
pub trait Slot: Sized {
    /// Interpret this value as an attribute map for spread position.
    fn into_attributes(self) -> Option<AttributeMap<Self>>;
}

/// Constructs output nodes for the parser.
///
/// The builder is invoked re-entrantly on the parser's call stack, children
/// first: by the time [`NodeBuilder::element`] runs for a node, every child
/// has already been built. All arguments are moved into the builder, so a
/// builder may keep or rework them freely.
pub trait NodeBuilder {
    /// The slot value type of the templates this builder consumes.
    type Slot: Slot;
    /// The output node type.
    type Node;

    /// Build an element or fragment from its completed parts.
    ///
    /// `attributes` is `None` for fragments and `Some` (possibly empty) for
    /// everything else. Self-closing elements receive an empty `children`.
    fn element(
        &mut self,
        tag: Tag<Self::Slot>,
        attributes: Option<AttributeMap<Self::Slot>>,
        children: Vec<Self::Node>,
    ) -> Self::Node;

    /// Build a leaf node for a run of literal text.
    fn text(&mut self, literal: &str) -> Self::Node;

    /// Build a leaf node for an entity reference. `literal` is the exact
    /// source text including the `&` and `;` (e.g. `&amp;`); decoding is the
    /// builder's business.
    fn entity(&mut self, literal: &str) -> Self::Node;

    /// Build a node from a slot used directly as a child
    /// (`<p>${value}</p>`). The value arrives unmodified.
    fn slot(&mut self, value: Self::Slot) -> Self::Node;
}
