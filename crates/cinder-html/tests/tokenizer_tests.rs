//! Integration tests for the template tokenizer.

use cinder_html::{Context, ParseError, Token, Tokenizer};

/// Tokenize a template, panicking on the first error.
fn tokenize(segments: &[&str], values: Vec<i32>) -> Vec<Token<i32>> {
    Tokenizer::new(segments, values)
        .collect::<Result<Vec<_>, _>>()
        .expect("template should tokenize")
}

/// Tokenize a template expected to fail, returning the error.
fn tokenize_err(segments: &[&str], values: Vec<i32>) -> ParseError {
    Tokenizer::new(segments, values)
        .collect::<Result<Vec<_>, _>>()
        .expect_err("template should fail to tokenize")
}

#[test]
fn test_literal_element() {
    let tokens = tokenize(&[r#"<div class="a">hi</div>"#], vec![]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagStart,
            Token::TagName("div".to_string()),
            Token::AttrName("class".to_string()),
            Token::AttrEqual,
            Token::AttrValue("a".to_string()),
            Token::OpenTagEnd,
            Token::Text("hi".to_string()),
            Token::CloseTag,
        ]
    );
}

#[test]
fn test_fragment() {
    let tokens = tokenize(&["<><span>x</span></>"], vec![]);
    assert_eq!(
        tokens,
        vec![
            Token::FragmentOpen,
            Token::OpenTagStart,
            Token::TagName("span".to_string()),
            Token::OpenTagEnd,
            Token::Text("x".to_string()),
            Token::CloseTag,
            Token::CloseTag,
        ]
    );
}

#[test]
fn test_slot_as_child() {
    let tokens = tokenize(&["<p>", "</p>"], vec![42]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagStart,
            Token::TagName("p".to_string()),
            Token::OpenTagEnd,
            Token::SlotNode(42),
            Token::CloseTag,
        ]
    );
}

#[test]
fn test_slot_tag_name_and_spread() {
    // <${1} x="1" ...${2}/>
    let tokens = tokenize(&["<", r#" x="1" ..."#, "/>"], vec![1, 2]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagStart,
            Token::SlotTagName(1),
            Token::AttrName("x".to_string()),
            Token::AttrEqual,
            Token::AttrValue("1".to_string()),
            Token::SpreadAttributes(2),
            Token::SelfClosingEnd,
        ]
    );
}

#[test]
fn test_slot_attribute_value() {
    // <button onclick=${7}>go</button>
    let tokens = tokenize(&["<button onclick=", ">go</button>"], vec![7]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagStart,
            Token::TagName("button".to_string()),
            Token::AttrName("onclick".to_string()),
            Token::AttrEqual,
            Token::SlotAttrValue(7),
            Token::OpenTagEnd,
            Token::Text("go".to_string()),
            Token::CloseTag,
        ]
    );
}

#[test]
fn test_boolean_attribute_emits_no_equal() {
    let tokens = tokenize(&["<input disabled></input>"], vec![]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagStart,
            Token::TagName("input".to_string()),
            Token::AttrName("disabled".to_string()),
            Token::OpenTagEnd,
            Token::CloseTag,
        ]
    );
}

#[test]
fn test_entity_keeps_exact_text() {
    let tokens = tokenize(&["a &amp; b"], vec![]);
    assert_eq!(
        tokens,
        vec![
            Token::Text("a ".to_string()),
            Token::Entity("&amp;".to_string()),
            Token::Text(" b".to_string()),
        ]
    );
}

#[test]
fn test_comments_are_elided() {
    let tokens = tokenize(&["<!-- a --><p><!-- b --></p><!-- c -->"], vec![]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagStart,
            Token::TagName("p".to_string()),
            Token::OpenTagEnd,
            Token::CloseTag,
        ]
    );
}

#[test]
fn test_comment_containing_bare_gt_is_elided() {
    let tokens = tokenize(&["<!-- a > b --><p></p>"], vec![]);
    assert_eq!(tokens[0], Token::OpenTagStart);
    assert_eq!(tokens[1], Token::TagName("p".to_string()));
}

#[test]
fn test_comment_between_attributes() {
    let tokens = tokenize(&["<div <!-- note --> >hi</div>"], vec![]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagStart,
            Token::TagName("div".to_string()),
            Token::OpenTagEnd,
            Token::Text("hi".to_string()),
            Token::CloseTag,
        ]
    );
}

#[test]
fn test_closing_tag_slot_is_consumed_and_discarded() {
    // <${1}>hello</${2}> — both slots consumed, neither surfaces in the
    // close token.
    let tokens = tokenize(&["<", ">hello</", ">"], vec![1, 2]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagStart,
            Token::SlotTagName(1),
            Token::OpenTagEnd,
            Token::Text("hello".to_string()),
            Token::CloseTag,
        ]
    );
}

#[test]
fn test_closing_tag_slot_allows_whitespace_before_gt() {
    let tokens = tokenize(&["<", "></", "  >"], vec![1, 2]);
    assert_eq!(
        tokens,
        vec![Token::OpenTagStart, Token::SlotTagName(1), Token::OpenTagEnd, Token::CloseTag]
    );
}

#[test]
fn test_closing_tag_slot_requires_gt() {
    let err = tokenize_err(&["<", "></", "x>"], vec![1, 2]);
    assert!(matches!(err, ParseError::MalformedClosingTag { .. }));
}

#[test]
fn test_segments_without_slot_read_as_one() {
    let tokens = tokenize(&["<div>", "</div>"], vec![]);
    assert_eq!(
        tokens,
        vec![
            Token::OpenTagStart,
            Token::TagName("div".to_string()),
            Token::OpenTagEnd,
            Token::CloseTag,
        ]
    );
}

#[test]
fn test_whitespace_around_tags() {
    let tokens = tokenize(&["  \t\n<br/>  "], vec![]);
    assert_eq!(
        tokens,
        vec![Token::OpenTagStart, Token::TagName("br".to_string()), Token::SelfClosingEnd]
    );
}

#[test]
fn test_malformed_attribute_value() {
    let err = tokenize_err(&[r#"<div class="a>"#], vec![]);
    assert!(matches!(err, ParseError::MalformedAttributeValue { .. }));
}

#[test]
fn test_malformed_self_closing_tag() {
    let err = tokenize_err(&["<div /x>"], vec![]);
    assert!(matches!(err, ParseError::MalformedSelfClosingTag { .. }));
}

#[test]
fn test_invalid_attribute_start() {
    let err = tokenize_err(&["<div ?></div>"], vec![]);
    assert_eq!(err, ParseError::InvalidAttributeStart { at: 5, found: '?' });
}

#[test]
fn test_malformed_entity() {
    let err = tokenize_err(&["&amp"], vec![]);
    assert!(matches!(err, ParseError::MalformedEntity { .. }));
}

#[test]
fn test_unterminated_comment() {
    let err = tokenize_err(&["<!-- never ends"], vec![]);
    assert!(matches!(err, ParseError::MalformedComment { .. }));
}

#[test]
fn test_slot_expected_but_missing() {
    // "<" ends the only segment, so the tag name must come from a slot.
    let err = tokenize_err(&["<"], vec![]);
    assert_eq!(err, ParseError::UnexpectedEndOfTemplate);
}

#[test]
fn test_context_follows_the_cursor() {
    let mut tokenizer = Tokenizer::<i32>::new(&[r#"<div class="a">x</div>"#], vec![]);
    assert_eq!(tokenizer.context(), Context::TopLevel);
    assert_eq!(tokenizer.next(), Some(Ok(Token::OpenTagStart)));
    assert_eq!(tokenizer.context(), Context::TagName);
    assert_eq!(tokenizer.next(), Some(Ok(Token::TagName("div".to_string()))));
    assert_eq!(tokenizer.context(), Context::Attributes);
    assert_eq!(tokenizer.next(), Some(Ok(Token::AttrName("class".to_string()))));
    assert_eq!(tokenizer.context(), Context::AttributeEquals);
    assert_eq!(tokenizer.next(), Some(Ok(Token::AttrEqual)));
    assert_eq!(tokenizer.context(), Context::AttributeValue);
    assert_eq!(tokenizer.next(), Some(Ok(Token::AttrValue("a".to_string()))));
    assert_eq!(tokenizer.context(), Context::Attributes);
    assert_eq!(tokenizer.next(), Some(Ok(Token::OpenTagEnd)));
    assert_eq!(tokenizer.context(), Context::TopLevel);
}

#[test]
fn test_fused_after_error() {
    let mut tokenizer = Tokenizer::<i32>::new(&["&nope"], vec![]);
    assert!(matches!(tokenizer.next(), Some(Err(ParseError::MalformedEntity { .. }))));
    assert!(tokenizer.next().is_none());
    assert!(tokenizer.next().is_none());
}

#[test]
fn test_stray_closing_delimiter_is_an_error() {
    let err = tokenize_err(&["oops > here"], vec![]);
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}
