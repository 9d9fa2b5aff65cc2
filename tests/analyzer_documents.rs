//! Whole-document cases for the depth analyzer
//!
//! Each document is a complete line-oriented page; the expectation is the
//! analyzer's single outcome for it. The corpus covers nesting depth
//! selection, tie-breaking between siblings, blank-line handling, text-free
//! and tag-free documents, and every malformation class.

use htmldepth::analyzer::{deepest_text, Malformed};
use rstest::rstest;

fn scan(document: &str) -> Result<String, Malformed> {
    deepest_text(document.lines())
}

const FULL_PAGE: &str = r#"<html>
  <head>
    <title>
      This is the title.
    </title>
  </head>
  <body>
    This is the body.
    <div>
      <p>
        Deepest text.
      </p>
    </div>
  </body>
</html>"#;

const TOP_LEVEL_TEXT: &str = r#"<html>
  Text at the highest level.
  <body>
    This is the body.
  </body>
</html>"#;

const SIBLING_PARAGRAPHS: &str = r#"<html>
  <body>
    <div>
      <p>
        Text 1. AAA.
      </p>
      <p>
        Text 2.
      </p>
    </div>
  </body>
</html>"#;

const BARE_TEXT: &str = "This is text without any tags.";

const NO_TEXT: &str = r#"<html>
  <head>
    <title>
    </title>
  </head>
  <body>
    <div>
    </div>
  </body>
</html>"#;

const BLANK_INTERLEAVED: &str = r#"<html>

  <body>

    <div>
      <p>
        Deepest text.
      </p>
    </div>

  </body>

</html>"#;

const SINGLE_PARAGRAPH: &str = r#"<html>
  <head>
    <title>
      Page title.
    </title>
  </head>
  <body>
    <p>
    A paragraph of text.
    </p>
  </body>
</html>"#;

const DEEP_CHAIN: &str = r#"<html>
  <body>
    <div>
      <span>
        <p>
          Maximum depth reached.
        </p>
      </span>
    </div>
  </body>
</html>"#;

const TITLE_ONLY: &str = r#"<html>
  <head>
    <title>
      Title only.
    </title>
  </head>
</html>"#;

const BODY_TEXT: &str = r#"<html>
  <body>
    Text directly in the body.
  </body>
</html>"#;

const EQUAL_DEPTH_SIBLINGS: &str = r#"<html>
  <body>
    <div>
      <p>
        First deep text.
      </p>
      <p>
        Second deep text.
      </p>
    </div>
  </body>
</html>"#;

const MISINDENTED_BUT_MATCHED: &str = r#"<html>
  <body>
    <div>
      <p>
        Just one level.
    </p>
  </div>
  </body>
</html>"#;

const TAGS_ONLY: &str = r#"<html>
</html>"#;

const SIX_DEEP: &str = r#"<html>
  <body>
    <div>
      <p>
        <span>
          <strong>
            As deep as it gets.
          </strong>
        </span>
      </p>
    </div>
  </body>
</html>"#;

const DEEPEST_AFTER_EMPTY_SIBLING: &str = r#"<html>
  <body>
    <div>
      <p>
        <span>
          <strong>
          </strong>
          <strong>
            As deep as it gets.
          </strong>
        </span>
      </p>
    </div>
  </body>
</html>"#;

const EMPTY_SIBLING_ONLY: &str = r#"<html>
  <body>
    <div>
      <p>
        <span>
          <strong>
          </strong>
        </span>
      </p>
    </div>
  </body>
</html>"#;

const ACCENTED_TEXT: &str = r#"<html>
  <body>
    <div>
      Conteúdo mais profundo.
    </div>
  </body>
</html>"#;

const MISSING_PARAGRAPH_CLOSE: &str = r#"<html>
  <head>
    <title>
      This is the title.
    </title>
  </head>
  <body>
    This is the body.
    <div>
      <p>
        Deepest text.
    </div>
  </body>
</html>"#;

const WRONG_PAIR: &str = r#"<html>
  Text at the highest level.
  <body>
    The pair below is wrong.
  </p>
</html>"#;

const MISSING_TITLE_CLOSE: &str = r#"<html>
  <head>
    <title>
      Correct title.
  </head>
  <body>
    Body text.
  </body>
</html>"#;

const INLINE_PAIR_LINE: &str = r#"<html>
  <head>
    <title>
      Correct title.
    </title>
  </head>
  <body>
    <p>Body text.</p>
  </body>
</html>"#;

const UNCLOSED_PARAGRAPH: &str = r#"<html>
  <body>
    <div>
      <p>
        Text never closed.
    </div>
  </body>
</html>"#;

const SINGLE_LINE_ROOT: &str = "<html></html>";

const SINGLE_LINE_WITH_TEXT: &str = "<html> Life is GOOOOD </html>";

const NESTED_ROOT_REPEAT: &str = r#"<html>
  <head>
    <title>
      Correct title.
    </title>
  </head>
  <body>
    Body text
<html>
  <head>
    <title>
      Correct title.
    </title>
  </head>
    Body text
  </body>
</html>
  </body>
</html>"#;

#[rstest]
#[case::full_page(FULL_PAGE, "Deepest text.")]
#[case::top_level_text(TOP_LEVEL_TEXT, "This is the body.")]
#[case::sibling_paragraphs(SIBLING_PARAGRAPHS, "Text 1. AAA.")]
#[case::bare_text(BARE_TEXT, "This is text without any tags.")]
#[case::blank_interleaved(BLANK_INTERLEAVED, "Deepest text.")]
#[case::single_paragraph(SINGLE_PARAGRAPH, "A paragraph of text.")]
#[case::deep_chain(DEEP_CHAIN, "Maximum depth reached.")]
#[case::title_only(TITLE_ONLY, "Title only.")]
#[case::body_text(BODY_TEXT, "Text directly in the body.")]
#[case::equal_depth_siblings(EQUAL_DEPTH_SIBLINGS, "First deep text.")]
#[case::misindented_but_matched(MISINDENTED_BUT_MATCHED, "Just one level.")]
#[case::six_deep(SIX_DEEP, "As deep as it gets.")]
#[case::deepest_after_empty_sibling(DEEPEST_AFTER_EMPTY_SIBLING, "As deep as it gets.")]
#[case::accented_text(ACCENTED_TEXT, "Conteúdo mais profundo.")]
fn test_document_yields_deepest_text(#[case] document: &str, #[case] expected: &str) {
    assert_eq!(scan(document).unwrap(), expected);
}

#[rstest]
#[case::empty_document("")]
#[case::no_text(NO_TEXT)]
#[case::tags_only(TAGS_ONLY)]
#[case::empty_sibling_only(EMPTY_SIBLING_ONLY)]
fn test_document_without_text_yields_empty_string(#[case] document: &str) {
    assert_eq!(scan(document).unwrap(), "");
}

#[rstest]
#[case::missing_paragraph_close(MISSING_PARAGRAPH_CLOSE)]
#[case::wrong_pair(WRONG_PAIR)]
#[case::missing_title_close(MISSING_TITLE_CLOSE)]
#[case::inline_pair_line(INLINE_PAIR_LINE)]
#[case::unclosed_paragraph(UNCLOSED_PARAGRAPH)]
#[case::single_line_root(SINGLE_LINE_ROOT)]
#[case::single_line_with_text(SINGLE_LINE_WITH_TEXT)]
#[case::nested_root_repeat(NESTED_ROOT_REPEAT)]
fn test_document_is_malformed(#[case] document: &str) {
    let fault = scan(document).unwrap_err();
    assert_eq!(fault.to_string(), Malformed::MARKER);
}
