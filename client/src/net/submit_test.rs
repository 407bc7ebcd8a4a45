use canvas::camera::Point;
use canvas::memo::MemoKind;

use super::*;

fn draft(content: &str) -> MemoDraft {
    MemoDraft { kind: MemoKind::ShortForm, content: content.to_owned(), position: Point::new(64.0, 48.0) }
}

#[test]
fn accepts_memos_with_content() {
    let mut submitter = LocalSubmitter::new();
    assert_eq!(submitter.submit(&draft("hello")), Ok(()));
    assert_eq!(submitter.submit(&draft("  again  ")), Ok(()));
}

#[test]
fn rejects_blank_content() {
    let mut submitter = LocalSubmitter::new();
    assert_eq!(submitter.submit(&draft("  \n")), Err(SubmitError::Rejected("memo is empty".to_owned())));
    assert_eq!(submitter.submit(&draft("")), Err(SubmitError::Rejected("memo is empty".to_owned())));
}
