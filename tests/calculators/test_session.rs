//! Tests for draft/committed sessions

use ebmstat::prelude::*;

#[test]
fn test_session_only_sees_committed_input() {
    let mut session = Session::new(CaseControlTable::default_odds(), AnalysisOptions::default());
    assert_eq!(session.output().association, Association::Harmful);

    session.draft_mut().a = 10.0;
    session.draft_mut().d = 10.0;
    assert_eq!(session.output().association, Association::Harmful);

    assert_eq!(session.commit().association, Association::Protective);
}

#[test]
fn test_topics_and_questions() {
    for topic in Topic::ALL {
        let parsed: Topic = topic.code().parse().unwrap();
        assert_eq!(parsed, topic);
        for q in topic.questions() {
            assert!(!q.question.is_empty());
            assert!(!q.answer.is_empty());
        }
    }
    assert!(matches!("XYZ".parse::<Topic>(), Err(EbmError::UnknownTopic(_))));
}
