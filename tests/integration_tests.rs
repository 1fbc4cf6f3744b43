//! Integration tests for the quiz engine
//!
//! Drives full rounds through the public API the way a frontend would:
//! select a mode, read the current question, render it, submit answers,
//! and watch the phase transitions.

use clefquiz::{
    canonical, load_levels, render, Outcome, Phase, QuizError, Session, Timeout,
};

fn answer_correctly(session: &mut Session, now: f64) {
    let label = canonical(&session.question().expect("question present").pitch);
    assert_eq!(session.submit_answer(label, now).unwrap(), Outcome::Correct);
}

#[test]
fn test_full_level_two_round_with_mistakes() {
    let mut session = Session::with_seed(2024);
    session.select_level(2, 0.0).unwrap();

    for i in 0..20u32 {
        let now = i as f64 * 3.0;
        if i % 4 == 3 {
            // Every fourth answer is deliberately wrong
            let correct = canonical(&session.question().unwrap().pitch);
            let wrong = if correct == "C" { "D" } else { "C" };
            assert_eq!(session.submit_answer(wrong, now).unwrap(), Outcome::Incorrect);
        } else {
            answer_correctly(&mut session, now);
        }
    }

    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.round().correct_answers, 15);
    assert_eq!(session.score_percent(), Some(75.0));
}

#[test]
fn test_every_question_renders_and_grades() {
    let mut session = Session::with_seed(555);
    session.start_record_mode(0.0);

    for i in 0..100u32 {
        let question = session.question().unwrap().clone();
        let drawing = render(&question.pitch, question.clef, question.degree);

        // On-staff prompts never need ledger lines
        assert!(drawing.ledger_line.is_none());
        assert_eq!(drawing.staff_lines.len(), 5);

        // The graded answer is always among the offered options
        let label = canonical(&question.pitch);
        assert!(session.answer_options().contains(&label));

        answer_correctly(&mut session, i as f64);
    }

    assert_eq!(session.best_streak(), 100);
}

#[test]
fn test_expert_round_under_time_pressure() {
    let mut session = Session::with_seed(77);
    session.select_level(4, 0.0).unwrap();

    // Five quick answers, then the player stalls past the 10s question limit
    for i in 0..5u32 {
        answer_correctly(&mut session, i as f64 * 2.0);
    }
    let stall = 8.0 + 11.0;
    assert_eq!(session.tick(stall), Some(Timeout::Question));
    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.round().correct_answers, 5);

    // Replay restarts the same level with a fresh budget
    session.play_again(30.0).unwrap();
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.remaining_time(30.0), Some(120.0));
}

#[test]
fn test_session_with_custom_levels() {
    let yaml = r#"
levels:
  - level: 1
    name: Drill
    description: Two questions, naturals only
    include-accidentals: false
    total-time-limit: 60
    questions: 2
"#;
    let levels = load_levels(yaml).unwrap();
    let mut session = Session::with_levels(levels).unwrap();
    session.select_level(1, 0.0).unwrap();

    let correct = canonical(&session.question().unwrap().pitch);
    let wrong = if correct == "C" { "D" } else { "C" };
    session.submit_answer(wrong, 1.0).unwrap();
    session.submit_answer("C", 2.0).ok();

    // Two questions answered: the short round is over
    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.select_level(2, 3.0).unwrap_err().to_string(), "unknown difficulty level 2");
}

#[test]
fn test_custom_level_set_is_validated_up_front() {
    let yaml = r#"
levels:
  - level: 1
    name: Lax
    include-accidentals: true
    total-time-limit: 60
  - level: 2
    name: Laxer
    include-accidentals: true
    total-time-limit: 90
"#;
    match load_levels(yaml) {
        Err(QuizError::ConfigError(message)) => assert!(message.contains("level 2")),
        other => panic!("expected ConfigError, got {:?}", other.map(|l| l.len())),
    }
}

#[test]
fn test_drawing_serializes_with_camel_case_fields() {
    let mut session = Session::with_seed(31);
    session.select_level(2, 0.0).unwrap();
    let drawing = session.render_current().unwrap();
    let yaml = serde_yaml::to_string(&drawing).unwrap();
    assert!(yaml.contains("noteHead"));
    assert!(yaml.contains("staffLines"));
    assert!(yaml.contains("clefName"));
}
