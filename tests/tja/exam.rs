use pretty_assertions::assert_eq;
use tja_rs::tja::prelude::*;

fn gauge(low: f64, high: f64, slot_id: Option<u8>) -> Criteria {
    Criteria {
        kind: "g".into(),
        threshold_low: low,
        threshold_high: high,
        scope: "m".into(),
        slot_id,
    }
}

#[test]
fn dan_course_criteria() {
    let TjaOutput { document, warnings } = parse_tja("COURSE: Dan\nEXAM1: g,97,100,m\n");
    assert_eq!(warnings, vec![]);
    assert!(document.is_exam_chart);
    assert_eq!(document.exam_criteria, vec![gauge(97.0, 100.0, Some(1))]);
    assert_eq!(document.courses.get(CourseKind::Dan), Some(&CourseEntry::default()));
}

#[test]
fn exam4_is_not_global() {
    let TjaOutput { document, .. } = parse_tja("COURSE:Dan\nEXAM4: g,80,90,c\n");
    assert!(document.exam_criteria.is_empty());
    assert!(document.exam_songs.is_empty());
}

#[test]
fn exam_outside_exam_course() {
    let TjaOutput { document, warnings } =
        parse_tja("EXAM1:g,97,100,m\nCOURSE:Oni\nEXAM2:g,97,100,m\n");
    assert!(!document.is_exam_chart);
    assert!(document.exam_criteria.is_empty());
    assert_eq!(
        warnings
            .into_iter()
            .map(LineSpan::into_content)
            .collect::<Vec<_>>(),
        vec![
            ParseWarning::OutsideExamCourse("EXAM1".into()),
            ParseWarning::OutsideExamCourse("EXAM2".into()),
        ]
    );
}

#[test]
fn exam_chart_flag_sticks() {
    let TjaOutput { document, .. } =
        parse_tja("COURSE:Tower\nEXAM1:g,50,60,m\nCOURSE:Oni\nEXAM2:g,70,80,m\nCOURSE:Nope\n");
    assert!(document.is_exam_chart);
    assert_eq!(document.exam_criteria, vec![gauge(50.0, 60.0, Some(1))]);
    assert!(document.courses.contains(CourseKind::Tower));
}

#[test]
fn malformed_criteria_are_skipped() {
    let TjaOutput { document, warnings } =
        parse_tja("COURSE:Dan\nEXAM1:g,97\nEXAM2:g,high,100,m\nEXAM3:g,1,2,m\n");
    assert_eq!(document.exam_criteria, vec![gauge(1.0, 2.0, Some(3))]);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].line(), 2);
    assert_eq!(warnings[1].line(), 3);
}

#[test]
fn next_song_with_delay() {
    let TjaOutput { document, warnings } =
        parse_tja("COURSE:Dan\n#START\n#NEXTSONG RPG,,,RPG.ogg\n#BPMCHANGE 120\n#DELAY 500\n1,2,3,0,\n#DELAY 7\n");
    assert_eq!(warnings, vec![]);
    assert_eq!(
        document.exam_songs,
        vec![ExamSong {
            title: "RPG".into(),
            audio_ref: "RPG.ogg".into(),
            delay: 500.0,
            ..ExamSong::default()
        }]
    );
}

#[test]
fn next_song_with_own_criteria() {
    let TjaOutput { document, .. } = parse_tja(
        "COURSE:Dan\n#NEXTSONG A,,,a.ogg\nEXAM4:g,80,90,m\n#NEXTSONG B,,,b.ogg\n1010,\nEXAM4:g,1,2,m\n",
    );
    assert_eq!(document.exam_songs.len(), 2);
    assert_eq!(document.exam_songs[0].criteria, Some(gauge(80.0, 90.0, None)));
    assert_eq!(document.exam_songs[1].criteria, None);
    assert!(document.exam_criteria.is_empty());
}

#[test]
fn next_song_needs_four_fields() {
    let TjaOutput { document, warnings } = parse_tja("COURSE:Dan\n#NEXTSONG A,B,C\n#NEXTSONG\n");
    assert!(document.exam_songs.is_empty());
    assert_eq!(
        warnings
            .iter()
            .map(|w| (w.line(), w.content().clone()))
            .collect::<Vec<_>>(),
        vec![
            (
                2,
                ParseWarning::TooFewFields {
                    expected: 4,
                    found: 3,
                }
            ),
            (
                3,
                ParseWarning::TooFewFields {
                    expected: 4,
                    found: 1,
                }
            ),
        ]
    );
}

#[test]
fn next_song_outside_exam_course_is_kept() {
    let TjaOutput { document, .. } = parse_tja("#NEXTSONG A,,,a.ogg\n");
    assert_eq!(document.exam_songs.len(), 1);
    assert!(!document.is_exam_chart);
}

#[test]
fn next_song_comment_is_stripped() {
    let TjaOutput { document, .. } = parse_tja("#NEXTSONG A,B,C,d.ogg,10,20 // stage 1\n");
    let song = &document.exam_songs[0];
    assert_eq!(song.score_diff, 20.0);
    assert_eq!(song.audio_ref, "d.ogg");
}

#[test]
fn non_finite_thresholds_are_rejected() {
    let TjaOutput { document, warnings } =
        parse_tja("COURSE:Dan\nEXAM1:g,nan,100,m\nEXAM2:g,97,inf,m\n");
    assert!(document.exam_criteria.is_empty());
    assert_eq!(
        warnings
            .into_iter()
            .map(LineSpan::into_content)
            .collect::<Vec<_>>(),
        vec![
            ParseWarning::ExpectedNumber("nan".into()),
            ParseWarning::ExpectedNumber("inf".into()),
        ]
    );
}
