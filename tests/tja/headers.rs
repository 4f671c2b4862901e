use pretty_assertions::assert_eq;
use tja_rs::tja::prelude::*;

#[test]
fn no_directives() {
    let TjaOutput { document, warnings } =
        parse_tja("Hello, world\nthis is not a chart\n\n1010,\n#START\n");
    assert_eq!(warnings, vec![]);
    assert_eq!(document, ChartDocument::default());
    assert_eq!(document.audio_manifest(), Vec::<String>::new());
}

#[test]
fn empty_text() {
    let TjaOutput { document, warnings } = parse_tja("");
    assert_eq!(warnings, vec![]);
    assert_eq!(document.title, None);
    assert!(document.courses.is_empty());
    assert!(!document.is_exam_chart);
    assert!(document.exam_criteria.is_empty());
    assert!(document.exam_songs.is_empty());
}

#[test]
fn level_of_course() {
    let TjaOutput { document, .. } = parse_tja("COURSE: Oni\nLEVEL: 9\n");
    assert_eq!(
        document.courses.get(CourseKind::Oni),
        Some(&CourseEntry {
            stars: Some(9),
            has_branch: false,
        })
    );
}

#[test]
fn branch_of_course() {
    let TjaOutput { document, .. } = parse_tja("COURSE: Oni\n#START\n#BRANCHSTART r,5,10\n");
    assert!(document.courses.get(CourseKind::Oni).unwrap().has_branch);

    let TjaOutput { document, .. } = parse_tja("COURSE:Hard\nBRANCHSTART\nCOURSE:Easy\n");
    assert!(document.courses.get(CourseKind::Hard).unwrap().has_branch);
    assert!(!document.courses.get(CourseKind::Easy).unwrap().has_branch);
}

#[test]
fn branch_outside_course_is_ignored() {
    let TjaOutput { document, .. } = parse_tja("#BRANCHSTART p,1,2\nCOURSE:Foo\n#BRANCHSTART\n");
    assert!(document.courses.is_empty());
}

#[test]
fn redeclared_course_keeps_entry() {
    let TjaOutput { document, .. } =
        parse_tja("COURSE:Oni\nLEVEL:9\n#BRANCHSTART\nCOURSE:Easy\nCOURSE:oni\n");
    assert_eq!(
        document.courses.get(CourseKind::Oni),
        Some(&CourseEntry {
            stars: Some(9),
            has_branch: true,
        })
    );
    assert_eq!(
        document.courses.iter().map(|(kind, _)| kind).collect::<Vec<_>>(),
        vec![CourseKind::Oni, CourseKind::Easy]
    );
}

#[test]
fn edit_and_ura_share_a_course() {
    let TjaOutput { document, .. } = parse_tja("COURSE:Edit\nLEVEL:10\nCOURSE:Ura\n");
    assert_eq!(document.courses.len(), 1);
    assert_eq!(document.courses.get(CourseKind::Ura).unwrap().stars, Some(10));
}

#[test]
fn inline_comments() {
    let TjaOutput { document, .. } = parse_tja(
        "TITLE: Some // Title\nMAKER: http://example.com//x\nWAVE:a.ogg//b.ogg\n// TITLE: Other\n",
    );
    assert_eq!(document.title.as_deref(), Some("Some"));
    assert_eq!(document.maker.as_deref(), Some("http://example.com//x"));
    assert_eq!(document.audio_ref.as_deref(), Some("a.ogg"));
}

#[test]
fn empty_values_are_absent() {
    let TjaOutput { document, .. } = parse_tja("TITLE:A\nTITLE:\nSUBTITLE:  \nWAVE:\n");
    assert_eq!(document.title, None);
    assert_eq!(document.subtitle, None);
    assert_eq!(document.audio_ref, None);
}

#[test]
fn offset() {
    let TjaOutput { document, .. } = parse_tja("OFFSET:5.0\n");
    assert_eq!(document.offset, Some(5.0));

    let TjaOutput { document, warnings } = parse_tja("OFFSET:5.0\nOFFSET:five\n");
    assert_eq!(document.offset, None);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line(), 2);
    assert_eq!(
        warnings[0].content(),
        &ParseWarning::ExpectedNumber("five".into())
    );
}

#[test]
fn keys_are_case_insensitive() {
    let TjaOutput { document, .. } =
        parse_tja("title:lower\r\ncourse:hard\r\nlevel:4\r\nSubTitleJa:sub\r\n");
    assert_eq!(document.title.as_deref(), Some("lower"));
    assert_eq!(document.subtitle_alt.as_deref(), Some("sub"));
    assert_eq!(document.courses.get(CourseKind::Hard).unwrap().stars, Some(4));
}

#[test]
fn value_keeps_later_colons() {
    let TjaOutput { document, .. } = parse_tja("TITLE:Re:Zero\n");
    assert_eq!(document.title.as_deref(), Some("Re:Zero"));
}
