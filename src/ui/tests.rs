use super::*;

#[test]
fn slider_ratio_stays_in_gauge_range() {
    let mut d = DisplayState {
        slider_max: 200.0,
        position: 50.0,
        ..DisplayState::default()
    };
    assert_eq!(slider_ratio(&d), 0.25);

    d.position = -5.0;
    assert_eq!(slider_ratio(&d), 0.0);
    d.position = 300.0;
    assert_eq!(slider_ratio(&d), 1.0);
    d.slider_max = 0.0;
    assert_eq!(slider_ratio(&d), 0.0);
}

#[test]
fn artwork_text_summarises_picture() {
    let art = Artwork {
        data: vec![0; 2048],
        mime_type: Some("image/jpeg".to_string()),
    };
    assert_eq!(artwork_text(Some(&art)), "cover: image/jpeg (2.0 KiB)");
    assert_eq!(artwork_text(None), "no artwork");
}

#[test]
fn status_text_includes_errors_and_messages() {
    let mut d = DisplayState {
        state: PlayerState::Finished,
        ..DisplayState::default()
    };
    assert_eq!(status_text(&d, None), "Finished");

    d.error = Some("bad frame".to_string());
    assert_eq!(
        status_text(&d, Some("could not load")),
        "Finished • decode error: bad frame • could not load"
    );
}

#[test]
fn controls_text_mentions_seek_step() {
    assert!(controls_text(9).contains("[H/L] seek -/+9s"));
}
