#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum TextPartKind {
    Space,
    MainMessage,
    NoteLabel,
    ErrorLabel,
}

pub(crate) fn render_error_message<T: std::fmt::Display>(msg: T) -> Vec<(String, TextPartKind)> {
    vec![
        ("error".into(), TextPartKind::ErrorLabel),
        (": ".into(), TextPartKind::MainMessage),
        (msg.to_string(), TextPartKind::MainMessage),
        ('\n'.into(), TextPartKind::Space),
    ]
}

pub(crate) fn render_note_message<T: std::fmt::Display>(msg: T) -> Vec<(String, TextPartKind)> {
    vec![
        ("note".into(), TextPartKind::NoteLabel),
        (": ".into(), TextPartKind::MainMessage),
        (msg.to_string(), TextPartKind::MainMessage),
        ('\n'.into(), TextPartKind::Space),
    ]
}

pub(crate) fn output_stderr_plain(parts: &[(String, TextPartKind)]) {
    fn inner(parts: &[(String, TextPartKind)]) -> Result<(), std::io::Error> {
        use std::io::Write as _;

        let mut stderr = std::io::stderr().lock();
        for (text, _) in parts.iter() {
            stderr.write_all(text.as_bytes())?;
        }
        stderr.flush()
    }
    inner(parts).expect("failed to write to stderr");
}

#[cfg(feature = "crossterm")]
pub(crate) fn output_stderr_colored(parts: &[(String, TextPartKind)]) {
    fn inner(parts: &[(String, TextPartKind)]) -> Result<(), std::io::Error> {
        use std::io::Write as _;

        use crossterm::style::{ContentStyle, Print, ResetColor, SetStyle, Stylize as _};

        let mut stderr = std::io::stderr().lock();
        let mut last_style = None;
        for (text, kind) in parts.iter() {
            let style = match kind {
                TextPartKind::Space => None,
                TextPartKind::MainMessage => Some(ContentStyle::new().white().bold()),
                TextPartKind::NoteLabel => Some(ContentStyle::new().dark_green().bold()),
                TextPartKind::ErrorLabel => Some(ContentStyle::new().red().bold()),
            };
            if last_style != style {
                if let Some(style) = style {
                    crossterm::queue!(stderr, SetStyle(style))?;
                } else {
                    crossterm::queue!(stderr, ResetColor)?;
                }
                last_style = style;
            }
            crossterm::queue!(stderr, Print(text))?;
        }
        if last_style.is_some() {
            crossterm::queue!(stderr, ResetColor)?;
        }
        stderr.flush()
    }
    inner(parts).expect("failed to write to stderr");
}
