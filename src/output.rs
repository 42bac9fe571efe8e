//! Shared text output sink.
//!
//! Every view writes through the same [`Output`]. Observers have no way to
//! report failure back to the broadcaster, so the sink itself records the
//! first write error; later writes are dropped and the error is surfaced
//! by [`Output::finish`] once the run is over.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::style::ContentStyle;
use crossterm::tty::IsTty;
use tracing::error;

use crate::error::{Error, Result};
use crate::types::ColorMode;

struct Sink {
    writer: Box<dyn Write>,
    failure: Option<io::Error>,
}

/// Cloneable handle to a single text sink.
#[derive(Clone)]
pub struct Output {
    sink: Rc<RefCell<Sink>>,
    color: bool,
}

impl Output {
    pub fn new<W: Write + 'static>(writer: W, color: bool) -> Self {
        Output {
            sink: Rc::new(RefCell::new(Sink {
                writer: Box::new(writer),
                failure: None,
            })),
            color,
        }
    }

    /// Standard output, colored according to `mode`.
    pub fn stdout(mode: ColorMode) -> Self {
        let color = mode.enabled(io::stdout().is_tty());
        Output::new(io::stdout(), color)
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Apply `style` to `text` if color is enabled.
    pub fn paint(&self, style: ContentStyle, text: &str) -> String {
        if self.color {
            style.apply(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Write `text` followed by a line terminator.
    pub fn line(&self, text: &str) {
        self.write(text, true, false);
    }

    /// Write `text` without a terminator and flush, for prompts.
    pub fn prompt(&self, text: &str) {
        self.write(text, false, true);
    }

    fn write(&self, text: &str, newline: bool, flush: bool) {
        let mut sink = self.sink.borrow_mut();
        if sink.failure.is_some() {
            return;
        }

        let result = write_text(sink.writer.as_mut(), text, newline, flush);

        if let Err(e) = result {
            error!(error = %e, "output sink failed, dropping further output");
            sink.failure = Some(e);
        }
    }

    /// Flush the sink and report the first write failure, if any.
    pub fn finish(&self) -> Result<()> {
        let mut sink = self.sink.borrow_mut();
        if let Some(e) = sink.failure.take() {
            return Err(Error::Output(e));
        }
        sink.writer.flush().map_err(Error::Output)
    }
}

fn write_text(writer: &mut dyn Write, text: &str, newline: bool, flush: bool) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    if newline {
        writer.write_all(b"\n")?;
    }
    if flush {
        writer.flush()?;
    }
    Ok(())
}

// ============================================================================
// CAPTURE
// ============================================================================

/// In-memory writer whose contents stay readable after it is handed to an
/// [`Output`].
#[derive(Clone, Default)]
pub struct Capture(Rc<RefCell<Vec<u8>>>);

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    /// An uncolored [`Output`] writing into this capture.
    pub fn output(&self) -> Output {
        Output::new(self.clone(), false)
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use std::cell::Cell;

    /// Writer that fails every call and counts attempts.
    struct Full(Rc<Cell<u32>>);

    impl Write for Full {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            self.0.set(self.0.get() + 1);
            Err(io::Error::other("sink full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn line_appends_terminator() {
        let capture = Capture::new();
        let output = capture.output();
        output.line("Title: x");
        output.prompt(">> ");
        assert_eq!(capture.contents(), "Title: x\n>> ");
    }

    #[test]
    fn clones_share_one_sink() {
        let capture = Capture::new();
        let a = capture.output();
        let b = a.clone();
        a.line("one");
        b.line("two");
        assert_eq!(capture.contents(), "one\ntwo\n");
    }

    #[test]
    fn finish_is_ok_for_healthy_sink() {
        let capture = Capture::new();
        let output = capture.output();
        output.line("ok");
        assert!(output.finish().is_ok());
    }

    #[test]
    fn first_failure_is_kept_and_later_writes_skipped() {
        let attempts = Rc::new(Cell::new(0));
        let output = Output::new(Full(Rc::clone(&attempts)), false);

        output.line("a");
        output.line("b");

        assert_eq!(attempts.get(), 1);
        assert!(matches!(output.finish(), Err(Error::Output(_))));
    }

    #[test]
    fn paint_is_plain_without_color() {
        let output = Capture::new().output();
        assert_eq!(output.paint(theme::caption(), "Title: "), "Title: ");
    }

    #[test]
    fn paint_adds_escape_codes_with_color() {
        let output = Output::new(Capture::new(), true);
        let painted = output.paint(theme::caption(), "Title: ");
        assert!(painted.contains("Title: "));
        assert!(painted.contains('\u{1b}'));
    }
}
