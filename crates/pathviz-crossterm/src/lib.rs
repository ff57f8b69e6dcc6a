//! Crossterm terminal driver for pathviz.
//!
//! Provides a [`CrosstermDriver`] that implements [`pathviz_core::Driver`]:
//! it turns crossterm key and mouse events into [`Msg`]s and paints
//! [`Frame`] diffs as coloured terminal cells.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{
    Color, Driver, Frame,
    messages::{Key, MouseAction, Msg},
};

/// Maps a [`pathviz_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// Maps a crossterm [`KeyCode`] to a pathviz [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Translate one crossterm event, dropping the ones pathviz has no use for.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent { code, kind, .. }) => {
            if kind == KeyEventKind::Release {
                return None;
            }
            to_key(code).map(Msg::key)
        }
        Event::Mouse(me) => {
            let (x, y) = (me.column as i32, me.row as i32);
            let action = match me.kind {
                MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
                MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
                MouseEventKind::Drag(MouseButton::Left) => MouseAction::Drag,
                MouseEventKind::Up(_) => MouseAction::Release,
                _ => return None,
            };
            Some(Msg::mouse(action, x, y))
        }
        Event::Resize(w, h) => Some(Msg::Screen {
            width: w as i32,
            height: h as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm, with mouse capture on.
#[derive(Debug, Default)]
pub struct CrosstermDriver;

impl CrosstermDriver {
    pub fn new() -> Self {
        Self
    }
}

/// Screen position of a glyph, or `None` if it lies outside what a
/// terminal can address.
fn screen_pos(x: i32, y: i32) -> Option<(u16, u16)> {
    Some((u16::try_from(x).ok()?, u16::try_from(y).ok()?))
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        stdout.flush()?;
        log::debug!("terminal initialised");
        Ok(())
    }

    fn poll_msgs(&mut self, tx: &Sender<Msg>, wait: Duration) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(wait)? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            if let Some(msg) = to_msg(event::read()?) {
                tx.send(msg).ok();
            }
        }

        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();

        for fg in &frame.glyphs {
            let Some((x, y)) = screen_pos(fg.x, fg.y) else {
                continue;
            };
            let glyph = fg.glyph;
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetForegroundColor(to_ct_color(glyph.fg)),
                SetBackgroundColor(to_ct_color(glyph.bg)),
                Print(glyph.ch)
            )?;
        }
        queue!(stdout, ResetColor)?;

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = queue!(
            stdout,
            event::DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn color_mapping() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(255, 165, 0)),
            CtColor::Rgb { r: 255, g: 165, b: 0 }
        );
    }

    #[test]
    fn space_is_its_own_key() {
        assert_eq!(to_key(KeyCode::Char(' ')), Some(Key::Space));
        assert_eq!(to_key(KeyCode::Char('c')), Some(Key::Char('c')));
        assert_eq!(to_key(KeyCode::F(1)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let press = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(to_msg(press), Some(Msg::key(Key::Char('q'))));

        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(to_msg(release), None);
    }

    #[test]
    fn mouse_buttons_map_to_actions() {
        assert_eq!(
            to_msg(mouse(MouseEventKind::Down(MouseButton::Left), 4, 2)),
            Some(Msg::mouse(MouseAction::Main, 4, 2))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Down(MouseButton::Right), 0, 1)),
            Some(Msg::mouse(MouseAction::Secondary, 0, 1))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Drag(MouseButton::Left), 7, 7)),
            Some(Msg::mouse(MouseAction::Drag, 7, 7))
        );
        assert_eq!(to_msg(mouse(MouseEventKind::Moved, 1, 1)), None);
    }

    #[test]
    fn glyphs_beyond_terminal_range_are_skipped() {
        assert_eq!(screen_pos(3, 4), Some((3, 4)));
        assert_eq!(screen_pos(65_535, 0), Some((65_535, 0)));
        assert_eq!(screen_pos(65_536, 0), None);
        assert_eq!(screen_pos(0, -1), None);
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(to_key(KeyCode::Enter), None);
        assert_eq!(to_key(KeyCode::Esc), Some(Key::Escape));
    }

    #[test]
    fn resize_becomes_screen_msg() {
        assert_eq!(
            to_msg(Event::Resize(120, 40)),
            Some(Msg::Screen {
                width: 120,
                height: 40
            })
        );
    }
}
