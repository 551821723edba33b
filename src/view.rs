use std::{
    io::{self, stdin, stdout, Write},
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};

use termion::{event::Key, input::TermRead, raw::IntoRawMode};

use crate::{pos, Glyphs, Pos, SimHandle};

pub use canvas::Canvas;
mod canvas;

/// The render thread. Keyboard input is read on a thread of its own.
pub struct View {
    thread: JoinHandle<io::Result<()>>,
}

impl View {
    pub fn spawn(handle: SimHandle, glyphs: Glyphs) -> Self {
        let thread = thread::spawn(move || view_loop(handle, glyphs));
        Self { thread }
    }

    pub fn join(self) -> io::Result<()> {
        self.thread.join().unwrap_or_else(|_| {
            Err(io::Error::new(
                io::ErrorKind::Other,
                "view thread panicked",
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCmd {
    Exit,
    Move(Dir),
    Accelerate,
    Decelerate,
}

impl InputCmd {
    pub fn from_key(key: Key) -> Option<Self> {
        let command = match key {
            Key::Char('q') | Key::Ctrl('c') => InputCmd::Exit,
            Key::Up => InputCmd::Move(Dir::Up),
            Key::Down => InputCmd::Move(Dir::Down),
            Key::Left => InputCmd::Move(Dir::Left),
            Key::Right => InputCmd::Move(Dir::Right),
            Key::Char('+') => InputCmd::Accelerate,
            Key::Char('-') => InputCmd::Decelerate,
            _ => return None,
        };
        Some(command)
    }
}

fn input_loop(sender: mpsc::Sender<InputCmd>) -> io::Result<()> {
    for key in stdin().keys() {
        let Some(command) = InputCmd::from_key(key?) else {
            continue;
        };
        if sender.send(command).is_err() || command == InputCmd::Exit {
            break;
        }
    }
    Ok(())
}

const VIEW_REFRESH_INTERVAL: Duration = Duration::from_millis(100);
const SCROLL_STEP: i32 = 4;

/// Renders until exit is requested or the simulation stops, then stops the
/// simulation in turn.
fn view_loop(handle: SimHandle, glyphs: Glyphs) -> io::Result<()> {
    let result = run_raw(&handle, &glyphs);
    handle.stop();
    result
}

/// The terminal is in raw mode for the duration of this call.
fn run_raw(handle: &SimHandle, glyphs: &Glyphs) -> io::Result<()> {
    let mut out = stdout().into_raw_mode()?;
    write!(out, "{}", termion::cursor::Hide)?;

    let (sender, receiver) = mpsc::channel();
    // detached: it stays blocked on stdin until the process exits
    thread::spawn(|| input_loop(sender));

    let result = render_loop(handle, glyphs, &receiver, &mut out);
    write!(out, "{}{}", termion::cursor::Show, termion::cursor::Goto(1, 1))?;
    out.flush()?;
    result
}

fn render_loop(
    handle: &SimHandle,
    glyphs: &Glyphs,
    receiver: &mpsc::Receiver<InputCmd>,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut origin = pos!(0, 0);
    let mut last_drawn = None;
    while handle_inputs(receiver, handle, &mut origin) {
        let Some(frame) = handle.snapshot() else {
            break;
        };

        let mut canvas = Canvas::from_screen()?;
        origin = canvas.clamp_origin(origin, &frame, glyphs);
        if last_drawn != Some((frame.tick, origin)) {
            canvas.draw(&frame, origin, glyphs);
            canvas.display(out)?;
            last_drawn = Some((frame.tick, origin));
        }
        thread::sleep(VIEW_REFRESH_INTERVAL);
    }
    Ok(())
}

/// Applies pending commands. Returns `false` once exit is requested.
fn handle_inputs(
    receiver: &mpsc::Receiver<InputCmd>,
    handle: &SimHandle,
    origin: &mut Pos,
) -> bool {
    while let Ok(cmd) = receiver.try_recv() {
        match cmd {
            InputCmd::Exit => return false,
            InputCmd::Move(direction) => *origin = *origin + scroll_offset(direction),
            InputCmd::Accelerate => handle.accelerate(),
            InputCmd::Decelerate => handle.decelerate(),
        }
    }
    true
}

fn scroll_offset(direction: Dir) -> Pos {
    match direction {
        Dir::Up => pos!(-SCROLL_STEP, 0),
        Dir::Down => pos!(SCROLL_STEP, 0),
        Dir::Left => pos!(0, -SCROLL_STEP),
        Dir::Right => pos!(0, SCROLL_STEP),
    }
}
