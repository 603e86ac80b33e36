// the terminal is put in non-canonical, non-echoing mode for the whole game and a reader thread
// forwards every stdin byte over a channel, so the frame loop never blocks on input
use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use termios::{tcsetattr, Termios, ECHO, ICANON, ISIG, TCSANOW};
use tracing::{debug, warn};

const STDIN_FD: i32 = 0;

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("stdin is not a terminal: {0}")]
    NotATerminal(#[source] io::Error),
    #[error("failed to switch terminal mode: {0}")]
    Mode(#[source] io::Error),
}

/// Raw input mode for as long as the session lives; the previous settings
/// are restored on drop.
pub struct TerminalSession {
    old_termios: Termios,
    stdin_channel: Receiver<u8>,
    input_closed: bool,
}

impl TerminalSession {
    pub fn start() -> Result<Self, TerminalError> {
        let termios = Termios::from_fd(STDIN_FD).map_err(TerminalError::NotATerminal)?;
        let mut new_termios = termios; // clone the termios struct
        // no echo and canonical mode for stdin, Ctrl-C arrives as a byte
        new_termios.c_lflag &= !(ICANON | ECHO | ISIG);
        tcsetattr(STDIN_FD, TCSANOW, &new_termios).map_err(TerminalError::Mode)?;
        debug!("Terminal switched to raw input");

        let session = TerminalSession {
            old_termios: termios,
            stdin_channel: spawn_stdin_channel(),
            input_closed: false,
        };
        // hide the cursor while drawing
        print!("\x1b[?25l");
        Ok(session)
    }

    /// Every byte typed since the last call.
    pub fn pending_input(&mut self) -> Vec<u8> {
        let mut bytes = Vec::new();
        loop {
            match self.stdin_channel.try_recv() {
                Ok(key) => bytes.push(key),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.input_closed {
                        warn!("stdin closed, leaving the game");
                    }
                    self.input_closed = true;
                    break;
                }
            }
        }
        bytes
    }

    pub fn input_closed(&self) -> bool {
        self.input_closed
    }

    pub fn clear_screen(&mut self) {
        print!("{}[2J", 27 as char);
        print!("{}[1;1H", 27 as char);
    }

    /// Redraws `frame` over the previous one from the top-left corner.
    pub fn draw(&mut self, frame: &str) {
        let mut out = io::stdout().lock();
        let mut buffer = String::with_capacity(frame.len() + 256);
        buffer.push_str("\x1b[1;1H");
        for line in frame.lines() {
            buffer.push_str(line);
            // erase leftovers of a longer previous line
            buffer.push_str("\x1b[K\r\n");
        }
        buffer.push_str("\x1b[J");
        if let Err(e) = out.write_all(buffer.as_bytes()).and_then(|_| out.flush()) {
            warn!("Failed to draw frame: {}", e);
        }
    }

    /// The terminal's own "sound".
    pub fn ring_bell(&mut self) {
        print!("\x07");
        let _ = io::stdout().flush();
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        print!("\x1b[?25h");
        let _ = io::stdout().flush();
        // reset stdin to default
        if let Err(e) = tcsetattr(STDIN_FD, TCSANOW, &self.old_termios) {
            warn!("Failed to restore terminal settings: {}", e);
        }
    }
}

fn spawn_stdin_channel() -> Receiver<u8> {
    let (tx, rx) = mpsc::channel::<u8>();
    thread::spawn(move || {
        let mut reader = io::stdin();
        let mut buffer: [u8; 1] = [0; 1];
        // read one u8 at a time, stop on EOF or when the game is gone
        while reader.read_exact(&mut buffer).is_ok() {
            if tx.send(buffer[0]).is_err() {
                break;
            }
        }
    });
    rx
}
