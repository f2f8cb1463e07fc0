//! Configurable destination for `print` output.
//!
//! Stdout by default; tests capture into a shared buffer instead of
//! scraping process output.

use std::cell::RefCell;
use std::rc::Rc;

/// Where `print` statements write.
#[derive(Clone, Default)]
pub enum PrintHandler {
    /// Write to stdout (default).
    #[default]
    Stdout,
    /// Append to a shared buffer (tests, embedding).
    Buffer(Rc<RefCell<String>>),
}

impl PrintHandler {
    /// A buffer handler plus the handle to read it back.
    pub fn buffer() -> (Self, Rc<RefCell<String>>) {
        let buf = Rc::new(RefCell::new(String::new()));
        (PrintHandler::Buffer(Rc::clone(&buf)), buf)
    }

    /// Print one line.
    pub fn println(&self, msg: &str) {
        match self {
            PrintHandler::Stdout => println!("{msg}"),
            PrintHandler::Buffer(buf) => {
                let mut buf = buf.borrow_mut();
                buf.push_str(msg);
                buf.push('\n');
            }
        }
    }
}
